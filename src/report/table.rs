//! Generic report table: ordered columns, typed cells, aligned rendering,
//! and delimited serialization.

use crate::error::{EvalError, Result};
use itertools::Itertools;

/// A single cell of a report table
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// An integer value (identifiers, indicator columns)
    Int(i64),
    /// A floating-point value, rendered at the column's precision
    Float(f64),
    /// Free text (metric names, interpretation prose)
    Text(String),
    /// An absent value: `-` on the console, empty field in the file
    Missing,
}

impl CellValue {
    /// Build a float cell from an optional value, mapping `None` to `Missing`
    #[must_use]
    pub fn from_option(value: Option<f64>) -> Self {
        value.map_or(Self::Missing, Self::Float)
    }

    fn format(&self, precision: Option<usize>, missing_marker: &str) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Float(value) => match precision {
                Some(digits) => format!("{value:.digits$}"),
                None => value.to_string(),
            },
            Self::Text(value) => value.clone(),
            Self::Missing => missing_marker.to_string(),
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }
}

/// A named column with an optional fixed decimal precision for float cells
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name, used as the header in both renderings
    pub name: String,
    /// Fixed decimal places for float cells; `None` uses default formatting
    pub precision: Option<usize>,
}

impl Column {
    /// A column rendering floats with default precision
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            precision: None,
        }
    }

    /// A column rendering floats with a fixed number of decimal places
    #[must_use]
    pub fn with_precision(name: &str, precision: usize) -> Self {
        Self {
            name: name.to_string(),
            precision: Some(precision),
        }
    }
}

/// An assembled report table: the derived rows of one scenario
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    columns: Vec<Column>,
    rows: Vec<Vec<CellValue>>,
}

impl ReportTable {
    /// Create an empty table with the given columns
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, checking that its arity matches the column count
    pub fn push_row(&mut self, row: Vec<CellValue>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(EvalError::RowArityMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// The table's columns, in order
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of data rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Render the table as an aligned human-readable grid for the console.
    /// Numeric cells are right-aligned, text left-aligned.
    #[must_use]
    pub fn render(&self) -> String {
        let formatted: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&self.columns)
                    .map(|(cell, column)| cell.format(column.precision, "-"))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                formatted
                    .iter()
                    .map(|row| row[i].len())
                    .max()
                    .unwrap_or(0)
                    .max(column.name.len())
            })
            .collect();

        let mut output = String::new();
        output.push_str(
            &self
                .columns
                .iter()
                .zip(&widths)
                .map(|(column, &width)| format!("{:<width$}", column.name))
                .join(" | "),
        );
        output.push('\n');
        output.push_str(&widths.iter().map(|width| "-".repeat(*width)).join("-|-"));
        output.push('\n');

        for (row, cells) in self.rows.iter().zip(&formatted) {
            output.push_str(
                &row.iter()
                    .zip(cells)
                    .zip(&widths)
                    .map(|((cell, text), &width)| {
                        if cell.is_numeric() {
                            format!("{text:>width$}")
                        } else {
                            format!("{text:<width$}")
                        }
                    })
                    .join(" | "),
            );
            output.push('\n');
        }

        output
    }

    /// Serialize the table as comma-separated text: a header row of column
    /// names followed by one line per data row. Fields containing a comma,
    /// quote, or newline are double-quote escaped; `Missing` is an empty
    /// field.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        let mut output = String::new();
        output.push_str(
            &self
                .columns
                .iter()
                .map(|column| escape_csv_field(&column.name))
                .join(","),
        );
        output.push('\n');

        for row in &self.rows {
            output.push_str(
                &row.iter()
                    .zip(&self.columns)
                    .map(|(cell, column)| escape_csv_field(&cell.format(column.precision, "")))
                    .join(","),
            );
            output.push('\n');
        }

        output
    }
}

/// Quote a CSV field if it contains a delimiter, quote, or newline
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
