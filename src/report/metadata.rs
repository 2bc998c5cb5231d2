//! Metadata header for persisted results
//!
//! The header documents the computation that produced the file: a title,
//! free-text description lines (task, assumptions, column notes), and the
//! generation timestamp. Every line is `#`-prefixed so the data rows below
//! stay machine-readable.

use chrono::NaiveDateTime;

const RULE: &str = "------------------------------------------------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Descriptive header lines prepended to a persisted report table
#[derive(Debug, Clone, PartialEq)]
pub struct ReportMetadata {
    title: String,
    lines: Vec<String>,
    generated_at: NaiveDateTime,
}

impl ReportMetadata {
    /// Create a header with a title and the generation timestamp
    #[must_use]
    pub fn new(title: &str, generated_at: NaiveDateTime) -> Self {
        Self {
            title: title.to_string(),
            lines: Vec::new(),
            generated_at,
        }
    }

    /// Append a free-text description line
    #[must_use]
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// The generation timestamp
    #[must_use]
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Render the header as `#`-prefixed lines with rule separators
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = format!("# {title}\n# {RULE}\n", title = self.title);
        for line in &self.lines {
            output.push_str(&format!("# {line}\n"));
        }
        output.push_str(&format!(
            "# Date Generated: {timestamp}\n# {RULE}\n",
            timestamp = self.generated_at.format(TIMESTAMP_FORMAT),
        ));
        output
    }
}
