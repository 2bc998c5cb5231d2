//! Shared report assembly and persistence pipeline
//!
//! All three scenarios produce the same shape of output: an aligned grid on
//! the console, and a results file with a `#`-prefixed metadata header
//! followed by the table in comma-separated form.

pub mod metadata;
pub mod table;
pub mod writer;

pub use metadata::ReportMetadata;
pub use table::{CellValue, Column, ReportTable};
pub use writer::write_report;
