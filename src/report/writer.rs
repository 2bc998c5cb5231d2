//! Persistence for assembled reports
//!
//! Writes are one-shot and idempotent: the file is fully overwritten each
//! run, and a failed write surfaces the underlying I/O error directly.

use crate::error::Result;
use crate::report::{ReportMetadata, ReportTable};
use crate::utils::logging::{log_operation_complete, log_operation_start};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the metadata header followed by the delimited table to `path`,
/// creating the destination directory if absent.
pub fn write_report(path: &Path, metadata: &ReportMetadata, table: &ReportTable) -> Result<()> {
    log_operation_start("Writing report to", path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(metadata.render().as_bytes())?;
    writer.write_all(table.to_delimited().as_bytes())?;
    writer.flush()?;

    log_operation_complete("wrote", path, table.row_count());
    Ok(())
}
