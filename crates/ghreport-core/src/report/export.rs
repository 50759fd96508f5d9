//! JSON and CSV export

use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::types::TabularExport;
use crate::error::Result;

/// Export file format, chosen from the file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// `.json` or `.csv` (any case); anything else is unrecognized
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(ExportFormat::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(ExportFormat::Csv)
        } else {
            None
        }
    }
}

/// Pretty-printed JSON; non-ASCII text is kept as is
pub fn to_json_string<T: Serialize + ?Sized>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn export_json<T: Serialize + ?Sized>(report: &T, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(to_json_string(report)?.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Header row followed by one row per item
pub fn export_csv<T: TabularExport + ?Sized>(report: &T, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(report.csv_header())?;
    for row in report.csv_rows() {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Export in the given format
pub fn export<T: TabularExport + ?Sized>(report: &T, format: ExportFormat, path: &Path) -> Result<()> {
    log::debug!("Exporting {:?} to {}", format, path.display());
    match format {
        ExportFormat::Json => export_json(report, path),
        ExportFormat::Csv => export_csv(report, path),
    }
}
