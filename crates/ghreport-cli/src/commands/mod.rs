//! CLI commands module
//!
//! Contains the `bugs` and `prs` report commands and the delivery step they
//! share.

pub mod bugs;
pub mod prs;

use anyhow::Result;
use clap::Args;
use ghreport_core::report::{export, export_csv, export_json, to_json_string};
use ghreport_core::{
    ClientConfig, DateRange, Error, ExportFormat, GitHubClient, OutputSink, TabularExport, Tone,
};
use std::path::{Path, PathBuf};

use crate::output::{print_success, OutputFormat};

/// Shared context for all commands
pub struct Context {
    pub api_url: String,
    pub token: Option<String>,
    pub verbose: bool,
}

impl Context {
    /// Build the GitHub client; fails before any request when no token is set
    pub fn client(&self) -> Result<GitHubClient> {
        let config = ClientConfig::new(&self.api_url, self.token.clone())?;
        Ok(GitHubClient::new(&config)?)
    }
}

/// Arguments common to both reports
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// GitHub organization name
    #[arg(long)]
    pub org: String,

    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long, value_parser = parse_date_arg)]
    pub from_date: String,

    /// End date (YYYY-MM-DD), inclusive
    #[arg(long, value_parser = parse_date_arg)]
    pub to_date: String,

    /// Output format: table (default), json or csv
    #[arg(long, short, default_value = "table")]
    pub output: OutputFormat,

    /// Also write the results to a file (.json or .csv)
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Only print the summary table
    #[arg(long)]
    pub no_details: bool,
}

impl ReportArgs {
    pub fn range(&self) -> Result<DateRange> {
        Ok(DateRange::parse(&self.from_date, &self.to_date)?)
    }
}

fn parse_date_arg(s: &str) -> std::result::Result<String, String> {
    ghreport_core::validate_date(s).map_err(|e| match e {
        Error::Validation(msg) => msg,
        other => other.to_string(),
    })
}

/// Print or write a finished report according to `--output` and `--export`
pub fn deliver<T: TabularExport>(
    report: &T,
    args: &ReportArgs,
    sink: &mut dyn OutputSink,
    render: impl FnOnce(&T, &mut dyn OutputSink, bool),
) -> Result<()> {
    match args.output {
        OutputFormat::Json => match &args.export {
            Some(path) => {
                export_json(report, path)?;
                exported(sink, path);
            }
            None => sink.write_line(&to_json_string(report)?),
        },
        OutputFormat::Csv => {
            let path = args
                .export
                .clone()
                .unwrap_or_else(|| PathBuf::from(report.default_csv_path()));
            export_csv(report, &path)?;
            exported(sink, &path);
        }
        OutputFormat::Table => {
            render(report, sink, !args.no_details);
            if let Some(path) = &args.export {
                match ExportFormat::from_path(path) {
                    Some(format) => {
                        export(report, format, path)?;
                        exported(sink, path);
                    }
                    None => sink.status(
                        "Formato file non riconosciuto. Usa .json o .csv",
                        Tone::Warning,
                    ),
                }
            }
        }
    }
    Ok(())
}

fn exported(sink: &mut dyn OutputSink, path: &Path) {
    print_success(sink, &format!("Risultati esportati in {}", path.display()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghreport_core::report::render_bug_report;
    use ghreport_core::{BugReport, MemorySink};
    use tempfile::TempDir;

    fn args(output: OutputFormat, export: Option<PathBuf>) -> ReportArgs {
        ReportArgs {
            org: "Acme".into(),
            from_date: "2024-01-01".into(),
            to_date: "2024-01-31".into(),
            output,
            export,
            no_details: false,
        }
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(parse_date_arg("2024-01-31").unwrap(), "2024-01-31");
        let err = parse_date_arg("31/01/2024").unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
        assert!(!err.starts_with("Validation error"));
    }

    #[test]
    fn test_deliver_json_to_stdout() {
        let mut sink = MemorySink::new();
        deliver(&BugReport::default(), &args(OutputFormat::Json, None), &mut sink, render_bug_report)
            .unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        assert!(sink.statuses().is_empty());
        let parsed: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed["bug"]["totale_aperti"], 0);
        assert!(sink.tables().is_empty());
    }

    #[test]
    fn test_deliver_csv_to_export_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut sink = MemorySink::new();
        deliver(
            &BugReport::default(),
            &args(OutputFormat::Csv, Some(path.clone())),
            &mut sink,
            render_bug_report,
        )
        .unwrap();

        assert!(path.exists());
        assert!(sink.lines().is_empty());
        assert!(sink.statuses()[0].starts_with("✓ Risultati esportati in"));
    }

    #[test]
    fn test_deliver_table_with_unknown_export_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.xlsx");
        let mut sink = MemorySink::new();
        deliver(
            &BugReport::default(),
            &args(OutputFormat::Table, Some(path.clone())),
            &mut sink,
            render_bug_report,
        )
        .unwrap();

        assert_eq!(sink.tables().len(), 1);
        assert_eq!(
            sink.statuses(),
            vec!["Formato file non riconosciuto. Usa .json o .csv"]
        );
        assert!(!path.exists());
    }

    #[test]
    fn test_deliver_table_exports_json_by_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.JSON");
        let mut sink = MemorySink::new();
        deliver(
            &BugReport::default(),
            &args(OutputFormat::Table, Some(path.clone())),
            &mut sink,
            render_bug_report,
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"periodo\""));
    }
}
