//! Output formatting module
//!
//! Output format selection, the terminal [`OutputSink`] and fatal error
//! printing.

use colored::{ColoredString, Colorize};
use ghreport_core::{Error, OutputSink, Panel, ReportTable, Tone};
use std::fmt::Display;
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::object::{Columns, Rows};
use tabled::settings::{Alignment, Format, Modify, Style};

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid format: {}. Use 'table', 'json' or 'csv'", s)),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

fn paint(text: &str, tone: Tone) -> ColoredString {
    match tone {
        Tone::Plain => text.normal(),
        Tone::Info => text.cyan(),
        Tone::Success => text.green(),
        Tone::Warning => text.yellow(),
        Tone::Error => text.red(),
        Tone::Muted => text.dimmed(),
    }
}

/// Sink writing to the terminal: report output on stdout, status and
/// progress on stderr
#[derive(Debug, Default)]
pub struct TerminalSink {
    progress_shown: bool,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear a pending progress line
    pub fn finish_progress(&mut self) {
        if self.progress_shown {
            eprint!("\r\x1b[2K");
            let _ = std::io::stderr().flush();
            self.progress_shown = false;
        }
    }
}

impl OutputSink for TerminalSink {
    fn write_line(&mut self, line: &str) {
        self.finish_progress();
        println!("{}", line);
    }

    fn write_styled(&mut self, line: &str, tone: Tone) {
        self.finish_progress();
        println!("{}", paint(line, tone));
    }

    fn status(&mut self, line: &str, tone: Tone) {
        self.finish_progress();
        eprintln!("{}", paint(line, tone));
    }

    fn render_table(&mut self, table: &ReportTable) {
        self.finish_progress();

        let mut builder = Builder::default();
        builder.push_record(table.headers.iter().cloned());
        for row in &table.rows {
            builder.push_record(row.iter().cloned());
        }

        let mut rendered = builder.build();
        rendered
            .with(Style::rounded())
            .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
            .with(Modify::new(Rows::first()).with(Format::content(|s| s.magenta().bold().to_string())))
            .with(Modify::new(Columns::first()).with(Format::content(|s| s.cyan().to_string())));
        if table.has_total_row && !table.rows.is_empty() {
            rendered.with(
                Modify::new(Rows::last()).with(Format::content(|s| s.bold().to_string())),
            );
        }

        println!("{}", table.title.bold().italic());
        println!("{}", rendered);
    }

    fn render_panel(&mut self, panel: &Panel) {
        self.finish_progress();

        let mut builder = Builder::default();
        builder.push_record([paint(&panel.title, panel.tone).bold().to_string()]);
        for line in &panel.lines {
            builder.push_record([line.clone()]);
        }

        let mut rendered = builder.build();
        rendered.with(Style::rounded());
        println!("{}", rendered);
    }

    fn progress(&mut self, message: &str) {
        eprint!("\r\x1b[2K{} {}", "⠋".cyan(), message);
        let _ = std::io::stderr().flush();
        self.progress_shown = true;
    }
}

/// Print a success message
pub fn print_success(sink: &mut dyn OutputSink, message: &str) {
    sink.status(&format!("✓ {}", message), Tone::Success);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}", message.red());
}

/// Print a fatal error with the hint that fits its kind
pub fn print_failure(err: &anyhow::Error) {
    match err.downcast_ref::<Error>() {
        Some(Error::MissingToken) => {
            eprintln!("{} {}", "Errore:".red().bold(), err.to_string().red());
            eprintln!("Esempio: {}", "export GITHUB_TOKEN=tuo_token_personale".cyan());
        }
        Some(core_err @ Error::RateLimited { status, .. }) => {
            eprintln!(
                "{} Rate limit raggiunto o permessi insufficienti",
                "Errore:".red().bold()
            );
            eprintln!("{}", format!("Status: {}", status).dimmed());
            if core_err.suggests_retry() {
                eprintln!(
                    "{} Attendi qualche minuto e riprova",
                    "Suggerimento:".yellow()
                );
            }
        }
        Some(Error::Api { status, body }) => {
            eprintln!("{}", "Errore nella chiamata alla Search API:".red().bold());
            eprintln!("Status: {}", status);
            eprintln!("Risposta: {}", body);
        }
        _ => print_error(&format!("Errore: {:#}", err)),
    }
}
