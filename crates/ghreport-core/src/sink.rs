//! Output sink
//!
//! Every user-facing line, table and panel goes through an [`OutputSink`]
//! passed in by the caller. The CLI renders to the terminal; tests use
//! [`MemorySink`] and inspect what was written.
//!
//! Report content (`write_line`, `write_styled`, tables, panels) and status
//! messages (`status`, `progress`) are separate channels: a terminal sink
//! keeps status off stdout so JSON output stays parseable.

/// Visual tone of a line or panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Info,
    Success,
    Warning,
    Error,
    Muted,
}

/// Table layout independent of any rendering library
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Last row is a totals row and is rendered emphasized
    pub has_total_row: bool,
}

impl ReportTable {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            has_total_row: false,
        }
    }

    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn total_row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self.has_total_row = true;
        self
    }

    /// Find a row by its first cell
    pub fn find_row(&self, label: &str) -> Option<&[String]> {
        self.rows
            .iter()
            .find(|r| r.first().map(String::as_str) == Some(label))
            .map(Vec::as_slice)
    }
}

/// Titled box of lines, one per bucket item
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub title: String,
    pub lines: Vec<String>,
    pub tone: Tone,
}

pub trait OutputSink {
    fn write_line(&mut self, line: &str);

    fn write_styled(&mut self, line: &str, _tone: Tone) {
        self.write_line(line);
    }

    /// Status or diagnostic message, not part of the report itself
    fn status(&mut self, line: &str, tone: Tone) {
        self.write_styled(line, tone);
    }

    fn render_table(&mut self, table: &ReportTable);

    fn render_panel(&mut self, panel: &Panel);

    /// Transient progress update; sinks without a live display ignore it
    fn progress(&mut self, _message: &str) {}
}

/// Event recorded by [`MemorySink`]
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Line(String, Tone),
    Status(String, Tone),
    Table(ReportTable),
    Panel(Panel),
    Progress(String),
}

/// Sink that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub events: Vec<SinkEvent>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Line(line, _) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn statuses(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Status(line, _) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn tables(&self) -> Vec<&ReportTable> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Table(t) => Some(t),
                _ => None,
            })
            .collect()
    }

    pub fn panels(&self) -> Vec<&Panel> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Panel(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn progress_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::Progress(_)))
            .count()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.events.iter().any(|e| match e {
            SinkEvent::Line(line, _) | SinkEvent::Status(line, _) => line.contains(needle),
            _ => false,
        })
    }
}

impl OutputSink for MemorySink {
    fn write_line(&mut self, line: &str) {
        self.events.push(SinkEvent::Line(line.to_string(), Tone::Plain));
    }

    fn write_styled(&mut self, line: &str, tone: Tone) {
        self.events.push(SinkEvent::Line(line.to_string(), tone));
    }

    fn status(&mut self, line: &str, tone: Tone) {
        self.events.push(SinkEvent::Status(line.to_string(), tone));
    }

    fn render_table(&mut self, table: &ReportTable) {
        self.events.push(SinkEvent::Table(table.clone()));
    }

    fn render_panel(&mut self, panel: &Panel) {
        self.events.push(SinkEvent::Panel(panel.clone()));
    }

    fn progress(&mut self, message: &str) {
        self.events.push(SinkEvent::Progress(message.to_string()));
    }
}
