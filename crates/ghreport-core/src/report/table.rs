//! Table and detail-panel layouts for both reports

use super::types::{BugReport, ReviewReport};
use crate::sink::{OutputSink, Panel, ReportTable, Tone};

pub fn bug_summary_table(report: &BugReport) -> ReportTable {
    let (bug, non_bug) = (&report.bug, &report.non_bug);
    ReportTable::new("Analisi Bug e Non-Bug", &["Categoria", "Aperti", "Risolti", "Totale"])
        .row(vec![
            "Bug".into(),
            bug.open_total().to_string(),
            bug.resolved_total().to_string(),
            bug.total().to_string(),
        ])
        .row(vec![
            "Non-Bug".into(),
            non_bug.open_total().to_string(),
            non_bug.resolved_total().to_string(),
            non_bug.total().to_string(),
        ])
        .total_row(vec![
            "Totale".into(),
            (bug.open_total() + non_bug.open_total()).to_string(),
            (bug.resolved_total() + non_bug.resolved_total()).to_string(),
            (bug.total() + non_bug.total()).to_string(),
        ])
}

/// One panel per non-empty bucket
pub fn bug_detail_panels(report: &BugReport) -> Vec<Panel> {
    let sections = [
        ("Bug Aperti", &report.bug.open, Tone::Warning),
        ("Bug Risolti", &report.bug.resolved, Tone::Success),
        ("Non-Bug Aperti", &report.non_bug.open, Tone::Warning),
        ("Non-Bug Risolti", &report.non_bug.resolved, Tone::Success),
    ];

    sections
        .into_iter()
        .filter(|(_, records, _)| !records.is_empty())
        .map(|(title, records, tone)| Panel {
            title: title.to_string(),
            lines: records
                .iter()
                .map(|r| format!("#{} - {} ({})", r.number, r.title, r.repo))
                .collect(),
            tone,
        })
        .collect()
}

pub fn render_bug_report(report: &BugReport, sink: &mut dyn OutputSink, show_details: bool) {
    sink.write_line("");
    sink.render_table(&bug_summary_table(report));
    sink.write_styled(
        &format!("Periodo: {} - {}", report.period.from, report.period.to),
        Tone::Muted,
    );

    if show_details {
        render_panels(sink, &bug_detail_panels(report));
    }
}

pub fn review_summary_table(report: &ReviewReport) -> ReportTable {
    ReportTable::new("Risultati Analisi PR", &["Categoria", "Numero"])
        .row(vec![
            "PR approvate senza bocciature".into(),
            report.without_rejections.len().to_string(),
        ])
        .row(vec![
            "PR bocciate e poi approvate".into(),
            report.rejected_then_approved.len().to_string(),
        ])
        .total_row(vec!["Totale PR considerate".into(), report.total().to_string()])
}

pub fn review_detail_panels(report: &ReviewReport) -> Vec<Panel> {
    let sections = [
        ("PR Approvate Senza Bocciature", &report.without_rejections, Tone::Success),
        ("PR Bocciate e Poi Approvate", &report.rejected_then_approved, Tone::Warning),
    ];

    sections
        .into_iter()
        .filter(|(_, records, _)| !records.is_empty())
        .map(|(title, records, tone)| Panel {
            title: title.to_string(),
            lines: records
                .iter()
                .map(|pr| format!("#{} - {}", pr.number, pr.title))
                .collect(),
            tone,
        })
        .collect()
}

pub fn render_review_report(report: &ReviewReport, sink: &mut dyn OutputSink, show_details: bool) {
    sink.write_line("");
    sink.render_table(&review_summary_table(report));

    if show_details && report.total() > 0 {
        render_panels(sink, &review_detail_panels(report));
    }
}

fn render_panels(sink: &mut dyn OutputSink, panels: &[Panel]) {
    for panel in panels {
        sink.write_line("");
        sink.render_panel(panel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{CategoryBuckets, IssueRecord, Period, PullRequestRecord};
    use crate::sink::MemorySink;

    fn record(number: u64) -> IssueRecord {
        IssueRecord {
            number,
            title: format!("Issue {}", number),
            url: String::new(),
            repo: "app".into(),
            state: "open".into(),
            created_at: None,
            closed_at: None,
            merged_at: None,
            labels: vec![],
        }
    }

    fn pr(number: u64) -> PullRequestRecord {
        PullRequestRecord {
            number,
            title: format!("PR {}", number),
            url: String::new(),
            repo: "app".into(),
            merged_at: None,
        }
    }

    fn bug_report() -> BugReport {
        BugReport {
            bug: CategoryBuckets { open: vec![record(1), record(2)], resolved: vec![record(3)] },
            non_bug: CategoryBuckets { open: vec![], resolved: vec![record(4), record(5)] },
            period: Period { from: "2024-01-01".into(), to: "2024-01-31".into() },
        }
    }

    #[test]
    fn test_bug_summary_rows() {
        let table = bug_summary_table(&bug_report());

        assert_eq!(table.headers, vec!["Categoria", "Aperti", "Risolti", "Totale"]);
        assert_eq!(table.find_row("Bug").unwrap(), ["Bug", "2", "1", "3"]);
        assert_eq!(table.find_row("Non-Bug").unwrap(), ["Non-Bug", "0", "2", "2"]);
        assert_eq!(table.find_row("Totale").unwrap(), ["Totale", "2", "3", "5"]);
        assert!(table.has_total_row);
    }

    #[test]
    fn test_bug_panels_skip_empty_buckets() {
        let panels = bug_detail_panels(&bug_report());
        let titles: Vec<_> = panels.iter().map(|p| p.title.as_str()).collect();

        assert_eq!(titles, vec!["Bug Aperti", "Bug Risolti", "Non-Bug Risolti"]);
        assert_eq!(panels[0].lines, vec!["#1 - Issue 1 (app)", "#2 - Issue 2 (app)"]);
        assert_eq!(panels[0].tone, Tone::Warning);
        assert_eq!(panels[1].tone, Tone::Success);
    }

    #[test]
    fn test_render_bug_report_without_details() {
        let mut sink = MemorySink::new();
        render_bug_report(&bug_report(), &mut sink, false);

        assert_eq!(sink.tables().len(), 1);
        assert!(sink.panels().is_empty());
        assert!(sink.contains("Periodo: 2024-01-01 - 2024-01-31"));
    }

    #[test]
    fn test_render_bug_report_with_details() {
        let mut sink = MemorySink::new();
        render_bug_report(&bug_report(), &mut sink, true);
        assert_eq!(sink.panels().len(), 3);
    }

    #[test]
    fn test_review_summary_and_panels() {
        let report = ReviewReport {
            without_rejections: vec![pr(1)],
            rejected_then_approved: vec![pr(2), pr(3)],
        };
        let table = review_summary_table(&report);
        assert_eq!(table.find_row("PR approvate senza bocciature").unwrap()[1], "1");
        assert_eq!(table.find_row("PR bocciate e poi approvate").unwrap()[1], "2");
        assert_eq!(table.find_row("Totale PR considerate").unwrap()[1], "3");

        let panels = review_detail_panels(&report);
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[1].lines, vec!["#2 - PR 2", "#3 - PR 3"]);
    }

    #[test]
    fn test_empty_review_report_has_no_panels() {
        let mut sink = MemorySink::new();
        render_review_report(&ReviewReport::default(), &mut sink, true);

        assert_eq!(sink.tables().len(), 1);
        assert!(sink.panels().is_empty());
    }
}
