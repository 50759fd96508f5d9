//! Bug report command

use anyhow::Result;
use ghreport_core::report::render_bug_report;
use ghreport_core::{analyze_issues, OutputSink, Tone};

use super::{deliver, Context, ReportArgs};

pub async fn execute(ctx: &Context, args: ReportArgs, sink: &mut dyn OutputSink) -> Result<()> {
    let range = args.range()?;
    let client = ctx.client()?;

    if ctx.verbose {
        sink.status(&format!("Analisi issues per organizzazione: {}", args.org), Tone::Info);
        sink.status(
            &format!("Periodo: {} - {}", args.from_date, args.to_date),
            Tone::Muted,
        );
        sink.status("", Tone::Plain);
    }

    let report = analyze_issues(&client, &args.org, range, sink, ctx.verbose).await?;
    log::debug!("Bug report ready: {} items", report.item_count());

    deliver(&report, &args, sink, render_bug_report)
}
