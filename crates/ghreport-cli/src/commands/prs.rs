//! Pull request review report command

use anyhow::Result;
use ghreport_core::report::render_review_report;
use ghreport_core::{analyze_pull_requests, search_author_merged_prs, OutputSink, Tone};

use super::{deliver, Context, ReportArgs};

pub async fn execute(
    ctx: &Context,
    author: &str,
    args: ReportArgs,
    sink: &mut dyn OutputSink,
) -> Result<()> {
    let range = args.range()?;
    let client = ctx.client()?;

    if ctx.verbose {
        sink.status(
            &format!("Analisi PR di {} nell'organizzazione {}", author, args.org),
            Tone::Info,
        );
        sink.status(
            &format!("Periodo: {} - {}", args.from_date, args.to_date),
            Tone::Muted,
        );
        sink.status("", Tone::Plain);
    }

    let items =
        search_author_merged_prs(&client, &args.org, author, range, sink, ctx.verbose).await?;

    if items.is_empty() {
        sink.status("Nessuna PR trovata nel periodo specificato.", Tone::Warning);
        return Ok(());
    }

    let report = analyze_pull_requests(&client, &items, sink, ctx.verbose).await?;
    deliver(&report, &args, sink, render_review_report)
}
