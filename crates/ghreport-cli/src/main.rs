//! ghreport CLI - GitHub organization reports
//!
//! Counts bug and non-bug work in an organization over a date window, and
//! classifies an author's merged pull requests by review outcome.

mod commands;
mod output;

use clap::{Parser, Subcommand};
use ghreport_core::{API_URL_ENV, DEFAULT_API_URL};

#[derive(Parser)]
#[command(name = "ghreport")]
#[command(author, version, about = "Bug and pull request review reports for GitHub organizations", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub token (or set GITHUB_TOKEN env var)
    #[arg(long, global = true)]
    token: Option<String>,

    /// GitHub REST API base URL
    #[arg(long, env = API_URL_ENV, global = true, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Show queries, phases and progress
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Count open and resolved bug vs. non-bug items
    Bugs(commands::ReportArgs),

    /// Classify an author's merged pull requests by review outcome
    Prs {
        /// GitHub username of the pull request author
        #[arg(long)]
        author: String,

        #[command(flatten)]
        args: commands::ReportArgs,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "warn,ghreport_core=debug,ghreport=debug"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = commands::Context {
        api_url: cli.api_url,
        token: cli.token,
        verbose: cli.verbose,
    };
    let mut sink = output::TerminalSink::new();

    let result = match cli.command {
        Commands::Bugs(args) => commands::bugs::execute(&ctx, args, &mut sink).await,
        Commands::Prs { author, args } => {
            commands::prs::execute(&ctx, &author, args, &mut sink).await
        }
    };

    if let Err(err) = result {
        sink.finish_progress();
        output::print_failure(&err);
        std::process::exit(1);
    }
}
