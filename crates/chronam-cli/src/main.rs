//! Driver: splits the requested year span into batches and runs one
//! query + CSV export per batch.

mod batches;
mod export;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use chronam_client::ChronAmClient;
use chronam_core::{assemble, QueryParameters};
use chronam_sentiment::{enrich_records, KeywordMatcher, LexiconScorer};

use crate::batches::year_batches;
use crate::export::{append_run_log, write_records, RunLogEntry};

#[derive(Debug, Parser)]
#[command(name = "chronam")]
#[command(about = "Collect Chronicling America news records and score keyword sentiment")]
struct Cli {
    /// Keywords of interest; any of them may appear in a match.
    #[arg(required = true)]
    keywords: Vec<String>,

    /// Earliest year to consider (inclusive).
    #[arg(long)]
    year_min: i32,

    /// Latest year to consider (inclusive).
    #[arg(long)]
    year_max: i32,

    /// Width of each export batch, in years.
    #[arg(long, default_value_t = 1)]
    year_increment: i32,

    /// Soft cap on records per batch. The page that crosses the cap is
    /// kept in full, so a batch may overshoot by up to one page.
    #[arg(long, default_value_t = 1000)]
    max_records: u64,

    /// Directory receiving the CSV exports and the run log.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Rows requested per page.
    #[arg(long, default_value_t = 20)]
    page_size: u32,

    /// Pause before the single retry of a failed page request.
    #[arg(long, default_value_t = 60)]
    retry_wait_secs: u64,

    /// Per-request timeout.
    #[arg(long, default_value_t = 120)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    run(cli).await
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    anyhow::ensure!(cli.year_increment >= 1, "year increment must be positive");
    anyhow::ensure!(
        cli.year_max >= cli.year_min,
        "invalid year range: {}..={}",
        cli.year_min,
        cli.year_max
    );

    let client = ChronAmClient::new(cli.timeout_secs)?
        .page_size(cli.page_size)
        .retry_wait(Duration::from_secs(cli.retry_wait_secs));
    let matcher = KeywordMatcher::new(&cli.keywords)?;
    std::fs::create_dir_all(&cli.out_dir)?;

    let slug = &cli.keywords[0];
    let log_path = cli.out_dir.join(format!("{slug}-log.csv"));
    let batches = year_batches(cli.year_min, cli.year_max, cli.year_increment);
    let batch_count = batches.len();

    for (batch, (year_min, year_max)) in batches.into_iter().enumerate() {
        let params = QueryParameters::new(cli.keywords.clone(), year_min, year_max)?;
        let result = client.fetch_all(&params, cli.max_records).await?;
        let records = assemble(&result.items)?;
        let enriched = enrich_records(records, &matcher, &LexiconScorer);

        let csv_path = cli.out_dir.join(format!("{slug}-{year_min}-{year_max}.csv"));
        write_records(&csv_path, &enriched)?;
        append_run_log(
            &log_path,
            &RunLogEntry {
                path: &csv_path,
                keywords: &cli.keywords,
                year_min,
                year_max,
                n_collected: result.stats.collected(),
                n_available: result.stats.available(),
                task_time_s: result.stats.elapsed_seconds,
            },
        )?;
        tracing::info!(
            batch = batch + 1,
            of = batch_count,
            path = %csv_path.display(),
            collected = result.stats.collected(),
            available = result.stats.available(),
            elapsed_s = format!("{:.2}", result.stats.elapsed_seconds),
            "batch exported"
        );
    }

    tracing::info!(batches = batch_count, "finished");
    Ok(())
}
