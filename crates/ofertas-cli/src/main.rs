mod pipeline;
mod reports;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use ofertas_core::{AppConfig, SelectorConfig};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ofertas")]
#[command(about = "Scrape discounted items from a promotions catalog and summarize their discounts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch every configured page, then write exports, summary and charts.
    Run(RunArgs),
    /// Run the record extractor over a saved listing page and print the result.
    Extract {
        /// Path to an HTML file.
        file: PathBuf,
        /// Minimum qualifying discount; defaults to the configured threshold.
        #[arg(long)]
        threshold: Option<u8>,
    },
}

/// Overrides for the environment configuration.
#[derive(Debug, Default, Args)]
struct RunArgs {
    #[arg(long)]
    first_page: Option<u32>,
    #[arg(long)]
    last_page: Option<u32>,
    #[arg(long)]
    threshold: Option<u8>,
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// End pagination at the first page with no qualifying items.
    #[arg(long)]
    stop_on_empty_page: bool,
    /// Skip the PNG charts.
    #[arg(long)]
    no_charts: bool,
}

impl RunArgs {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(first) = self.first_page {
            config.first_page = first;
        }
        if let Some(last) = self.last_page {
            config.last_page = last;
        }
        if let Some(threshold) = self.threshold {
            config.discount_threshold = threshold;
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir.clone_from(dir);
        }
        config.stop_on_empty_page |= self.stop_on_empty_page;
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ofertas_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Run(args)) => run(config, &args).await,
        Some(Commands::Extract { file, threshold }) => {
            extract_file(&file, threshold.unwrap_or(config.discount_threshold))
        }
        None => run(config, &RunArgs::default()).await,
    }
}

async fn run(config: AppConfig, args: &RunArgs) -> anyhow::Result<()> {
    let config = args.apply(config);
    let pipeline_config = config
        .pipeline_config()
        .context("invalid scraping configuration")?;
    tracing::info!(
        pages = ?pipeline_config.pages(),
        threshold = pipeline_config.threshold(),
        "starting catalog run"
    );

    let client =
        ofertas_scraper::ListingClient::new(config.request_timeout_secs, &config.user_agent)
            .context("failed to build HTTP client")?;
    let (catalog, summary) = pipeline::run_pipeline(&client, &pipeline_config).await?;

    print!(
        "{}",
        ofertas_report::render_console_summary(&catalog, &summary)
    );

    let run_date = chrono::Local::now().date_naive();
    let files = reports::write_reports(&catalog, &summary, &config, !args.no_charts, run_date)?;
    tracing::info!(
        csv = %files.csv.display(),
        xlsx = %files.xlsx.display(),
        "run complete"
    );
    Ok(())
}

fn extract_file(path: &std::path::Path, threshold: u8) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let selectors = ofertas_scraper::ListingSelectors::compile(&SelectorConfig::default())?;
    let records = ofertas_scraper::extract_records(&html, &selectors, threshold)
        .with_context(|| format!("failed to extract records from {}", path.display()))?;

    for record in &records {
        println!(
            "{}\t{}\t{}%",
            record.name, record.price, record.discount_percent
        );
    }
    println!("{} records at or above {threshold}%", records.len());
    Ok(())
}
