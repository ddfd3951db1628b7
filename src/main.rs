use clap::Parser;
use homebrew_scraper::{scrape, write_recipes, ScraperConfig};
use log::{info, LevelFilter};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "homebrew-scraper")]
#[command(about = "Scrape homebrew recipes from a forum and save to JSON", long_about = None)]
struct Cli {
    /// Starting URL of the recipe listing page (e.g., https://www.example.com/recipes)
    url: String,

    /// Path to output JSON file
    #[arg(short, long, default_value = "homebrew_recipes.json")]
    output: PathBuf,

    /// Enable debug logging output
    #[arg(short, long)]
    verbose: bool,

    /// TOML file with selectors and timing (default: ./homebrew_scraper.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    builder.format_timestamp_secs();
    if verbose {
        builder.filter_module("homebrew_scraper", LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ScraperConfig::load(cli.config.as_deref())?;

    info!("Starting scraper...");
    let report = scrape(&cli.url, &config)?;
    info!("Scraped a total of {} recipes.", report.recipes.len());
    if !report.discarded.is_empty() {
        info!("Skipped {} incomplete posts.", report.discarded.len());
    }

    write_recipes(&report.recipes, &cli.output).ok();

    Ok(())
}
