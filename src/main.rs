use clap::Parser;
use tracing::{error, info};

use quote_normalizer::config::Config;
use quote_normalizer::infra::{FsLineSink, FsLineSource};
use quote_normalizer::logging;
use quote_normalizer::pipeline::Pipeline;

#[derive(Parser)]
#[command(name = "quote_normalizer")]
#[command(about = "Cleans, dedupes and sorts a raw quotes file")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input file of raw quote lines (overrides config.toml)
    #[arg(long)]
    input: Option<String>,

    /// Output file for the cleaned quote list (overrides config.toml)
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(input) = cli.input {
        config.input_path = input;
    }
    if let Some(output) = cli.output {
        config.output_path = output;
    }

    info!(
        "Normalizing {} into {}",
        config.input_path, config.output_path
    );
    println!("🔄 Normalizing quotes from {}...", config.input_path);

    let source = FsLineSource::new(&config.input_path);
    let mut sink = FsLineSink::new(&config.output_path);

    match Pipeline::run(&source, &mut sink) {
        Ok(result) => {
            info!("Normalizer run finished");
            println!("\n📊 Run results:");
            println!("   Lines read: {}", result.total_lines);
            println!("   Quotes written: {}", result.unique_quotes);
            println!("   Duplicates dropped: {}", result.duplicates_dropped);
            println!("   Skipped (too short): {}", result.skipped_short);
            println!("   Skipped (empty): {}", result.skipped_empty);
            println!("   Output file: {}", config.output_path);
            Ok(())
        }
        Err(e) => {
            error!("Normalizer run failed: {}", e);
            println!("❌ Normalizer run failed: {e}");
            Err(e.into())
        }
    }
}
