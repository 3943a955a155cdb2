use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::RegionSet;
use color_eyre::eyre::Result;
use contour::{ContourTracer, PixelField, TraceResult};
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect foreground regions and print their named bounding rectangles
    Regions {
        /// Path to the input image file
        #[arg(short, long)]
        input: PathBuf,
        /// Highest alpha value still treated as background (0-255)
        #[arg(long, default_value = "50")]
        max_background_alpha: u8,
    },
    /// Print the raw boundary point sequences of every detected region
    Contours {
        /// Path to the input image file
        #[arg(short, long)]
        input: PathBuf,
        /// Highest alpha value still treated as background (0-255)
        #[arg(long, default_value = "50")]
        max_background_alpha: u8,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Regions {
            input,
            max_background_alpha,
        } => {
            let result = trace_image(input, *max_background_alpha)?;
            let regions = RegionSet::from_trace(input.display().to_string(), &result);
            println!("{}", serde_json::to_string_pretty(&regions)?);
        }
        Commands::Contours {
            input,
            max_background_alpha,
        } => {
            let result = trace_image(input, *max_background_alpha)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn trace_image(input: &PathBuf, max_background_alpha: u8) -> Result<TraceResult> {
    info!(input = %input.display(), max_background_alpha, "tracing image");

    let field = PixelField::open(input, max_background_alpha)?;
    let result = ContourTracer::new(&field).trace();

    info!(
        regions = result.len(),
        width = result.field_width,
        height = result.field_height,
        "trace finished"
    );

    Ok(result)
}
