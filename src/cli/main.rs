use anyhow::{Context, Result};
use clap::Parser;
use horoscan::logger::init_logger_exe;
use horoscan::scan::{scan_image, ScanConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Scan an image for phone numbers and their digit sums", long_about = None)]
struct Cli {
    #[arg(long, help = "Path to the image to scan")]
    image: PathBuf,
    #[arg(
        long,
        help = "Maximum width/height after preprocessing, in pixels",
        default_value_t = 800
    )]
    max_dimension: u32,
    #[arg(long, help = "Tesseract language set", default_value = "eng+tha")]
    lang: String,
    #[arg(long, help = "Tesseract page segmentation mode", default_value_t = 7)]
    psm: u32,
    #[arg(long, help = "Recognition timeout in seconds", default_value_t = 30)]
    timeout: u64,
    #[arg(long, help = "Print the diagnostic scan log", default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logger_exe();

    let cli = Cli::parse();

    let bytes = std::fs::read(&cli.image)
        .with_context(|| format!("Failed to read image {}", cli.image.display()))?;

    let mut config = ScanConfig::default();
    config.preprocess.max_dimension = cli.max_dimension;
    config.ocr.lang = cli.lang;
    config.ocr.psm = Some(cli.psm);
    config.timeout_secs = cli.timeout;

    let outcome = scan_image(&bytes, &config).await?;

    if cli.verbose {
        for entry in &outcome.log {
            println!("{}", entry);
        }
    }

    if outcome.candidates.is_empty() {
        println!("No phone numbers found.");
    } else {
        for candidate in &outcome.candidates {
            println!("{} - {}", candidate.text, candidate.digit_sum);
        }
    }

    Ok(())
}
