//! # Barstrip CLI
//!
//! Command-line interface for composing barcode strips.
//!
//! ## Usage
//!
//! ```bash
//! # Compose a request file into a PNG
//! barstrip compose request.json --out barcodes.png
//!
//! # Use other label fonts
//! barstrip compose request.json --out barcodes.png \
//!     --regular-font /usr/share/fonts/Arial.ttf --bold-font /usr/share/fonts/ArialBlack.ttf
//!
//! # Show the canvas geometry without drawing
//! barstrip layout request.json
//! ```
//!
//! Set `RUST_LOG=barstrip=debug` to log every barcode as it is drawn.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use barstrip::{
    BarstripError, CompositionRequest, Compositor,
    config::Config,
    encode::{PngRasterEncoder, RasterEncoder},
    font::TtfFontResolver,
    layout::compute_layout,
    symbol::Code128Provider,
};

/// Barstrip - labeled barcode strip composer
#[derive(Parser, Debug)]
#[command(name = "barstrip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose the barcodes of a request file into one PNG
    Compose {
        /// Request file: {"barcodes": [...]}
        request: PathBuf,

        /// Output PNG file
        #[arg(long, short, value_name = "FILE")]
        out: PathBuf,

        /// JSON config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Font for regular labels (overrides the config file)
        #[arg(long, value_name = "FILE")]
        regular_font: Option<PathBuf>,

        /// Font for bold labels (overrides the config file)
        #[arg(long, value_name = "FILE")]
        bold_font: Option<PathBuf>,
    },

    /// Print canvas size and barcode offsets for a request file
    Layout {
        /// Request file: {"barcodes": [...]}
        request: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("barstrip=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BarstripError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            request,
            out,
            config,
            regular_font,
            bold_font,
        } => {
            let config = match config {
                Some(path) => Config::load(&path)?,
                None => Config::default(),
            }
            .with_overrides(regular_font, bold_font);

            let request = load_request(&request)?;
            let symbols = Code128Provider::new();
            let fonts = TtfFontResolver::from_config(&config.fonts);

            let encoder = PngRasterEncoder;
            if !has_extension(&out, encoder.extension()) {
                tracing::warn!(
                    out = %out.display(),
                    "output file does not end in .{}; writing {} anyway",
                    encoder.extension(),
                    encoder.extension().to_uppercase()
                );
            }

            let image = Compositor::new(&symbols, &fonts).compose(&request)?;
            let bytes = encoder.encode(&image)?;
            std::fs::write(&out, bytes)?;

            println!(
                "Saved {}x{} image with {} barcode(s) to {}",
                image.width(),
                image.height(),
                request.len(),
                out.display()
            );
        }
        Commands::Layout { request } => {
            let request = load_request(&request)?;
            let layout = compute_layout(request.specs())?;

            println!("Canvas: {}x{}", layout.total_width, layout.total_height);
            for (i, (spec, offset)) in request.specs().iter().zip(&layout.offsets).enumerate() {
                println!(
                    "  [{}] x={:<6} {}x{}  {:?}",
                    i,
                    offset,
                    spec.occupied_width(),
                    spec.occupied_height(),
                    spec.content
                );
            }
        }
    }

    Ok(())
}

/// Read and parse a request file.
fn load_request(path: &Path) -> Result<CompositionRequest, BarstripError> {
    let json = std::fs::read_to_string(path)?;
    CompositionRequest::from_json(&json).map_err(|e| BarstripError::Input {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Whether `path` ends in `extension`, ignoring case.
fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_extension() {
        assert!(has_extension(Path::new("out/barcodes.png"), "png"));
        assert!(has_extension(Path::new("BARCODES.PNG"), "png"));
        assert!(!has_extension(Path::new("barcodes.jpg"), "png"));
        assert!(!has_extension(Path::new("barcodes"), "png"));
        assert!(!has_extension(Path::new("png"), "png"));
    }
}
