//! # Barstrip - Barcode Strip Composer
//!
//! Barstrip lays out any number of Code 128 barcodes side by side, each with
//! its own size, padding color and text label, and produces one RGBA image.
//!
//! - **Layout**: canvas size and per-barcode offsets
//! - **Composition**: padding, scaled symbol and centered label per barcode
//! - **Encoding**: lossless PNG output
//!
//! ## Quick Start
//!
//! ```no_run
//! use barstrip::{
//!     BarcodeSpec, CompositionRequest, Compositor,
//!     config::Config,
//!     encode::{PngRasterEncoder, RasterEncoder},
//!     font::TtfFontResolver,
//!     symbol::Code128Provider,
//! };
//!
//! let config = Config::default();
//! let symbols = Code128Provider::new();
//! let fonts = TtfFontResolver::from_config(&config.fonts);
//!
//! let request = CompositionRequest::new(vec![
//!     BarcodeSpec::new("ABC-123", 300, 100, 20),
//!     BarcodeSpec::new("XYZ", 200, 80, 16).padding_color("#FFEE00").bold(true),
//! ])?;
//!
//! let image = Compositor::new(&symbols, &fonts).compose(&request)?;
//! let png = PngRasterEncoder.encode(&image)?;
//! std::fs::write("barcodes.png", png)?;
//!
//! # Ok::<(), barstrip::error::BarstripError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`spec`] | Barcode specs and requests |
//! | [`layout`] | Canvas geometry |
//! | [`compose`] | Drawing onto the canvas |
//! | [`color`] | `#RRGGBB` parsing |
//! | [`symbol`] | Symbol encoding and scaling |
//! | [`font`] | Label fonts |
//! | [`encode`] | Output formats |
//! | [`config`] | Font file configuration |
//! | [`error`] | Error types |

pub mod color;
pub mod compose;
pub mod config;
pub mod encode;
pub mod error;
pub mod font;
pub mod layout;
pub mod spec;
pub mod symbol;

// Re-exports for convenience
pub use compose::{CompositeImage, Compositor};
pub use error::{BarstripError, CompositionError};
pub use spec::{BarcodeSpec, CompositionRequest, FontVariant};
