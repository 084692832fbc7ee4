//! # Symbol Bitmaps
//!
//! A [`SymbolProvider`] turns barcode content into a monochrome [`Bitmap`]
//! and fits that bitmap to a pixel size. The compositor only sees this
//! trait; [`Code128Provider`] is the implementation the binary uses.
//!
//! ## Bitmap format
//!
//! Rows are packed 1 bit per pixel, MSB first, each row padded to a whole
//! byte, the same layout as printer raster data:
//!
//! ```text
//! byte_idx = y * width_bytes + x / 8
//! bit_idx  = 7 - (x % 8)
//! ```

mod code128;

pub use code128::Code128Provider;

use thiserror::Error;

/// Errors reported by a [`SymbolProvider`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// Content contains characters the symbology cannot represent.
    #[error("{0}")]
    Unencodable(String),

    /// Bitmap is not a single-row linear symbol.
    #[error("expected a one-row linear symbol, got {0} rows")]
    NotLinear(u32),

    /// Requested size is zero or smaller than the symbol itself.
    #[error("cannot fit a {min_width}-module symbol into {width}x{height}")]
    Degenerate {
        width: u32,
        height: u32,
        min_width: u32,
    },
}

/// Monochrome bitmap, `true`/set bits are bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Bitmap {
    /// All-white bitmap.
    pub fn new(width: u32, height: u32) -> Self {
        let width_bytes = (width as usize).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; width_bytes * height as usize],
        }
    }

    /// Single-row bitmap from a module sequence.
    pub fn from_row(modules: &[bool]) -> Self {
        let mut bitmap = Self::new(modules.len() as u32, 1);
        for (x, &bar) in modules.iter().enumerate() {
            bitmap.set(x as u32, 0, bar);
        }
        bitmap
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn width_bytes(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Whether the pixel is a bar. Out-of-range pixels are white.
    pub fn get(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte_idx = y as usize * self.width_bytes() + x as usize / 8;
        let bit_idx = 7 - (x % 8);
        (self.data[byte_idx] >> bit_idx) & 1 == 1
    }

    pub fn set(&mut self, x: u32, y: u32, bar: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let byte_idx = y as usize * self.width_bytes() + x as usize / 8;
        let mask = 1u8 << (7 - (x % 8));
        if bar {
            self.data[byte_idx] |= mask;
        } else {
            self.data[byte_idx] &= !mask;
        }
    }

    /// Packed row-major bits.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Encodes content into symbols and sizes them.
pub trait SymbolProvider {
    /// Encode `content` at its natural size.
    fn encode(&self, content: &str) -> Result<Bitmap, SymbolError>;

    /// Fit `symbol` to exactly `width` x `height` pixels.
    fn scale(&self, symbol: &Bitmap, width: u32, height: u32) -> Result<Bitmap, SymbolError>;
}
