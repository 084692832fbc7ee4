//! Code 128 symbols via the barcoders crate.

use barcoders::sym::code128::Code128;

use super::{Bitmap, SymbolError, SymbolProvider};

/// Code 128 provider using character set B.
///
/// Set B covers printable ASCII, which is what labels are made of. The
/// encoded symbol is one pixel per module and one row tall; [`scale`]
/// stretches it to the requested size.
///
/// [`scale`]: SymbolProvider::scale
#[derive(Debug, Clone, Copy, Default)]
pub struct Code128Provider;

impl Code128Provider {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolProvider for Code128Provider {
    fn encode(&self, content: &str) -> Result<Bitmap, SymbolError> {
        if content.is_empty() {
            return Err(SymbolError::Unencodable("content is empty".to_string()));
        }

        // Code128 requires a character set prefix:
        // - Character Set A (À): uppercase, control chars, digits
        // - Character Set B (Ɓ): uppercase, lowercase, digits, special chars
        // - Character Set C (Ć): digit pairs only (high density)
        let prefixed = format!("\u{0181}{}", content);
        let barcode = Code128::new(&prefixed)
            .map_err(|e| SymbolError::Unencodable(format!("{:?} is not Code 128: {:?}", content, e)))?;

        let modules: Vec<bool> = barcode.encode().iter().map(|&m| m == 1).collect();
        Ok(Bitmap::from_row(&modules))
    }

    /// Widen every module by the same integer factor, centered, and repeat
    /// the row down the full height.
    fn scale(&self, symbol: &Bitmap, width: u32, height: u32) -> Result<Bitmap, SymbolError> {
        if symbol.height() != 1 {
            return Err(SymbolError::NotLinear(symbol.height()));
        }

        let modules = symbol.width();
        if width == 0 || height == 0 || modules == 0 || width < modules {
            return Err(SymbolError::Degenerate {
                width,
                height,
                min_width: modules,
            });
        }

        let factor = width / modules;
        let left = (width - modules * factor) / 2;

        let mut row = vec![false; width as usize];
        for x in 0..modules {
            if symbol.get(x, 0) {
                let start = (left + x * factor) as usize;
                row[start..start + factor as usize].fill(true);
            }
        }

        let mut scaled = Bitmap::new(width, height);
        for y in 0..height {
            for (x, &bar) in row.iter().enumerate() {
                if bar {
                    scaled.set(x as u32, y, true);
                }
            }
        }
        Ok(scaled)
    }
}
