//! # Label Fonts
//!
//! A [`FontResolver`] hands the compositor a [`FontFace`] for a variant and
//! point size; the face rasterizes a string into an anti-aliased
//! [`TextMask`]. [`TtfFontResolver`] loads TrueType files named by
//! [`FontFiles`](crate::config::FontFiles).
//!
//! Faces belong to the composition that resolved them and are dropped with
//! it; nothing here caches across calls.

mod ttf;

pub use ttf::{TtfFace, TtfFontResolver};

use std::path::PathBuf;

use thiserror::Error;

use crate::spec::FontVariant;

/// Reasons a font face could not be produced.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("font not found at: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load font face from {}", .0.display())]
    InvalidFont(PathBuf),

    #[error("unusable point size {0}")]
    InvalidSize(f32),
}

/// Rasterized text as coverage values.
///
/// Column `origin` is the pen origin; row `ascent` (rounded) is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextMask {
    pub width: u32,
    pub height: u32,
    /// Columns of ink left of the pen origin, from a negative left bearing.
    pub origin: u32,
    /// Pen advance across the whole string, in pixels.
    pub advance: f32,
    /// Distance from the top row to the baseline.
    pub ascent: f32,
    /// Height used for vertical anchoring.
    pub line_height: f32,
    /// Row-major coverage, 0.0 = untouched, 1.0 = fully covered.
    pub coverage: Vec<f32>,
}

impl TextMask {
    pub fn coverage_at(&self, x: u32, y: u32) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.coverage[y as usize * self.width as usize + x as usize]
    }
}

/// A font at a fixed size.
pub trait FontFace {
    fn rasterize(&self, text: &str) -> TextMask;
}

/// Looks up font faces by variant and point size.
pub trait FontResolver {
    fn resolve(&self, variant: FontVariant, point_size: f32) -> Result<Box<dyn FontFace>, FontError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coverage_at() {
        let mask = TextMask {
            width: 2,
            height: 2,
            origin: 0,
            advance: 2.0,
            ascent: 2.0,
            line_height: 2.0,
            coverage: vec![0.0, 0.5, 1.0, 0.25],
        };
        assert_eq!(mask.coverage_at(1, 0), 0.5);
        assert_eq!(mask.coverage_at(0, 1), 1.0);
        assert_eq!(mask.coverage_at(2, 0), 0.0);
        assert_eq!(mask.coverage_at(0, 2), 0.0);
    }

    #[test]
    fn test_error_messages() {
        let err = FontError::NotFound(PathBuf::from("static/fonts/ARIAL.TTF"));
        assert_eq!(err.to_string(), "font not found at: static/fonts/ARIAL.TTF");
    }
}
