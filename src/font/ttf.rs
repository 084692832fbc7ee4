//! TrueType label rendering with ab_glyph.
//!
//! Point sizes are taken at 72 DPI, so one point is one pixel per em.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont, point};
use std::io::ErrorKind;

use super::{FontError, FontFace, FontResolver, TextMask};
use crate::config::FontFiles;
use crate::spec::FontVariant;

/// Resolves faces from the configured font files.
///
/// The file is read on every call; each composition owns the faces it got.
#[derive(Debug, Clone)]
pub struct TtfFontResolver {
    files: FontFiles,
}

impl TtfFontResolver {
    pub fn from_config(files: &FontFiles) -> Self {
        Self {
            files: files.clone(),
        }
    }

    /// Load the font for `variant` without sizing it.
    pub fn load(&self, variant: FontVariant) -> Result<FontArc, FontError> {
        let path = self.files.path_for(variant);
        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FontError::NotFound(path.to_path_buf()),
            _ => FontError::Read {
                path: path.to_path_buf(),
                source: e,
            },
        })?;
        FontArc::try_from_vec(bytes).map_err(|_| FontError::InvalidFont(path.to_path_buf()))
    }
}

impl FontResolver for TtfFontResolver {
    fn resolve(&self, variant: FontVariant, point_size: f32) -> Result<Box<dyn FontFace>, FontError> {
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(FontError::InvalidSize(point_size));
        }
        let font = self.load(variant)?;
        tracing::debug!(%variant, point_size, "resolved font face");
        Ok(Box::new(TtfFace::new(font, point_size)))
    }
}

/// A TrueType font at a fixed point size.
pub struct TtfFace {
    font: FontArc,
    scale: PxScale,
}

impl TtfFace {
    pub fn new(font: FontArc, point_size: f32) -> Self {
        // ab_glyph scales by ascent-to-descent height, not by em
        let scale = match font.units_per_em() {
            Some(units_per_em) => PxScale::from(point_size * font.height_unscaled() / units_per_em),
            None => PxScale::from(point_size),
        };
        Self { font, scale }
    }
}

impl FontFace for TtfFace {
    fn rasterize(&self, text: &str) -> TextMask {
        let scaled = self.font.as_scaled(self.scale);

        // Layout: compute glyph positions
        let mut glyphs = Vec::new();
        let mut caret_x = 0.0f32;
        let mut previous = None;

        for ch in text.chars() {
            let glyph_id = self.font.glyph_id(ch);
            if let Some(prev) = previous {
                caret_x += scaled.kern(prev, glyph_id);
            }
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
            previous = Some(glyph_id);
        }

        let ascent = scaled.ascent();
        let descent = scaled.descent();
        let line_height = scaled.height();

        let outlined: Vec<_> = glyphs
            .iter()
            .filter_map(|&(glyph_id, glyph_x)| {
                self.font
                    .outline_glyph(glyph_id.with_scale_and_position(self.scale, point(glyph_x, ascent)))
            })
            .collect();

        // Grow the box to any ink outside the advance and ascent-descent band
        let (mut left, mut right) = (0.0f32, caret_x);
        let (mut top, mut bottom) = (0.0f32, ascent - descent);
        for glyph in &outlined {
            let bounds = glyph.px_bounds();
            left = left.min(bounds.min.x);
            right = right.max(bounds.max.x);
            top = top.min(bounds.min.y);
            bottom = bottom.max(bounds.max.y);
        }
        let (left, top) = (left.floor(), top.floor());
        let width = ((right - left).ceil() as u32).max(1);
        let height = ((bottom - top).ceil() as u32).max(1);

        let mut coverage = vec![0.0f32; width as usize * height as usize];
        for glyph in &outlined {
            let bounds = glyph.px_bounds();
            glyph.draw(|px, py, c| {
                let x = px as i32 + (bounds.min.x - left) as i32;
                let y = py as i32 + (bounds.min.y - top) as i32;

                if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                    let idx = y as usize * width as usize + x as usize;
                    coverage[idx] = (coverage[idx] + c).min(1.0);
                }
            });
        }

        TextMask {
            width,
            height,
            origin: -left as u32,
            advance: caret_x,
            ascent: ascent - top,
            line_height,
            coverage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn resolver_for(path: PathBuf) -> TtfFontResolver {
        TtfFontResolver::from_config(&FontFiles {
            regular: path.clone(),
            bold: path,
        })
    }

    #[test]
    fn test_missing_font_file() {
        let resolver = resolver_for(PathBuf::from("/nonexistent/fonts/ARIAL.TTF"));
        let err = resolver.resolve(FontVariant::Regular, 12.0).err().unwrap();
        assert!(matches!(err, FontError::NotFound(_)));
    }

    #[test]
    fn test_not_a_font() {
        // Any non-font file will do; the manifest is always present
        let resolver = resolver_for(PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")));
        let err = resolver.resolve(FontVariant::Bold, 12.0).err().unwrap();
        assert!(matches!(err, FontError::InvalidFont(_)));
    }

    #[test]
    fn test_invalid_size() {
        let resolver = TtfFontResolver::from_config(&FontFiles::default());
        for size in [0.0, -3.0, f32::NAN] {
            let err = resolver.resolve(FontVariant::Regular, size).err().unwrap();
            assert!(matches!(err, FontError::InvalidSize(_)));
        }
    }

    fn system_font() -> Option<FontArc> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
            "/usr/share/fonts/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/Library/Fonts/Arial.ttf",
        ]
        .iter()
        .find_map(|path| resolver_for(PathBuf::from(path)).load(FontVariant::Regular).ok())
    }

    #[test]
    fn test_rasterize_system_font() {
        let Some(font) = system_font() else {
            eprintln!("no system TrueType font found, skipping");
            return;
        };

        let face = TtfFace::new(font.clone(), 40.0);
        let mask = face.rasterize("Jy7");
        assert_eq!(mask.coverage.len(), (mask.width * mask.height) as usize);
        assert!(mask.coverage.iter().any(|&c| c > 0.0));
        assert!(mask.advance > 0.0);
        assert!(mask.ascent > 0.0 && mask.ascent <= mask.height as f32);

        // 72 DPI: one point is one pixel per em
        let units_per_em = font.units_per_em().unwrap();
        let expected = 40.0 * font.height_unscaled() / units_per_em;
        assert!((mask.line_height - expected).abs() < 0.01);

        let larger = TtfFace::new(font, 80.0).rasterize("Jy7");
        assert!(larger.height > mask.height);
        assert!(larger.advance > mask.advance);
    }

    #[test]
    fn test_rasterize_keeps_ink_left_of_pen() {
        let Some(font) = system_font() else {
            eprintln!("no system TrueType font found, skipping");
            return;
        };

        let face = TtfFace::new(font, 60.0);
        let ink = |mask: &TextMask| mask.coverage.iter().sum::<f32>();
        // "j" hangs left of the pen in most sans faces; a leading space moves it clear
        for text in ["j", "J", "y"] {
            let alone = face.rasterize(text);
            let shifted = face.rasterize(&format!(" {text}"));
            assert_eq!(shifted.origin, 0);
            let (a, b) = (ink(&alone), ink(&shifted));
            assert!((a - b).abs() <= b * 0.03, "{text:?} lost ink: {a} vs {b}");
        }
    }

    #[test]
    fn test_reading_a_directory_is_not_a_font() {
        let resolver = resolver_for(PathBuf::from(env!("CARGO_MANIFEST_DIR")));
        let err = resolver.resolve(FontVariant::Regular, 12.0).err().unwrap();
        assert!(matches!(err, FontError::Read { .. }));
    }
}
