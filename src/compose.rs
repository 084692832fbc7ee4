//! # Barcode Composition
//!
//! Draws every barcode of a request onto one canvas, left to right.
//!
//! ## Per-barcode drawing
//!
//! ```text
//! offset
//!   |<- ts ->|<------- width ------->|<- ts ->|
//!   +----------------------------------------+ 0
//!   |              padding color             |
//!   |        +-----------------------+       | ts
//!   |        |     scaled symbol     |       |
//!   |        +-----------------------+       | ts + height
//!   |                 label                  | <- centered on ts + height + ts
//!   |                                        |
//!   +----------------------------------------+ total_height
//! ```
//!
//! Steps for barcode `i`, in order: parse both colors, encode and scale the
//! symbol, fill the padding block over the full canvas height, draw the
//! symbol, resolve the font, draw the label. The first failure ends the
//! composition and the canvas is dropped.

use image::{Rgba, RgbaImage};
use tracing::{debug, info, warn};

use crate::color::parse_hex_color;
use crate::error::{ColorField, CompositionError};
use crate::font::{FontResolver, TextMask};
use crate::layout::{Layout, compute_layout};
use crate::spec::{BarcodeSpec, CompositionRequest};
use crate::symbol::{Bitmap, SymbolError, SymbolProvider};

const BAR: Rgba<u8> = Rgba([0, 0, 0, 255]);
const SPACE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Finished composition, ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeImage {
    image: RgbaImage,
}

impl CompositeImage {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Composes barcodes using the given collaborators.
///
/// Holds no state of its own, so one compositor can serve any number of
/// requests; each call allocates its own canvas.
pub struct Compositor<'a> {
    symbols: &'a dyn SymbolProvider,
    fonts: &'a dyn FontResolver,
}

impl<'a> Compositor<'a> {
    pub fn new(symbols: &'a dyn SymbolProvider, fonts: &'a dyn FontResolver) -> Self {
        Self { symbols, fonts }
    }

    /// Lay out and draw `request` into a single image.
    pub fn compose(&self, request: &CompositionRequest) -> Result<CompositeImage, CompositionError> {
        let result = compute_layout(request.specs()).and_then(|layout| self.render(request, &layout));

        match &result {
            Ok(image) => info!(
                barcodes = request.len(),
                width = image.width(),
                height = image.height(),
                "composed barcodes"
            ),
            Err(e) => warn!(stage = ?e.stage(), index = ?e.index(), "composition aborted: {}", e),
        }
        result
    }

    /// Draw `request` onto a canvas sized by `layout`.
    ///
    /// `layout` must come from [`compute_layout`] over the same request.
    pub fn render(
        &self,
        request: &CompositionRequest,
        layout: &Layout,
    ) -> Result<CompositeImage, CompositionError> {
        let mut canvas = RgbaImage::new(layout.total_width, layout.total_height);

        for (index, (spec, &offset)) in request.specs().iter().zip(&layout.offsets).enumerate() {
            debug!(
                index,
                offset,
                occupied_width = spec.occupied_width(),
                content = %spec.content,
                "drawing barcode"
            );
            self.draw_barcode(&mut canvas, index, spec, offset)?;
        }

        Ok(CompositeImage { image: canvas })
    }

    fn draw_barcode(
        &self,
        canvas: &mut RgbaImage,
        index: usize,
        spec: &BarcodeSpec,
        offset: u32,
    ) -> Result<(), CompositionError> {
        let color = |field: ColorField, hex: &str| {
            parse_hex_color(hex).map_err(|_| CompositionError::InvalidColorFormat {
                index,
                field,
                value: hex.to_string(),
            })
        };
        let padding_color = color(ColorField::Padding, &spec.padding_color)?;
        let text_color = color(ColorField::Text, &spec.text_color)?;

        let symbol = self
            .symbols
            .encode(&spec.content)
            .map_err(|e| CompositionError::EncodingFailed {
                index,
                reason: e.to_string(),
            })?;
        let symbol = self
            .symbols
            .scale(&symbol, spec.width, spec.height)
            .map_err(|e| scaling_failed(index, spec, e))?;

        let ts = i64::from(spec.text_size);
        let left = i64::from(offset);
        let block_width = spec.occupied_width() as i64;
        fill_rect(
            canvas,
            left,
            0,
            block_width,
            i64::from(canvas.height()),
            padding_color,
        );
        draw_bitmap(canvas, &symbol, left + ts, ts);

        let face = self
            .fonts
            .resolve(spec.font_variant, spec.text_size as f32)
            .map_err(|source| CompositionError::FontUnavailable {
                index,
                variant: spec.font_variant,
                size: spec.text_size,
                source,
            })?;

        let mask = face.rasterize(&spec.content);
        let center_x = (left + ts + i64::from(spec.width / 2)) as f32;
        let center_y = (ts + i64::from(spec.height) + ts) as f32;
        draw_text_centered(canvas, &mask, center_x, center_y, text_color);

        Ok(())
    }
}

fn scaling_failed(index: usize, spec: &BarcodeSpec, e: SymbolError) -> CompositionError {
    CompositionError::ScalingFailed {
        index,
        width: spec.width,
        height: spec.height,
        reason: e.to_string(),
    }
}

/// Fill a rectangle, clipped to the canvas.
fn fill_rect(canvas: &mut RgbaImage, x: i64, y: i64, width: i64, height: i64, color: Rgba<u8>) {
    let x0 = x.clamp(0, i64::from(canvas.width())) as u32;
    let y0 = y.clamp(0, i64::from(canvas.height())) as u32;
    let x1 = (x + width).clamp(0, i64::from(canvas.width())) as u32;
    let y1 = (y + height).clamp(0, i64::from(canvas.height())) as u32;

    for py in y0..y1 {
        for px in x0..x1 {
            canvas.put_pixel(px, py, color);
        }
    }
}

/// Copy an opaque monochrome bitmap onto the canvas with its top-left at (x, y).
fn draw_bitmap(canvas: &mut RgbaImage, bitmap: &Bitmap, x: i64, y: i64) {
    for by in 0..bitmap.height() {
        let py = y + i64::from(by);
        if py < 0 || py >= i64::from(canvas.height()) {
            continue;
        }
        for bx in 0..bitmap.width() {
            let px = x + i64::from(bx);
            if px < 0 || px >= i64::from(canvas.width()) {
                continue;
            }
            let color = if bitmap.get(bx, by) { BAR } else { SPACE };
            canvas.put_pixel(px as u32, py as u32, color);
        }
    }
}

/// Blend `mask` in `color` so its advance box is centered on (cx, cy).
///
/// Horizontal: the pen starts half the advance left of `cx`. Vertical: the
/// baseline sits half a line height below `cy`.
fn draw_text_centered(canvas: &mut RgbaImage, mask: &TextMask, cx: f32, cy: f32, color: Rgba<u8>) {
    let left = (cx - mask.advance / 2.0).round() as i64 - i64::from(mask.origin);
    let baseline = cy + mask.line_height / 2.0;
    let top = (baseline - mask.ascent).round() as i64;

    for my in 0..mask.height {
        let py = top + i64::from(my);
        if py < 0 || py >= i64::from(canvas.height()) {
            continue;
        }
        for mx in 0..mask.width {
            let px = left + i64::from(mx);
            if px < 0 || px >= i64::from(canvas.width()) {
                continue;
            }
            let coverage = mask.coverage_at(mx, my);
            if coverage <= 0.0 {
                continue;
            }
            let dst = canvas.get_pixel_mut(px as u32, py as u32);
            *dst = blend(*dst, color, coverage);
        }
    }
}

/// Source-over of an opaque color at `alpha` onto an opaque pixel.
fn blend(dst: Rgba<u8>, src: Rgba<u8>, alpha: f32) -> Rgba<u8> {
    let a = alpha.clamp(0.0, 1.0);
    let mix = |s: u8, d: u8| (f32::from(s) * a + f32::from(d) * (1.0 - a)).round() as u8;
    Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        255,
    ])
}
