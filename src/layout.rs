//! # Canvas Layout
//!
//! Barcodes are concatenated horizontally:
//!
//! ```text
//!  offset[0]            offset[1]
//!  |<- ts ->|<- w0 ->|<- ts ->|<- ts ->|<- w1 ->|<- ts ->|
//!  +--------------------------+--------------------------+  -
//!  |        ts margin         |        ts margin         |  |
//!  |        [symbol 0]        |        [symbol 1]        |  | total_height
//!  |        label band        |        label band        |  |
//!  |        slack             |                          |  -
//!  +--------------------------+--------------------------+
//! ```
//!
//! Widths add up, while the canvas height is the tallest entry's
//! `height + 3 * text_size`. Shorter entries are padded down to that height.
//! This asymmetry is the established output geometry and existing images
//! depend on it pixel for pixel; keep it.

use crate::error::CompositionError;
use crate::spec::BarcodeSpec;

/// Largest canvas, in pixels, a composition may allocate (1 GiB of RGBA).
pub const MAX_CANVAS_PIXELS: u64 = 1 << 28;

/// Canvas size and the left edge of every barcode's padding block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub total_width: u32,
    pub total_height: u32,
    pub offsets: Vec<u32>,
}

/// Compute the canvas geometry for `specs`, in draw order.
///
/// A single spec goes through the same formula as many.
pub fn compute_layout(specs: &[BarcodeSpec]) -> Result<Layout, CompositionError> {
    if specs.is_empty() {
        return Err(CompositionError::EmptyRequest);
    }

    let mut offsets = Vec::with_capacity(specs.len());
    let mut total_width: u64 = 0;
    let mut total_height: u64 = 0;

    for spec in specs {
        offsets.push(total_width);
        total_width += spec.occupied_width();
        total_height = total_height.max(spec.occupied_height());
    }

    let too_large = || CompositionError::CanvasTooLarge {
        width: total_width,
        height: total_height,
    };

    // Reject before allocation: a canvas the allocator refuses aborts the process
    let pixels = total_width.checked_mul(total_height).ok_or_else(too_large)?;
    let bytes = pixels.checked_mul(4).ok_or_else(too_large)?;
    if pixels > MAX_CANVAS_PIXELS || usize::try_from(bytes).is_err() {
        return Err(too_large());
    }

    Ok(Layout {
        total_width: u32::try_from(total_width).map_err(|_| too_large())?,
        total_height: u32::try_from(total_height).map_err(|_| too_large())?,
        // every offset is below total_width, which fit
        offsets: offsets.into_iter().map(|o| o as u32).collect(),
    })
}
