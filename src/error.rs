//! # Error Types
//!
//! [`CompositionError`] is the tagged result of a failed composition. Every
//! variant that concerns a single barcode names its index in the request so
//! callers can point at the offending entry. [`BarstripError`] wraps it for
//! the binary, alongside I/O and request-file errors.

use std::fmt;

use thiserror::Error;

use crate::encode::EncodeError;
use crate::font::FontError;
use crate::spec::FontVariant;

/// Which color field of a barcode failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorField {
    Padding,
    Text,
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorField::Padding => f.write_str("padding"),
            ColorField::Text => f.write_str("text"),
        }
    }
}

/// Pipeline stage at which a composition stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Request,
    Layout,
    Color,
    Encode,
    Scale,
    Font,
}

/// Errors that abort a composition. No partial image accompanies any of them.
#[derive(Debug, Error)]
pub enum CompositionError {
    /// The request held no barcodes.
    #[error("No barcode data provided")]
    EmptyRequest,

    /// The combined canvas does not fit a raster's dimensions.
    #[error("Canvas of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u64, height: u64 },

    /// A padding or text color is not `#RRGGBB`.
    #[error("Barcode {index}: invalid {field} color {value:?}")]
    InvalidColorFormat {
        index: usize,
        field: ColorField,
        value: String,
    },

    /// The symbology cannot represent the content.
    #[error("Barcode {index}: failed to generate barcode: {reason}")]
    EncodingFailed { index: usize, reason: String },

    /// The encoded symbol cannot be fitted to the requested size.
    #[error("Barcode {index}: failed to scale barcode to {width}x{height}: {reason}")]
    ScalingFailed {
        index: usize,
        width: u32,
        height: u32,
        reason: String,
    },

    /// No font face for the variant and size.
    #[error("Barcode {index}: no {variant} font at {size}pt: {source}")]
    FontUnavailable {
        index: usize,
        variant: FontVariant,
        size: u32,
        #[source]
        source: FontError,
    },
}

impl CompositionError {
    /// Index of the barcode that failed, if the failure belongs to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            CompositionError::EmptyRequest | CompositionError::CanvasTooLarge { .. } => None,
            CompositionError::InvalidColorFormat { index, .. }
            | CompositionError::EncodingFailed { index, .. }
            | CompositionError::ScalingFailed { index, .. }
            | CompositionError::FontUnavailable { index, .. } => Some(*index),
        }
    }

    pub fn stage(&self) -> Stage {
        match self {
            CompositionError::EmptyRequest => Stage::Request,
            CompositionError::CanvasTooLarge { .. } => Stage::Layout,
            CompositionError::InvalidColorFormat { .. } => Stage::Color,
            CompositionError::EncodingFailed { .. } => Stage::Encode,
            CompositionError::ScalingFailed { .. } => Stage::Scale,
            CompositionError::FontUnavailable { .. } => Stage::Font,
        }
    }
}

/// Application-level error for the `barstrip` binary.
#[derive(Debug, Error)]
pub enum BarstripError {
    #[error(transparent)]
    Composition(#[from] CompositionError),

    /// Font configuration could not be used
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// Final image could not be serialized
    #[error("Image error: {0}")]
    Encode(#[from] EncodeError),

    /// Request or config file is malformed
    #[error("Invalid input file {path}: {reason}")]
    Input { path: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
