//! Barcode specifications and composition requests.
//!
//! A [`BarcodeSpec`] describes one symbol: its payload, pixel size, colors
//! and label size. A [`CompositionRequest`] is an ordered, non-empty list of
//! them, drawn left to right.

use std::fmt;

use serde::Deserialize;

use crate::error::CompositionError;

/// Typeface weight for a barcode label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontVariant {
    #[default]
    Regular,
    Bold,
}

impl FontVariant {
    pub fn from_bold(bold: bool) -> Self {
        if bold {
            FontVariant::Bold
        } else {
            FontVariant::Regular
        }
    }
}

impl fmt::Display for FontVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontVariant::Regular => f.write_str("regular"),
            FontVariant::Bold => f.write_str("bold"),
        }
    }
}

fn default_white() -> String {
    "#FFFFFF".to_string()
}

fn default_black() -> String {
    "#000000".to_string()
}

/// One barcode in a composition.
///
/// Colors are kept as the `#RRGGBB` strings they were given in; the
/// compositor parses them when it reaches this spec, so a malformed color
/// fails with this spec's index.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BarcodeInput")]
pub struct BarcodeSpec {
    pub content: String,
    /// Symbol width in pixels, before padding.
    pub width: u32,
    /// Symbol height in pixels, before padding.
    pub height: u32,
    pub padding_color: String,
    pub text_color: String,
    pub font_variant: FontVariant,
    /// Label size in points. Also the unit of every margin around the symbol.
    pub text_size: u32,
}

impl BarcodeSpec {
    /// Create a spec with white padding, black regular text.
    pub fn new(content: impl Into<String>, width: u32, height: u32, text_size: u32) -> Self {
        Self {
            content: content.into(),
            width,
            height,
            padding_color: default_white(),
            text_color: default_black(),
            font_variant: FontVariant::Regular,
            text_size,
        }
    }

    pub fn padding_color(mut self, hex: impl Into<String>) -> Self {
        self.padding_color = hex.into();
        self
    }

    pub fn text_color(mut self, hex: impl Into<String>) -> Self {
        self.text_color = hex.into();
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.font_variant = FontVariant::from_bold(bold);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.font_variant == FontVariant::Bold
    }

    /// Width this barcode reserves on the canvas: symbol plus a text-size
    /// margin on each side.
    pub fn occupied_width(&self) -> u64 {
        u64::from(self.width) + 2 * u64::from(self.text_size)
    }

    /// Height this barcode needs: top margin, symbol, label band and slack.
    pub fn occupied_height(&self) -> u64 {
        u64::from(self.height) + 3 * u64::from(self.text_size)
    }
}

/// Wire form of a barcode, as found in request files.
#[derive(Debug, Deserialize)]
struct BarcodeInput {
    #[serde(alias = "content")]
    data: String,
    width: u32,
    height: u32,
    #[serde(default = "default_white")]
    padding_color: String,
    #[serde(default = "default_black")]
    text_color: String,
    text_size: u32,
    #[serde(default)]
    bold: bool,
}

impl From<BarcodeInput> for BarcodeSpec {
    fn from(input: BarcodeInput) -> Self {
        Self {
            content: input.data,
            width: input.width,
            height: input.height,
            padding_color: input.padding_color,
            text_color: input.text_color,
            font_variant: FontVariant::from_bold(input.bold),
            text_size: input.text_size,
        }
    }
}

/// Ordered, non-empty list of barcodes to compose left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositionRequest {
    specs: Vec<BarcodeSpec>,
}

impl CompositionRequest {
    /// Build a request, rejecting an empty list.
    pub fn new(specs: Vec<BarcodeSpec>) -> Result<Self, CompositionError> {
        if specs.is_empty() {
            return Err(CompositionError::EmptyRequest);
        }
        Ok(Self { specs })
    }

    pub fn specs(&self) -> &[BarcodeSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Always false for a constructed request.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Parse a request file: `{"barcodes": [ ... ]}`.
    pub fn from_json(json: &str) -> Result<Self, RequestParseError> {
        let file: RequestFile = serde_json::from_str(json).map_err(RequestParseError::Json)?;
        Self::new(file.barcodes).map_err(RequestParseError::Composition)
    }
}

#[derive(Debug, Deserialize)]
struct RequestFile {
    barcodes: Vec<BarcodeSpec>,
}

/// Failure to turn a request file into a [`CompositionRequest`].
#[derive(Debug, thiserror::Error)]
pub enum RequestParseError {
    #[error("{0}")]
    Json(serde_json::Error),

    #[error(transparent)]
    Composition(CompositionError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_occupied_footprint() {
        let spec = BarcodeSpec::new("ABC", 100, 50, 10);
        assert_eq!(spec.occupied_width(), 120);
        assert_eq!(spec.occupied_height(), 80);
    }

    #[test]
    fn test_builder() {
        let spec = BarcodeSpec::new("X", 10, 10, 4)
            .padding_color("#112233")
            .text_color("#445566")
            .bold(true);
        assert_eq!(spec.padding_color, "#112233");
        assert_eq!(spec.text_color, "#445566");
        assert_eq!(spec.font_variant, FontVariant::Bold);
        assert!(spec.is_bold());
    }

    #[test]
    fn test_empty_request_rejected() {
        let err = CompositionRequest::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CompositionError::EmptyRequest));
    }

    #[test]
    fn test_parse_request_file() {
        let json = r##"{
            "barcodes": [
                {"data": "ABC", "width": 100, "height": 50, "text_size": 10,
                 "padding_color": "#FF0000", "text_color": "#00FF00", "bold": true},
                {"content": "XYZ", "width": 80, "height": 60, "text_size": 12}
            ]
        }"##;
        let request = CompositionRequest::from_json(json).unwrap();
        assert_eq!(request.len(), 2);
        assert_eq!(
            request.specs()[0],
            BarcodeSpec::new("ABC", 100, 50, 10)
                .padding_color("#FF0000")
                .text_color("#00FF00")
                .bold(true)
        );
        assert_eq!(request.specs()[1], BarcodeSpec::new("XYZ", 80, 60, 12));
    }

    #[test]
    fn test_parse_empty_request_file() {
        let err = CompositionRequest::from_json(r#"{"barcodes": []}"#).unwrap_err();
        assert!(matches!(
            err,
            RequestParseError::Composition(CompositionError::EmptyRequest)
        ));
    }

    #[test]
    fn test_parse_rejects_negative_size() {
        let json = r#"{"barcodes": [{"data": "A", "width": -5, "height": 10, "text_size": 2}]}"#;
        assert!(matches!(
            CompositionRequest::from_json(json),
            Err(RequestParseError::Json(_))
        ));
    }
}
