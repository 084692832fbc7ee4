//! # Configuration
//!
//! Settings the binary passes into the engine. Everything is explicit: the
//! compositor never reads files or environment on its own.
//!
//! ## Config file
//!
//! ```json
//! {
//!   "fonts": {
//!     "regular": "static/fonts/ARIAL.TTF",
//!     "bold": "static/fonts/ARIBLK.TTF"
//!   }
//! }
//! ```
//!
//! Missing keys fall back to the defaults shown above.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BarstripError;
use crate::spec::FontVariant;

/// Font files for each label variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontFiles {
    /// Regular labels (Arial)
    pub regular: PathBuf,
    /// Bold labels (Arial Black)
    pub bold: PathBuf,
}

impl Default for FontFiles {
    fn default() -> Self {
        Self {
            regular: PathBuf::from("static/fonts/ARIAL.TTF"),
            bold: PathBuf::from("static/fonts/ARIBLK.TTF"),
        }
    }
}

impl FontFiles {
    pub fn path_for(&self, variant: FontVariant) -> &Path {
        match variant {
            FontVariant::Regular => &self.regular,
            FontVariant::Bold => &self.bold,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fonts: FontFiles,
}

impl Config {
    /// Load a JSON config file.
    pub fn load(path: &Path) -> Result<Self, BarstripError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| BarstripError::Input {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace configured font paths with any that were given explicitly.
    pub fn with_overrides(mut self, regular: Option<PathBuf>, bold: Option<PathBuf>) -> Self {
        if let Some(path) = regular {
            self.fonts.regular = path;
        }
        if let Some(path) = bold {
            self.fonts.bold = path;
        }
        self
    }
}
