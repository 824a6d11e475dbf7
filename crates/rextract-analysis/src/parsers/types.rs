//! Language identification.

use serde::{Deserialize, Serialize};

/// Source language families the engine can analyze.
///
/// One engine handles one family; sibling engines for other languages feed
/// the same report pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Python,
}

impl Language {
    /// Detect a language from a file extension.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "py" | "pyi" => Some(Self::Python),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Python => "python",
        }
    }
}
