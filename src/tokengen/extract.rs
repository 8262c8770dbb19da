//! Name extraction from the token tree
//!
//! Six extractors, two traversal families:
//! - key-pattern extractors (primitive colors, alias colors, dimensions)
//!   match descendant keys against fixed patterns and return sorted captures;
//! - mode-based extractors (themes, langs, grayscales) collect the keys of
//!   `$extensions.mode` maps in document order, lower-cased.
//!
//! Every extractor returns a deduplicated list and treats a missing section
//! as "zero results", never as an error.

pub mod modes;
pub mod patterns;

pub use modes::{gray_scales, langs, themes};
pub use patterns::{alias_colors, dimensions, primitive_colors};

use crate::tokengen::document::TokenDocument;

/// All six extracted name lists for one build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedNames {
    pub themes: Vec<String>,
    pub langs: Vec<String>,
    pub gray_scales: Vec<String>,
    pub primitive_colors: Vec<String>,
    pub alias_colors: Vec<String>,
    pub dimensions: Vec<String>,
}

impl ExtractedNames {
    /// Run every extractor against the document.
    pub fn extract(document: &TokenDocument) -> Self {
        ExtractedNames {
            themes: themes(document),
            langs: langs(document),
            gray_scales: gray_scales(document),
            primitive_colors: primitive_colors(document),
            alias_colors: alias_colors(document),
            dimensions: dimensions(document),
        }
    }
}
