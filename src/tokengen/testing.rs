//! Test fixtures for token documents
//!
//! Shared sample documents used by unit and integration tests, plus a sink
//! that keeps emitted artifacts in memory.

use crate::tokengen::document::TokenDocument;
use crate::tokengen::emit::GeneratedArtifact;
use crate::tokengen::pipeline::ArtifactSink;

/// JSON source of [`sample_document`]: covers every extractor, including
/// the leading-space section spellings, a duplicated alias key, a nested
/// dimension and mode maps at several depths.
pub const SAMPLE_TOKENS: &str = r##"{
  "Primitive Colors": {
    "Colors": {
      "--ptp-ocean-blue-0": { "$type": "color", "$value": "#e6f2ff" },
      "--ptp-ocean-blue-100": { "$type": "color", "$value": "#cce5ff" },
      "--ptp-coral-0": { "$type": "color", "$value": "#fff1ee" }
    }
  },
  " Alias colors": {
    "Fill": {
      "--pta-primary-fill": {
        "$type": "color",
        "$value": "{Primitive Colors.Colors.--ptp-ocean-blue-0}",
        "$extensions": { "mode": { "Light": "#e6f2ff", "Dark": "#00254d" } }
      },
      "Nested": {
        "--pta-primary-fill-hover": { "$type": "color", "$value": "#cce5ff" }
      }
    },
    "--pta-primary-fill-hover": { "$type": "color", "$value": "#cce5ff" }
  },
  "Typography": {
    "Body": {
      "font": {
        "$type": "fontFamily",
        "$value": "Inter",
        "$extensions": { "mode": { "En": "Inter", "Fa": "Vazirmatn" } }
      }
    }
  },
  "Grayscales - Dark": {
    "Grayscales": {
      "gray-50": {
        "$type": "color",
        "$value": "#fafafa",
        "$extensions": { "mode": { "Arsenic": "#101418", "Cool": "#0f1720" } }
      }
    }
  },
  " Dimensions": {
    "--ptp-dimension-0": { "$type": "dimension", "$value": "0px" },
    "--ptp-dimension-050": { "$type": "dimension", "$value": "4px" },
    "Scale": {
      "--ptp-dimension-100": { "$type": "dimension", "$value": "8px" }
    }
  }
}"##;

/// A representative token document covering every extractor.
pub fn sample_document() -> TokenDocument {
    TokenDocument::parse(SAMPLE_TOKENS).expect("sample document is valid")
}

/// Sink collecting artifacts in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub artifacts: Vec<GeneratedArtifact>,
}

impl ArtifactSink for MemorySink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> std::io::Result<()> {
        self.artifacts.push(artifact);
        Ok(())
    }
}
