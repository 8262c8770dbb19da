//! Generated-source emission
//!
//! Two emitters turn the extracted name lists into source text: a
//! frozen-constants file (JavaScript) and a type-declaration file
//! (TypeScript). Both carry an auto-generation disclaimer; neither is ever
//! edited by hand.

pub mod constants;
pub mod types;

/// A generated source file, addressed by file name.
///
/// The constants file is written directly by the pipeline; type-declaration
/// artifacts are handed to the host build system's output mechanism.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub file_name: String,
    pub source: String,
}
