//! Pipeline controller
//!
//! Sequences one generation run: load the token document, run every
//! extractor, write the constants file, hand the type-declaration artifacts
//! to the host build system's sink and log a per-category summary. There are
//! no retries; any failure propagates and aborts the build.

use crate::tokengen::document::{DocumentError, TokenDocument};
use crate::tokengen::emit::constants::render_constants;
use crate::tokengen::emit::types::{render_index_reexport, render_type_declarations};
use crate::tokengen::emit::GeneratedArtifact;
use crate::tokengen::extract::ExtractedNames;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors during generation
#[derive(Debug)]
pub enum GenerateError {
    Config { path: PathBuf, detail: String },
    Document(DocumentError),
    WriteConstants { path: PathBuf, source: std::io::Error },
    EmitArtifact { file_name: String, source: std::io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::Config { path, detail } => {
                write!(f, "Config '{}' could not be loaded: {}", path.display(), detail)
            }
            GenerateError::Document(err) => write!(f, "{}", err),
            GenerateError::WriteConstants { path, source } => {
                write!(f, "Writing constants file '{}' failed: {}", path.display(), source)
            }
            GenerateError::EmitArtifact { file_name, source } => {
                write!(f, "Emitting artifact '{}' failed: {}", file_name, source)
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// How the type-declaration output is packaged.
///
/// Both layouts are valid integrations; which one applies is a
/// configuration choice of the consuming build, defaulting to the single
/// combined file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactLayout {
    /// A single combined `index.d.ts`.
    #[default]
    Combined,
    /// A `types.d.ts` plus a minimal `index.d.ts` re-exporting from it.
    TypesWithIndex,
}

/// Configuration for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Path of the design-token JSON document.
    pub tokens_path: PathBuf,
    /// Destination of the generated constants file (overwritten each run).
    pub constants_path: PathBuf,
    /// Packaging of the type-declaration artifacts.
    #[serde(default)]
    pub layout: ArtifactLayout,
}

impl GeneratorConfig {
    /// Load a configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, GenerateError> {
        let source = fs::read_to_string(path).map_err(|err| GenerateError::Config {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })?;
        serde_json::from_str(&source).map_err(|err| GenerateError::Config {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    }
}

/// Destination for type-declaration artifacts.
///
/// The constants file has a fixed source-tree destination and is written by
/// the pipeline itself; declaration artifacts instead go wherever the host
/// build system puts its outputs, behind this seam.
pub trait ArtifactSink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> std::io::Result<()>;
}

/// Sink writing artifacts into a directory, creating it if needed.
#[derive(Debug)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ArtifactSink for DirectorySink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.dir.join(&artifact.file_name), artifact.source)
    }
}

/// Runs the generation pipeline
pub struct Pipeline {
    config: GeneratorConfig,
}

impl Pipeline {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Execute one generation run.
    ///
    /// Returns the extracted name lists so callers can inspect what the
    /// emitted files enumerate.
    pub fn run(&self, sink: &mut dyn ArtifactSink) -> Result<ExtractedNames, GenerateError> {
        let document =
            TokenDocument::from_path(&self.config.tokens_path).map_err(GenerateError::Document)?;
        let names = ExtractedNames::extract(&document);

        let constants = render_constants(&names);
        fs::write(&self.config.constants_path, constants).map_err(|source| {
            GenerateError::WriteConstants {
                path: self.config.constants_path.clone(),
                source,
            }
        })?;

        for artifact in type_artifacts(&document, &names, self.config.layout) {
            let file_name = artifact.file_name.clone();
            sink.emit(artifact)
                .map_err(|source| GenerateError::EmitArtifact { file_name, source })?;
        }

        log_summary(&names);
        Ok(names)
    }
}

/// The type-declaration artifacts for the configured layout.
pub fn type_artifacts(
    document: &TokenDocument,
    names: &ExtractedNames,
    layout: ArtifactLayout,
) -> Vec<GeneratedArtifact> {
    let declarations = render_type_declarations(document, names);
    match layout {
        ArtifactLayout::Combined => vec![GeneratedArtifact {
            file_name: "index.d.ts".into(),
            source: declarations,
        }],
        ArtifactLayout::TypesWithIndex => vec![
            GeneratedArtifact {
                file_name: "types.d.ts".into(),
                source: declarations,
            },
            GeneratedArtifact {
                file_name: "index.d.ts".into(),
                source: render_index_reexport(),
            },
        ],
    }
}

/// One confirmation line, then one `Label: [values]` line per category on
/// the build console.
fn log_summary(names: &ExtractedNames) {
    println!("Generated types from designTokens.json");
    println!("   Themes: [{}]", names.themes.join(", "));
    println!("   Langs: [{}]", names.langs.join(", "));
    println!("   GrayScales: [{}]", names.gray_scales.join(", "));
    println!("   PrimitiveColors: [{}]", names.primitive_colors.join(", "));
    println!("   AliasColors: [{}]", names.alias_colors.join(", "));
    println!("   Dimensions: [{}]", names.dimensions.join(", "));
}
