//! Pipeline integration
//!
//! Runs the full pipeline against on-disk documents: file outputs, layout
//! selection, idempotence and fatal failures.

use std::fs;
use std::path::Path;
use tokengen::tokengen::pipeline::{
    ArtifactLayout, DirectorySink, GenerateError, GeneratorConfig, Pipeline,
};
use tokengen::tokengen::testing::{MemorySink, SAMPLE_TOKENS};

/// Write the sample document into `dir` and build a config around it.
fn sample_config(dir: &Path) -> GeneratorConfig {
    let tokens_path = dir.join("designTokens.json");
    fs::write(&tokens_path, SAMPLE_TOKENS).unwrap();
    GeneratorConfig {
        tokens_path,
        constants_path: dir.join("constant.js"),
        layout: ArtifactLayout::Combined,
    }
}

#[test]
fn run_writes_constants_and_emits_declarations() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_config(dir.path());
    let mut sink = MemorySink::default();

    let names = Pipeline::new(config).run(&mut sink).unwrap();

    assert_eq!(names.themes, ["light", "dark"]);
    let constants = fs::read_to_string(dir.path().join("constant.js")).unwrap();
    assert!(constants.contains("Object.freeze"));
    assert_eq!(sink.artifacts.len(), 1);
    assert_eq!(sink.artifacts[0].file_name, "index.d.ts");
    assert!(sink.artifacts[0].source.contains("export declare type Themes"));
}

#[test]
fn split_layout_emits_types_and_index() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = sample_config(dir.path());
    config.layout = ArtifactLayout::TypesWithIndex;
    let mut sink = MemorySink::default();

    Pipeline::new(config).run(&mut sink).unwrap();

    let file_names: Vec<&str> = sink
        .artifacts
        .iter()
        .map(|artifact| artifact.file_name.as_str())
        .collect();
    assert_eq!(file_names, ["types.d.ts", "index.d.ts"]);
    assert!(sink.artifacts[0].source.contains("export declare type Themes"));
    assert!(sink.artifacts[1].source.contains("export * from './types';"));
}

#[test]
fn directory_sink_creates_the_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_config(dir.path());
    let out_dir = dir.path().join("dist");
    let mut sink = DirectorySink::new(&out_dir);

    Pipeline::new(config).run(&mut sink).unwrap();

    assert!(out_dir.join("index.d.ts").exists());
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let config = sample_config(dir.path());
    let out_dir = dir.path().join("dist");
    let pipeline = Pipeline::new(config);

    pipeline.run(&mut DirectorySink::new(&out_dir)).unwrap();
    let constants_first = fs::read(dir.path().join("constant.js")).unwrap();
    let types_first = fs::read(out_dir.join("index.d.ts")).unwrap();

    pipeline.run(&mut DirectorySink::new(&out_dir)).unwrap();
    assert_eq!(fs::read(dir.path().join("constant.js")).unwrap(), constants_first);
    assert_eq!(fs::read(out_dir.join("index.d.ts")).unwrap(), types_first);
}

#[test]
fn missing_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = GeneratorConfig {
        tokens_path: dir.path().join("absent.json"),
        constants_path: dir.path().join("constant.js"),
        layout: ArtifactLayout::Combined,
    };

    let result = Pipeline::new(config).run(&mut MemorySink::default());
    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn malformed_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_path = dir.path().join("designTokens.json");
    fs::write(&tokens_path, "not json at all").unwrap();
    let config = GeneratorConfig {
        tokens_path,
        constants_path: dir.path().join("constant.js"),
        layout: ArtifactLayout::Combined,
    };

    let result = Pipeline::new(config).run(&mut MemorySink::default());
    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn non_object_document_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let tokens_path = dir.path().join("designTokens.json");
    fs::write(&tokens_path, "[1, 2, 3]").unwrap();
    let config = GeneratorConfig {
        tokens_path,
        constants_path: dir.path().join("constant.js"),
        layout: ArtifactLayout::Combined,
    };

    let result = Pipeline::new(config).run(&mut MemorySink::default());
    assert!(matches!(result, Err(GenerateError::Document(_))));
}

#[test]
fn unwritable_constants_path_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = sample_config(dir.path());
    config.constants_path = dir.path().join("missing-dir").join("constant.js");

    let result = Pipeline::new(config).run(&mut MemorySink::default());
    assert!(matches!(result, Err(GenerateError::WriteConstants { .. })));
}

#[test]
fn config_loads_from_json() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tokengen.json");
    fs::write(
        &config_path,
        r#"{
            "tokens_path": "src/designTokens.json",
            "constants_path": "src/constant.js",
            "layout": "types-with-index"
        }"#,
    )
    .unwrap();

    let config = GeneratorConfig::from_path(&config_path).unwrap();
    assert_eq!(config.tokens_path, Path::new("src/designTokens.json"));
    assert_eq!(config.layout, ArtifactLayout::TypesWithIndex);
}

#[test]
fn config_layout_defaults_to_combined() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tokengen.json");
    fs::write(
        &config_path,
        r#"{"tokens_path": "a.json", "constants_path": "b.js"}"#,
    )
    .unwrap();

    let config = GeneratorConfig::from_path(&config_path).unwrap();
    assert_eq!(config.layout, ArtifactLayout::Combined);
}
