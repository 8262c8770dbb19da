//! Key-pattern extractors
//!
//! Primitive colors, alias colors and dimension scales are named by CSS
//! custom-property keys inside their sections. Each extractor resolves its
//! section (accepting the leading-space spelling some exports carry), walks
//! descendant keys against a fixed pattern and returns the distinct captures
//! sorted lexicographically.

use crate::tokengen::document::TokenDocument;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

/// Primitive color keys: `--ptp-ocean-blue-0` names `ocean-blue`
static PRIMITIVE_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--ptp-(.+)-0$").unwrap());

/// Alias color keys: `--pta-primary-fill-hover` names `primary-fill-hover`
static ALIAS_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--pta-(.+)$").unwrap());

/// Dimension keys: `--ptp-dimension-050` names `050`
static DIMENSION_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--ptp-dimension-(.+)$").unwrap());

/// How far a pattern extractor descends below its section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkDepth {
    /// Inspect keys of the section's direct object values only.
    OneLevel,
    /// Recurse into any object value whose key did not match.
    Deep,
}

/// Primitive color names from the "Primitive Colors" section.
///
/// Only the `-0` step of each scale names the color; sibling steps
/// (`--ptp-ocean-blue-100` etc.) contribute nothing.
pub fn primitive_colors(document: &TokenDocument) -> Vec<String> {
    collect_captures(
        document,
        &["Primitive Colors", " Primitive Colors"],
        &PRIMITIVE_KEY,
        WalkDepth::OneLevel,
    )
}

/// Alias color names found anywhere under the "Alias colors" section.
pub fn alias_colors(document: &TokenDocument) -> Vec<String> {
    collect_captures(
        document,
        &[" Alias colors", "Alias colors"],
        &ALIAS_KEY,
        WalkDepth::Deep,
    )
}

/// Dimension scale names found anywhere under the "Dimensions" section.
///
/// Captures stay verbatim strings: `050` is never number-normalized.
pub fn dimensions(document: &TokenDocument) -> Vec<String> {
    collect_captures(
        document,
        &[" Dimensions", "Dimensions"],
        &DIMENSION_KEY,
        WalkDepth::Deep,
    )
}

fn collect_captures(
    document: &TokenDocument,
    candidates: &[&str],
    pattern: &Regex,
    depth: WalkDepth,
) -> Vec<String> {
    let mut names = Vec::new();
    let section = match document.section(candidates).and_then(Value::as_object) {
        Some(section) => section,
        None => return names,
    };
    match depth {
        WalkDepth::OneLevel => {
            for value in section.values() {
                if let Some(object) = value.as_object() {
                    for key in object.keys() {
                        capture_into(&mut names, pattern, key);
                    }
                }
            }
        }
        WalkDepth::Deep => walk_deep(section, pattern, &mut names),
    }
    names.sort();
    names
}

/// Deep walk: a matching key is captured and its value is not explored
/// further; a non-matching key's object value is.
fn walk_deep(object: &Map<String, Value>, pattern: &Regex, names: &mut Vec<String>) {
    for (key, value) in object {
        if capture_into(names, pattern, key) {
            continue;
        }
        if let Some(child) = value.as_object() {
            walk_deep(child, pattern, names);
        }
    }
}

/// Capture the pattern's first group from the key, deduplicated.
/// Returns whether the key matched.
fn capture_into(names: &mut Vec<String>, pattern: &Regex, key: &str) -> bool {
    match pattern.captures(key) {
        Some(captures) => {
            let name = captures[1].to_string();
            if !names.contains(&name) {
                names.push(name);
            }
            true
        }
        None => false,
    }
}
