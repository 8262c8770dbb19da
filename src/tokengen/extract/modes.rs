//! Mode-based extractors
//!
//! Themes, languages and grayscale names are enumerated as the keys of a
//! node's `$extensions.mode` map. Each extractor searches its anchor subtree
//! for mode maps and collects the keys, lower-cased, in document order
//! (insertion order, never sorted).

use crate::tokengen::document::{mode_map, TokenDocument};
use serde_json::{Map, Value};

/// Theme names: mode keys found anywhere under the "Alias colors" section.
pub fn themes(document: &TokenDocument) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(section) = document.section(&[" Alias colors", "Alias colors"]) {
        collect_modes(section, &mut names);
    }
    names
}

/// Language names: mode keys found anywhere under the "Typography" section.
pub fn langs(document: &TokenDocument) -> Vec<String> {
    let mut names = Vec::new();
    if let Some(section) = document.section(&["Typography"]) {
        collect_modes(section, &mut names);
    }
    names
}

/// Grayscale names: mode keys of the direct children of
/// "Grayscales - Dark" → "Grayscales".
///
/// Unlike themes and langs this anchor takes no spelling variants and the
/// search does not go past one level.
pub fn gray_scales(document: &TokenDocument) -> Vec<String> {
    let mut names = Vec::new();
    let grayscales = document
        .section(&["Grayscales - Dark"])
        .and_then(|dark| dark.get("Grayscales"))
        .and_then(Value::as_object);
    if let Some(grayscales) = grayscales {
        for child in grayscales.values() {
            if let Some(modes) = mode_map(child) {
                push_mode_keys(modes, &mut names);
            }
        }
    }
    names
}

/// Recursive search: a node carrying a mode map contributes its keys and is
/// not descended into; any other node's object values are explored.
fn collect_modes(node: &Value, names: &mut Vec<String>) {
    if let Some(modes) = mode_map(node) {
        push_mode_keys(modes, names);
        return;
    }
    if let Some(object) = node.as_object() {
        for value in object.values() {
            collect_modes(value, names);
        }
    }
}

fn push_mode_keys(modes: &Map<String, Value>, names: &mut Vec<String>) {
    for key in modes.keys() {
        let name = key.to_lowercase();
        if !names.contains(&name) {
            names.push(name);
        }
    }
}
