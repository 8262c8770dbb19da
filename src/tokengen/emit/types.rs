//! Type-declaration emitter
//!
//! Renders the `.d.ts` source describing the token tree structure and the
//! six permitted-value unions. Empty categories fall back to documented
//! defaults so downstream code keeps compiling against a trimmed document.
//! Union members are literal-escaped at emission; top-level keys containing
//! a quote character are filtered out of the root interface instead.

use crate::tokengen::document::TokenDocument;
use crate::tokengen::extract::ExtractedNames;

/// Fallback unions for categories that extracted nothing. Primitive colors,
/// alias colors and dimensions have no sensible hardcoded fallback and
/// render as `never`.
const FALLBACK_LANGS: &[&str] = &["en", "fa"];
const FALLBACK_THEMES: &[&str] = &["oktuple", "claytap", "agility", "pantograph", "primeplanet"];
const FALLBACK_GRAY_SCALES: &[&str] = &["arsenic", "cool", "warm", "neutral"];

/// Render the combined type-declaration source.
pub fn render_type_declarations(document: &TokenDocument, names: &ExtractedNames) -> String {
    format!(
        "// Type definitions for the design-token package
// Auto-generated from designTokens.json during build - do not edit manually

/** Token $extensions (mode, figma, etc.) */
export interface DesignTokenExtensions {{
  mode?: Record<string, string>;
  figma?: {{
    codeSyntax?: Record<string, string>;
    variableId?: string;
    collection?: {{ id?: string; name?: string; defaultModeId?: string; [key: string]: unknown }};
    [key: string]: unknown;
  }};
  [key: string]: unknown;
}}
/** Single design token (color, dimension, string, etc.) */
export interface DesignToken {{
  $type: 'color' | 'dimension' | 'string' | 'fontFamily' | 'number' | 'cubicBezier' | 'strokeStyle' | 'border';
  $value: string;
  $description?: string;
  scopes?: string[];
  $extensions?: DesignTokenExtensions;
}}
/** Nested group of tokens or subgroups */
export type DesignTokenGroup = {{ [key: string]: DesignToken | DesignTokenGroup }};
/** Root design tokens: known sections + index signature for future keys */
export interface DesignTokens {{
  {sections}
  [key: string]: DesignTokenGroup | undefined;
}}
export declare type Langs = {langs};
export declare type Themes = {themes};
export declare type GrayScales = {gray_scales};
export declare type PrimitiveColors = {primitive_colors};
export declare type AliasColors = {alias_colors};
export declare type Dimensions = {dimensions};
export declare const designTokens: DesignTokens;
export declare const primitiveColors: readonly PrimitiveColors[];
export declare const aliasColors: readonly AliasColors[];
export declare const dimensions: readonly Dimensions[];
",
        sections = root_section_fields(document),
        langs = union_or(&names.langs, FALLBACK_LANGS),
        themes = union_or(&names.themes, FALLBACK_THEMES),
        gray_scales = union_or(&names.gray_scales, FALLBACK_GRAY_SCALES),
        primitive_colors = union_or_never(&names.primitive_colors),
        alias_colors = union_or_never(&names.alias_colors),
        dimensions = union_or_never(&names.dimensions),
    )
}

/// Render the minimal index file for the split artifact layout.
pub fn render_index_reexport() -> String {
    "// Auto-generated from designTokens.json during build - do not edit manually\n\
     export * from './types';\n"
        .to_string()
}

/// One optional `DesignTokenGroup` field per top-level key, in document
/// order. Keys containing a quote character would break the declaration
/// syntax and are dropped; the index signature still covers them.
fn root_section_fields(document: &TokenDocument) -> String {
    document
        .top_level_keys()
        .iter()
        .filter(|key| !key.contains('"') && !key.contains('\''))
        .map(|key| format!("{}?: DesignTokenGroup;", quoted_key(key)))
        .collect::<Vec<_>>()
        .join("\n  ")
}

fn quoted_key(key: &str) -> String {
    serde_json::to_string(key).expect("strings always serialize")
}

fn union_or(values: &[String], fallback: &[&str]) -> String {
    if values.is_empty() {
        fallback
            .iter()
            .map(|value| literal(value))
            .collect::<Vec<_>>()
            .join(" | ")
    } else {
        union(values)
    }
}

fn union_or_never(values: &[String]) -> String {
    if values.is_empty() {
        "never".to_string()
    } else {
        union(values)
    }
}

fn union(values: &[String]) -> String {
    values
        .iter()
        .map(|value| literal(value))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Single-quoted string literal, escaped at emission so any extracted name
/// stays syntactically valid.
fn literal(value: &str) -> String {
    format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_are_escaped() {
        assert_eq!(literal("ocean-blue"), "'ocean-blue'");
        assert_eq!(literal("o'brien"), r"'o\'brien'");
        assert_eq!(literal(r"back\slash"), r"'back\\slash'");
    }

    #[test]
    fn empty_unions_fall_back() {
        assert_eq!(union_or(&[], FALLBACK_LANGS), "'en' | 'fa'");
        assert_eq!(union_or_never(&[]), "never");
    }

    #[test]
    fn quoted_keys_use_json_escaping() {
        assert_eq!(quoted_key("Primitive Colors"), r#""Primitive Colors""#);
    }
}
