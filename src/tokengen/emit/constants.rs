//! Frozen-constants emitter
//!
//! Serializes the primitive color, alias color and dimension lists into
//! three read-only exported arrays. Each array is the verbatim JSON
//! serialization of its list, so the file is valid JavaScript with no
//! further escaping concerns.

use crate::tokengen::extract::ExtractedNames;

/// Render the constants source file.
pub fn render_constants(names: &ExtractedNames) -> String {
    format!(
        "// This file is auto-generated from designTokens.json during build\n\
         // Do not edit manually\n\
         \n\
         export const primitiveColors = Object.freeze({});\n\
         \n\
         export const aliasColors = Object.freeze({});\n\
         \n\
         export const dimensions = Object.freeze({});\n",
        json_array(&names.primitive_colors),
        json_array(&names.alias_colors),
        json_array(&names.dimensions),
    )
}

fn json_array(values: &[String]) -> String {
    serde_json::to_string(values).expect("string lists always serialize")
}
