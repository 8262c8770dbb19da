//! # tokengen
//!
//! A build-time code generator for W3C design-token documents.
//!
//! Reads a design-token JSON export, extracts the permitted names for each
//! category (themes, languages, grayscales, primitive colors, alias colors,
//! dimension scales) and emits a frozen-constants source file plus a
//! type-declaration file enumerating those names.
//!
//! The pipeline runs once per build, is fully deterministic over the input
//! document, and degrades missing sections to empty extraction results.

pub mod tokengen;
