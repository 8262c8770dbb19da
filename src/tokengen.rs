//! Main module for tokengen library functionality

pub mod document;
pub mod emit;
pub mod extract;
pub mod pipeline;
pub mod testing;
