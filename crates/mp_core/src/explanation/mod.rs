//! # Explanation Module
//!
//! Fan-facing prose generation for detected turning points. Wording is
//! presentation, not contract: consumers assert on the structured turning
//! point fields, never on the generated text.

pub mod generator;

pub use generator::{
    ExplanationGenerator, FirstSelector, SeededSelector, TemplateSelector,
};
