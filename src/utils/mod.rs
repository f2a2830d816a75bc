//! Shared utilities.
//!
//! - [`tokenizer`] - whitespace word extraction and lossy decoding

pub mod tokenizer;

pub use tokenizer::*;
