//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, extract_fields, extract_from_text};
