//! Rule-based field extractors for Chilean receipts.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::{AmountCandidate, AmountExtractor, extract_amount};
pub use dates::{DateExtractor, extract_date};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
