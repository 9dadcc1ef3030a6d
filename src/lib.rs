//! Core library for Chilean receipt (boleta) OCR post-processing.
//!
//! This crate provides the field-extraction step that turns the noisy,
//! unordered text fragments an OCR engine reads off a photographed receipt
//! into a structured record: a normalized ISO-8601 date and a whole-peso
//! total. It is a pure function over text — the OCR step that produces the
//! fragments and the API layer that serializes the result live elsewhere.

pub mod receipt;

pub use receipt::{ExtractionResult, extract_fields, extract_from_text};
pub use receipt::rules::{
    AmountCandidate, AmountExtractor, DateExtractor, FieldExtractor, extract_amount, extract_date,
};
