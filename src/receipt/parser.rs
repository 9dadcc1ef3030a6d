//! Receipt field orchestration.
//!
//! Joins the OCR fragments into one text blob, runs the date and amount
//! extractors independently and composes the suggested fields into a
//! single result record for the hosting layer to serialize.

use serde::Serialize;
use tracing::{debug, info};

use super::rules::{extract_amount, extract_date};

/// Shown when both key fields were recognized.
const SUCCESS_MESSAGE: &str = "Datos extraídos con éxito.";

/// Shown when either field is missing; asks the user to enter the data
/// manually instead.
const FALLBACK_MESSAGE: &str = "No se pudieron leer los datos clave (fecha y monto). \
    La calidad de la imagen puede ser baja. Por favor, ingrese los datos manualmente.";

/// Structured fields suggested from one scanned receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Normalized date (`YYYY-MM-DD`), when one was recognized.
    pub suggested_date: Option<String>,
    /// Whole-peso total; 0 when no qualifying token was found.
    pub suggested_amount: u64,
    /// True when both a date and a non-zero amount were recognized.
    pub success: bool,
    /// Fixed display text for the end user.
    pub message: String,
}

/// Extract the suggested date and amount from OCR text fragments.
///
/// Fragments are joined with a newline separator so word-boundary-sensitive
/// patterns keep matching across what were separate recognized regions. The
/// two extractors have no data dependency on each other; partial results
/// are preserved even when `success` is false. Never panics, including on
/// an empty fragment sequence.
pub fn extract_fields<I, S>(lines: I) -> ExtractionResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = lines
        .into_iter()
        .map(|line| line.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join("\n");

    extract_from_text(&text)
}

/// Extract the suggested date and amount from already-joined text.
pub fn extract_from_text(text: &str) -> ExtractionResult {
    info!("Extracting receipt fields from {} characters of text", text.len());

    let suggested_date = extract_date(text);
    let suggested_amount = extract_amount(text);
    let success = suggested_date.is_some() && suggested_amount != 0;

    debug!(
        "Extracted date={:?} amount={} success={}",
        suggested_date, suggested_amount, success
    );

    let message = if success { SUCCESS_MESSAGE } else { FALLBACK_MESSAGE };

    ExtractionResult {
        suggested_date,
        suggested_amount,
        success,
        message: message.to_string(),
    }
}
