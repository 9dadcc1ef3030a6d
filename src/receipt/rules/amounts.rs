//! Amount extraction for Chilean receipts.

use super::FieldExtractor;
use super::patterns::AMOUNT_TOKEN;

/// Qualifying digit counts. Below the minimum the token is a quantity or
/// line count; at eight digits and above it is a RUT or other identifier.
const MIN_AMOUNT_DIGITS: usize = 3;
const MAX_AMOUNT_DIGITS: usize = 7;

/// One numeric token pulled from the text, before ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountCandidate {
    /// Substring as it appeared in the text.
    pub raw: String,
    /// Digits only, grouping separators stripped.
    pub cleaned: String,
    /// Parsed whole-peso value.
    pub value: u64,
    /// Number of digits in `cleaned`.
    pub digit_len: usize,
}

impl AmountCandidate {
    /// Build a candidate from a raw token. Tokens whose cleaned form is not
    /// purely numeric, or whose digit count does not qualify, yield `None`.
    fn from_token(raw: &str) -> Option<Self> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !matches!(c, '.' | ',' | ' '))
            .collect();

        if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let digit_len = cleaned.len();
        if !(MIN_AMOUNT_DIGITS..=MAX_AMOUNT_DIGITS).contains(&digit_len) {
            return None;
        }

        let value = cleaned.parse().ok()?;

        Some(Self {
            raw: raw.to_string(),
            cleaned,
            value,
            digit_len,
        })
    }
}

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = AmountCandidate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        AMOUNT_TOKEN
            .find_iter(text)
            .filter_map(|m| AmountCandidate::from_token(m.as_str()))
            .collect()
    }
}

/// Pick the receipt total: the largest qualifying numeric token.
///
/// The heuristic is that the printed grand total is the biggest figure on
/// the receipt that is neither a quantity nor an identification number.
/// Returns 0 when no token qualifies.
pub fn extract_amount(text: &str) -> u64 {
    AmountExtractor::new()
        .extract_all(text)
        .iter()
        .map(|candidate| candidate.value)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_token() {
        assert_eq!(extract_amount("Monto 238"), 238);
    }

    #[test]
    fn test_grouped_tokens() {
        assert_eq!(extract_amount("Total 12.345"), 12345);
        assert_eq!(extract_amount("Total 1,234,567"), 1234567);
    }

    #[test]
    fn test_max_wins() {
        assert_eq!(extract_amount("Subtotal 1.000\nPropina 300\nTotal 2.500"), 2500);
    }

    #[test]
    fn test_two_digit_tokens_excluded() {
        assert_eq!(extract_amount("Cant 12 x 99"), 0);
    }

    #[test]
    fn test_eight_digit_tokens_excluded() {
        // Unseparated identifier yields no token at all
        assert_eq!(extract_amount("RUT 12345678"), 0);
        // Grouped 8-digit figure is excluded by the digit gate
        assert_eq!(extract_amount("Folio 12,345,678"), 0);
    }

    #[test]
    fn test_boundary_digit_counts() {
        // 3 and 7 digits qualify
        assert_eq!(extract_amount("Total 123"), 123);
        assert_eq!(extract_amount("Total 1.234.567"), 1234567);
    }

    #[test]
    fn test_no_candidates() {
        assert_eq!(extract_amount("BOLETA ELECTRONICA"), 0);
        assert_eq!(extract_amount(""), 0);
    }

    #[test]
    fn test_candidate_fields() {
        let extractor = AmountExtractor::new();

        let candidates = extractor.extract_all("Total 12.345");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].raw, "12.345");
        assert_eq!(candidates[0].cleaned, "12345");
        assert_eq!(candidates[0].value, 12345);
        assert_eq!(candidates[0].digit_len, 5);
    }

    #[test]
    fn test_extract_all_occurrence_order() {
        let extractor = AmountExtractor::new();

        let values: Vec<u64> = extractor
            .extract_all("IVA 234 Total 12.345 Vuelto 500")
            .iter()
            .map(|c| c.value)
            .collect();
        assert_eq!(values, vec![234, 12345, 500]);
    }
}
