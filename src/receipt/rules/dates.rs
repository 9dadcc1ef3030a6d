//! Date extraction for Chilean receipts.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::FieldExtractor;
use super::patterns::{
    DATE_DMY, DATE_LONG_MONTH, DATE_SHORT_MONTH, DATE_YMD, MONTH_ABBREV, MONTH_FULL,
};

/// How a rule's capture groups map onto day, month and year.
#[derive(Debug, Clone, Copy)]
enum DateLayout {
    /// day, full month name, year ("4 de marzo del 2020")
    DayFullMonthYear,
    /// day, three-letter month abbreviation, year ("07 jul 2023")
    DayShortMonthYear,
    /// year, month, day, all numeric ("2020-09-28")
    YearMonthDay,
    /// day, month, year, all numeric ("28-09-2020")
    DayMonthYear,
}

/// One date-recognition rule: a pattern paired with its capture layout.
struct DateRule {
    pattern: &'static Regex,
    layout: DateLayout,
}

impl DateRule {
    /// Normalize this rule's first match in `text` to `YYYY-MM-DD`.
    ///
    /// `None` means the rule does not apply here, either because the
    /// pattern found nothing or because the match could not be normalized
    /// (unrecognized month name). The caller moves on to the next rule.
    fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        match self.layout {
            DateLayout::DayFullMonthYear => named_month_date(&caps, &MONTH_FULL),
            DateLayout::DayShortMonthYear => named_month_date(&caps, &MONTH_ABBREV),
            DateLayout::YearMonthDay => {
                Some(format!("{}-{:0>2}-{:0>2}", &caps[1], &caps[2], &caps[3]))
            }
            DateLayout::DayMonthYear => {
                Some(format!("{}-{:0>2}-{:0>2}", &caps[3], &caps[2], &caps[1]))
            }
        }
    }
}

lazy_static! {
    /// The rule catalog, most specific and least ambiguous first. The order
    /// is fixed: the year-first numeric form is tried before the day-first
    /// one because its leading 4-digit group is unambiguous, which keeps
    /// "2020-09-28" from being read as a day-first date.
    static ref DATE_RULES: [DateRule; 4] = [
        DateRule { pattern: &DATE_LONG_MONTH, layout: DateLayout::DayFullMonthYear },
        DateRule { pattern: &DATE_SHORT_MONTH, layout: DateLayout::DayShortMonthYear },
        DateRule { pattern: &DATE_YMD, layout: DateLayout::YearMonthDay },
        DateRule { pattern: &DATE_DMY, layout: DateLayout::DayMonthYear },
    ];
}

/// Assemble `YYYY-MM-DD` from a (day, month name, year) capture, resolving
/// the month through `table`. An unrecognized name yields `None`.
fn named_month_date(
    caps: &Captures,
    table: &HashMap<&'static str, &'static str>,
) -> Option<String> {
    let month = table.get(caps[2].to_lowercase().as_str())?;
    Some(format!("{}-{}-{:0>2}", &caps[3], month, &caps[1]))
}

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        DATE_RULES.iter().find_map(|rule| rule.apply(text))
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for rule in DATE_RULES.iter() {
            if let Some(date) = rule.apply(text) {
                // Skip if already found by a higher-priority rule
                if results.contains(&date) {
                    continue;
                }
                results.push(date);
            }
        }

        results
    }
}

/// Extract the first recognizable date from text, normalized to `YYYY-MM-DD`.
///
/// Rules are tried in a fixed priority order and the first successful
/// normalization wins. No calendar validation is performed: "31 de febrero
/// del 2020" normalizes verbatim.
pub fn extract_date(text: &str) -> Option<String> {
    DateExtractor::new().extract(text)
}
