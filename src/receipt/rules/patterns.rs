//! Regex patterns and month-name tables for Chilean receipt extraction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Long form: "4 de marzo del 2020" (also "de 2020")
    pub static ref DATE_LONG_MONTH: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+de\s+(enero|febrero|marzo|abril|mayo|junio|julio|agosto|septiembre|octubre|noviembre|diciembre)\s+del?\s+(\d{4})"
    ).unwrap();

    // Short form: "07 jul 2023"
    pub static ref DATE_SHORT_MONTH: Regex = Regex::new(
        r"(?i)(\d{1,2})\s+(ene|feb|mar|abr|may|jun|jul|ago|sep|oct|nov|dic)\s+(\d{4})"
    ).unwrap();

    // YYYY-MM-DD or YYYY/MM/DD
    pub static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4})[-/](\d{1,2})[-/](\d{1,2})"
    ).unwrap();

    // DD-MM-YYYY or DD/MM/YYYY
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{1,2})[-/](\d{1,2})[-/](\d{4})"
    ).unwrap();

    // Grouped-digit numeric token: "238", "12.345", "1,234,567".
    // Word-bounded so an unseparated digit run (e.g. a RUT) is not split
    // into spurious 3-digit tokens.
    pub static ref AMOUNT_TOKEN: Regex = Regex::new(
        r"\b\d{1,3}(?:[.,]\d{3})*\b"
    ).unwrap();

    /// Full Spanish month names to two-digit month codes.
    pub static ref MONTH_FULL: HashMap<&'static str, &'static str> = HashMap::from([
        ("enero", "01"),
        ("febrero", "02"),
        ("marzo", "03"),
        ("abril", "04"),
        ("mayo", "05"),
        ("junio", "06"),
        ("julio", "07"),
        ("agosto", "08"),
        ("septiembre", "09"),
        ("octubre", "10"),
        ("noviembre", "11"),
        ("diciembre", "12"),
    ]);

    /// Three-letter Spanish month abbreviations to two-digit month codes.
    pub static ref MONTH_ABBREV: HashMap<&'static str, &'static str> = HashMap::from([
        ("ene", "01"),
        ("feb", "02"),
        ("mar", "03"),
        ("abr", "04"),
        ("may", "05"),
        ("jun", "06"),
        ("jul", "07"),
        ("ago", "08"),
        ("sep", "09"),
        ("oct", "10"),
        ("nov", "11"),
        ("dic", "12"),
    ]);
}
