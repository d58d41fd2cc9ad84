//! Date extraction from free-text case cells.
//!
//! A reviewer cell typically holds a case code, a name or two and one or two
//! day-first dates: `"EXP 1234 03/01/24 revisado 21/10"`. The first date is
//! when the case was assigned to the reviewer; the last one, when present,
//! is when the case entered its current department.
//!
//! Extraction is best-effort. Tokens that look like dates but fail every
//! format degrade to an absent date; nothing here returns an error.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Day, month and an optional 2-4 digit year, separated by `/` or `-`.
static DATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b([0-9]{1,2})[/-]([0-9]{1,2})(?:[/-]([0-9]{2,4}))?\b").unwrap()
});

/// Two-digit years below this value map to 20xx, the rest to 19xx.
pub const DEFAULT_TWO_DIGIT_YEAR_PIVOT: u32 = 50;

/// Dates found in one cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractedDates {
    /// First date token in the text.
    pub assignment: Option<NaiveDate>,
    /// Last date token, only when the text holds at least two.
    pub sector: Option<NaiveDate>,
}

/// Finds and parses day-first dates relative to a reference year.
#[derive(Debug, Clone, Copy)]
pub struct DateExtractor {
    reference_year: i32,
    two_digit_year_pivot: u32,
}

impl DateExtractor {
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            two_digit_year_pivot: DEFAULT_TWO_DIGIT_YEAR_PIVOT,
        }
    }

    pub fn with_two_digit_year_pivot(mut self, pivot: u32) -> Self {
        self.two_digit_year_pivot = pivot.min(100);
        self
    }

    /// Extract the assignment and sector dates from `text`.
    pub fn extract(&self, text: &str) -> ExtractedDates {
        let tokens: Vec<&str> = find_date_tokens(text).collect();

        let Some(first) = tokens.first() else {
            return ExtractedDates::default();
        };

        let assignment = self.parse_token(first);
        let sector = match tokens.as_slice() {
            [_, .., last] => self.parse_sector_token(last),
            _ => None,
        };

        ExtractedDates { assignment, sector }
    }

    /// Parse one date token. Formats are tried in order: `d/m/y`, `d-m-y`,
    /// then year-less `d/m` or `d-m` in the reference year.
    pub fn parse_token(&self, token: &str) -> Option<NaiveDate> {
        self.parse_with_year(token, '/')
            .or_else(|| self.parse_with_year(token, '-'))
            .or_else(|| self.parse_without_year(token))
    }

    /// The sector token gets the reference year unless its text carries a
    /// `/2` or `-2` fragment, i.e. something that reads like a 20xx year.
    fn parse_sector_token(&self, token: &str) -> Option<NaiveDate> {
        let parsed = self.parse_token(token)?;
        if token.contains("/2") || token.contains("-2") {
            return Some(parsed);
        }
        NaiveDate::from_ymd_opt(self.reference_year, parsed.month(), parsed.day())
    }

    fn parse_with_year(&self, token: &str, separator: char) -> Option<NaiveDate> {
        let mut parts = token.split(separator);
        let (day, month, year) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        let day = parse_day_or_month(day)?;
        let month = parse_day_or_month(month)?;
        let year = self.resolve_year(year)?;
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn parse_without_year(&self, token: &str) -> Option<NaiveDate> {
        let (day, month) = token.split_once(['/', '-'])?;
        let day = parse_day_or_month(day)?;
        let month = parse_day_or_month(month)?;
        NaiveDate::from_ymd_opt(self.reference_year, month, day)
    }

    fn resolve_year(&self, year: &str) -> Option<i32> {
        if !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value: i32 = year.parse().ok()?;
        match year.len() {
            4 => Some(value),
            2 if (value as u32) < self.two_digit_year_pivot => Some(2000 + value),
            2 => Some(1900 + value),
            _ => None,
        }
    }
}

/// Iterate over the date-shaped substrings of `text`, left to right.
pub fn find_date_tokens(text: &str) -> impl Iterator<Item = &str> {
    DATE_TOKEN.find_iter(text).map(|m| m.as_str())
}

fn parse_day_or_month(part: &str) -> Option<u32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}
