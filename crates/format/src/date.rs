use crate::error::FormatError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use std::fmt::Write;

/// A date value recognized in bound data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

/// Recognizes RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD`.
pub fn parse_date(raw: &str) -> Option<ParsedDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(ParsedDate::Zoned(dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(ParsedDate::Local(dt));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(ParsedDate::Local)
}

/// Formats dates with a `strftime` pattern validated at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatter {
    pattern: String,
}

impl DateFormatter {
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(FormatError::InvalidDatePattern(pattern.to_string()));
        }
        Ok(Self {
            pattern: pattern.to_string(),
        })
    }

    pub fn iso() -> Self {
        Self {
            pattern: "%Y-%m-%d".to_string(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Formats `date`. Returns `None` when the pattern asks for a field the
    /// value does not carry, such as an offset on a local date.
    pub fn format(&self, date: &ParsedDate) -> Option<String> {
        let items = StrftimeItems::new(&self.pattern);
        let mut out = String::new();
        let written = match date {
            ParsedDate::Zoned(dt) => write!(out, "{}", dt.format_with_items(items)),
            ParsedDate::Local(dt) => write!(out, "{}", dt.format_with_items(items)),
        };
        written.ok().map(|_| out)
    }

    /// Parses `raw` as a date and formats it, or `None` if it is not a date.
    pub fn format_str(&self, raw: &str) -> Option<String> {
        parse_date(raw).and_then(|date| self.format(&date))
    }
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::iso()
    }
}
