//! Number and date formatting for bound values.

pub mod date;
pub mod error;
pub mod number;

pub use date::{parse_date, DateFormatter, ParsedDate};
pub use error::FormatError;
pub use number::PatternNumberFormatter;

use serde::Deserialize;

/// Formatting settings as read from configuration files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatSettings {
    pub decimal_pattern: String,
    pub date_pattern: String,
    pub currency_symbol: String,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            decimal_pattern: "#,##0.###".to_string(),
            date_pattern: "%Y-%m-%d".to_string(),
            currency_symbol: "$".to_string(),
        }
    }
}

/// The formatters a page builder applies to bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct Formatters {
    pub decimal: PatternNumberFormatter,
    pub date: DateFormatter,
    pub currency_symbol: String,
}

impl Default for Formatters {
    fn default() -> Self {
        Self {
            decimal: PatternNumberFormatter::decimal(),
            date: DateFormatter::iso(),
            currency_symbol: "$".to_string(),
        }
    }
}

impl Formatters {
    pub fn from_settings(settings: &FormatSettings) -> Result<Self, FormatError> {
        Ok(Self {
            decimal: PatternNumberFormatter::new(&settings.decimal_pattern)?
                .with_currency_symbol(settings.currency_symbol.clone()),
            date: DateFormatter::new(&settings.date_pattern)?,
            currency_symbol: settings.currency_symbol.clone(),
        })
    }

    /// Compiles a per-node number pattern using the configured currency symbol.
    pub fn number_pattern(&self, pattern: &str) -> Result<PatternNumberFormatter, FormatError> {
        PatternNumberFormatter::new(pattern)
            .map(|f| f.with_currency_symbol(self.currency_symbol.clone()))
    }

    pub fn date_pattern(&self, pattern: &str) -> Result<DateFormatter, FormatError> {
        DateFormatter::new(pattern)
    }

    pub fn format_number(&self, number: f64) -> String {
        self.decimal.format(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings() {
        let settings = FormatSettings {
            decimal_pattern: "0.00".to_string(),
            currency_symbol: "£".to_string(),
            ..FormatSettings::default()
        };
        let formatters = Formatters::from_settings(&settings).unwrap();
        assert_eq!(formatters.format_number(2.0), "2.00");
        let price = formatters.number_pattern("¤0.00").unwrap();
        assert_eq!(price.format(2.0), "£2.00");
    }

    #[test]
    fn test_from_settings_rejects_bad_pattern() {
        let settings = FormatSettings {
            decimal_pattern: "0;0;0;0".to_string(),
            ..FormatSettings::default()
        };
        assert!(matches!(
            Formatters::from_settings(&settings),
            Err(FormatError::TooManySections { .. })
        ));
    }

    #[test]
    fn test_default_matches_default_settings() {
        let from_settings = Formatters::from_settings(&FormatSettings::default()).unwrap();
        assert_eq!(from_settings, Formatters::default());
    }
}
