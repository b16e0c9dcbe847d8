//! Custom numeric format strings.
//!
//! The pattern language follows the .NET custom numeric format: `0` and `#`
//! placeholders, a decimal point, `,` for grouping or scaling, `%` and `‰`
//! multipliers, `¤` for the currency symbol, `\` escapes, quoted literals and up
//! to three `;`-separated sections (positive, negative, zero).

use crate::error::FormatError;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::take_till,
    character::complete::{anychar, char},
    combinator::{map, value, verify},
    sequence::{delimited, preceded},
};
use std::fmt;
use std::str::FromStr;

const MAX_SECTIONS: usize = 3;
const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, PartialEq)]
enum RawToken {
    Zero,
    Digit,
    Point,
    Comma,
    Percent,
    PerMille,
    Currency,
    Separator,
    Literal(String),
}

fn quoted<'a>(
    quote: char,
) -> impl Parser<&'a str, Output = RawToken, Error = nom::error::Error<&'a str>> {
    map(
        delimited(char(quote), take_till(move |c| c == quote), char(quote)),
        |s: &str| RawToken::Literal(s.to_string()),
    )
}

fn escaped(input: &str) -> IResult<&str, RawToken> {
    map(preceded(char('\\'), anychar), |c| {
        RawToken::Literal(c.to_string())
    })
    .parse(input)
}

fn raw_token(input: &str) -> IResult<&str, RawToken> {
    alt((
        value(RawToken::Zero, char('0')),
        value(RawToken::Digit, char('#')),
        value(RawToken::Point, char('.')),
        value(RawToken::Comma, char(',')),
        value(RawToken::Percent, char('%')),
        value(RawToken::PerMille, char('‰')),
        value(RawToken::Currency, char('¤')),
        value(RawToken::Separator, char(';')),
        quoted('\''),
        quoted('"'),
        escaped,
        map(
            verify(anychar, |c: &char| !matches!(*c, '\\' | '\'' | '"')),
            |c| RawToken::Literal(c.to_string()),
        ),
    ))
    .parse(input)
}

/// Splits `pattern` into positioned tokens.
fn tokenize(pattern: &str) -> Result<Vec<(usize, RawToken)>, FormatError> {
    let mut tokens = Vec::new();
    let mut rest = pattern;
    while !rest.is_empty() {
        let position = pattern.len() - rest.len();
        match raw_token(rest) {
            Ok((next, token)) => {
                tokens.push((position, token));
                rest = next;
            }
            Err(_) if rest.starts_with('\\') => {
                return Err(FormatError::TrailingEscape {
                    pattern: pattern.to_string(),
                    position,
                });
            }
            Err(_) => {
                return Err(FormatError::UnterminatedQuote {
                    pattern: pattern.to_string(),
                    position,
                });
            }
        }
    }
    Ok(tokens)
}

#[derive(Debug, Clone, PartialEq)]
enum Item {
    IntDigit,
    FracDigit,
    Point,
    Currency,
    Literal(String),
}

#[derive(Debug, Clone, PartialEq)]
struct Section {
    items: Vec<Item>,
    int_placeholders: usize,
    min_int_digits: usize,
    frac_min: usize,
    frac_max: usize,
    grouping: bool,
    multiplier: f64,
}

/// The rounded digits of one value, before placement into a section.
struct Digits {
    int: Vec<char>,
    frac: Vec<char>,
}

impl Digits {
    fn is_zero(&self) -> bool {
        self.int.iter().chain(self.frac.iter()).all(|c| *c == '0')
    }
}

impl Section {
    /// `#,##0.###`: grouped integer digits and up to three decimals.
    fn decimal() -> Self {
        let mut items = vec![Item::IntDigit; 4];
        items.push(Item::Point);
        items.extend(std::iter::repeat_n(Item::FracDigit, 3));
        Self {
            items,
            int_placeholders: 4,
            min_int_digits: 1,
            frac_min: 0,
            frac_max: 3,
            grouping: true,
            multiplier: 1.0,
        }
    }

    fn compile(
        pattern: &str,
        index: usize,
        tokens: &[(usize, RawToken)],
    ) -> Result<Self, FormatError> {
        let decimal_at = tokens.iter().position(|(_, t)| *t == RawToken::Point);
        let mut items = Vec::new();
        let mut int_zeros: Vec<bool> = Vec::new();
        let mut frac_zeros: Vec<bool> = Vec::new();
        let mut grouping = false;
        let mut multiplier = 1.0_f64;

        for (i, (position, token)) in tokens.iter().enumerate() {
            let in_fraction = decimal_at.is_some_and(|d| i > d);
            match token {
                RawToken::Zero | RawToken::Digit => {
                    let zero = *token == RawToken::Zero;
                    if in_fraction {
                        frac_zeros.push(zero);
                        items.push(Item::FracDigit);
                    } else {
                        int_zeros.push(zero);
                        items.push(Item::IntDigit);
                    }
                }
                RawToken::Point if Some(i) == decimal_at => items.push(Item::Point),
                RawToken::Point => items.push(Item::Literal(".".to_string())),
                RawToken::Comma if in_fraction => {}
                RawToken::Comma => {
                    if int_zeros.is_empty() {
                        return Err(FormatError::UnmatchedGroupSeparator {
                            pattern: pattern.to_string(),
                            position: *position,
                        });
                    }
                    let end = decimal_at.unwrap_or(tokens.len());
                    let placeholder_follows = tokens[i + 1..end]
                        .iter()
                        .any(|(_, t)| matches!(t, RawToken::Zero | RawToken::Digit));
                    if placeholder_follows {
                        grouping = true;
                    } else {
                        multiplier /= 1000.0;
                    }
                }
                RawToken::Percent => {
                    multiplier *= 100.0;
                    items.push(Item::Literal("%".to_string()));
                }
                RawToken::PerMille => {
                    multiplier *= 1000.0;
                    items.push(Item::Literal("‰".to_string()));
                }
                RawToken::Currency => items.push(Item::Currency),
                RawToken::Literal(s) => items.push(Item::Literal(s.clone())),
                RawToken::Separator => {}
            }
        }

        // Negative and zero sections may be literal-only, as in `0;'neg';'-'`.
        if int_zeros.is_empty() && frac_zeros.is_empty() && index == 0 {
            return Err(FormatError::MissingDigitPlaceholder {
                pattern: pattern.to_string(),
                section: index,
            });
        }

        let min_int_digits = int_zeros
            .iter()
            .position(|zero| *zero)
            .map_or(0, |first| int_zeros.len() - first);
        let frac_min = frac_zeros
            .iter()
            .rposition(|zero| *zero)
            .map_or(0, |last| last + 1);

        Ok(Self {
            items,
            int_placeholders: int_zeros.len(),
            min_int_digits,
            frac_min,
            frac_max: frac_zeros.len(),
            grouping,
            multiplier,
        })
    }

    fn has_placeholders(&self) -> bool {
        self.int_placeholders + self.frac_max > 0
    }

    /// `None` when scaling pushes the value past the `f64` range.
    fn digits(&self, magnitude: f64) -> Option<Digits> {
        let scaled = magnitude * self.multiplier * 10f64.powi(self.frac_max as i32);
        if !scaled.is_finite() {
            return None;
        }
        // f64::round rounds half away from zero.
        let mut all = format!("{:.0}", scaled.round());
        if all.len() <= self.frac_max {
            all = format!("{}{}", "0".repeat(self.frac_max + 1 - all.len()), all);
        }
        let (int_part, frac_part) = all.split_at(all.len() - self.frac_max);

        let mut int: Vec<char> = int_part.trim_start_matches('0').chars().collect();
        if int.len() < self.min_int_digits {
            let padding = self.min_int_digits - int.len();
            int.splice(0..0, std::iter::repeat_n('0', padding));
        }

        let mut frac: Vec<char> = frac_part.chars().collect();
        while frac.len() > self.frac_min && frac.last() == Some(&'0') {
            frac.pop();
        }
        Some(Digits { int, frac })
    }

    fn render(&self, digits: &Digits, negative: bool, currency: &str) -> String {
        let mut out = String::new();
        if negative {
            out.push('-');
        }
        let len = digits.int.len();
        let push_int = |out: &mut String, idx: usize| {
            out.push(digits.int[idx]);
            let from_right = len - 1 - idx;
            if self.grouping && from_right > 0 && from_right % 3 == 0 {
                out.push(',');
            }
        };

        let mut int_seen = 0;
        let mut frac_seen = 0;
        for item in &self.items {
            match item {
                Item::IntDigit => {
                    let from_right = self.int_placeholders - 1 - int_seen;
                    if int_seen == 0 {
                        // The leftmost placeholder absorbs any overflow digits.
                        for idx in 0..len.saturating_sub(from_right) {
                            push_int(&mut out, idx);
                        }
                    } else if len > from_right {
                        push_int(&mut out, len - 1 - from_right);
                    }
                    int_seen += 1;
                }
                Item::Point => {
                    if self.int_placeholders == 0 {
                        for idx in 0..len {
                            push_int(&mut out, idx);
                        }
                    }
                    if !digits.frac.is_empty() {
                        out.push('.');
                    }
                }
                Item::FracDigit => {
                    if let Some(c) = digits.frac.get(frac_seen) {
                        out.push(*c);
                    }
                    frac_seen += 1;
                }
                Item::Currency => out.push_str(currency),
                Item::Literal(s) => out.push_str(s),
            }
        }
        out
    }
}

/// A compiled custom numeric format.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternNumberFormatter {
    pattern: String,
    /// Positive, negative and zero sections. An empty non-leading section
    /// falls back to the positive one.
    sections: Vec<Option<Section>>,
    currency_symbol: String,
}

impl PatternNumberFormatter {
    pub fn new(pattern: &str) -> Result<Self, FormatError> {
        if pattern.is_empty() {
            return Err(FormatError::EmptyPattern);
        }
        let tokens = tokenize(pattern)?;

        let mut sections = Vec::new();
        let mut start = 0;
        for (i, (position, token)) in tokens.iter().enumerate() {
            if *token == RawToken::Separator {
                if sections.len() + 1 == MAX_SECTIONS {
                    return Err(FormatError::TooManySections {
                        pattern: pattern.to_string(),
                        position: *position,
                    });
                }
                sections.push(&tokens[start..i]);
                start = i + 1;
            }
        }
        sections.push(&tokens[start..]);

        let compiled = sections
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                if section.is_empty() && index > 0 {
                    Ok(None)
                } else {
                    Section::compile(pattern, index, section).map(Some)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            pattern: pattern.to_string(),
            sections: compiled,
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        })
    }

    /// The grouped decimal formatter used when a binding has no `Format`.
    pub fn decimal() -> Self {
        Self {
            pattern: "#,##0.###".to_string(),
            sections: vec![Some(Section::decimal())],
            currency_symbol: DEFAULT_CURRENCY.to_string(),
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index).and_then(Option::as_ref)
    }

    pub fn format(&self, number: f64) -> String {
        if !number.is_finite() {
            return number.to_string();
        }
        let Some(positive) = self.section(0) else {
            return number.to_string();
        };
        let magnitude = number.abs();
        let (section, sign_in_section) = match self.section(1) {
            Some(negative) if number < 0.0 => (negative, true),
            _ => (positive, false),
        };
        let Some(digits) = section.digits(magnitude) else {
            return number.to_string();
        };
        let rounds_to_zero = if section.has_placeholders() {
            digits.is_zero()
        } else {
            magnitude == 0.0
        };
        if rounds_to_zero {
            if let Some(zero) = self.section(2) {
                return match zero.digits(magnitude) {
                    Some(zero_digits) => zero.render(&zero_digits, false, &self.currency_symbol),
                    None => number.to_string(),
                };
            }
        }
        let negative = number < 0.0 && !sign_in_section && !rounds_to_zero;
        section.render(&digits, negative, &self.currency_symbol)
    }
}

impl Default for PatternNumberFormatter {
    fn default() -> Self {
        Self::decimal()
    }
}

impl FromStr for PatternNumberFormatter {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PatternNumberFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

#[cfg(test)]
#[path = "number_test.rs"]
mod tests;
