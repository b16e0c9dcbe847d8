use thiserror::Error;

/// Errors raised while compiling a number or date pattern.
///
/// Positions are byte offsets into the pattern string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Number pattern is empty")]
    EmptyPattern,

    #[error("Unterminated quoted literal starting at {position} in '{pattern}'")]
    UnterminatedQuote { pattern: String, position: usize },

    #[error("Escape character at {position} has nothing to escape in '{pattern}'")]
    TrailingEscape { pattern: String, position: usize },

    #[error("Too many sections in '{pattern}': a fourth section starts at {position}")]
    TooManySections { pattern: String, position: usize },

    #[error("Section {section} of '{pattern}' has no digit placeholder")]
    MissingDigitPlaceholder { pattern: String, section: usize },

    #[error("Group separator at {position} in '{pattern}' has no integer placeholder before it")]
    UnmatchedGroupSeparator { pattern: String, position: usize },

    #[error("Invalid date pattern '{0}'")]
    InvalidDatePattern(String),
}
