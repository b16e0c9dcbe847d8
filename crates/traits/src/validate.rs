use std::fmt::Debug;

/// Decides whether resolved text may be placed on the page.
pub trait StringValidator: Send + Sync + Debug {
    fn is_valid(&self, s: &str) -> bool;
}

/// Accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllValidator;

impl StringValidator for AcceptAllValidator {
    fn is_valid(&self, _s: &str) -> bool {
        true
    }
}

/// Rejects strings containing control characters other than newline and tab.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintableValidator;

impl StringValidator for PrintableValidator {
    fn is_valid(&self, s: &str) -> bool {
        !s.chars().any(|c| c.is_control() && c != '\n' && c != '\t')
    }
}
