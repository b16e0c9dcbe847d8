use std::collections::HashMap;
use std::fmt::Debug;

/// Maps a `FontFamily` token to the family name handed to the text composer.
pub trait FontFamilyResolver: Send + Sync + Debug {
    fn resolve_family(&self, key: &str, token: &str) -> Option<String>;
}

/// Resolves registered aliases and passes every other token through unchanged.
#[derive(Debug, Clone, Default)]
pub struct AliasFontFamilyResolver {
    aliases: HashMap<String, String>,
}

impl AliasFontFamilyResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>, family: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), family.into());
        self
    }
}

impl FontFamilyResolver for AliasFontFamilyResolver {
    fn resolve_family(&self, _key: &str, token: &str) -> Option<String> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }
        Some(
            self.aliases
                .get(token)
                .cloned()
                .unwrap_or_else(|| token.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_resolution() {
        let resolver = AliasFontFamilyResolver::new().with_alias("Body", "Times New Roman");
        assert_eq!(
            resolver.resolve_family("FontFamily", "Body").as_deref(),
            Some("Times New Roman")
        );
        assert_eq!(
            resolver.resolve_family("FontFamily", "Courier").as_deref(),
            Some("Courier")
        );
        assert_eq!(resolver.resolve_family("FontFamily", "  "), None);
    }
}
