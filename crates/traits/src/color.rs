use pagebuilder_types::Color;
use std::collections::HashMap;
use std::fmt::Debug;

/// Turns a color token from a map into a color.
pub trait ColorResolver: Send + Sync + Debug {
    /// `key` is the attribute being resolved (e.g. `Foreground`), `token` its raw value.
    fn resolve_color(&self, key: &str, token: &str) -> Option<Color>;
}

/// Resolves `#RGB`, `#RRGGBB` and `#AARRGGBB` hex tokens, a small set of
/// named colors, and any names registered by the caller.
#[derive(Debug, Clone, Default)]
pub struct HexColorResolver {
    named: HashMap<String, Color>,
}

impl HexColorResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named color. Names are matched case-insensitively.
    pub fn with_named(mut self, name: &str, color: Color) -> Self {
        self.named.insert(name.to_lowercase(), color);
        self
    }

    fn builtin(name: &str) -> Option<Color> {
        let color = match name {
            "black" => Color::black(),
            "white" => Color::white(),
            "transparent" => Color::transparent(),
            "red" => Color::rgb(255, 0, 0),
            "green" => Color::rgb(0, 128, 0),
            "blue" => Color::rgb(0, 0, 255),
            "yellow" => Color::rgb(255, 255, 0),
            "orange" => Color::rgb(255, 165, 0),
            "gray" | "grey" => Color::gray(128),
            "lightgray" | "lightgrey" => Color::gray(211),
            "darkgray" | "darkgrey" => Color::gray(169),
            _ => return None,
        };
        Some(color)
    }
}

impl ColorResolver for HexColorResolver {
    fn resolve_color(&self, _key: &str, token: &str) -> Option<Color> {
        let token = token.trim();
        if token.starts_with('#') {
            return Color::parse_hex(token).ok();
        }
        let name = token.to_lowercase();
        self.named
            .get(&name)
            .cloned()
            .or_else(|| Self::builtin(&name))
    }
}
