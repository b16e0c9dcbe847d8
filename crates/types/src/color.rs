use serde::{de, Deserialize, Deserializer, Serialize};
use std::hash::{Hash, Hasher};

fn default_one() -> f32 {
    1.0
}

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one", default = "default_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    pub const fn transparent() -> Self {
        Self { r: 0, g: 0, b: 0, a: 0.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RGB`, `#RRGGBB` and the `#AARRGGBB` form used by XAML-style
    /// maps, where the leading byte is the alpha channel.
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("Color must start with #, got: {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }

        let component = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| format!("Invalid {} component: {}", name, e))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color::rgb(r, g, b))
            }
            6 => Ok(Color::rgb(
                component(0..2, "red")?,
                component(2..4, "green")?,
                component(4..6, "blue")?,
            )),
            8 => {
                let alpha = component(0..2, "alpha")?;
                Ok(Color {
                    r: component(2..4, "red")?,
                    g: component(4..6, "green")?,
                    b: component(6..8, "blue")?,
                    a: alpha as f32 / 255.0,
                })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3, 6 or 8, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "default_one")] a: f32 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse_hex("#F00").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse_hex("#00ff00").unwrap(), Color::rgb(0, 255, 0));

        let argb = Color::parse_hex("#800000FF").unwrap();
        assert_eq!((argb.r, argb.g, argb.b), (0, 0, 255));
        assert!((argb.a - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("red").is_err());
        assert!(Color::parse_hex("#12345").is_err());
        assert!(Color::parse_hex("#GG0000").is_err());
    }
}
