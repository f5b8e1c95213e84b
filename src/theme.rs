//! Colors for the post window palette

use serde::{Deserialize, Serialize};

/// An RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        if !s.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        match s.len() {
            6 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: 255,
            }),
            8 => Ok(Color {
                r: u8::from_str_radix(&s[0..2], 16).map_err(|e| e.to_string())?,
                g: u8::from_str_radix(&s[2..4], 16).map_err(|e| e.to_string())?,
                b: u8::from_str_radix(&s[4..6], 16).map_err(|e| e.to_string())?,
                a: u8::from_str_radix(&s[6..8], 16).map_err(|e| e.to_string())?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

/// Raw text colors as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ColorsConfig {
    /// Text foreground, e.g. "#e0e0e0"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Text background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}

/// Resolved palette; `None` leaves the host's default color in place
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Palette {
    pub text: Option<Color>,
    pub background: Option<Color>,
}

impl Palette {
    /// Resolve configured colors, skipping any that fail to parse
    pub fn from_config(colors: &ColorsConfig) -> Self {
        Self {
            text: parse_optional(colors.text.as_deref(), "text"),
            background: parse_optional(colors.background.as_deref(), "background"),
        }
    }
}

fn parse_optional(value: Option<&str>, role: &str) -> Option<Color> {
    let value = value?;
    match Color::from_hex(value) {
        Ok(color) => Some(color),
        Err(e) => {
            tracing::warn!("Ignoring {} color {:?}: {}", role, value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::rgb(255, 128, 0));
        assert_eq!(Color::from_hex("00000080").unwrap().a, 0x80);
        assert!(Color::from_hex("#fff").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn test_palette_keeps_only_valid_colors() {
        let palette = Palette::from_config(&ColorsConfig {
            text: Some("#ffffff".into()),
            background: Some("nope".into()),
        });
        assert_eq!(palette.text, Some(Color::rgb(255, 255, 255)));
        assert_eq!(palette.background, None);
    }

    #[test]
    fn test_palette_default_is_empty() {
        let palette = Palette::from_config(&ColorsConfig::default());
        assert_eq!(palette, Palette::default());
    }
}
