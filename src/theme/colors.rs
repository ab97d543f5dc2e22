//! Colors - Toolkit Palette and Semantic Color Roles

use gpui::{App, Hsla, Rgba, rgb, rgba};
use gpui_component::ActiveTheme;

use crate::error::{Error, Result};

/// Toolkit color palette - all colors are accessed via associated functions
pub struct ToolkitColors;

impl ToolkitColors {
    /// Neutral gray, the default button accent
    pub fn gray() -> Rgba { rgb(0x8e8e93) }
    /// Red accent
    pub fn red() -> Rgba { rgb(0xff3b30) }
    /// Yellow accent
    pub fn yellow() -> Rgba { rgb(0xffcc00) }
    /// Green accent
    pub fn green() -> Rgba { rgb(0x34c759) }
    /// Blue accent
    pub fn blue() -> Rgba { rgb(0x007aff) }

    /// Shadow base color
    pub fn shadow() -> Rgba { rgba(0x000000ff) }
}

/// Convert palette colors to Hsla for style fields
impl ToolkitColors {
    pub fn gray_hsla() -> Hsla {
        Hsla::from(Self::gray())
    }

    /// Black at the given opacity, used for card shadows
    pub fn shadow_hsla(opacity: f32) -> Hsla {
        Hsla::from(Self::shadow()).opacity(opacity)
    }
}

/// A color that is either semantic (resolved against the active theme) or fixed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRole {
    /// Primary text color of the active theme
    Primary,
    /// Secondary (muted) text color of the active theme
    Secondary,
    /// A fixed color
    Custom(Hsla),
}

impl ColorRole {
    /// Resolve to a concrete color using the active gpui-component theme
    pub fn resolve(self, cx: &App) -> Hsla {
        match self {
            ColorRole::Primary => cx.theme().foreground,
            ColorRole::Secondary => cx.theme().muted_foreground,
            ColorRole::Custom(color) => color,
        }
    }

    /// Parse `primary`, `secondary`, or a hex literal
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(ColorRole::Primary),
            "secondary" => Ok(ColorRole::Secondary),
            _ => parse_hex(value).map(ColorRole::Custom),
        }
    }
}

impl From<Hsla> for ColorRole {
    fn from(color: Hsla) -> Self {
        ColorRole::Custom(color)
    }
}

impl From<Rgba> for ColorRole {
    fn from(color: Rgba) -> Self {
        ColorRole::Custom(color.into())
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into a color
pub fn parse_hex(value: &str) -> Result<Hsla> {
    let invalid = || Error::InvalidColor {
        value: value.to_string(),
    };

    let digits = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;

    let rgba_value = match digits.len() {
        6 => (packed << 8) | 0xff,
        8 => packed,
        _ => return Err(invalid()),
    };

    Ok(Hsla::from(rgba(rgba_value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_without_alpha_is_opaque() {
        let color = parse_hex("#ff0000").expect("valid hex");
        assert_eq!(color.a, 1.0);
        assert_eq!(color, Hsla::from(rgb(0xff0000)));
    }

    #[test]
    fn parse_hex_with_alpha() {
        let color = parse_hex("#00000080").expect("valid hex");
        assert!((color.a - 128.0 / 255.0).abs() < 1e-4);
    }

    #[test]
    fn parse_hex_rejects_garbage() {
        assert!(parse_hex("ff0000").is_err());
        assert!(parse_hex("#ff00").is_err());
        assert!(parse_hex("#gg0000").is_err());
    }

    #[test]
    fn parse_role_names() {
        assert_eq!(ColorRole::parse("primary").ok(), Some(ColorRole::Primary));
        assert_eq!(ColorRole::parse(" Secondary ").ok(), Some(ColorRole::Secondary));
        assert!(matches!(ColorRole::parse("#123456"), Ok(ColorRole::Custom(_))));
    }

    #[test]
    fn shadow_opacity_scales_alpha() {
        let shadow = ToolkitColors::shadow_hsla(0.12);
        assert!((shadow.a - 0.12).abs() < 1e-6);
    }
}
