//! Typography - Text Styles, Font Designs and Dynamic Type

use gpui::{FontWeight, SharedString};

/// Typography constants (point sizes of the default type ramp)
pub struct Typography;

impl Typography {
    pub const LARGE_TITLE: f32 = 34.0;
    pub const TITLE: f32 = 28.0;
    pub const HEADLINE: f32 = 17.0;
    pub const BODY: f32 = 17.0;
    pub const CALLOUT: f32 = 16.0;
    pub const SUBHEADLINE: f32 = 15.0;
    pub const FOOTNOTE: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
    pub const CAPTION2: f32 = 11.0;
}

/// Font family flavor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontDesign {
    /// System font, no family override
    #[default]
    Default,
    /// Rounded system face
    Rounded,
    /// Fixed width face
    Monospaced,
    /// Serif face
    Serif,
}

impl FontDesign {
    /// Font family to apply, `None` keeps the inherited family
    pub fn family(self) -> Option<SharedString> {
        match self {
            FontDesign::Default => None,
            FontDesign::Rounded => Some("SF Pro Rounded".into()),
            FontDesign::Monospaced => Some("Menlo".into()),
            FontDesign::Serif => Some("New York".into()),
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" => Some(FontDesign::Default),
            "rounded" => Some(FontDesign::Rounded),
            "monospaced" => Some(FontDesign::Monospaced),
            "serif" => Some(FontDesign::Serif),
            _ => None,
        }
    }
}

/// A complete font descriptor: size, weight and design
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub size: f32,
    pub weight: FontWeight,
    pub design: FontDesign,
}

impl FontSpec {
    pub const fn new(size: f32) -> Self {
        Self {
            size,
            weight: FontWeight::NORMAL,
            design: FontDesign::Default,
        }
    }

    pub const fn large_title() -> Self { Self::new(Typography::LARGE_TITLE) }
    pub const fn title() -> Self { Self::new(Typography::TITLE) }
    pub const fn headline() -> Self { Self::new(Typography::HEADLINE).weight(FontWeight::SEMIBOLD) }
    pub const fn body() -> Self { Self::new(Typography::BODY) }
    pub const fn callout() -> Self { Self::new(Typography::CALLOUT) }
    pub const fn subheadline() -> Self { Self::new(Typography::SUBHEADLINE) }
    pub const fn footnote() -> Self { Self::new(Typography::FOOTNOTE) }
    pub const fn caption() -> Self { Self::new(Typography::CAPTION) }
    pub const fn caption2() -> Self { Self::new(Typography::CAPTION2) }

    pub const fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub const fn design(mut self, design: FontDesign) -> Self {
        self.design = design;
        self
    }

    pub const fn bold(self) -> Self {
        self.weight(FontWeight::BOLD)
    }

    /// Same font at a different point size
    pub const fn sized(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::body()
    }
}

/// User preferred text size category, smallest to largest
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum DynamicTypeSize {
    XSmall,
    Small,
    Medium,
    #[default]
    Large,
    XLarge,
    XxLarge,
    XxxLarge,
    Accessibility1,
    Accessibility2,
    Accessibility3,
    Accessibility4,
    Accessibility5,
}

impl DynamicTypeSize {
    /// Multiplier applied to the nominal font size (`Large` is 1.0)
    pub fn scale(self) -> f32 {
        match self {
            DynamicTypeSize::XSmall => 0.82,
            DynamicTypeSize::Small => 0.88,
            DynamicTypeSize::Medium => 0.94,
            DynamicTypeSize::Large => 1.0,
            DynamicTypeSize::XLarge => 1.12,
            DynamicTypeSize::XxLarge => 1.24,
            DynamicTypeSize::XxxLarge => 1.35,
            DynamicTypeSize::Accessibility1 => 1.64,
            DynamicTypeSize::Accessibility2 => 1.95,
            DynamicTypeSize::Accessibility3 => 2.35,
            DynamicTypeSize::Accessibility4 => 2.76,
            DynamicTypeSize::Accessibility5 => 3.12,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_caption2_keeps_size() {
        let font = FontSpec::caption2().bold();
        assert_eq!(font.size, Typography::CAPTION2);
        assert_eq!(font.weight, FontWeight::BOLD);
    }

    #[test]
    fn dynamic_type_scale_is_monotonic() {
        let sizes = [
            DynamicTypeSize::XSmall,
            DynamicTypeSize::Small,
            DynamicTypeSize::Medium,
            DynamicTypeSize::Large,
            DynamicTypeSize::XLarge,
            DynamicTypeSize::XxLarge,
            DynamicTypeSize::XxxLarge,
            DynamicTypeSize::Accessibility1,
            DynamicTypeSize::Accessibility2,
            DynamicTypeSize::Accessibility3,
            DynamicTypeSize::Accessibility4,
            DynamicTypeSize::Accessibility5,
        ];
        for pair in sizes.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].scale() < pair[1].scale());
        }
        assert_eq!(DynamicTypeSize::default().scale(), 1.0);
    }

    #[test]
    fn font_design_parse() {
        assert_eq!(FontDesign::parse("Rounded"), Some(FontDesign::Rounded));
        assert_eq!(FontDesign::parse("gothic"), None);
        assert!(FontDesign::Default.family().is_none());
    }
}
