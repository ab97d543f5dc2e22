//! Style Presets
//!
//! An immutable bundle of the visual parameters a [`Card`](crate::components::composite::card::Card)
//! needs. Fields are private and only readable; the `with_*` methods hand back
//! a modified copy and leave the original untouched.

use gpui::{App, FontWeight, Hsla};
use gpui_component::ActiveTheme;

use crate::theme::colors::{ColorRole, ToolkitColors};
use crate::theme::typography::{FontDesign, FontSpec};

/// Horizontal placement of the card title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleAlignment {
    #[default]
    Leading,
    Center,
    Trailing,
}

impl TitleAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "leading" | "left" => Some(TitleAlignment::Leading),
            "center" => Some(TitleAlignment::Center),
            "trailing" | "right" => Some(TitleAlignment::Trailing),
            _ => None,
        }
    }
}

/// Four-sided padding
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeInsets {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl EdgeInsets {
    pub const fn new(top: f32, leading: f32, bottom: f32, trailing: f32) -> Self {
        Self {
            top,
            leading,
            bottom,
            trailing,
        }
    }
}

/// Translucent fill thickness. Rendered as the theme background at a fixed
/// opacity since GPUI has no backdrop blur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Material {
    #[default]
    UltraThin,
    Thin,
    Regular,
    Thick,
}

impl Material {
    pub fn opacity(self) -> f32 {
        match self {
            Material::UltraThin => 0.55,
            Material::Thin => 0.7,
            Material::Regular => 0.82,
            Material::Thick => 0.92,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "ultrathin" => Some(Material::UltraThin),
            "thin" => Some(Material::Thin),
            "regular" => Some(Material::Regular),
            "thick" => Some(Material::Thick),
            _ => None,
        }
    }
}

/// Card background fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardBackground {
    Solid(ColorRole),
    Material(Material),
}

impl CardBackground {
    pub fn resolve(self, cx: &App) -> Hsla {
        match self {
            CardBackground::Solid(role) => role.resolve(cx),
            CardBackground::Material(material) => {
                cx.theme().background.opacity(material.opacity())
            }
        }
    }
}

impl From<Material> for CardBackground {
    fn from(material: Material) -> Self {
        CardBackground::Material(material)
    }
}

/// Visual parameters for a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StylePreset {
    title_color: ColorRole,
    title_font: FontSpec,
    title_alignment: TitleAlignment,
    vertical_spacing: f32,
    card_padding: f32,
    content_horizontal_padding: f32,
    divider_padding: EdgeInsets,
    background: CardBackground,
    corner_radius: f32,
    shadow_color: Hsla,
    shadow_radius: f32,
}

impl StylePreset {
    /// Create a preset. Every attribute is stored exactly as given.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title_color: ColorRole,
        title_font: FontSpec,
        title_alignment: TitleAlignment,
        vertical_spacing: f32,
        card_padding: f32,
        content_horizontal_padding: f32,
        divider_padding: EdgeInsets,
        background: CardBackground,
        corner_radius: f32,
        shadow_color: Hsla,
        shadow_radius: f32,
    ) -> Self {
        Self {
            title_color,
            title_font,
            title_alignment,
            vertical_spacing,
            card_padding,
            content_horizontal_padding,
            divider_padding,
            background,
            corner_radius,
            shadow_color,
            shadow_radius,
        }
    }

    /// Tighter spacing, smaller radius and secondary toned title
    pub fn compact() -> Self {
        Self::new(
            ColorRole::Secondary,
            FontSpec::footnote()
                .weight(FontWeight::MEDIUM)
                .design(FontDesign::Rounded),
            TitleAlignment::Leading,
            4.0,
            8.0,
            4.0,
            EdgeInsets::new(2.0, 0.0, 4.0, 0.0),
            CardBackground::Material(Material::Thin),
            18.0,
            ToolkitColors::shadow_hsla(0.08),
            1.0,
        )
    }

    // ==================== Getters ====================

    pub fn title_color(&self) -> ColorRole {
        self.title_color
    }

    pub fn title_font(&self) -> FontSpec {
        self.title_font
    }

    pub fn title_weight(&self) -> FontWeight {
        self.title_font.weight
    }

    pub fn title_design(&self) -> FontDesign {
        self.title_font.design
    }

    pub fn title_alignment(&self) -> TitleAlignment {
        self.title_alignment
    }

    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    pub fn card_padding(&self) -> f32 {
        self.card_padding
    }

    pub fn content_horizontal_padding(&self) -> f32 {
        self.content_horizontal_padding
    }

    pub fn divider_padding(&self) -> EdgeInsets {
        self.divider_padding
    }

    pub fn background(&self) -> CardBackground {
        self.background
    }

    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn shadow_color(&self) -> Hsla {
        self.shadow_color
    }

    pub fn shadow_radius(&self) -> f32 {
        self.shadow_radius
    }

    // ==================== Derived copies ====================

    pub fn with_title_color(mut self, color: impl Into<ColorRole>) -> Self {
        self.title_color = color.into();
        self
    }

    pub fn with_title_font(mut self, font: FontSpec) -> Self {
        self.title_font = font;
        self
    }

    pub fn with_title_alignment(mut self, alignment: TitleAlignment) -> Self {
        self.title_alignment = alignment;
        self
    }

    pub fn with_vertical_spacing(mut self, spacing: f32) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    pub fn with_card_padding(mut self, padding: f32) -> Self {
        self.card_padding = padding;
        self
    }

    pub fn with_content_horizontal_padding(mut self, padding: f32) -> Self {
        self.content_horizontal_padding = padding;
        self
    }

    pub fn with_divider_padding(mut self, insets: EdgeInsets) -> Self {
        self.divider_padding = insets;
        self
    }

    pub fn with_background(mut self, background: impl Into<CardBackground>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_shadow(mut self, color: Hsla, radius: f32) -> Self {
        self.shadow_color = color;
        self.shadow_radius = radius;
        self
    }
}

/// Comfortable padding, large radius and ultra thin material
impl Default for StylePreset {
    fn default() -> Self {
        Self::new(
            ColorRole::Primary,
            FontSpec::callout().weight(FontWeight::SEMIBOLD),
            TitleAlignment::Leading,
            6.0,
            12.0,
            6.0,
            EdgeInsets::new(4.0, 0.0, 8.0, 0.0),
            CardBackground::Material(Material::UltraThin),
            28.0,
            ToolkitColors::shadow_hsla(0.12),
            2.0,
        )
    }
}
