//! Preset Registry
//!
//! Named lookup of [`StylePreset`]s. Seeded with the built-in `default` and
//! `compact` presets and extensible from TOML preset files.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use gpui::{App, FontWeight, Global, SharedString};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::theme::colors::{ColorRole, parse_hex};
use crate::theme::preset::{CardBackground, EdgeInsets, Material, StylePreset, TitleAlignment};
use crate::theme::typography::FontDesign;

pub const DEFAULT_PRESET: &str = "default";
pub const COMPACT_PRESET: &str = "compact";

const USER_PRESETS_FILE: &str = "presets.toml";

/// Top level of a preset file
#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: BTreeMap<String, PresetOverrides>,
}

/// Field overrides applied on top of a base preset
#[derive(Debug, Default, Clone, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PresetOverrides {
    /// Base preset name, `default` when omitted
    pub extends: Option<String>,
    /// `primary`, `secondary` or a `#RRGGBB[AA]` color
    pub title_color: Option<String>,
    pub title_size: Option<f32>,
    /// Numeric weight, 100..=900
    pub title_weight: Option<f32>,
    /// `default`, `rounded`, `monospaced` or `serif`
    pub title_design: Option<String>,
    /// `leading`, `center` or `trailing`
    pub title_alignment: Option<String>,
    pub vertical_spacing: Option<f32>,
    pub card_padding: Option<f32>,
    pub content_horizontal_padding: Option<f32>,
    pub divider_padding: Option<InsetsConfig>,
    /// Material name or a color literal
    pub background: Option<String>,
    pub corner_radius: Option<f32>,
    pub shadow_color: Option<String>,
    pub shadow_radius: Option<f32>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct InsetsConfig {
    pub top: f32,
    pub leading: f32,
    pub bottom: f32,
    pub trailing: f32,
}

impl From<InsetsConfig> for EdgeInsets {
    fn from(insets: InsetsConfig) -> Self {
        EdgeInsets::new(insets.top, insets.leading, insets.bottom, insets.trailing)
    }
}

fn invalid(field: &str, value: &str) -> Error {
    Error::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

fn parse_background(value: &str) -> Result<CardBackground> {
    if let Some(material) = Material::parse(value) {
        return Ok(CardBackground::Material(material));
    }
    ColorRole::parse(value)
        .map(CardBackground::Solid)
        .map_err(|_| Error::InvalidBackground {
            value: value.to_string(),
        })
}

impl PresetOverrides {
    /// Apply the overrides to `base`, returning the derived preset
    pub fn apply(&self, base: StylePreset) -> Result<StylePreset> {
        let mut preset = base;

        if let Some(color) = &self.title_color {
            preset = preset.with_title_color(ColorRole::parse(color)?);
        }

        let mut font = preset.title_font();
        if let Some(size) = self.title_size {
            font = font.sized(size);
        }
        if let Some(weight) = self.title_weight {
            font = font.weight(FontWeight(weight));
        }
        if let Some(design) = &self.title_design {
            font = font.design(FontDesign::parse(design).ok_or_else(|| invalid("title_design", design))?);
        }
        preset = preset.with_title_font(font);

        if let Some(alignment) = &self.title_alignment {
            let alignment = TitleAlignment::parse(alignment)
                .ok_or_else(|| invalid("title_alignment", alignment))?;
            preset = preset.with_title_alignment(alignment);
        }
        if let Some(spacing) = self.vertical_spacing {
            preset = preset.with_vertical_spacing(spacing);
        }
        if let Some(padding) = self.card_padding {
            preset = preset.with_card_padding(padding);
        }
        if let Some(padding) = self.content_horizontal_padding {
            preset = preset.with_content_horizontal_padding(padding);
        }
        if let Some(insets) = self.divider_padding {
            preset = preset.with_divider_padding(insets.into());
        }
        if let Some(background) = &self.background {
            preset = preset.with_background(parse_background(background)?);
        }
        if let Some(radius) = self.corner_radius {
            preset = preset.with_corner_radius(radius);
        }

        let shadow_color = match &self.shadow_color {
            Some(color) => parse_hex(color)?,
            None => preset.shadow_color(),
        };
        let shadow_radius = self.shadow_radius.unwrap_or(preset.shadow_radius());
        preset = preset.with_shadow(shadow_color, shadow_radius);

        Ok(preset)
    }
}

/// Registry of named presets, installed as a GPUI global by [`crate::init`]
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: AHashMap<String, StylePreset>,
}

impl Global for PresetRegistry {}

impl PresetRegistry {
    /// Create a registry holding the built-in presets
    pub fn new() -> Self {
        let mut presets = AHashMap::new();
        presets.insert(DEFAULT_PRESET.to_string(), StylePreset::default());
        presets.insert(COMPACT_PRESET.to_string(), StylePreset::compact());
        Self { presets }
    }

    /// The registry installed in the app
    pub fn global(cx: &App) -> &Self {
        cx.global::<Self>()
    }

    pub fn get(&self, name: &str) -> Option<StylePreset> {
        self.presets.get(name).copied()
    }

    /// Look up a preset, falling back to `default` for unknown names
    pub fn resolve(&self, name: &str) -> StylePreset {
        self.get(name).unwrap_or_else(|| {
            tracing::warn!("Unknown style preset '{name}', using '{DEFAULT_PRESET}'");
            StylePreset::default()
        })
    }

    pub fn insert(&mut self, name: impl Into<String>, preset: StylePreset) {
        self.presets.insert(name.into(), preset);
    }

    /// Registered preset names, sorted
    pub fn names(&self) -> Vec<SharedString> {
        let mut names: Vec<&String> = self.presets.keys().collect();
        names.sort();
        names.into_iter().map(|name| SharedString::from(name.clone())).collect()
    }

    /// Merge presets from TOML text. Presets may extend each other in any
    /// order; a base defined in the same file is always taken from the file,
    /// so redefining a built-in affects every preset extending it. A preset
    /// extending its own name builds on the registered preset of that name.
    /// Nothing is registered unless the whole file applies cleanly.
    ///
    /// Returns the number of presets added or replaced.
    pub fn merge_toml(&mut self, text: &str) -> Result<usize> {
        let file: PresetFile = toml::from_str(text)?;
        let mut resolved = AHashMap::new();

        for name in file.presets.keys() {
            let mut chain = Vec::new();
            self.resolve_file_preset(name, &file.presets, &mut resolved, &mut chain)?;
        }

        let count = resolved.len();
        self.presets.extend(resolved);
        Ok(count)
    }

    fn resolve_file_preset(
        &self,
        name: &str,
        defined: &BTreeMap<String, PresetOverrides>,
        resolved: &mut AHashMap<String, StylePreset>,
        chain: &mut Vec<String>,
    ) -> Result<StylePreset> {
        if let Some(preset) = resolved.get(name) {
            return Ok(*preset);
        }

        let Some(overrides) = defined.get(name) else {
            return self.get(name).ok_or_else(|| Error::UnknownPreset {
                name: name.to_string(),
            });
        };

        if chain.iter().any(|visited| visited == name) {
            tracing::warn!("Style preset '{name}' extends itself through {chain:?}");
            return Err(Error::PresetCycle {
                name: name.to_string(),
            });
        }

        let base_name = overrides.extends.as_deref().unwrap_or(DEFAULT_PRESET);
        let base = if base_name == name {
            self.get(base_name).ok_or_else(|| Error::UnknownPreset {
                name: base_name.to_string(),
            })?
        } else {
            chain.push(name.to_string());
            let base = self.resolve_file_preset(base_name, defined, resolved, chain);
            chain.pop();
            base.inspect_err(|_| {
                tracing::warn!("Style preset '{name}' has no usable base '{base_name}'")
            })?
        };

        let preset = overrides.apply(base)?;
        tracing::debug!("Registered style preset '{name}' (extends '{base_name}')");
        resolved.insert(name.to_string(), preset);
        Ok(preset)
    }

    /// Merge presets from a TOML file on disk
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let count = self.merge_toml(&text)?;
        tracing::info!("Loaded {count} style presets from {}", path.display());
        Ok(count)
    }

    /// Merge the user's preset file if one exists. Returns 0 when absent.
    pub fn load_user_presets(&mut self) -> Result<usize> {
        match user_presets_path() {
            Some(path) if path.exists() => self.load_file(path),
            _ => Ok(0),
        }
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Location of the user preset file (`<config dir>/ad-toolkit/presets.toml`)
pub fn user_presets_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ad-toolkit")
        .map(|dirs| dirs.config_dir().join(USER_PRESETS_FILE))
}

/// JSON schema describing the preset file format
pub fn preset_file_schema() -> Result<String> {
    let schema = schemars::schema_for!(PresetFile);
    Ok(serde_json::to_string_pretty(&schema)?)
}
