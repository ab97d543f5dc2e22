//! ADToolkit
//!
//! Style-configurable GPUI components: a [`Card`](components::composite::card::Card)
//! container driven by a [`StylePreset`](theme::preset::StylePreset), and a
//! [`ColoredButton`](components::primitives::colored_button::ColoredButton).

use gpui::App;

pub mod app;
pub mod components;
pub mod error;
pub mod helpers;
pub mod theme;

use crate::theme::registry::PresetRegistry;

/// Initialize gpui-component and install the preset registry, merging the
/// user's preset file when one exists.
pub fn init(cx: &mut App) {
    gpui_component::init(cx);

    let mut registry = PresetRegistry::new();
    match registry.load_user_presets() {
        Ok(0) => {}
        Ok(count) => tracing::info!("Merged {count} user style presets"),
        Err(err) => tracing::warn!("Ignoring user style presets: {err}"),
    }
    cx.set_global(registry);
}
