//! Gallery - Preview Window for the Toolkit Components
//!
//! Shows the built-in card presets, any user presets, and a set of colored
//! buttons whose activations are reflected in the header.

use gpui::{
    div, prelude::*, px, Context, IntoElement, ParentElement, Render, SharedString, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::components::composite::card::Card;
use crate::components::primitives::colored_button::ColoredButton;
use crate::theme::colors::ToolkitColors;
use crate::theme::preset::StylePreset;
use crate::theme::registry::{COMPACT_PRESET, DEFAULT_PRESET, PresetRegistry};
use crate::theme::typography::FontSpec;

/// Gallery view state
pub struct Gallery {
    last_activated: Option<SharedString>,
    activations: usize,
}

impl Gallery {
    pub fn new() -> Self {
        Self {
            last_activated: None,
            activations: 0,
        }
    }

    fn status(&self) -> SharedString {
        match &self.last_activated {
            Some(label) => format!("{} activations, last: {}", self.activations, label).into(),
            None => "Nothing activated yet".into(),
        }
    }

    fn render_button(
        &self,
        id: &'static str,
        title: &'static str,
        subtitle: Option<&'static str>,
        color: gpui::Rgba,
        width: f32,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let gallery = cx.entity().downgrade();
        let button = ColoredButton::new(id, title).color(color).width_hint(width);
        let button = match subtitle {
            Some(subtitle) => button.subtitle(subtitle),
            None => button,
        };
        let label = button.accessibility_label();

        let button = button.on_activate(move |_window, cx| {
            let label = label.clone();
            if let Err(err) = gallery.update(cx, |this, cx| {
                this.activations += 1;
                this.last_activated = Some(label);
                cx.notify();
            }) {
                tracing::debug!("Gallery released before activation was recorded: {err}");
            }
        });

        div().w(px(width)).child(button)
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Gallery {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let custom_presets: Vec<(SharedString, StylePreset)> = {
            let registry = PresetRegistry::global(cx);
            registry
                .names()
                .into_iter()
                .filter_map(|name| {
                    let key = name.to_string();
                    (key != DEFAULT_PRESET && key != COMPACT_PRESET)
                        .then(|| (name, registry.resolve(&key)))
                })
                .collect()
        };

        div()
            .id("gallery")
            .size_full()
            .overflow_y_scroll()
            .bg(cx.theme().background)
            .p(px(16.0))
            .flex()
            .flex_col()
            .gap(px(16.0))
            .child(
                div()
                    .text_size(px(FontSpec::large_title().size))
                    .font_family("Menlo")
                    .text_color(cx.theme().foreground)
                    .child("Card"),
            )
            .child(Card::new().title("Default Card").child("Hello World"))
            .child(
                Card::new()
                    .title("Compact Card")
                    .preset(COMPACT_PRESET, cx)
                    .child("More compact content"),
            )
            .child(Card::new().child("Card without title"))
            .children(custom_presets.into_iter().map(|(name, preset)| {
                Card::new()
                    .title(name.clone())
                    .style(preset)
                    .child(format!("User preset '{name}'"))
            }))
            .child(
                div()
                    .text_size(px(FontSpec::large_title().size))
                    .font_family("Menlo")
                    .text_color(cx.theme().foreground)
                    .child("ColoredButton"),
            )
            .child(
                div()
                    .text_color(cx.theme().muted_foreground)
                    .child(self.status()),
            )
            .child(
                div()
                    .flex()
                    .flex_col()
                    .items_center()
                    .gap(px(12.0))
                    .child(self.render_button(
                        "cola",
                        "Cola (Süßstoff)",
                        Some("+ 150ml"),
                        ToolkitColors::red(),
                        250.0,
                        cx,
                    ))
                    .child(self.render_button(
                        "xs",
                        "XS",
                        Some("+ 150ml"),
                        ToolkitColors::yellow(),
                        200.0,
                        cx,
                    ))
                    .child(self.render_button(
                        "custom",
                        "Custom",
                        None,
                        ToolkitColors::green(),
                        150.0,
                        cx,
                    )),
            )
    }
}
