//! Application - Gallery Initialization and Window Management

use std::path::PathBuf;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, KeyBinding, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::gallery::Gallery;
use crate::theme::registry::PresetRegistry;

actions!(ad_toolkit, [Quit]);

/// Run the gallery, optionally merging presets from a TOML file
pub fn run_app(presets: Option<PathBuf>) {
    Application::new().run(move |cx: &mut App| {
        crate::init(cx);

        if let Some(path) = &presets {
            let mut registry = PresetRegistry::global(cx).clone();
            match registry.load_file(path) {
                Ok(_) => cx.set_global(registry),
                Err(err) => tracing::error!("Failed to load presets from {}: {err}", path.display()),
            }
        }

        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());
        cx.bind_keys([KeyBinding::new("secondary-q", Quit, None)]);

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(None, gpui::size(px(480.0), px(860.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("ADToolkit Gallery")),
                ..Default::default()
            }),
            ..Default::default()
        };

        if let Err(err) = cx.open_window(window_options, |_window, cx| cx.new(|_| Gallery::new())) {
            tracing::error!("Failed to open gallery window: {err}");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
