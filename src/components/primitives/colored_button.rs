//! Colored Button Component
//!
//! A flat, tinted button with a colored border, a title and an optional
//! subtitle. The tint and the stroke share one rounded rectangle.

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, Hsla, InteractiveElement,
    IntoElement, ParentElement, RenderOnce, SharedString, StatefulInteractiveElement,
    Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::components::accessibility::{AccessNode, Role};
use crate::helpers::{MIN_SCALE_FACTOR, fit_font_size};
use crate::theme::colors::ToolkitColors;
use crate::theme::typography::{DynamicTypeSize, FontSpec};

pub const DEFAULT_CORNER_RADIUS: f32 = 18.0;
pub const DEFAULT_BORDER_WIDTH: f32 = 1.5;
pub const DEFAULT_MIN_HEIGHT: f32 = 54.0;

/// Opacity of the background tint relative to the accent color
pub const TINT_OPACITY: f32 = 0.2;

const STACK_SPACING: f32 = 6.0;
const VERTICAL_PADDING: f32 = 6.0;
const TITLE_MAX_LINES: usize = 2;
const SUBTITLE_MAX_LINES: usize = 1;
const TITLE_MIN_LINE_HEIGHT: f32 = 18.0;
const SUBTITLE_MIN_LINE_HEIGHT: f32 = 14.0;

/// Text scaling range the button supports
pub const TYPE_SIZE_RANGE: (DynamicTypeSize, DynamicTypeSize) =
    (DynamicTypeSize::XxxLarge, DynamicTypeSize::Accessibility5);

type ActivateHandler = Rc<dyn Fn(&mut Window, &mut App) + 'static>;

/// A text line inside the button, with its font already resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLine {
    pub text: SharedString,
    /// Point size after type scaling and shrink-to-fit
    pub size: f32,
    pub font: FontSpec,
    pub max_lines: usize,
    pub min_line_height: f32,
}

/// Tinted, bordered button
#[derive(IntoElement)]
pub struct ColoredButton {
    id: ElementId,
    title: SharedString,
    subtitle: Option<SharedString>,
    title_font: FontSpec,
    subtitle_font: FontSpec,
    color: Hsla,
    corner_radius: f32,
    border_width: f32,
    min_height: f32,
    type_size: DynamicTypeSize,
    width_hint: Option<f32>,
    on_activate: Option<ActivateHandler>,
}

impl ColoredButton {
    /// Create a gray button with the given title
    pub fn new(id: impl Into<ElementId>, title: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: None,
            title_font: FontSpec::caption(),
            subtitle_font: FontSpec::caption2().bold(),
            color: ToolkitColors::gray_hsla(),
            corner_radius: DEFAULT_CORNER_RADIUS,
            border_width: DEFAULT_BORDER_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            type_size: DynamicTypeSize::default(),
            width_hint: None,
            on_activate: None,
        }
    }

    /// Set the secondary line under the title
    pub fn subtitle(mut self, subtitle: impl Into<SharedString>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn title_font(mut self, font: FontSpec) -> Self {
        self.title_font = font;
        self
    }

    pub fn subtitle_font(mut self, font: FontSpec) -> Self {
        self.subtitle_font = font;
        self
    }

    /// Set the accent used for the border and the background tint
    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = color.into();
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = width;
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Requested text size category, clamped to [`TYPE_SIZE_RANGE`]
    pub fn type_size(mut self, size: DynamicTypeSize) -> Self {
        self.type_size = size;
        self
    }

    /// Width the button is laid out in, used to shrink long text
    pub fn width_hint(mut self, width: f32) -> Self {
        self.width_hint = Some(width);
        self
    }

    /// Set the activation handler
    pub fn on_activate(mut self, handler: impl Fn(&mut Window, &mut App) + 'static) -> Self {
        self.on_activate = Some(Rc::new(handler));
        self
    }

    /// Label read by assistive technology: title, a space, then the subtitle
    /// or nothing. The trailing space for a missing subtitle is kept.
    pub fn accessibility_label(&self) -> SharedString {
        let subtitle = self.subtitle.as_ref().map(|s| s.to_string()).unwrap_or_default();
        format!("{} {}", self.title, subtitle).into()
    }

    pub fn accessibility(&self) -> AccessNode {
        AccessNode::new(Role::Button).label(self.accessibility_label())
    }

    /// Type size after clamping to the supported range
    pub fn effective_type_size(&self) -> DynamicTypeSize {
        self.type_size.clamp(TYPE_SIZE_RANGE.0, TYPE_SIZE_RANGE.1)
    }

    /// Text lines the button renders, top to bottom
    pub fn lines(&self) -> Vec<ButtonLine> {
        let scale = self.effective_type_size().scale();
        let available = self
            .width_hint
            .map(|width| (width - 2.0 * self.border_width).max(0.0))
            .unwrap_or(0.0);

        let line = |text: &SharedString, font: FontSpec, max_lines: usize, min_line_height: f32| {
            let content: &str = text.as_ref();
            let size = fit_font_size(content, font.size * scale, available, max_lines, MIN_SCALE_FACTOR);
            ButtonLine {
                text: text.clone(),
                size,
                font,
                max_lines,
                min_line_height,
            }
        };

        let mut lines = vec![line(&self.title, self.title_font, TITLE_MAX_LINES, TITLE_MIN_LINE_HEIGHT)];
        if let Some(subtitle) = &self.subtitle {
            lines.push(line(subtitle, self.subtitle_font, SUBTITLE_MAX_LINES, SUBTITLE_MIN_LINE_HEIGHT));
        }
        lines
    }

    /// Run the activation handler once
    pub fn activate(&self, window: &mut Window, cx: &mut App) {
        tracing::debug!("Activated button '{}'", self.accessibility_label());
        if let Some(handler) = &self.on_activate {
            handler(window, cx);
        }
    }
}

fn render_line(line: ButtonLine, color: Hsla) -> impl IntoElement {
    div()
        .w_full()
        .flex()
        .justify_center()
        .min_h(px(line.min_line_height))
        .child(
            div()
                .text_center()
                .text_size(px(line.size))
                .font_weight(line.font.weight)
                .when_some(line.font.design.family(), |el, family| el.font_family(family))
                .text_color(color)
                .line_clamp(line.max_lines)
                .text_ellipsis()
                .child(line.text),
        )
}

impl RenderOnce for ColoredButton {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = cx.theme().foreground;
        let lines = self.lines();
        let accent = self.color;
        let radius = px(self.corner_radius);
        let border = px(self.border_width.max(0.0));
        let min_height = px(self.min_height.max(0.0));
        let id = self.id.clone();
        let button = Rc::new(self);

        let stack = div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .justify_center()
            .gap(px(STACK_SPACING))
            .min_h(min_height)
            .children(lines.into_iter().map(|line| render_line(line, text_color)));

        let mut element = div()
            .id(id)
            .w_full()
            .py(px(VERTICAL_PADDING))
            .bg(accent.opacity(TINT_OPACITY))
            .border_color(accent)
            .rounded(radius)
            .overflow_hidden()
            .cursor_pointer()
            .child(stack);

        let widths = &mut element.style().border_widths;
        widths.top = Some(border.into());
        widths.right = Some(border.into());
        widths.bottom = Some(border.into());
        widths.left = Some(border.into());

        element.on_click(move |_event: &ClickEvent, window, cx| {
            button.activate(window, cx);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    use gpui::{point, Context, FontWeight, Modifiers, Render, TestAppContext};

    use crate::theme::registry::PresetRegistry;
    use crate::theme::typography::Typography;

    fn button(title: &str, subtitle: Option<&str>) -> ColoredButton {
        let button = ColoredButton::new("test-button", title.to_string());
        match subtitle {
            Some(subtitle) => button.subtitle(subtitle.to_string()),
            None => button,
        }
    }

    #[test]
    fn label_joins_title_and_subtitle() {
        assert_eq!(button("Cola", Some("+150ml")).accessibility_label().to_string(), "Cola +150ml");
    }

    #[test]
    fn label_without_subtitle_keeps_trailing_space() {
        let label = button("XS", None).accessibility_label().to_string();
        assert_eq!(label, "XS ");
        assert!(!label.contains("None"));
    }

    #[test]
    fn accessibility_node_is_a_single_button() {
        let node = button("Cola", Some("+150ml")).accessibility();
        assert_eq!(node.role, Role::Button);
        assert!(node.children.is_empty());
        assert_eq!(node.label.map(|l| l.to_string()), Some("Cola +150ml".to_string()));
    }

    #[test]
    fn defaults() {
        let b = button("Custom", None);
        assert_eq!(b.corner_radius, 18.0);
        assert_eq!(b.border_width, 1.5);
        assert_eq!(b.min_height, 54.0);
        assert_eq!(b.title_font, FontSpec::caption());
        assert_eq!(b.subtitle_font.weight, FontWeight::BOLD);
        assert_eq!(b.subtitle_font.size, Typography::CAPTION2);
        assert_eq!(b.color, ToolkitColors::gray_hsla());
        assert!(b.on_activate.is_none());
    }

    #[test]
    fn subtitle_adds_single_line() {
        let lines = button("Cola", Some("+150ml")).lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].max_lines, 2);
        assert_eq!(lines[1].max_lines, 1);
        assert!(lines[1].min_line_height < lines[0].min_line_height);

        assert_eq!(button("XS", None).lines().len(), 1);
    }

    #[test]
    fn type_size_is_clamped_to_supported_range() {
        assert_eq!(button("a", None).effective_type_size(), DynamicTypeSize::XxxLarge);
        assert_eq!(
            button("a", None).type_size(DynamicTypeSize::XSmall).effective_type_size(),
            DynamicTypeSize::XxxLarge
        );
        assert_eq!(
            button("a", None).type_size(DynamicTypeSize::Accessibility3).effective_type_size(),
            DynamicTypeSize::Accessibility3
        );
    }

    #[test]
    fn largest_type_size_scales_fonts() {
        let lines = button("XS", None).type_size(DynamicTypeSize::Accessibility5).lines();
        let expected = Typography::CAPTION * DynamicTypeSize::Accessibility5.scale();
        assert!((lines[0].size - expected).abs() < 1e-4);
    }

    #[test]
    fn long_title_shrinks_to_half_at_most() {
        let b = button("Cola (Süßstoff) with a very long description", Some("+ 150ml"))
            .width_hint(60.0);
        let nominal = Typography::CAPTION * b.effective_type_size().scale();
        let title = &b.lines()[0];
        assert!(title.size < nominal);
        assert!(title.size >= nominal * MIN_SCALE_FACTOR);
    }

    #[test]
    fn boundary_inputs_build() {
        let b = ColoredButton::new("edge", "")
            .min_height(0.0)
            .border_width(0.0)
            .corner_radius(0.0)
            .width_hint(0.0);
        assert_eq!(b.lines().len(), 1);
        assert_eq!(b.accessibility_label().to_string(), " ");
    }

    struct Host;

    impl Render for Host {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div()
        }
    }

    #[gpui::test]
    fn activation_invokes_handler_exactly_once(cx: &mut TestAppContext) {
        let window = cx.add_window(|_, _| Host);

        for (title, subtitle) in [("Cola", Some("+150ml")), ("XS", None), ("", None)] {
            let count = Rc::new(Cell::new(0));
            let counter = count.clone();
            let b = button(title, subtitle).on_activate(move |_, _| counter.set(counter.get() + 1));

            window
                .update(cx, |_, window, cx| b.activate(window, cx))
                .expect("window is open");

            assert_eq!(count.get(), 1);
        }
    }

    #[gpui::test]
    fn activation_without_handler_is_a_no_op(cx: &mut TestAppContext) {
        let window = cx.add_window(|_, _| Host);
        let b = button("XS", None);
        window
            .update(cx, |_, window, cx| b.activate(window, cx))
            .expect("window is open");
    }

    fn init_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            gpui_component::init(cx);
            cx.set_global(PresetRegistry::new());
        });
    }

    /// Renders one button filling the window, counting activations
    struct ButtonHost {
        title: &'static str,
        subtitle: Option<&'static str>,
        count: Rc<Cell<usize>>,
    }

    impl Render for ButtonHost {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            let counter = self.count.clone();
            div().size_full().child(
                button(self.title, self.subtitle)
                    .on_activate(move |_, _| counter.set(counter.get() + 1)),
            )
        }
    }

    #[gpui::test]
    fn click_on_rendered_button_activates_once(cx: &mut TestAppContext) {
        init_theme(cx);

        for (title, subtitle) in [("Cola", Some("+150ml")), ("XS", None)] {
            let count = Rc::new(Cell::new(0));
            let (_view, cx) = cx.add_window_view(|_, _| ButtonHost {
                title,
                subtitle,
                count: count.clone(),
            });
            cx.run_until_parked();

            cx.simulate_click(point(px(10.0), px(10.0)), Modifiers::none());
            assert_eq!(count.get(), 1);
        }
    }

    struct BoundaryHost;

    impl Render for BoundaryHost {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child(
                ColoredButton::new("edge", "")
                    .min_height(0.0)
                    .border_width(0.0)
                    .corner_radius(0.0)
                    .width_hint(0.0),
            )
        }
    }

    #[gpui::test]
    fn boundary_button_renders(cx: &mut TestAppContext) {
        init_theme(cx);

        let (_view, cx) = cx.add_window_view(|_, _| BoundaryHost);
        cx.run_until_parked();
        cx.simulate_click(point(px(1.0), px(1.0)), Modifiers::none());
    }
}
