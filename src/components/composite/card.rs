//! Card Component
//!
//! A rounded, shadowed container with an optional title and a divider above
//! arbitrary content. All visual parameters come from a [`StylePreset`].

use gpui::{
    div, point, prelude::*, px, AnyElement, App, BoxShadow, IntoElement, ParentElement,
    RenderOnce, SharedString, Styled, Window,
};
use gpui_component::ActiveTheme;

use crate::components::accessibility::{AccessNode, Role};
use crate::theme::colors::ColorRole;
use crate::theme::preset::{EdgeInsets, StylePreset, TitleAlignment};
use crate::theme::registry::PresetRegistry;
use crate::theme::typography::FontSpec;

/// One vertical section of a card, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub enum CardSection {
    /// Title text, tagged as a heading
    Heading {
        text: SharedString,
        font: FontSpec,
        color: ColorRole,
        alignment: TitleAlignment,
    },
    /// Hairline under the title
    Divider { insets: EdgeInsets },
    /// Caller supplied children
    Content { horizontal_padding: f32 },
}

/// Card container
#[derive(IntoElement)]
pub struct Card {
    title: Option<SharedString>,
    style: StylePreset,
    children: Vec<AnyElement>,
}

impl Card {
    /// Create an untitled card with the default style
    pub fn new() -> Self {
        Self {
            title: None,
            style: StylePreset::default(),
            children: Vec::new(),
        }
    }

    /// Set the title shown above the content
    pub fn title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the style preset
    pub fn style(mut self, style: StylePreset) -> Self {
        self.style = style;
        self
    }

    /// Use a preset registered under `name`, or `default` if unknown
    pub fn preset(self, name: &str, cx: &App) -> Self {
        let style = cx
            .try_global::<PresetRegistry>()
            .map(|registry| registry.resolve(name))
            .unwrap_or_default();
        self.style(style)
    }

    pub fn style_preset(&self) -> &StylePreset {
        &self.style
    }

    /// Sections the card renders, in order
    pub fn sections(&self) -> Vec<CardSection> {
        let mut sections = Vec::with_capacity(3);

        if let Some(title) = &self.title {
            sections.push(CardSection::Heading {
                text: title.clone(),
                font: self.style.title_font(),
                color: self.style.title_color(),
                alignment: self.style.title_alignment(),
            });
            sections.push(CardSection::Divider {
                insets: self.style.divider_padding(),
            });
        }

        sections.push(CardSection::Content {
            horizontal_padding: self.style.content_horizontal_padding(),
        });

        sections
    }

    /// The card is one grouped element that contains its children
    pub fn accessibility(&self) -> AccessNode {
        self.sections()
            .into_iter()
            .fold(AccessNode::new(Role::Group), |group, section| {
                let node = match section {
                    CardSection::Heading { text, .. } => AccessNode::new(Role::Heading).label(text),
                    CardSection::Divider { .. } => AccessNode::new(Role::Separator),
                    CardSection::Content { .. } => AccessNode::new(Role::Content),
                };
                group.child(node)
            })
    }
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for Card {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

fn render_heading(
    text: SharedString,
    font: FontSpec,
    color: ColorRole,
    alignment: TitleAlignment,
    cx: &App,
) -> impl IntoElement {
    let row = div().w_full().flex();
    let row = match alignment {
        TitleAlignment::Leading => row.justify_start(),
        TitleAlignment::Center => row.justify_center(),
        TitleAlignment::Trailing => row.justify_end(),
    };

    row.child(
        div()
            .text_size(px(font.size))
            .font_weight(font.weight)
            .when_some(font.design.family(), |el, family| el.font_family(family))
            .text_color(color.resolve(cx))
            .child(text),
    )
}

fn render_divider(insets: EdgeInsets, cx: &App) -> impl IntoElement {
    div()
        .w_full()
        .pt(px(insets.top))
        .pl(px(insets.leading))
        .pb(px(insets.bottom))
        .pr(px(insets.trailing))
        .child(div().w_full().h(px(1.0)).bg(cx.theme().border))
}

impl RenderOnce for Card {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let sections = self.sections();
        let style = self.style;
        let mut content = Some(self.children);

        let shadow = BoxShadow {
            color: style.shadow_color(),
            offset: point(px(0.0), px(0.0)),
            blur_radius: px(style.shadow_radius()),
            spread_radius: px(0.0),
        };

        div()
            .flex()
            .flex_col()
            .w_full()
            .gap(px(style.vertical_spacing()))
            .p(px(style.card_padding()))
            .bg(style.background().resolve(cx))
            .rounded(px(style.corner_radius()))
            .shadow(vec![shadow])
            .children(sections.into_iter().map(|section| match section {
                CardSection::Heading {
                    text,
                    font,
                    color,
                    alignment,
                } => render_heading(text, font, color, alignment, cx).into_any_element(),
                CardSection::Divider { insets } => render_divider(insets, cx).into_any_element(),
                CardSection::Content { horizontal_padding } => div()
                    .w_full()
                    .px(px(horizontal_padding))
                    .children(content.take().unwrap_or_default())
                    .into_any_element(),
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::{Context, Render, TestAppContext};

    use crate::components::primitives::colored_button::ColoredButton;
    use crate::theme::preset::CardBackground;

    #[test]
    fn untitled_card_renders_content_only() {
        let card = Card::new().style(StylePreset::compact());
        let sections = card.sections();

        assert_eq!(
            sections,
            vec![CardSection::Content {
                horizontal_padding: StylePreset::compact().content_horizontal_padding()
            }]
        );
    }

    #[test]
    fn titled_card_has_heading_then_divider_then_content() {
        let style = StylePreset::default();
        let card = Card::new().title("Default Card");
        let sections = card.sections();

        assert_eq!(sections.len(), 3);
        assert!(matches!(
            &sections[0],
            CardSection::Heading { text, font, color, alignment }
                if text.to_string() == "Default Card"
                    && *font == style.title_font()
                    && *color == style.title_color()
                    && *alignment == style.title_alignment()
        ));
        assert_eq!(
            sections[1],
            CardSection::Divider {
                insets: style.divider_padding()
            }
        );
        assert!(matches!(sections[2], CardSection::Content { .. }));
    }

    #[test]
    fn heading_role_only_when_titled() {
        for title in ["Hello", " ", "Compact Card"] {
            let tree = Card::new().title(title).accessibility();
            let heading = tree.find(Role::Heading).expect("titled card has a heading");
            assert_eq!(heading.label.as_ref().map(|l| l.to_string()), Some(title.to_string()));
            assert_eq!(tree.count(Role::Separator), 1);
        }

        let tree = Card::new().accessibility();
        assert!(tree.find(Role::Heading).is_none());
        assert_eq!(tree.count(Role::Separator), 0);
        assert_eq!(tree.count(Role::Content), 1);
    }

    #[test]
    fn card_is_one_group_containing_children() {
        let tree = Card::new().title("Group").accessibility();
        assert_eq!(tree.role, Role::Group);
        assert_eq!(tree.count(Role::Group), 1);
        assert_eq!(tree.children.len(), 3);
    }

    #[test]
    fn empty_title_still_renders_heading_block() {
        let card = Card::new().title("");
        assert_eq!(card.sections().len(), 3);
    }

    #[test]
    fn style_is_not_modified_by_card() {
        let style = StylePreset::compact().with_background(CardBackground::Solid(ColorRole::Primary));
        let card = Card::new().title("x").style(style);
        let _ = card.sections();
        let _ = card.accessibility();
        assert_eq!(*card.style_preset(), style);
    }

    struct CardHost;

    impl Render for CardHost {
        fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
            div()
                .size_full()
                .flex()
                .flex_col()
                .child(Card::new().title("Default Card").child("Titled content"))
                .child(Card::new().preset("compact", cx).child("Untitled content"))
                .child(Card::new().title("").child(
                    ColoredButton::new("edge", "")
                        .min_height(0.0)
                        .border_width(0.0),
                ))
        }
    }

    #[gpui::test]
    fn titled_and_untitled_cards_render(cx: &mut TestAppContext) {
        cx.update(|cx| {
            gpui_component::init(cx);
            cx.set_global(PresetRegistry::new());
        });

        let (view, cx) = cx.add_window_view(|_, _| CardHost);
        cx.run_until_parked();
        view.update(cx, |_, cx| cx.notify());
        cx.run_until_parked();
    }

    #[gpui::test]
    fn preset_lookup_falls_back_to_default(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let card = Card::new().preset("compact", cx);
            assert_eq!(*card.style_preset(), StylePreset::default());

            cx.set_global(PresetRegistry::new());
            let card = Card::new().preset("compact", cx);
            assert_eq!(*card.style_preset(), StylePreset::compact());
            let card = Card::new().preset("missing", cx);
            assert_eq!(*card.style_preset(), StylePreset::default());
        });
    }
}
