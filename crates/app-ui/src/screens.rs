//! The UI Lab showcase screen
//!
//! [`HomeScreen`] builds the demo tree for a color scheme: a tinted parallax
//! header, a short introduction, and one section per button option with a
//! heading, the option's value type, and a configured demo button. The whole
//! tree serializes, so a renderer or a test can walk it node by node.

use crate::components::{
    Button, ButtonSize, ButtonVariant, IconPosition, ThemedText, ThemedView,
};
use crate::style::Style;
use crate::theme::{dark_colors, get_colors, light_colors, Color, ThemeName};
use crate::typography::TextStyleOverrides;
use serde::{Deserialize, Serialize};

/// Logo asset rendered in the header
const HEADER_LOGO: &str = "partial-ui-lab-logo.png";

/// Header logo display width in pixels
const HEADER_LOGO_WIDTH: f32 = 290.0;

/// Header logo display height in pixels
const HEADER_LOGO_HEIGHT: f32 = 178.0;

/// Gap between the welcome title and the greeting wave
const TITLE_ROW_GAP: f32 = 8.0;

/// Gap between the nodes of a property section
const SECTION_GAP: f32 = 10.0;

/// Space under each property section
const SECTION_PADDING_BOTTOM: f32 = 10.0;

// =============================================================================
// Screen Nodes
// =============================================================================

/// One node of a rendered screen tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScreenNode {
    /// A themed text run
    Text(ThemedText),
    /// A themed container with nested children
    View {
        /// Container configuration
        view: ThemedView,
        /// Nested nodes in render order
        children: Vec<ScreenNode>,
    },
    /// A themed pressable button
    Button(Button),
    /// The waving-hand greeting animation
    Wave,
}

// =============================================================================
// Screen Header
// =============================================================================

/// A value resolved by the active color scheme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemePair {
    /// Value under the light scheme
    pub light: Color,
    /// Value under the dark scheme
    pub dark: Color,
}

/// The tinted logo inside the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderImage {
    /// Asset name
    pub source: String,
    /// Display width in pixels
    pub width: f32,
    /// Display height in pixels
    pub height: f32,
    /// Tint applied over the asset
    pub tint_color: Color,
}

/// The parallax header above the showcase content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenHeader {
    /// Header fill per color scheme
    pub background: SchemePair,
    /// Logo image
    pub image: HeaderImage,
}

// =============================================================================
// Home Screen
// =============================================================================

/// The showcase screen demonstrating every button option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScreen {
    /// Active color scheme
    pub theme: ThemeName,
    /// Parallax header
    pub header: ScreenHeader,
    /// Content nodes in render order
    pub children: Vec<ScreenNode>,
}

impl HomeScreen {
    /// Nodes before the first property section
    const INTRO_NODES: usize = 4;

    /// Build the showcase for the given color scheme
    pub fn new(scheme: ThemeName) -> Self {
        let colors = get_colors(scheme);

        let header = ScreenHeader {
            background: SchemePair {
                light: light_colors().tint,
                dark: dark_colors().tint,
            },
            image: HeaderImage {
                source: HEADER_LOGO.to_string(),
                width: HEADER_LOGO_WIDTH,
                height: HEADER_LOGO_HEIGHT,
                tint_color: colors.text.clone(),
            },
        };

        let mut children = vec![
            ScreenNode::View {
                view: ThemedView::row().with_gap(TITLE_ROW_GAP),
                children: vec![
                    ScreenNode::Text(ThemedText::title("Welcome to UI Lab!")),
                    ScreenNode::Wave,
                ],
            },
            ScreenNode::Button(Button::new("Hello world")),
            ScreenNode::Text(ThemedText::title("Usecases of the Button")),
            ScreenNode::Text(ThemedText::small(
                "Change Light/Dark theme to change button by theme",
            )),
        ];

        children.push(Self::label_section());
        children.push(Self::prop_section(
            "on_press",
            "function",
            Button::new("Press Me"),
        ));
        children.push(Self::prop_section(
            "disabled",
            "boolean",
            Button::new("Submit").disabled(true),
        ));
        children.push(Self::prop_section(
            "loading",
            "boolean",
            Button::new("Loading...").loading(true),
        ));
        children.push(Self::prop_section(
            "loading_indicator_color",
            "string",
            Button::new("Loading...")
                .loading(true)
                .with_loading_indicator_color("white"),
        ));
        children.push(Self::prop_section(
            "icon",
            "string",
            Button::new("Submit").with_icon("checkmark-circle-outline"),
        ));
        children.push(Self::prop_section(
            "icon_position",
            "string",
            Button::new("Submit")
                .with_icon("checkmark-circle-outline")
                .with_icon_position(IconPosition::Right),
        ));
        children.push(Self::prop_section(
            "style",
            "object",
            Button::new("Styled Button")
                .with_style(Style::new().with_background_color("blue").with_padding(10.0)),
        ));
        children.push(Self::prop_section(
            "text_style",
            "object",
            Button::new("Styled Text").with_text_style(
                TextStyleOverrides::new()
                    .with_color("white")
                    .with_font_size(18.0),
            ),
        ));
        children.push(Self::prop_section(
            "raised",
            "boolean",
            Button::new("Raised Button").raised(true),
        ));
        children.push(Self::prop_section(
            "border_radius",
            "number",
            Button::new("Rounded Button").with_border_radius(25.0),
        ));
        children.push(Self::prop_section(
            "border_width",
            "number",
            Button::new("Bordered Button").with_border_width(5.0),
        ));
        children.push(Self::prop_section(
            "border_color",
            "string",
            Button::new("Colored Border Button")
                .with_border_color("silver")
                .with_border_width(2.0),
        ));
        children.push(Self::prop_section(
            "active_opacity",
            "number",
            Button::new("Active Opacity Button").with_active_opacity(0.5),
        ));
        children.push(Self::prop_section(
            "on_long_press",
            "function",
            Button::new("Long Press Me"),
        ));
        children.push(Self::prop_section(
            "size",
            "string",
            Button::new("Large Button").with_size(ButtonSize::Large),
        ));
        children.push(Self::prop_section(
            "variant",
            "string",
            Button::new("Outlined Button").with_variant(ButtonVariant::Outlined),
        ));
        children.push(Self::prop_section(
            "underlay_color",
            "string",
            Button::new("Underlay Color Button").with_underlay_color("lightblue"),
        ));
        children.push(Self::prop_section(
            "test_id",
            "string",
            Button::new("Submit").with_test_id("submitButton"),
        ));

        Self {
            theme: scheme,
            header,
            children,
        }
    }

    /// The property sections in render order
    pub fn prop_sections(&self) -> &[ScreenNode] {
        &self.children[Self::INTRO_NODES..]
    }

    /// A section demonstrating one button option
    fn prop_section(name: &str, value_type: &str, button: Button) -> ScreenNode {
        Self::section(
            ScreenNode::Text(ThemedText::subtitle(name)),
            value_type,
            button,
        )
    }

    /// The label section, with the heading marked required
    fn label_section() -> ScreenNode {
        let heading = ScreenNode::View {
            view: ThemedView::row(),
            children: vec![
                ScreenNode::Text(ThemedText::subtitle("label")),
                ScreenNode::Text(
                    ThemedText::light("required")
                        .with_overrides(TextStyleOverrides::new().with_color("red")),
                ),
            ],
        };
        Self::section(heading, "string", Button::new("Submit"))
    }

    fn section(heading: ScreenNode, value_type: &str, button: Button) -> ScreenNode {
        ScreenNode::View {
            view: ThemedView::column()
                .with_gap(SECTION_GAP)
                .with_style(Style::new().with_padding_bottom(SECTION_PADDING_BOTTOM)),
            children: vec![
                heading,
                ScreenNode::Text(ThemedText::new(value_type)),
                ScreenNode::Button(button),
            ],
        }
    }
}
