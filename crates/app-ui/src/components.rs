//! Reusable UI components for UI Lab
//!
//! The central piece is [`Button`], a pressable region described entirely by
//! its configuration. Given a theme palette and the current press state it
//! resolves to a [`Style`] and an ordered content row; nothing is read from
//! ambient state.
//!
//! # Example
//!
//! ```
//! use app_ui::components::Button;
//! use app_ui::interaction::PressState;
//! use app_ui::theme::{get_colors, ThemeName};
//!
//! let button = Button::new("Submit");
//! let colors = get_colors(ThemeName::Light);
//! let style = button.computed_style(&colors, PressState::Resting);
//!
//! assert_eq!(style.background_color.as_deref(), Some("#0A7EA4"));
//! assert_eq!(style.border_radius, Some(8.0));
//! ```

use crate::interaction::{MountedButton, PressState};
use crate::style::{is_default_style, Style};
use crate::theme::{palette, Color, ThemeColors};
use crate::tokens::{border, opacity, radius, shadows, sizing};
use crate::typography::{self, TextStyle, TextStyleOverrides, TextVariant};
use serde::{Deserialize, Serialize};

// =============================================================================
// Button Enums
// =============================================================================

/// Which side of the label the icon renders on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    /// Icon before the label
    #[default]
    Left,
    /// Icon after the label
    Right,
}

/// Button size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Compact padding
    Small,
    /// Default padding
    #[default]
    Medium,
    /// Generous padding
    Large,
}

/// Button fill and border treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Transparent fill with a visible border
    Outlined,
    /// Theme-tinted fill
    #[default]
    Solid,
    /// Transparent fill, no border
    Ghost,
}

// =============================================================================
// Button Component
// =============================================================================

/// A themed pressable button
///
/// All visual output is a pure function of this configuration plus a theme
/// palette and the transient press state. Press handlers are attached
/// separately via [`Button::mount`] and are not part of the serializable
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Label text
    pub label: String,
    /// Inert when true; press handlers never fire
    #[serde(default)]
    pub disabled: bool,
    /// Replaces the label with a spinner and makes the button inert
    #[serde(default)]
    pub loading: bool,
    /// Named icon glyph rendered beside the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Which side the icon renders on
    #[serde(default)]
    pub icon_position: IconPosition,
    /// Caller-supplied container style, layered over the base shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// Caller-supplied label style, layered over the themed label style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyleOverrides>,
    /// Spinner color (falls back to the theme text color)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loading_indicator_color: Option<Color>,
    /// Draw a drop shadow under the button
    #[serde(default)]
    pub raised: bool,
    /// Corner radius override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border width override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border color (falls back to the theme tint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Padding preset
    #[serde(default)]
    pub size: ButtonSize,
    /// Fill and border treatment
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Opacity while pressed
    #[serde(default = "default_active_opacity")]
    pub active_opacity: f32,
    /// Fill while pressed (falls back to the theme press tint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub underlay_color: Option<Color>,
    /// Identifier for UI test drivers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

fn default_active_opacity() -> f32 {
    opacity::ACTIVE_PRESS
}

impl Button {
    /// Create a button with the given label and default configuration
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
            loading: false,
            icon: None,
            icon_position: IconPosition::default(),
            style: None,
            text_style: None,
            loading_indicator_color: None,
            raised: false,
            border_radius: None,
            border_width: None,
            border_color: None,
            size: ButtonSize::default(),
            variant: ButtonVariant::default(),
            active_opacity: default_active_opacity(),
            underlay_color: None,
            test_id: None,
        }
    }

    /// Set the disabled flag
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the loading flag
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Set the icon glyph name
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the icon side
    pub fn with_icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Set the caller container style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the caller label style
    pub fn with_text_style(mut self, text_style: TextStyleOverrides) -> Self {
        self.text_style = Some(text_style);
        self
    }

    /// Set the spinner color
    pub fn with_loading_indicator_color(mut self, color: impl Into<Color>) -> Self {
        self.loading_indicator_color = Some(color.into());
        self
    }

    /// Set the raised flag
    pub fn raised(mut self, raised: bool) -> Self {
        self.raised = raised;
        self
    }

    /// Set the corner radius
    pub fn with_border_radius(mut self, border_radius: f32) -> Self {
        self.border_radius = Some(border_radius);
        self
    }

    /// Set the border width
    pub fn with_border_width(mut self, border_width: f32) -> Self {
        self.border_width = Some(border_width);
        self
    }

    /// Set the border color
    pub fn with_border_color(mut self, color: impl Into<Color>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Set the size preset
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the pressed-state opacity
    pub fn with_active_opacity(mut self, active_opacity: f32) -> Self {
        self.active_opacity = active_opacity;
        self
    }

    /// Set the pressed-state fill
    pub fn with_underlay_color(mut self, color: impl Into<Color>) -> Self {
        self.underlay_color = Some(color.into());
        self
    }

    /// Set the test identifier
    pub fn with_test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    /// Attach press handling to this configuration
    pub fn mount(self) -> MountedButton {
        MountedButton::new(self)
    }

    /// Resolve the container style for a theme palette and press state
    ///
    /// Partial styles merge in a fixed order, later layers winning field by
    /// field:
    ///
    /// 1. base shape (padding, minimum width, default corner radius)
    /// 2. caller-supplied container style
    /// 3. raised shadow, when requested
    /// 4. explicit corner radius, border width, and border color
    /// 5. disabled overlay, when disabled
    /// 6. fill (underlay or press tint while pressed, theme tint at rest)
    /// 7. variant overrides (outlined and ghost go transparent)
    /// 8. size padding (small and large replace the base padding)
    ///
    /// The fill layer comes after the caller style, so a caller
    /// `background_color` yields to the theme fill. The pressed-state
    /// opacity rides the base shape and clears when the press ends.
    pub fn computed_style(&self, colors: &ThemeColors, press: PressState) -> Style {
        let mut layers: Vec<Style> = Vec::new();

        // 1. base shape
        let mut base = Style::new()
            .with_padding_vertical(sizing::button::BASE_PADDING_VERTICAL)
            .with_padding_horizontal(sizing::button::BASE_PADDING_HORIZONTAL)
            .with_min_width(sizing::button::MIN_WIDTH)
            .with_border_radius(radius::MD);
        if press.is_pressed() {
            base = base.with_opacity(self.active_opacity);
        }
        layers.push(base);

        // 2. caller container style
        if let Some(style) = &self.style {
            layers.push(style.clone());
        }

        // 3. raised shadow
        if self.raised {
            layers.push(Style::new().with_shadow(shadows::raised()));
        }

        // 4. explicit border settings
        if self.border_radius.is_some() || self.border_width.is_some() || self.border_color.is_some()
        {
            let mut layer = Style::new().with_border_color(
                self.border_color
                    .clone()
                    .unwrap_or_else(|| colors.tint.clone()),
            );
            if let Some(border_radius) = self.border_radius {
                layer = layer.with_border_radius(border_radius);
            }
            if let Some(border_width) = self.border_width {
                layer = layer.with_border_width(border_width);
            }
            layers.push(layer);
        }

        // 5. disabled overlay
        if self.disabled {
            layers.push(Style::new().with_overlay_color(palette::DISABLED_OVERLAY));
        }

        // 6. fill
        let fill = if press.is_pressed() {
            self.underlay_color
                .clone()
                .unwrap_or_else(|| colors.press_tint.clone())
        } else {
            colors.tint.clone()
        };
        layers.push(Style::new().with_background_color(fill));

        // 7. variant overrides
        match self.variant {
            ButtonVariant::Outlined => layers.push(
                Style::new()
                    .with_background_color(palette::TRANSPARENT)
                    .with_border_width(self.border_width.unwrap_or(border::MEDIUM))
                    .with_border_color(
                        self.border_color
                            .clone()
                            .unwrap_or_else(|| colors.tint.clone()),
                    ),
            ),
            ButtonVariant::Ghost => {
                layers.push(Style::new().with_background_color(palette::TRANSPARENT))
            }
            ButtonVariant::Solid => {}
        }

        // 8. size padding
        match self.size {
            ButtonSize::Small => layers.push(
                Style::new()
                    .with_padding_vertical(sizing::button::SMALL_PADDING_VERTICAL)
                    .with_padding_horizontal(sizing::button::SMALL_PADDING_HORIZONTAL),
            ),
            ButtonSize::Large => layers.push(
                Style::new()
                    .with_padding_vertical(sizing::button::LARGE_PADDING_VERTICAL)
                    .with_padding_horizontal(sizing::button::LARGE_PADDING_HORIZONTAL),
            ),
            ButtonSize::Medium => {}
        }

        Style::layered(&layers)
    }

    /// Resolve the ordered content row for a theme palette
    ///
    /// A left icon comes first, then either the spinner (while loading) or
    /// the styled label, then a right icon.
    pub fn content_row(&self, colors: &ThemeColors) -> Vec<ButtonContent> {
        let mut row = Vec::new();

        if let Some(icon) = &self.icon {
            if self.icon_position == IconPosition::Left {
                row.push(ButtonContent::Icon(Icon::button_glyph(icon, colors)));
            }
        }

        if self.loading {
            row.push(ButtonContent::Spinner(ActivityIndicator {
                size: IndicatorSize::Small,
                color: Some(
                    self.loading_indicator_color
                        .clone()
                        .unwrap_or_else(|| colors.text.clone()),
                ),
            }));
        } else {
            let mut style = typography::button_label().with_color(colors.text.clone());
            if let Some(overrides) = &self.text_style {
                style = style.apply(overrides);
            }
            row.push(ButtonContent::Label(ButtonLabel {
                text: self.label.clone(),
                style,
            }));
        }

        if let Some(icon) = &self.icon {
            if self.icon_position == IconPosition::Right {
                row.push(ButtonContent::Icon(Icon::button_glyph(icon, colors)));
            }
        }

        row
    }
}

// =============================================================================
// Button Content
// =============================================================================

/// One element of a button's content row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ButtonContent {
    /// An icon glyph
    Icon(Icon),
    /// A loading spinner
    Spinner(ActivityIndicator),
    /// The label text
    Label(ButtonLabel),
}

/// The styled button label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonLabel {
    /// Label text
    pub text: String,
    /// Resolved text style
    pub style: TextStyle,
}

// =============================================================================
// Icon Component
// =============================================================================

/// Icon size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconSize {
    /// Small (16px)
    Sm,
    /// Medium (20px)
    #[default]
    Md,
    /// Large (24px)
    Lg,
}

impl IconSize {
    /// Get the glyph size in pixels
    pub fn pixels(&self) -> f32 {
        match self {
            IconSize::Sm => sizing::icon::SM,
            IconSize::Md => sizing::icon::MD,
            IconSize::Lg => sizing::icon::LG,
        }
    }
}

/// A named icon glyph, resolved by the icon provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Glyph name
    pub name: String,
    /// Size preset
    #[serde(default)]
    pub size: IconSize,
    /// Glyph color (None = inherited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Icon {
    /// Create an icon with the default size and inherited color
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: IconSize::default(),
            color: None,
        }
    }

    /// Set the size preset
    pub fn with_size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    /// Set the glyph color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The glyph a button renders beside its label
    fn button_glyph(name: &str, colors: &ThemeColors) -> Self {
        Self::new(name)
            .with_size(IconSize::Lg)
            .with_color(colors.text.clone())
    }
}

// =============================================================================
// Activity Indicator Component
// =============================================================================

/// Spinner size presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorSize {
    /// Small (20px)
    #[default]
    Small,
    /// Large (36px)
    Large,
}

impl IndicatorSize {
    /// Get the spinner diameter in pixels
    pub fn pixels(&self) -> f32 {
        match self {
            IndicatorSize::Small => sizing::indicator::SMALL,
            IndicatorSize::Large => sizing::indicator::LARGE,
        }
    }
}

/// A loading spinner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityIndicator {
    /// Size preset
    #[serde(default)]
    pub size: IndicatorSize,
    /// Spinner color (None = platform default)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

// =============================================================================
// Themed Text Component
// =============================================================================

/// A text run that picks up the theme text color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemedText {
    /// Text content
    pub content: String,
    /// Variant selecting the base text style
    #[serde(default)]
    pub variant: TextVariant,
    /// Caller overrides layered over the variant style
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<TextStyleOverrides>,
}

impl ThemedText {
    /// Create body text
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            variant: TextVariant::default(),
            overrides: None,
        }
    }

    /// Create title text
    pub fn title(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Title)
    }

    /// Create subtitle text
    pub fn subtitle(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Subtitle)
    }

    /// Create fine-print text
    pub fn small(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Small)
    }

    /// Create light-weight body text
    pub fn light(content: impl Into<String>) -> Self {
        Self::new(content).with_variant(TextVariant::Light)
    }

    /// Set the variant
    pub fn with_variant(mut self, variant: TextVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set caller overrides
    pub fn with_overrides(mut self, overrides: TextStyleOverrides) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Resolve the text style for a theme palette
    ///
    /// The variant style is colored with the theme text color unless the
    /// variant carries its own, then caller overrides layer on top.
    pub fn resolved_style(&self, colors: &ThemeColors) -> TextStyle {
        let mut style = self.variant.style();
        if style.color.is_none() {
            style = style.with_color(colors.text.clone());
        }
        if let Some(overrides) = &self.overrides {
            style = style.apply(overrides);
        }
        style
    }
}

// =============================================================================
// Themed View Component
// =============================================================================

/// Main-axis direction of a themed container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    /// Children stack vertically
    #[default]
    Column,
    /// Children flow horizontally
    Row,
}

/// Cross-axis alignment of a themed container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Children fill the cross axis
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Center on the cross axis
    Center,
    /// Align to end
    End,
}

/// A layout container that picks up the theme background color
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemedView {
    /// Main-axis direction
    #[serde(default)]
    pub direction: FlexDirection,
    /// Cross-axis alignment
    #[serde(default)]
    pub align: Alignment,
    /// Gap between children in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    /// Container style
    #[serde(default, skip_serializing_if = "is_default_style")]
    pub style: Style,
}

impl ThemedView {
    /// Create a vertical container
    pub fn column() -> Self {
        Self::default()
    }

    /// Create a horizontal container with centered children
    pub fn row() -> Self {
        Self {
            direction: FlexDirection::Row,
            align: Alignment::Center,
            ..Self::default()
        }
    }

    /// Set the gap between children
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = Some(gap);
        self
    }

    /// Set the container style
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Resolve the fill color for a theme palette
    ///
    /// An explicit style background wins over the theme background.
    pub fn resolved_background(&self, colors: &ThemeColors) -> Color {
        self.style
            .background_color
            .clone()
            .unwrap_or_else(|| colors.background.clone())
    }
}
