//! Typography for UI Lab
//!
//! This module provides the text styles used by the themed text component
//! and the button label, plus the partial override record callers layer on
//! top of them.

use crate::theme::{palette, Color};
use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Font size scale in pixels
pub mod font_size {
    /// Body text (16px)
    pub const DEFAULT: f32 = 16.0;
    /// Fine print (12px)
    pub const SMALL: f32 = 12.0;
    /// Section subtitle (20px)
    pub const SUBTITLE: f32 = 20.0;
    /// Page title (32px)
    pub const TITLE: f32 = 32.0;
}

/// Absolute line heights in pixels
pub mod leading {
    /// Body text (24px)
    pub const DEFAULT: f32 = 24.0;
    /// Fine print (18px)
    pub const SMALL: f32 = 18.0;
    /// Page title (32px)
    pub const TITLE: f32 = 32.0;
    /// Link text (30px)
    pub const LINK: f32 = 30.0;
}

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_size: f32,
    /// Font weight (300, 400, 600, 700)
    pub font_weight: u16,
    /// Line height in pixels (None = font default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Text color (None = inherited from the surrounding context)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(font_size: f32, font_weight: u16) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: None,
            color: None,
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Set text color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Layer a partial override record on top of this style
    ///
    /// Fields the overrides leave unset pass through unchanged; set fields
    /// win.
    pub fn apply(mut self, overrides: &TextStyleOverrides) -> Self {
        if let Some(font_size) = overrides.font_size {
            self.font_size = font_size;
        }
        if let Some(font_weight) = overrides.font_weight {
            self.font_weight = font_weight;
        }
        if let Some(line_height) = overrides.line_height {
            self.line_height = Some(line_height);
        }
        if let Some(color) = &overrides.color {
            self.color = Some(color.clone());
        }
        self
    }
}

// =============================================================================
// Text Style Overrides
// =============================================================================

/// Partial text style supplied by a caller
///
/// Every field is optional; unset fields leave the underlying style alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyleOverrides {
    /// Font size override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    /// Line height override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    /// Color override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextStyleOverrides {
    /// Create an empty override record
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Override the font weight
    pub fn with_font_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = Some(font_weight);
        self
    }

    /// Override the line height
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    /// Override the color
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }
}

// =============================================================================
// Text Variants
// =============================================================================

/// Themed-text variant identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TextVariant {
    /// Body text
    #[default]
    Default,
    /// Body text, semi-bold
    DefaultSemiBold,
    /// Section subtitle
    Subtitle,
    /// Page title
    Title,
    /// Fine print
    Small,
    /// Light-weight body text
    Light,
    /// Link text (carries its own accent color)
    Link,
}

impl TextVariant {
    /// Get the text style for this variant
    pub fn style(&self) -> TextStyle {
        match self {
            Self::Default => TextStyle::new(font_size::DEFAULT, font_weight::NORMAL)
                .with_line_height(leading::DEFAULT),
            Self::DefaultSemiBold => TextStyle::new(font_size::DEFAULT, font_weight::SEMI_BOLD)
                .with_line_height(leading::DEFAULT),
            Self::Subtitle => TextStyle::new(font_size::SUBTITLE, font_weight::BOLD),
            Self::Title => {
                TextStyle::new(font_size::TITLE, font_weight::BOLD).with_line_height(leading::TITLE)
            }
            Self::Small => {
                TextStyle::new(font_size::SMALL, font_weight::NORMAL).with_line_height(leading::SMALL)
            }
            Self::Light => TextStyle::new(font_size::DEFAULT, font_weight::LIGHT)
                .with_line_height(leading::DEFAULT),
            Self::Link => TextStyle::new(font_size::DEFAULT, font_weight::NORMAL)
                .with_line_height(leading::LINK)
                .with_color(palette::TINT_LIGHT),
        }
    }
}

// =============================================================================
// Button Label
// =============================================================================

/// The base text style of a button label
pub fn button_label() -> TextStyle {
    TextStyle::new(font_size::DEFAULT, font_weight::BOLD)
}
