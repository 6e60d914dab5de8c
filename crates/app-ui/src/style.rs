//! View styling primitives for UI Lab
//!
//! A [`Style`] is a partial record: every field is optional, and unset
//! fields mean "no opinion". Styles compose with [`Style::layered`], which
//! merges an ordered stack field by field with later layers winning.
//!
//! # Example
//!
//! ```
//! use app_ui::style::Style;
//!
//! let base = Style::new().with_background_color("#0A7EA4").with_border_radius(8.0);
//! let caller = Style::new().with_border_radius(25.0);
//! let resolved = Style::layered(&[base, caller]);
//!
//! assert_eq!(resolved.border_radius, Some(25.0));
//! assert_eq!(resolved.background_color, Some("#0A7EA4".to_string()));
//! ```

use crate::theme::Color;
use crate::tokens::Shadow;
use serde::{Deserialize, Serialize};

// =============================================================================
// Style
// =============================================================================

/// A partial view style
///
/// Fields left as `None` defer to whatever earlier layers (or the rendering
/// context) decide. Zero is a real value: `Some(0.0)` overrides earlier
/// layers like any other setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Fill color behind the content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Tint drawn over the fill (kept separate so it survives background changes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<Color>,
    /// Vertical padding in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<f32>,
    /// Horizontal padding in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<f32>,
    /// Extra bottom padding in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f32>,
    /// Minimum width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    /// Corner radius in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Border stroke width in pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    /// Border stroke color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    /// Overall opacity (0.0 to 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Drop shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl Style {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background color
    pub fn with_background_color(mut self, color: impl Into<Color>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Set the overlay color
    pub fn with_overlay_color(mut self, color: impl Into<Color>) -> Self {
        self.overlay_color = Some(color.into());
        self
    }

    /// Set uniform padding on both axes
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding_vertical = Some(padding);
        self.padding_horizontal = Some(padding);
        self
    }

    /// Set vertical padding
    pub fn with_padding_vertical(mut self, padding: f32) -> Self {
        self.padding_vertical = Some(padding);
        self
    }

    /// Set horizontal padding
    pub fn with_padding_horizontal(mut self, padding: f32) -> Self {
        self.padding_horizontal = Some(padding);
        self
    }

    /// Set extra bottom padding
    pub fn with_padding_bottom(mut self, padding: f32) -> Self {
        self.padding_bottom = Some(padding);
        self
    }

    /// Set the minimum width
    pub fn with_min_width(mut self, min_width: f32) -> Self {
        self.min_width = Some(min_width);
        self
    }

    /// Set the corner radius
    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    /// Set the border width
    pub fn with_border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// Set the border color
    pub fn with_border_color(mut self, color: impl Into<Color>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Set the opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Set the drop shadow
    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    /// Overwrite this style's fields with the set fields of `layer`
    ///
    /// Fields `layer` leaves unset keep their current value.
    pub fn apply(&mut self, layer: &Style) {
        if let Some(color) = &layer.background_color {
            self.background_color = Some(color.clone());
        }
        if let Some(color) = &layer.overlay_color {
            self.overlay_color = Some(color.clone());
        }
        if let Some(padding) = layer.padding_vertical {
            self.padding_vertical = Some(padding);
        }
        if let Some(padding) = layer.padding_horizontal {
            self.padding_horizontal = Some(padding);
        }
        if let Some(padding) = layer.padding_bottom {
            self.padding_bottom = Some(padding);
        }
        if let Some(min_width) = layer.min_width {
            self.min_width = Some(min_width);
        }
        if let Some(radius) = layer.border_radius {
            self.border_radius = Some(radius);
        }
        if let Some(width) = layer.border_width {
            self.border_width = Some(width);
        }
        if let Some(color) = &layer.border_color {
            self.border_color = Some(color.clone());
        }
        if let Some(opacity) = layer.opacity {
            self.opacity = Some(opacity);
        }
        if let Some(shadow) = &layer.shadow {
            self.shadow = Some(shadow.clone());
        }
    }

    /// Merge an ordered stack of partial styles
    ///
    /// Later layers win field by field; fields a later layer leaves unset
    /// pass through from earlier layers. An empty stack resolves to the
    /// empty style.
    pub fn layered(layers: &[Style]) -> Style {
        let mut resolved = Style::default();
        for layer in layers {
            resolved.apply(layer);
        }
        resolved
    }
}

/// Check whether a style sets nothing at all
///
/// Used to keep empty styles out of serialized payloads.
pub fn is_default_style(style: &Style) -> bool {
    *style == Style::default()
}
