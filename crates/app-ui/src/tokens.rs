//! Design tokens for UI Lab
//!
//! This module provides the design primitives the component library draws
//! from: button dimensions per size, icon and spinner sizes, border radius
//! and width scales, opacity levels, font weights, and shadow presets.

use serde::{Deserialize, Serialize};

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Button dimensions
    pub mod button {
        /// Base (medium) vertical padding (12px)
        pub const BASE_PADDING_VERTICAL: f32 = 12.0;
        /// Base (medium) horizontal padding (20px)
        pub const BASE_PADDING_HORIZONTAL: f32 = 20.0;
        /// Small vertical padding (8px)
        pub const SMALL_PADDING_VERTICAL: f32 = 8.0;
        /// Small horizontal padding (16px)
        pub const SMALL_PADDING_HORIZONTAL: f32 = 16.0;
        /// Large vertical padding (16px)
        pub const LARGE_PADDING_VERTICAL: f32 = 16.0;
        /// Large horizontal padding (32px)
        pub const LARGE_PADDING_HORIZONTAL: f32 = 32.0;
        /// Minimum button width (100px)
        pub const MIN_WIDTH: f32 = 100.0;
        /// Gap between icon, label, and spinner in the content row (10px)
        pub const CONTENT_GAP: f32 = 10.0;
    }

    /// Icon sizes
    pub mod icon {
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (20px)
        pub const MD: f32 = 20.0;
        /// Large icon (24px)
        pub const LG: f32 = 24.0;
        /// Icon size inside a button content row (24px)
        pub const BUTTON: f32 = LG;
    }

    /// Activity indicator sizes
    pub mod indicator {
        /// Small spinner (20px)
        pub const SMALL: f32 = 20.0;
        /// Large spinner (36px)
        pub const LARGE: f32 = 36.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (4px)
    pub const SM: f32 = 4.0;
    /// Medium radius (8px), the button default
    pub const MD: f32 = 8.0;
    /// Large radius (12px)
    pub const LG: f32 = 12.0;
    /// Full/round radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0px)
    pub const NONE: f32 = 0.0;
    /// Hairline border (0.5px)
    pub const HAIRLINE: f32 = 0.5;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px), the outlined-variant default
    pub const MEDIUM: f32 = 2.0;
    /// Thick border (3px)
    pub const THICK: f32 = 3.0;
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity tokens
pub mod opacity {
    /// Fully opaque
    pub const FULL: f32 = 1.0;
    /// Feedback opacity while a pressable is held down
    pub const ACTIVE_PRESS: f32 = 0.7;
}

// =============================================================================
// Font Weight Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Semi-bold (600)
    pub const SEMI_BOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definition for raised surfaces
///
/// Carries the iOS-style shadow fields (offset, blur, opacity, color)
/// together with the Android elevation value, matching how mobile
/// toolkits split the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Blur radius
    pub blur: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Shadow color
    pub color: String,
    /// Android elevation
    pub elevation: f32,
}

impl Shadow {
    /// Create a new shadow
    pub fn new(
        offset_x: f32,
        offset_y: f32,
        blur: f32,
        opacity: f32,
        color: &str,
        elevation: f32,
    ) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
            color: color.to_string(),
            elevation,
        }
    }
}

/// Shadow presets
pub mod shadows {
    use super::Shadow;

    /// No shadow
    pub fn none() -> Shadow {
        Shadow::new(0.0, 0.0, 0.0, 0.0, "transparent", 0.0)
    }

    /// Raised-button shadow
    pub fn raised() -> Shadow {
        Shadow::new(0.0, 2.0, 4.0, 0.3, "#000000", 5.0)
    }
}
