//! Color schemes and theme provider for UI Lab
//!
//! This module provides the light/dark palettes consumed by the component
//! library. Components never read an ambient color scheme; callers resolve a
//! [`ThemeColors`] value once and pass it in explicitly, which keeps
//! rendering deterministic and testable across both schemes.
//!
//! # Schemes
//!
//! Two schemes are supported:
//! - Light: dark text on a white background with a deep-cyan tint
//! - Dark: light text on a near-black background with a white tint
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_colors, ThemeName};
//!
//! let colors = get_colors(ThemeName::Dark);
//! assert_eq!(colors.background, "#151718");
//! let accent = &colors.tint;
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#FFFFFF") or a named color
/// understood by the rendering host (e.g., "gray", "transparent")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Palette Constants
// =============================================================================

/// Raw palette values shared by the scheme constructors
pub mod palette {
    /// Light-scheme accent tint (deep cyan)
    pub const TINT_LIGHT: &str = "#0A7EA4";
    /// Dark-scheme accent tint (white)
    pub const TINT_DARK: &str = "#FFFFFF";

    /// Light-scheme text (near-black)
    pub const TEXT_LIGHT: &str = "#11181C";
    /// Dark-scheme text (near-white)
    pub const TEXT_DARK: &str = "#ECEDEE";

    /// Light-scheme background (white)
    pub const BACKGROUND_LIGHT: &str = "#FFFFFF";
    /// Dark-scheme background (near-black)
    pub const BACKGROUND_DARK: &str = "#151718";

    /// Light-scheme icon gray
    pub const ICON_LIGHT: &str = "#687076";
    /// Dark-scheme icon gray
    pub const ICON_DARK: &str = "#9BA1A6";

    /// Light-scheme press feedback (darkened tint)
    pub const PRESS_TINT_LIGHT: &str = "#085E7D";
    /// Dark-scheme press feedback (dimmed tint)
    pub const PRESS_TINT_DARK: &str = "#C9CDD0";

    /// Fully transparent fill
    pub const TRANSPARENT: &str = "transparent";
    /// Overlay drawn across a disabled control
    pub const DISABLED_OVERLAY: &str = "gray";
}

// =============================================================================
// Scheme Names
// =============================================================================

/// Color-scheme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light scheme
    #[default]
    Light,
    /// Dark scheme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }

    /// Check if this is a dark scheme
    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeName::Dark)
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

/// Error returned when a color-scheme name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color scheme: {0}")]
pub struct ParseThemeError(pub String);

impl std::str::FromStr for ThemeName {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(ParseThemeError(s.to_string())),
        }
    }
}

// =============================================================================
// Theme Colors
// =============================================================================

/// The colors one scheme supplies to the component library
///
/// The button consumes `tint`, `text`, and `press_tint`; the themed
/// containers of the showcase screen additionally consume `background`
/// and `icon`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Primary text color
    pub text: Color,
    /// Screen and container background color
    pub background: Color,
    /// Accent color for fills and borders
    pub tint: Color,
    /// Muted icon color
    pub icon: Color,
    /// Feedback color shown while a pressable is held down
    pub press_tint: Color,
}

// =============================================================================
// Light Scheme
// =============================================================================

/// Create the light-scheme palette
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        text: palette::TEXT_LIGHT.to_string(),
        background: palette::BACKGROUND_LIGHT.to_string(),
        tint: palette::TINT_LIGHT.to_string(),
        icon: palette::ICON_LIGHT.to_string(),
        press_tint: palette::PRESS_TINT_LIGHT.to_string(),
    }
}

// =============================================================================
// Dark Scheme
// =============================================================================

/// Create the dark-scheme palette
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        text: palette::TEXT_DARK.to_string(),
        background: palette::BACKGROUND_DARK.to_string(),
        tint: palette::TINT_DARK.to_string(),
        icon: palette::ICON_DARK.to_string(),
        press_tint: palette::PRESS_TINT_DARK.to_string(),
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Get the palette for a scheme
pub fn get_colors(name: ThemeName) -> ThemeColors {
    match name {
        ThemeName::Light => light_colors(),
        ThemeName::Dark => dark_colors(),
    }
}

/// All available palettes keyed by scheme name
pub fn all_palettes() -> HashMap<ThemeName, ThemeColors> {
    let mut palettes = HashMap::new();
    palettes.insert(ThemeName::Light, light_colors());
    palettes.insert(ThemeName::Dark, dark_colors());
    palettes
}

/// Theme provider state
///
/// The explicit replacement for an ambient color-scheme reading: whoever
/// owns a `ThemeState` decides the scheme, and components receive the
/// resolved [`ThemeColors`] by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    /// Current scheme name
    pub scheme: ThemeName,
    /// Current palette (regenerated on deserialization)
    #[serde(skip, default = "light_colors")]
    pub colors: ThemeColors,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            scheme: ThemeName::Light,
            colors: light_colors(),
        }
    }
}

impl ThemeState {
    /// Create a new theme state with the given scheme
    pub fn new(scheme: ThemeName) -> Self {
        Self {
            scheme,
            colors: get_colors(scheme),
        }
    }

    /// Switch to another scheme
    pub fn set_scheme(&mut self, scheme: ThemeName) {
        self.scheme = scheme;
        self.colors = get_colors(scheme);
    }

    /// Get the current palette
    pub fn current_colors(&self) -> &ThemeColors {
        &self.colors
    }
}
