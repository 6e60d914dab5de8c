//! User interface for UI Lab
//!
//! This crate provides the UI layer: a themed pressable button, the text and
//! container primitives around it, and the showcase screen that demonstrates
//! every button option.
//!
//! # Design System
//!
//! Every component resolves its colors from the active scheme:
//! - Tint: ocean blue (#0A7EA4) under the light scheme, white under dark
//! - Press tint: deep ocean (#085E7D) under light, silver (#C9CDD0) under dark
//!
//! Two schemes are supported:
//! - [`theme::ThemeName::Light`] - Bright scheme with white background
//! - [`theme::ThemeName::Dark`] - Dark scheme with near-black background
//!
//! # Modules
//!
//! - [`theme`] - Color schemes and palettes
//! - [`tokens`] - Design tokens (sizing, radii, shadows, opacity)
//! - [`typography`] - Text styles and variants
//! - [`style`] - Partial container styles and the layering merge
//! - [`components`] - The button and its themed companions
//! - [`interaction`] - Press state and mounted press handlers
//! - [`screens`] - The showcase screen
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::Button;
//! use app_ui::interaction::PressState;
//! use app_ui::theme::{get_colors, ThemeName};
//!
//! // Describe a button
//! let button = Button::new("Submit").raised(true);
//!
//! // Resolve its look under the dark palette
//! let colors = get_colors(ThemeName::Dark);
//! let style = button.computed_style(&colors, PressState::Resting);
//! assert_eq!(style.background_color.as_deref(), Some("#FFFFFF"));
//!
//! // Wire up press handling
//! let mut mounted = button.mount().on_press(|| println!("pressed"));
//! mounted.press_in();
//! assert!(mounted.press_state().is_pressed());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod components;
pub mod interaction;
pub mod screens;
pub mod style;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use components::{
    ActivityIndicator, Alignment, Button, ButtonContent, ButtonLabel, ButtonSize,
    ButtonVariant, FlexDirection, Icon, IconPosition, IconSize, IndicatorSize,
    ThemedText, ThemedView,
};

pub use interaction::{MountedButton, PressCallback, PressState};

pub use screens::{HeaderImage, HomeScreen, SchemePair, ScreenHeader, ScreenNode};

pub use style::Style;

pub use theme::{
    all_palettes, dark_colors, get_colors, light_colors, parse_hex_color, rgb_to_hex,
    Color, ParseThemeError, ThemeColors, ThemeName, ThemeState,
};

pub use tokens::{border, font_weight, opacity, radius, shadows, sizing, Shadow};

pub use typography::{button_label, font_size, leading, TextStyle, TextStyleOverrides, TextVariant};
