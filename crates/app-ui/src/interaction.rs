//! Press handling for mounted buttons
//!
//! A [`Button`](crate::components::Button) is plain serializable
//! configuration. Mounting wraps it in a [`MountedButton`] that owns the
//! transient press state and the press callbacks, and gates both on the
//! disabled and loading flags.

use crate::components::{Button, ButtonContent};
use crate::style::Style;
use crate::theme::ThemeColors;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Press State
// =============================================================================

/// Transient visual state of a pressable region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressState {
    /// No pointer down
    #[default]
    Resting,
    /// Pointer down inside the region
    Pressed,
}

impl PressState {
    /// Whether a pointer is currently down
    pub fn is_pressed(&self) -> bool {
        matches!(self, PressState::Pressed)
    }
}

// =============================================================================
// Mounted Button
// =============================================================================

/// Callback invoked when a press or long press lands
pub type PressCallback = Box<dyn FnMut()>;

/// A button configuration joined with live press handling
///
/// Press-in and press-out drive the visual state; press and long press
/// fire the attached callbacks. A disabled or loading button is inert, it
/// neither enters the pressed state nor fires callbacks.
pub struct MountedButton {
    button: Button,
    press_state: PressState,
    press_handler: Option<PressCallback>,
    long_press_handler: Option<PressCallback>,
}

impl MountedButton {
    /// Mount a button with no handlers attached
    pub fn new(button: Button) -> Self {
        Self {
            button,
            press_state: PressState::Resting,
            press_handler: None,
            long_press_handler: None,
        }
    }

    /// Attach the press callback
    pub fn on_press(mut self, handler: impl FnMut() + 'static) -> Self {
        self.press_handler = Some(Box::new(handler));
        self
    }

    /// Attach the long-press callback
    pub fn on_long_press(mut self, handler: impl FnMut() + 'static) -> Self {
        self.long_press_handler = Some(Box::new(handler));
        self
    }

    /// Whether presses are currently ignored
    pub fn is_inert(&self) -> bool {
        self.button.disabled || self.button.loading
    }

    /// Pointer down; enters the pressed state unless inert
    pub fn press_in(&mut self) {
        if !self.is_inert() {
            self.press_state = PressState::Pressed;
        }
    }

    /// Pointer up or cancelled; always returns to resting
    pub fn press_out(&mut self) {
        self.press_state = PressState::Resting;
    }

    /// A completed press; fires the press callback unless inert
    pub fn press(&mut self) {
        if self.is_inert() {
            return;
        }
        if let Some(handler) = &mut self.press_handler {
            handler();
        }
    }

    /// A completed long press; fires the long-press callback unless inert
    pub fn long_press(&mut self) {
        if self.is_inert() {
            return;
        }
        if let Some(handler) = &mut self.long_press_handler {
            handler();
        }
    }

    /// The current press state
    pub fn press_state(&self) -> PressState {
        self.press_state
    }

    /// The underlying configuration
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Resolve the container style for the current press state
    pub fn style(&self, colors: &ThemeColors) -> Style {
        self.button.computed_style(colors, self.press_state)
    }

    /// Resolve the ordered content row
    pub fn content(&self, colors: &ThemeColors) -> Vec<ButtonContent> {
        self.button.content_row(colors)
    }
}

impl fmt::Debug for MountedButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MountedButton")
            .field("button", &self.button)
            .field("press_state", &self.press_state)
            .field("press_handler", &self.press_handler.is_some())
            .field("long_press_handler", &self.long_press_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{get_colors, ThemeName};
    use std::cell::Cell;
    use std::rc::Rc;

    fn light() -> ThemeColors {
        get_colors(ThemeName::Light)
    }

    // ==========================================================================
    // Press State Tests
    // ==========================================================================

    #[test]
    fn test_press_state_default() {
        assert_eq!(PressState::default(), PressState::Resting);
        assert!(!PressState::Resting.is_pressed());
        assert!(PressState::Pressed.is_pressed());
    }

    #[test]
    fn test_press_state_wire_names() {
        assert_eq!(
            serde_json::to_string(&PressState::Pressed).unwrap(),
            "\"pressed\""
        );
        let state: PressState = serde_json::from_str("\"resting\"").unwrap();
        assert_eq!(state, PressState::Resting);
    }

    // ==========================================================================
    // Press Lifecycle Tests
    // ==========================================================================

    #[test]
    fn test_mount_starts_resting() {
        let mounted = Button::new("Press Me").mount();
        assert_eq!(mounted.press_state(), PressState::Resting);
        assert!(!mounted.is_inert());
    }

    #[test]
    fn test_press_in_and_out_transition() {
        let mut mounted = Button::new("Press Me").mount();

        mounted.press_in();
        assert_eq!(mounted.press_state(), PressState::Pressed);

        mounted.press_out();
        assert_eq!(mounted.press_state(), PressState::Resting);
    }

    #[test]
    fn test_press_out_without_press_in_stays_resting() {
        let mut mounted = Button::new("Press Me").mount();
        mounted.press_out();
        assert_eq!(mounted.press_state(), PressState::Resting);
    }

    #[test]
    fn test_press_invokes_handler() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut mounted = Button::new("Press Me")
            .mount()
            .on_press(move || seen.set(seen.get() + 1));

        mounted.press();
        mounted.press();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_long_press_invokes_handler() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut mounted = Button::new("Long Press Me")
            .mount()
            .on_long_press(move || seen.set(seen.get() + 1));

        mounted.long_press();
        assert_eq!(count.get(), 1);

        mounted.press();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_press_without_handler_is_quiet() {
        let mut mounted = Button::new("Press Me").mount();
        mounted.press();
        mounted.long_press();
        assert_eq!(mounted.press_state(), PressState::Resting);
    }

    // ==========================================================================
    // Inert Gating Tests
    // ==========================================================================

    #[test]
    fn test_disabled_button_is_inert() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut mounted = Button::new("Submit")
            .disabled(true)
            .mount()
            .on_press(move || seen.set(seen.get() + 1));

        assert!(mounted.is_inert());

        mounted.press_in();
        assert_eq!(mounted.press_state(), PressState::Resting);

        mounted.press();
        mounted.long_press();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn test_loading_button_is_inert() {
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        let mut mounted = Button::new("Loading...")
            .loading(true)
            .mount()
            .on_press(move || seen.set(seen.get() + 1));

        assert!(mounted.is_inert());

        mounted.press_in();
        assert_eq!(mounted.press_state(), PressState::Resting);

        mounted.press();
        assert_eq!(count.get(), 0);
    }

    // ==========================================================================
    // Style Integration Tests
    // ==========================================================================

    #[test]
    fn test_style_tracks_press_state() {
        let mut mounted = Button::new("Press Me").mount();

        assert_eq!(
            mounted.style(&light()).background_color.as_deref(),
            Some("#0A7EA4")
        );

        mounted.press_in();
        assert_eq!(
            mounted.style(&light()).background_color.as_deref(),
            Some("#085E7D")
        );
    }

    #[test]
    fn test_press_round_trip_restores_style() {
        let mut mounted = Button::new("Press Me").mount();
        let resting = mounted.style(&light());

        mounted.press_in();
        assert_ne!(mounted.style(&light()), resting);

        mounted.press_out();
        assert_eq!(mounted.style(&light()), resting);
    }

    #[test]
    fn test_handlers_do_not_affect_configuration() {
        let config = Button::new("Press Me");
        let mounted = config.clone().mount().on_press(|| {});
        assert_eq!(mounted.button(), &config);
    }
}
