//! Press Interaction Tests
//!
//! End-to-end press lifecycle checks: simulated presses against mounted
//! buttons, with styles resolved before, during, and after the press.

use app_ui::components::{Button, ButtonContent};
use app_ui::interaction::PressState;
use app_ui::screens::{HomeScreen, ScreenNode};
use app_ui::theme::{get_colors, ThemeName};
use std::cell::Cell;
use std::rc::Rc;

/// Pull every demo button out of the showcase tree
fn demo_buttons(screen: &HomeScreen) -> Vec<Button> {
    screen
        .prop_sections()
        .iter()
        .map(|section| {
            let ScreenNode::View { children, .. } = section else {
                panic!("expected a section view, got {section:?}");
            };
            let ScreenNode::Button(button) = &children[2] else {
                panic!("expected a demo button, got {:?}", children[2]);
            };
            button.clone()
        })
        .collect()
}

/// Test that a disabled button renders the gray overlay and ignores a press
#[test]
fn test_disabled_submit_ignores_press() {
    for scheme in [ThemeName::Light, ThemeName::Dark] {
        let colors = get_colors(scheme);
        let fired = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&fired);
        let mut mounted = Button::new("Submit")
            .disabled(true)
            .mount()
            .on_press(move || seen.set(seen.get() + 1));

        // Gray overlay over the theme fill
        let style = mounted.style(&colors);
        assert_eq!(style.overlay_color.as_deref(), Some("gray"));
        assert_eq!(style.background_color, Some(colors.tint.clone()));

        // A simulated press fires nothing and changes nothing
        mounted.press_in();
        mounted.press();
        mounted.press_out();
        assert_eq!(fired.get(), 0);
        assert_eq!(mounted.style(&colors), style);
    }
}

/// Test that a loading button shows its spinner and ignores a press
#[test]
fn test_loading_button_shows_spinner_and_ignores_press() {
    let colors = get_colors(ThemeName::Light);
    let fired = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&fired);
    let mut mounted = Button::new("Loading...")
        .loading(true)
        .with_loading_indicator_color("white")
        .mount()
        .on_press(move || seen.set(seen.get() + 1));

    // A white spinner replaces the label
    let row = mounted.content(&colors);
    assert_eq!(row.len(), 1);
    match &row[0] {
        ButtonContent::Spinner(spinner) => {
            assert_eq!(spinner.color.as_deref(), Some("white"));
        }
        other => panic!("expected a spinner, got {other:?}"),
    }

    mounted.press_in();
    mounted.press();
    assert_eq!(mounted.press_state(), PressState::Resting);
    assert_eq!(fired.get(), 0);
}

/// Test that releasing a press restores the resting fill exactly
#[test]
fn test_press_round_trip_restores_theme_fill() {
    for scheme in [ThemeName::Light, ThemeName::Dark] {
        let colors = get_colors(scheme);
        let mut mounted = Button::new("Press Me").mount();

        let resting = mounted.style(&colors);
        assert_eq!(resting.background_color, Some(colors.tint.clone()));

        mounted.press_in();
        let pressed = mounted.style(&colors);
        assert_eq!(pressed.background_color, Some(colors.press_tint.clone()));
        assert_eq!(pressed.opacity, Some(0.7));

        mounted.press_out();
        assert_eq!(mounted.style(&colors), resting);
    }
}

/// Test that the underlay demo swaps its fill only while held down
#[test]
fn test_underlay_demo_swaps_fill_only_while_pressed() {
    let screen = HomeScreen::new(ThemeName::Light);
    let colors = get_colors(ThemeName::Light);
    let button = demo_buttons(&screen)
        .into_iter()
        .find(|button| button.underlay_color.is_some())
        .unwrap();

    let mut mounted = button.mount();
    assert_eq!(
        mounted.style(&colors).background_color,
        Some(colors.tint.clone())
    );

    mounted.press_in();
    assert_eq!(
        mounted.style(&colors).background_color.as_deref(),
        Some("lightblue")
    );

    mounted.press_out();
    assert_eq!(
        mounted.style(&colors).background_color,
        Some(colors.tint.clone())
    );
}

/// Test that the long-press demo fires its handler
#[test]
fn test_long_press_demo_fires() {
    let screen = HomeScreen::new(ThemeName::Light);
    let button = demo_buttons(&screen)
        .into_iter()
        .find(|button| button.label == "Long Press Me")
        .unwrap();

    let fired = Rc::new(Cell::new(false));
    let seen = Rc::clone(&fired);
    let mut mounted = button.mount().on_long_press(move || seen.set(true));

    mounted.press_in();
    mounted.long_press();
    mounted.press_out();
    assert!(fired.get());
}

/// Test a simulated press on every demo in the showcase
#[test]
fn test_demo_buttons_gate_presses_on_inertness() {
    let screen = HomeScreen::new(ThemeName::Light);
    let buttons = demo_buttons(&screen);
    assert_eq!(buttons.len(), 19);

    let fired = Rc::new(Cell::new(0u32));
    let mut live = 0;

    for button in buttons {
        let seen = Rc::clone(&fired);
        let mut mounted = button.mount().on_press(move || seen.set(seen.get() + 1));

        mounted.press_in();
        if mounted.is_inert() {
            assert_eq!(mounted.press_state(), PressState::Resting);
        } else {
            assert_eq!(mounted.press_state(), PressState::Pressed);
            live += 1;
        }
        mounted.press();
        mounted.press_out();
        assert_eq!(mounted.press_state(), PressState::Resting);
    }

    // The disabled demo and both loading demos stay quiet
    assert_eq!(live, 16);
    assert_eq!(fired.get(), 16);
}
