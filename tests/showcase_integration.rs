//! Showcase Integration Tests
//!
//! End-to-end checks that the showcase screen demonstrates every button
//! option and that each demo resolves correctly under both color schemes.

use app_ui::components::{Button, ButtonContent, ButtonSize, ButtonVariant, IconPosition};
use app_ui::interaction::PressState;
use app_ui::screens::{HomeScreen, ScreenNode};
use app_ui::theme::{get_colors, ThemeName};

/// Collect each section's heading text and demo button
fn demo_buttons(screen: &HomeScreen) -> Vec<(String, Button)> {
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
            (heading_text(&children[0]), button.clone())
        })
        .collect()
}

/// The heading of a section, reaching into the nested row if present
fn heading_text(node: &ScreenNode) -> String {
    match node {
        ScreenNode::Text(text) => text.content.clone(),
        ScreenNode::View { children, .. } => heading_text(&children[0]),
        other => panic!("expected a heading, got {other:?}"),
    }
}

/// Test that the showcase covers every button option, in API order
#[test]
fn test_every_button_option_has_a_section() {
    let screen = HomeScreen::new(ThemeName::Light);

    let names: Vec<String> = demo_buttons(&screen)
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert_eq!(
        names,
        vec![
            "label",
            "on_press",
            "disabled",
            "loading",
            "loading_indicator_color",
            "icon",
            "icon_position",
            "style",
            "text_style",
            "raised",
            "border_radius",
            "border_width",
            "border_color",
            "active_opacity",
            "on_long_press",
            "size",
            "variant",
            "underlay_color",
            "test_id",
        ]
    );
}

/// Test that each section's demo button actually exercises its option
#[test]
fn test_sections_demonstrate_their_option() {
    let screen = HomeScreen::new(ThemeName::Light);

    for (name, button) in demo_buttons(&screen) {
        match name.as_str() {
            "label" => assert_eq!(button.label, "Submit"),
            "on_press" => assert_eq!(button.label, "Press Me"),
            "disabled" => assert!(button.disabled),
            "loading" => assert!(button.loading),
            "loading_indicator_color" => {
                assert!(button.loading);
                assert_eq!(button.loading_indicator_color.as_deref(), Some("white"));
            }
            "icon" => assert_eq!(button.icon.as_deref(), Some("checkmark-circle-outline")),
            "icon_position" => {
                assert!(button.icon.is_some());
                assert_eq!(button.icon_position, IconPosition::Right);
            }
            "style" => {
                let style = button.style.as_ref().unwrap();
                assert_eq!(style.background_color.as_deref(), Some("blue"));
                assert_eq!(style.padding_vertical, Some(10.0));
                assert_eq!(style.padding_horizontal, Some(10.0));
            }
            "text_style" => {
                let overrides = button.text_style.as_ref().unwrap();
                assert_eq!(overrides.color.as_deref(), Some("white"));
                assert_eq!(overrides.font_size, Some(18.0));
            }
            "raised" => assert!(button.raised),
            "border_radius" => assert_eq!(button.border_radius, Some(25.0)),
            "border_width" => assert_eq!(button.border_width, Some(5.0)),
            "border_color" => {
                assert_eq!(button.border_color.as_deref(), Some("silver"));
                assert_eq!(button.border_width, Some(2.0));
            }
            "active_opacity" => assert_eq!(button.active_opacity, 0.5),
            "on_long_press" => assert_eq!(button.label, "Long Press Me"),
            "size" => assert_eq!(button.size, ButtonSize::Large),
            "variant" => assert_eq!(button.variant, ButtonVariant::Outlined),
            "underlay_color" => assert_eq!(button.underlay_color.as_deref(), Some("lightblue")),
            "test_id" => assert_eq!(button.test_id.as_deref(), Some("submitButton")),
            other => panic!("unexpected section {other:?}"),
        }
    }
}

/// Test the plain submit button under both schemes
#[test]
fn test_default_submit_render() {
    let button = Button::new("Submit");

    for scheme in [ThemeName::Light, ThemeName::Dark] {
        let colors = get_colors(scheme);
        let style = button.computed_style(&colors, PressState::Resting);

        // Solid variant, medium size, default radius, theme tint fill
        assert_eq!(button.variant, ButtonVariant::Solid);
        assert_eq!(button.size, ButtonSize::Medium);
        assert_eq!(style.border_radius, Some(8.0));
        assert_eq!(style.background_color, Some(colors.tint.clone()));
        assert!(style.overlay_color.is_none());

        // A single enabled label, no icon
        let row = button.content_row(&colors);
        assert_eq!(row.len(), 1);
        match &row[0] {
            ButtonContent::Label(label) => {
                assert_eq!(label.text, "Submit");
                assert_eq!(label.style.color, Some(colors.text.clone()));
            }
            other => panic!("expected a label, got {other:?}"),
        }
        assert!(!button.clone().mount().is_inert());
    }
}

/// Test that every demo resolves a renderable style and content row
#[test]
fn test_demo_styles_resolve_under_both_schemes() {
    for scheme in [ThemeName::Light, ThemeName::Dark] {
        let colors = get_colors(scheme);
        let screen = HomeScreen::new(scheme);

        for (name, button) in demo_buttons(&screen) {
            let style = button.computed_style(&colors, PressState::Resting);
            assert!(
                style.background_color.is_some(),
                "{name} demo resolved no fill under {scheme:?}"
            );
            assert!(
                style.padding_vertical.is_some() && style.padding_horizontal.is_some(),
                "{name} demo resolved no padding under {scheme:?}"
            );

            let row = button.content_row(&colors);
            assert!(
                row.iter().any(|node| matches!(
                    node,
                    ButtonContent::Label(_) | ButtonContent::Spinner(_)
                )),
                "{name} demo rendered neither label nor spinner under {scheme:?}"
            );
        }
    }
}

/// Test that the outlined demo stays transparent with a visible border
#[test]
fn test_outlined_demo_render() {
    let screen = HomeScreen::new(ThemeName::Dark);
    let colors = get_colors(ThemeName::Dark);

    let (_, button) = demo_buttons(&screen)
        .into_iter()
        .find(|(name, _)| name == "variant")
        .unwrap();

    let style = button.computed_style(&colors, PressState::Resting);
    assert_eq!(style.background_color.as_deref(), Some("transparent"));
    assert_eq!(style.border_width, Some(2.0));
    assert_eq!(style.border_color, Some(colors.tint));
}

/// Test that the full screen payload survives a serialization round trip
#[test]
fn test_screen_payload_roundtrip() {
    for scheme in [ThemeName::Light, ThemeName::Dark] {
        let screen = HomeScreen::new(scheme);
        let json = serde_json::to_string_pretty(&screen).unwrap();

        let restored: HomeScreen = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, screen);
        assert_eq!(restored.header.image.tint_color, get_colors(scheme).text);
    }
}
