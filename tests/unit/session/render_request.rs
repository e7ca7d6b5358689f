use super::*;
use crate::placement::PlacementTier;

fn steps(n: usize) -> Vec<Step> {
    (0..n)
        .map(|i| {
            Step::new(
                format!("step {i}"),
                Rect::from_origin_size((20.0, 20.0 + 60.0 * i as f64), (100.0, 50.0)),
            )
        })
        .collect()
}

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 800.0)
}

#[test]
fn single_step_hides_back_and_shows_finish() {
    let theme = Theme::default();
    let s = steps(1);
    let req = RenderRequest::build(&s, 0, &theme, viewport()).unwrap();
    assert!(!req.buttons.back_visible);
    assert_eq!(req.buttons.action_label, "Done");
    assert!(req.buttons.is_finish);
    assert!(!req.indicator.visible);
}

#[test]
fn middle_step_shows_back_and_next() {
    let theme = Theme::default();
    let s = steps(3);
    let req = RenderRequest::build(&s, 1, &theme, viewport()).unwrap();
    assert!(req.buttons.back_visible);
    assert_eq!(req.buttons.back_label, "Back");
    assert_eq!(req.buttons.action_label, "Continue");
    assert!(!req.buttons.is_finish);
    assert_eq!(
        req.indicator,
        StepIndicator {
            count: 3,
            current: 1,
            visible: true
        }
    );
}

#[test]
fn last_step_shows_finish() {
    let theme = Theme::default();
    let s = steps(3);
    let req = RenderRequest::build(&s, 2, &theme, viewport()).unwrap();
    assert_eq!(req.buttons.action_label, "Done");
    assert!(req.buttons.back_visible);
}

#[test]
fn out_of_range_index_yields_none() {
    let theme = Theme::default();
    let s = steps(2);
    assert!(RenderRequest::build(&s, 2, &theme, viewport()).is_none());
}

#[test]
fn layout_hints_follow_content() {
    let theme = Theme::default();
    let s = vec![
        Step::new("d", Rect::from_origin_size((20.0, 20.0), (100.0, 50.0)))
            .with_title("t")
            .with_image("img"),
    ];
    let req = RenderRequest::build(&s, 0, &theme, viewport()).unwrap();
    assert_eq!(req.layout.image_height, 120.0);
    assert!(req.layout.show_title);
    assert_eq!(req.placement.tier, PlacementTier::Below);
    // Card is centered on target midX 70, then clamped to the 12pt margin.
    assert_eq!(req.image_slot(), Some(Rect::new(12.0, 82.0, 312.0, 202.0)));

    let plain = steps(1);
    let req = RenderRequest::build(&plain, 0, &theme, viewport()).unwrap();
    assert_eq!(req.layout.image_height, 0.0);
    assert!(!req.layout.show_title);
    assert!(req.image_slot().is_none());
}

#[test]
fn action_button_width_has_floor() {
    assert_eq!(PopupLayout::action_button_width(10.0), 65.0);
    assert_eq!(PopupLayout::action_button_width(60.0), 92.0);
}

#[test]
fn step_text_style_overrides_theme() {
    use crate::foundation::color::Color;
    use crate::model::step::TextStyle;
    use crate::model::theme::{FontSpec, FontWeight};

    let theme = Theme::default();
    let red = Color::rgb(255, 59, 48);
    let s = vec![
        Step::new("d", Rect::from_origin_size((20.0, 20.0), (100.0, 50.0)))
            .with_title("t")
            .with_title_style(TextStyle {
                font: Some(FontSpec::new(24.0, FontWeight::Semibold)),
                color: None,
            })
            .with_description_style(TextStyle {
                font: None,
                color: Some(red),
            }),
        Step::new("plain", Rect::from_origin_size((20.0, 20.0), (100.0, 50.0))),
    ];

    let styled = RenderRequest::build(&s, 0, &theme, viewport()).unwrap();
    assert_eq!(
        styled.layout.title_text.font,
        FontSpec::new(24.0, FontWeight::Semibold)
    );
    assert_eq!(styled.layout.title_text.color, theme.colors.title);
    assert_eq!(styled.layout.description_text.font, theme.fonts.description);
    assert_eq!(styled.layout.description_text.color, red);

    let plain = RenderRequest::build(&s, 1, &theme, viewport()).unwrap();
    assert_eq!(plain.layout.title_text.font, theme.fonts.title);
    assert_eq!(plain.layout.title_text.color, theme.colors.title);
    assert_eq!(plain.layout.description_text.font, theme.fonts.description);
    assert_eq!(plain.layout.description_text.color, theme.colors.description);
}
