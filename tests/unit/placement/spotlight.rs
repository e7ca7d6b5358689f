use super::*;

fn viewport() -> Rect {
    Rect::new(0.0, 0.0, 400.0, 800.0)
}

fn xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::from_origin_size((x, y), (w, h))
}

const POPUP: Size = Size::new(300.0, 280.0);

#[test]
fn target_near_top_places_below() {
    let p = compute_placement(viewport(), xywh(20.0, 20.0, 100.0, 50.0), POPUP, 12.0);
    assert_eq!(p.tier, PlacementTier::Below);
    assert_eq!(p.origin.y, 82.0);
}

#[test]
fn target_near_bottom_places_above() {
    let p = compute_placement(viewport(), xywh(150.0, 730.0, 100.0, 50.0), POPUP, 12.0);
    assert_eq!(p.tier, PlacementTier::Above);
    // Bottom edge of the card sits `margin` above the target top.
    assert_eq!(p.origin.y + POPUP.height, 730.0 - 12.0);
}

#[test]
fn tall_target_falls_back_to_center() {
    // Bottom at 780 and top at 200: neither side has room for 280 + 12.
    let p = compute_placement(viewport(), xywh(150.0, 200.0, 100.0, 580.0), POPUP, 12.0);
    assert_eq!(p.tier, PlacementTier::Centered);
    assert_eq!(p.origin.y, 260.0);
}

#[test]
fn exact_fit_below_goes_to_next_tier() {
    // 508 + 280 + 12 == 800: not strictly less, so "below" is rejected.
    let p = compute_placement(viewport(), xywh(150.0, 458.0, 100.0, 50.0), POPUP, 12.0);
    assert_eq!(p.tier, PlacementTier::Above);
}

#[test]
fn exact_fit_above_goes_to_center() {
    // Top at 292: 292 - 280 - 12 == 0, not strictly greater.
    // Bottom at 560: 560 + 292 > 800, so below fails too.
    let p = compute_placement(viewport(), xywh(150.0, 292.0, 100.0, 268.0), POPUP, 12.0);
    assert_eq!(p.tier, PlacementTier::Centered);
}

#[test]
fn horizontal_clamp_left_edge() {
    let p = compute_placement(viewport(), xywh(0.0, 20.0, 20.0, 20.0), POPUP, 12.0);
    assert_eq!(p.origin.x, 12.0);
}

#[test]
fn horizontal_clamp_right_edge() {
    let p = compute_placement(viewport(), xywh(380.0, 20.0, 20.0, 20.0), POPUP, 12.0);
    assert_eq!(p.origin.x, 400.0 - 300.0 - 12.0);
}

#[test]
fn horizontal_center_when_room() {
    let p = compute_placement(viewport(), xywh(150.0, 20.0, 100.0, 20.0), POPUP, 12.0);
    assert_eq!(p.origin.x, 50.0);
}

#[test]
fn narrow_viewport_right_bound_wins() {
    let vp = Rect::new(0.0, 0.0, 310.0, 800.0);
    let p = compute_placement(vp, xywh(0.0, 20.0, 20.0, 20.0), POPUP, 12.0);
    assert_eq!(p.origin.x, -2.0);
}

#[test]
fn cutout_is_even_odd_with_hole_over_target() {
    let target = xywh(20.0, 20.0, 100.0, 50.0);
    let c = compute_cutout(viewport(), target, 12.0);
    assert_eq!(c.fill_rule, FillRule::EvenOdd);
    assert_eq!(c.hole.rect(), target);
    assert!(c.is_dimmed(viewport(), Point::new(300.0, 500.0)));
    assert!(!c.is_dimmed(viewport(), Point::new(70.0, 45.0)));
    // Rounded corner: the extreme corner point stays dimmed.
    assert!(c.is_dimmed(viewport(), Point::new(20.5, 20.5)));
    // Outside the viewport is not part of the overlay.
    assert!(!c.is_dimmed(viewport(), Point::new(-5.0, 10.0)));
}

#[test]
fn cutout_path_has_two_closed_subpaths() {
    let c = compute_cutout(viewport(), xywh(20.0, 20.0, 100.0, 50.0), 12.0);
    let moves = c
        .path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::MoveTo(_)))
        .count();
    assert_eq!(moves, 2);
    assert!(c.svg_path().starts_with('M'));
}

#[test]
fn place_step_uses_height_preset() {
    let theme = Theme::default();
    let with = Step::new("d", xywh(20.0, 20.0, 100.0, 50.0)).with_image("i.png");
    let without = Step::new("d", xywh(20.0, 20.0, 100.0, 50.0));

    let a = place_step(viewport(), &with, &theme);
    let b = place_step(viewport(), &without, &theme);
    assert_eq!(a.popup_frame.height(), 280.0);
    assert_eq!(b.popup_frame.height(), 160.0);
    assert_eq!(a.popup_frame.width(), 300.0);
    assert_eq!(a.popup_frame.y0, 82.0);
    assert_eq!(a.tier, PlacementTier::Below);
}

#[test]
fn placement_shifts_with_image_preset() {
    // Target bottom at 600: 160-high card fits below, 280-high does not.
    let theme = Theme::default();
    let target = xywh(150.0, 550.0, 100.0, 50.0);
    let small = place_step(viewport(), &Step::new("d", target), &theme);
    let tall = place_step(viewport(), &Step::new("d", target).with_image("i"), &theme);
    assert_eq!(small.tier, PlacementTier::Below);
    assert_eq!(tall.tier, PlacementTier::Above);
}
