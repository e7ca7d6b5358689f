use super::*;

fn slot() -> Rect {
    Rect::new(10.0, 100.0, 310.0, 220.0)
}

#[test]
fn flowing_paths_overshoot_the_slot() {
    let top = flowing_path(slot(), 0).unwrap();
    assert_eq!(top.p0, Point::new(2.0, 124.0));
    assert_eq!(top.p3, Point::new(318.0, 136.0));

    let side = flowing_path(slot(), 1).unwrap();
    assert_eq!(side.p0.y, 92.0);
    assert_eq!(side.p3.y, 228.0);

    // Shapes repeat every three layers.
    assert_eq!(flowing_path(slot(), 5), flowing_path(slot(), 2));
}

#[test]
fn empty_bounds_have_no_path() {
    assert!(flowing_path(Rect::new(0.0, 0.0, 0.0, 10.0), 0).is_none());
}

#[test]
fn keyframes_interpolate() {
    assert_eq!(keyframe_opacity(0.0), 0.0);
    assert!((keyframe_opacity(0.1) - 0.4).abs() < 1e-9);
    assert!((keyframe_opacity(0.5) - 0.8).abs() < 1e-9);
    assert!((keyframe_opacity(0.9) - 0.4).abs() < 1e-9);
    assert_eq!(keyframe_opacity(1.0), 0.0);
}

#[test]
fn layer_rests_until_its_staggered_begin() {
    let mut layer = CurrentLayer::new(2);
    layer.schedule(10.0);
    // Layer 2 begins 2 * (0.3 + 0.5) = 1.6s after scheduling.
    let before = layer.sample(11.5);
    assert_eq!(before.stroke_end, 1.0);
    assert_eq!(before.opacity, BASE_OPACITY);

    let begin = layer.sample(11.6 + 1e-9);
    assert!(begin.stroke_end.abs() < 1e-6);
    assert!(begin.opacity.abs() < 1e-6);
}

#[test]
fn layer_cycle_draws_then_holds() {
    let mut layer = CurrentLayer::new(0);
    layer.schedule(0.0);
    let mid = layer.sample(1.0);
    assert!((mid.stroke_end - 0.5).abs() < 1e-6);
    assert!((mid.opacity - 0.8).abs() < 1e-9);

    let late = layer.sample(2.5);
    assert_eq!(late.stroke_end, 1.0);

    // Repeats with a 3s period.
    assert_eq!(layer.sample(4.0), layer.sample(1.0));
}

#[test]
fn animator_lifecycle() {
    let mut a = DecorAnimator::new(Color::SYSTEM_BLUE);
    assert!(!a.is_running());
    assert!(a.frame(Some(slot()), 1.0).is_empty());

    a.start(0.0);
    assert!(a.is_running());
    let strokes = a.frame(Some(slot()), 1.0);
    assert_eq!(strokes.len(), CURRENT_COUNT);
    assert_eq!(strokes[0].color, Color::SYSTEM_BLUE.with_alpha(0.4));
    assert_eq!(strokes[1].color, Color::SYSTEM_BLUE.with_alpha(0.25));
    assert_eq!(strokes[0].line_width, LINE_WIDTH);

    // No image, nothing to draw.
    assert!(a.frame(None, 1.0).is_empty());

    a.stop();
    assert!(!a.is_running());
    assert!(a.frame(Some(slot()), 1.0).is_empty());
}

#[test]
fn cancelling_one_layer_leaves_others_running() {
    let mut a = DecorAnimator::new(Color::SYSTEM_BLUE);
    a.start(0.0);
    a.layers_mut()[1].cancel();
    let strokes = a.frame(Some(slot()), 0.5);
    assert_eq!(strokes.len(), 2);
}

#[test]
fn visible_curve_follows_stroke_end() {
    let curve = flowing_path(slot(), 0).unwrap();
    let mut s = DecorStroke {
        curve,
        stroke_end: 0.0,
        opacity: 0.5,
        color: Color::rgba(0, 0, 0, 200),
        line_width: LINE_WIDTH,
    };
    assert!(s.visible_curve().is_none());

    s.stroke_end = 1.0;
    assert_eq!(s.visible_curve(), Some(curve));

    s.stroke_end = 0.5;
    let half = s.visible_curve().unwrap();
    assert_eq!(half.p0, curve.p0);
    let full_len = curve.arclen(1e-6);
    assert!((half.arclen(1e-6) - full_len / 2.0).abs() < 0.5);

    assert_eq!(s.effective_color().a, 100);
}
