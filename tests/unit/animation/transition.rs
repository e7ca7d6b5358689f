use super::*;

fn change(has_image: bool) -> StepChange {
    StepChange {
        from: Rect::new(12.0, 82.0, 312.0, 362.0),
        to: Rect::new(88.0, 456.0, 388.0, 616.0),
        had_image: true,
        has_image,
    }
}

#[test]
fn popup_frame_settles_after_relayout() {
    let c = change(false);
    assert_eq!(c.sample(0.0).popup_frame, c.from);
    assert_eq!(c.sample(POPUP_RELAYOUT_SECS).popup_frame, c.to);
    assert_eq!(c.sample(10.0).popup_frame, c.to);

    let mid = c.sample(POPUP_RELAYOUT_SECS / 2.0).popup_frame;
    assert!(mid.y0 > c.from.y0 && mid.y0 < c.to.y0);
}

#[test]
fn image_fades_out_then_springs_in() {
    let c = change(true);
    assert_eq!(c.sample(0.0).image_opacity, 1.0);
    assert!(c.sample(IMAGE_FADE_OUT_SECS * 0.5).image_opacity < 1.0);
    assert!(c.sample(IMAGE_FADE_OUT_SECS).image_opacity < 1e-6);

    let settled = c.sample(IMAGE_FADE_OUT_SECS + IMAGE_SPRING_IN_SECS);
    assert!((settled.image_opacity - 1.0).abs() < 1e-9);
    assert!((settled.image_scale - 1.0).abs() < 1e-9);

    let peak = c.sample(IMAGE_FADE_OUT_SECS + IMAGE_SPRING_IN_SECS * 0.6);
    assert!(peak.image_scale > 1.0);
    assert_eq!(c.duration(), IMAGE_FADE_OUT_SECS + IMAGE_SPRING_IN_SECS);
}

#[test]
fn image_stays_hidden_when_next_step_has_none() {
    let c = change(false);
    assert_eq!(c.sample(0.3).image_opacity, 0.0);
    assert_eq!(c.duration(), POPUP_RELAYOUT_SECS);
}
