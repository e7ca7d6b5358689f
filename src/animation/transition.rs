use crate::animation::ease::Ease;
use crate::animation::{IMAGE_FADE_OUT_SECS, IMAGE_SPRING_IN_SECS, POPUP_RELAYOUT_SECS};
use crate::foundation::core::Rect;

/// Spring-in overshoot, as a fraction of full scale.
const SPRING_OVERSHOOT: f64 = 0.08;

/// Presentation state while moving from one step's popup to the next.
///
/// Built from two consecutive render requests; it never touches the
/// controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepChange {
    /// Popup frame of the outgoing step.
    pub from: Rect,
    /// Popup frame of the incoming step.
    pub to: Rect,
    /// The outgoing step showed an image.
    pub had_image: bool,
    /// The incoming step shows an image.
    pub has_image: bool,
}

/// One sampled instant of a [`StepChange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChangeSample {
    /// Popup frame at this instant.
    pub popup_frame: Rect,
    /// Image opacity.
    pub image_opacity: f64,
    /// Image scale around its center.
    pub image_scale: f64,
}

impl StepChange {
    /// Total duration until everything has settled.
    pub fn duration(&self) -> f64 {
        let image = if self.has_image {
            IMAGE_FADE_OUT_SECS + IMAGE_SPRING_IN_SECS
        } else {
            IMAGE_FADE_OUT_SECS
        };
        POPUP_RELAYOUT_SECS.max(image)
    }

    /// Sample at `elapsed` seconds after the step changed.
    pub fn sample(&self, elapsed: f64) -> ChangeSample {
        let t = Ease::EaseInOut.apply(elapsed / POPUP_RELAYOUT_SECS);
        let popup_frame = Rect::new(
            lerp(self.from.x0, self.to.x0, t),
            lerp(self.from.y0, self.to.y0, t),
            lerp(self.from.x1, self.to.x1, t),
            lerp(self.from.y1, self.to.y1, t),
        );

        let (image_opacity, image_scale) = if elapsed < IMAGE_FADE_OUT_SECS {
            let start = if self.had_image { 1.0 } else { 0.0 };
            (start * (1.0 - elapsed.max(0.0) / IMAGE_FADE_OUT_SECS), 1.0)
        } else if self.has_image {
            let u = ((elapsed - IMAGE_FADE_OUT_SECS) / IMAGE_SPRING_IN_SECS).clamp(0.0, 1.0);
            (Ease::InOutCubic.apply(u), spring(u))
        } else {
            (0.0, 1.0)
        };

        ChangeSample {
            popup_frame,
            image_opacity,
            image_scale,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

// Grows from 0.9 past full size and settles at exactly 1 when `u` reaches 1.
fn spring(u: f64) -> f64 {
    let base = 0.9 + 0.1 * Ease::InOutCubic.apply(u);
    base + SPRING_OVERSHOOT * (std::f64::consts::PI * u).sin()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
