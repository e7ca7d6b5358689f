use kurbo::{CubicBez, ParamCurve as _, ParamCurveArclen as _};

use crate::animation::ease::Ease;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, Rect};

/// Number of current layers drawn over an image.
pub const CURRENT_COUNT: usize = 3;
/// Stroke width of each current.
pub const LINE_WIDTH: f64 = 1.5;
/// Layer opacity while no animation is running on it.
pub const BASE_OPACITY: f64 = 0.6;
/// Length of one animation cycle.
pub const PERIOD_SECS: f64 = 3.0;
/// Portion of the cycle spent drawing the stroke in.
pub const STROKE_SECS: f64 = 2.0;

// How far curves overshoot the image slot edges.
const OVERSHOOT: f64 = 8.0;
const TINT_ALPHAS: [f64; CURRENT_COUNT] = [0.4, 0.25, 0.3];
// (progress, opacity) keyframes over one cycle.
const OPACITY_KEYS: [(f64, f64); 4] = [(0.0, 0.0), (0.2, 0.8), (0.8, 0.8), (1.0, 0.0)];
// Each layer is scheduled `index * SCHEDULE_STAGGER` after start and then
// begins `index * BEGIN_STAGGER` later still.
const SCHEDULE_STAGGER_SECS: f64 = 0.3;
const BEGIN_STAGGER_SECS: f64 = 0.5;
const ARCLEN_ACCURACY: f64 = 1e-3;

/// The flowing curve of layer `index` inside `bounds`.
///
/// Returns `None` for empty bounds (nothing laid out yet).
pub fn flowing_path(bounds: Rect, index: usize) -> Option<CubicBez> {
    if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
        return None;
    }
    let (w, h) = (bounds.width(), bounds.height());
    let at = |x: f64, y: f64| Point::new(bounds.x0 + x, bounds.y0 + y);
    let m = OVERSHOOT;

    let curve = match index % CURRENT_COUNT {
        // Across the top.
        0 => CubicBez::new(
            at(-m, h * 0.2),
            at(w * 0.3, h * 0.1),
            at(w * 0.7, h * 0.4),
            at(w + m, h * 0.3),
        ),
        // Diagonal down the side.
        1 => CubicBez::new(
            at(w * 0.1, -m),
            at(w * 0.4, h * 0.3),
            at(w * 0.6, h * 0.7),
            at(w * 0.9, h + m),
        ),
        // Across the bottom.
        _ => CubicBez::new(
            at(-m, h * 0.7),
            at(w * 0.3, h * 0.6),
            at(w * 0.7, h * 0.9),
            at(w + m, h * 0.8),
        ),
    };
    Some(curve)
}

fn keyframe_opacity(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    for pair in OPACITY_KEYS.windows(2) {
        let ((t0, v0), (t1, v1)) = (pair[0], pair[1]);
        if p <= t1 {
            let u = if t1 > t0 { (p - t0) / (t1 - t0) } else { 1.0 };
            return v0 + (v1 - v0) * Ease::Linear.apply(u);
        }
    }
    OPACITY_KEYS[OPACITY_KEYS.len() - 1].1
}

/// Animated values of one layer at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSample {
    /// Fraction of the curve's length drawn, `0..=1`.
    pub stroke_end: f64,
    /// Layer opacity.
    pub opacity: f64,
}

/// One decorative layer: an independently cancelable repeating animation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurrentLayer {
    index: usize,
    scheduled_at: Option<f64>,
}

impl CurrentLayer {
    /// Idle layer `index`.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            scheduled_at: None,
        }
    }

    /// Layer index (selects curve shape and tint).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Schedule the repeating animation relative to `now_secs`.
    pub fn schedule(&mut self, now_secs: f64) {
        let i = self.index as f64;
        self.scheduled_at = Some(now_secs + i * (SCHEDULE_STAGGER_SECS + BEGIN_STAGGER_SECS));
    }

    /// Stop repeating.
    pub fn cancel(&mut self) {
        self.scheduled_at = None;
    }

    /// `true` while scheduled.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled_at.is_some()
    }

    /// Values at `now_secs`. Before the first cycle begins the layer shows
    /// its resting state: fully drawn at [`BASE_OPACITY`].
    pub fn sample(&self, now_secs: f64) -> LayerSample {
        let resting = LayerSample {
            stroke_end: 1.0,
            opacity: BASE_OPACITY,
        };
        let Some(begin) = self.scheduled_at else {
            return resting;
        };
        let local = now_secs - begin;
        if local < 0.0 {
            return resting;
        }
        let phase = local.rem_euclid(PERIOD_SECS);
        let stroke_end = if phase < STROKE_SECS {
            Ease::EaseInOut.apply(phase / STROKE_SECS)
        } else {
            1.0
        };
        LayerSample {
            stroke_end,
            opacity: keyframe_opacity(phase / PERIOD_SECS),
        }
    }
}

/// A ready-to-draw decorative stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecorStroke {
    /// Full curve.
    pub curve: CubicBez,
    /// Fraction of the curve's length to draw.
    pub stroke_end: f64,
    /// Layer opacity, applied on top of `color`'s alpha.
    pub opacity: f64,
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub line_width: f64,
}

impl DecorStroke {
    /// The drawn prefix of the curve, or `None` when nothing is drawn yet.
    pub fn visible_curve(&self) -> Option<CubicBez> {
        if self.stroke_end <= 0.0 {
            return None;
        }
        if self.stroke_end >= 1.0 {
            return Some(self.curve);
        }
        let len = self.curve.arclen(ARCLEN_ACCURACY);
        let t = self
            .curve
            .inv_arclen(len * self.stroke_end, ARCLEN_ACCURACY);
        Some(self.curve.subsegment(0.0..t))
    }

    /// Final color with layer opacity folded into alpha.
    pub fn effective_color(&self) -> Color {
        self.color
            .with_alpha(self.color.alpha_f64() * self.opacity.clamp(0.0, 1.0))
    }
}

/// Drives the three current layers for one tour session.
///
/// Start it when a session becomes active and stop it when the session ends.
/// It never sees the controller; the presentation layer passes in the image
/// slot of whatever step it is currently drawing.
#[derive(Clone, Debug)]
pub struct DecorAnimator {
    tint: Color,
    layers: [CurrentLayer; CURRENT_COUNT],
}

impl DecorAnimator {
    /// Idle animator tinted with `tint` (the step-indicator color).
    pub fn new(tint: Color) -> Self {
        Self {
            tint,
            layers: std::array::from_fn(CurrentLayer::new),
        }
    }

    /// Schedule every layer. Restarting a running animator is a no-op.
    pub fn start(&mut self, now_secs: f64) {
        if self.is_running() {
            return;
        }
        for layer in &mut self.layers {
            layer.schedule(now_secs);
        }
    }

    /// Cancel every layer.
    pub fn stop(&mut self) {
        for layer in &mut self.layers {
            layer.cancel();
        }
    }

    /// `true` while any layer is scheduled.
    pub fn is_running(&self) -> bool {
        self.layers.iter().any(CurrentLayer::is_scheduled)
    }

    /// Layers, for per-layer control.
    pub fn layers_mut(&mut self) -> &mut [CurrentLayer; CURRENT_COUNT] {
        &mut self.layers
    }

    /// Strokes to draw at `now_secs` over `image_slot`.
    ///
    /// Empty when stopped or when the current step has no image.
    pub fn frame(&self, image_slot: Option<Rect>, now_secs: f64) -> Vec<DecorStroke> {
        let Some(slot) = image_slot else {
            return Vec::new();
        };
        if !self.is_running() {
            return Vec::new();
        }
        self.layers
            .iter()
            .filter(|l| l.is_scheduled())
            .filter_map(|l| {
                let curve = flowing_path(slot, l.index())?;
                let s = l.sample(now_secs);
                Some(DecorStroke {
                    curve,
                    stroke_end: s.stroke_end,
                    opacity: s.opacity,
                    color: self.tint.with_alpha(TINT_ALPHAS[l.index() % CURRENT_COUNT]),
                    line_width: LINE_WIDTH,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/currents.rs"]
mod tests;
