/// Easing functions used to map normalized animation progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// Cubic ease-in/out.
    InOutCubic,
    /// The platform "ease in, ease out" timing curve, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::EaseInOut => timing_bezier(0.42, 0.0, 0.58, 1.0, t),
        }
    }
}

/// Evaluate a unit timing curve with control points `(x1, y1)`, `(x2, y2)`.
///
/// `x(s)` is monotonic for `x1, x2` in `[0, 1]`, so bisection converges.
fn timing_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    fn coord(a: f64, b: f64, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * a + 3.0 * inv * s * s * b + s * s * s
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    let mut s = t;
    for _ in 0..48 {
        let x = coord(x1, x2, s);
        if (x - t).abs() < 1e-9 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = 0.5 * (lo + hi);
    }
    coord(y1, y2, s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
