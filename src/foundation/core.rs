use crate::foundation::error::{TourError, TourResult};

pub use kurbo::{BezPath, Point, Rect, RoundedRect, Size, Vec2};

/// Axis-aligned rectangle in absolute window coordinates, as hosts write it.
///
/// This is the boundary representation used in tour documents; the core
/// works on [`Rect`] internally.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScreenRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, must be >= 0.
    pub width: f64,
    /// Height, must be >= 0.
    pub height: f64,
}

impl ScreenRect {
    /// Create a rectangle from origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Reject non-finite coordinates and negative extents.
    pub fn validate(&self) -> TourResult<()> {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(TourError::validation("target rect must be finite"));
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(TourError::validation(
                "target rect width/height must be >= 0",
            ));
        }
        Ok(())
    }

    /// Convert into a `kurbo` rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::from_origin_size((self.x, self.y), (self.width, self.height))
    }
}

impl From<Rect> for ScreenRect {
    fn from(r: Rect) -> Self {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<ScreenRect> for Rect {
    fn from(r: ScreenRect) -> Self {
        r.to_rect()
    }
}

/// Size of the window the overlay covers, in points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub fn new(width: f64, height: f64) -> TourResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(TourError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }

    /// Viewport bounds anchored at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        // iPhone-class portrait window.
        Self {
            width: 390.0,
            height: 844.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
