use kurbo::Shape as _;

use crate::foundation::core::{BezPath, Point, Rect, RoundedRect, Size};
use crate::model::step::Step;
use crate::model::theme::{Dimensions, Theme};

// Flattening tolerance for cutout outlines, in points.
const PATH_TOLERANCE: f64 = 0.1;

/// Fill rule a rasterizer must use for [`Cutout::path`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRule {
    /// Winding-number fill.
    NonZero,
    /// Parity fill; overlapping sub-paths cancel out.
    EvenOdd,
}

/// The see-through hole of the dimming overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct Cutout {
    /// Rounded hole matching the target bounds.
    pub hole: RoundedRect,
    /// Full-viewport rectangle followed by the hole outline.
    pub path: BezPath,
    /// Always [`FillRule::EvenOdd`]: the hole cancels the viewport fill.
    pub fill_rule: FillRule,
}

impl Cutout {
    /// `true` when `p` falls on the dimmed part of the overlay.
    ///
    /// Presentation layers use this to route taps: dimmed area taps are
    /// background taps.
    pub fn is_dimmed(&self, viewport: Rect, p: Point) -> bool {
        viewport.contains(p) && !self.hole.contains(p)
    }

    /// The path as SVG path data.
    pub fn svg_path(&self) -> String {
        self.path.to_svg()
    }
}

/// Which tier of the placement policy won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementTier {
    /// Card top edge sits `margin` below the target.
    Below,
    /// Card bottom edge sits `margin` above the target.
    Above,
    /// Neither fits; card is centered vertically in the viewport.
    Centered,
}

/// Popup origin plus the tier that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner of the popup card.
    pub origin: Point,
    /// Winning tier.
    pub tier: PlacementTier,
}

/// Everything the overlay needs for one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacementResult {
    /// Highlight hole.
    pub cutout: Cutout,
    /// Popup card frame (position and size).
    pub popup_frame: Rect,
    /// Winning placement tier.
    pub tier: PlacementTier,
}

/// Build the even-odd overlay region with a rounded hole over `target`.
pub fn compute_cutout(viewport: Rect, target: Rect, corner_radius: f64) -> Cutout {
    let hole = RoundedRect::from_rect(target, corner_radius);
    let mut path = viewport.to_path(PATH_TOLERANCE);
    path.extend(hole.path_elements(PATH_TOLERANCE));
    Cutout {
        hole,
        path,
        fill_rule: FillRule::EvenOdd,
    }
}

/// Choose the popup origin: below, else above, else vertically centered.
///
/// Both fit checks are strict, so a card that would exactly touch the
/// viewport edge falls through to the next tier. Horizontally the card is
/// centered on the target and then clamped to `margin` from the left edge and
/// `margin` from the right edge, with the right bound winning on viewports
/// too narrow for both.
pub fn compute_placement(viewport: Rect, target: Rect, popup: Size, margin: f64) -> Placement {
    let fits_below = target.y1 + popup.height + margin < viewport.y1;
    let fits_above = target.y0 - popup.height - margin > viewport.y0;

    let (y, tier) = if fits_below {
        (target.y1 + margin, PlacementTier::Below)
    } else if fits_above {
        (target.y0 - margin - popup.height, PlacementTier::Above)
    } else {
        (
            viewport.center().y - popup.height / 2.0,
            PlacementTier::Centered,
        )
    };

    let x = (target.center().x - popup.width / 2.0)
        .max(viewport.x0 + margin)
        .min(viewport.x1 - popup.width - margin);

    Placement {
        origin: Point::new(x, y),
        tier,
    }
}

/// Card height preset for a step, chosen by image presence alone.
pub fn popup_height_for(dimensions: &Dimensions, has_image: bool) -> f64 {
    if has_image {
        dimensions.popup_height_with_image
    } else {
        dimensions.popup_height_without_image
    }
}

/// Cutout and popup frame for `step` inside `viewport`.
#[tracing::instrument(level = "trace", skip(step, theme))]
pub fn place_step(viewport: Rect, step: &Step, theme: &Theme) -> PlacementResult {
    let d = &theme.dimensions;
    let size = theme.popup_size(step.has_image());
    let cutout = compute_cutout(viewport, step.target, d.cutout_corner_radius);
    let placement = compute_placement(viewport, step.target, size, d.margin);
    tracing::trace!(tier = ?placement.tier, x = placement.origin.x, y = placement.origin.y, "popup placed");
    PlacementResult {
        cutout,
        popup_frame: Rect::from_origin_size(placement.origin, size),
        tier: placement.tier,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/spotlight.rs"]
mod tests;
