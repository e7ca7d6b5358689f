//! Pure geometry: where the highlight hole goes and where the popup card sits.
//!
//! Nothing here retains state between calls; every result is derived from the
//! viewport bounds, the current step's target and the theme dimensions, and is
//! recomputed on every layout change.

/// Cutout and placement computations.
pub mod spotlight;

pub use spotlight::{
    Cutout, FillRule, Placement, PlacementResult, PlacementTier, compute_cutout,
    compute_placement, place_step, popup_height_for,
};

/// Default gap between target and popup, and minimum inset from viewport edges.
pub const DEFAULT_MARGIN: f64 = 12.0;
