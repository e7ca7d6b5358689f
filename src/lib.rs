//! Coachmark drives spotlight coach tours over an existing screen.
//!
//! A host hands over an ordered list of steps (content plus an absolute
//! target rectangle captured once at start) and a [`Theme`]. The crate owns
//! the navigation state machine and the placement geometry:
//!
//! - [`TourController`] starts at most one session at a time, moves it
//!   forward and back, and notifies a [`TourObserver`].
//! - [`place_step`] computes the even-odd overlay cutout and where the popup
//!   card goes (below, above or centered, clamped horizontally).
//! - [`RenderRequest`] bundles both for a presentation layer, which draws it
//!   however it likes; [`render_preview`] is a reference CPU rasterizer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Presentation-side animation helpers.
pub mod animation;
/// Tour content, theme and JSON documents.
pub mod model;
/// Cutout and popup placement.
pub mod placement;
/// Reference rasterizer.
pub mod render;
/// Navigation state machine.
pub mod session;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    BezPath, Point, Rect, RoundedRect, ScreenRect, Size, Vec2, Viewport,
};
pub use crate::foundation::error::{TourError, TourResult};

pub use crate::animation::currents::{DecorAnimator, DecorStroke};
pub use crate::animation::ease::Ease;
pub use crate::animation::transition::{ChangeSample, StepChange};
pub use crate::model::document::{StepDef, TourDocument};
pub use crate::model::step::{ImageRef, ResolvedText, Step, StepContent, TextStyle};
pub use crate::model::theme::{
    ButtonLabels, Dimensions, FontSpec, FontWeight, Fonts, Palette, Theme,
};
pub use crate::placement::{
    Cutout, FillRule, Placement, PlacementResult, PlacementTier, compute_cutout,
    compute_placement, place_step,
};
pub use crate::render::{PreviewFrame, PreviewOpts, render_preview};
pub use crate::session::{
    AdvanceReason, ChannelObserver, FnObserver, MAX_STEPS, NoopObserver, RenderRequest, SessionHandle,
    SessionState, TourController, TourEvent, TourInput, TourObserver, Transition,
};
