//! Navigation state machine and the contracts around it.
//!
//! - [`TourController`] owns the single active session and its index.
//! - [`TourObserver`] receives step-shown / finished notifications.
//! - [`RenderRequest`] is what a presentation layer draws for the current step.

/// Session lifecycle and navigation.
pub mod controller;
/// Host notifications.
pub mod observer;
/// Per-step draw instructions.
pub mod render_request;

pub use controller::{
    AdvanceReason, MAX_STEPS, SessionHandle, SessionState, TourController, TourInput, Transition,
};
pub use observer::{ChannelObserver, FnObserver, NoopObserver, TourEvent, TourObserver};
pub use render_request::{ButtonState, PopupLayout, RenderRequest, StepIndicator};
