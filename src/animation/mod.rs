//! Presentation-side motion: easing curves and the decorative currents drawn
//! over a step's image.
//!
//! Nothing in here can reach the navigation state machine. Animators only
//! receive geometry and elapsed time.

/// Decorative flowing strokes over the image slot.
pub mod currents;
/// Easing curves.
pub mod ease;
/// Popup relayout and image swap between steps.
pub mod transition;

/// Duration of the popup relayout when the current step changes.
pub const POPUP_RELAYOUT_SECS: f64 = 0.25;
/// Fade-out of the outgoing image on step change.
pub const IMAGE_FADE_OUT_SECS: f64 = 0.15;
/// Spring-in of the incoming image on step change.
pub const IMAGE_SPRING_IN_SECS: f64 = 0.4;
