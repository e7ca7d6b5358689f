//! Reference CPU rasterizer for render requests.
//!
//! Hosts draw with their own toolkit; this exists so tours can be previewed
//! and regression-tested without one.

/// `vello_cpu` preview of a render request.
pub mod preview;

pub use preview::{PreviewFrame, PreviewOpts, render_preview};
