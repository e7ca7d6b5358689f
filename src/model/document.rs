use std::io::Read;

use crate::foundation::core::{ScreenRect, Viewport};
use crate::foundation::error::{TourError, TourResult};
use crate::model::step::{Step, StepContent};
use crate::model::theme::Theme;

/// One step as written in a tour document.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct StepDef {
    /// Popup content.
    #[serde(flatten)]
    pub content: StepContent,
    /// Target bounds in absolute window coordinates.
    pub target: ScreenRect,
}

/// JSON description of a tour: optional viewport, optional theme, steps.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct TourDocument {
    /// Window size the targets were captured in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    /// Theme overrides; missing fields use defaults.
    #[serde(default)]
    pub theme: Theme,
    /// Ordered steps.
    pub steps: Vec<StepDef>,
}

impl TourDocument {
    /// Parse a document from a JSON string.
    pub fn from_json_str(s: &str) -> TourResult<Self> {
        serde_json::from_str(s).map_err(|e| TourError::serde(e.to_string()))
    }

    /// Parse a document from a reader.
    pub fn from_reader(r: impl Read) -> TourResult<Self> {
        serde_json::from_reader(r).map_err(|e| TourError::serde(e.to_string()))
    }

    /// Check everything the controller does not: viewport and target geometry.
    ///
    /// Step count is left to the controller, which caps it and rejects an
    /// empty list at start time.
    pub fn validate(&self) -> TourResult<()> {
        if let Some(vp) = self.viewport {
            Viewport::new(vp.width, vp.height)?;
        }
        for (i, s) in self.steps.iter().enumerate() {
            s.target
                .validate()
                .map_err(|e| TourError::validation(format!("step {i}: {e}")))?;
        }
        self.theme.validate()
    }

    /// The viewport to lay out against, falling back to the default window.
    pub fn viewport_or_default(&self) -> Viewport {
        self.viewport.unwrap_or_default()
    }

    /// Steps in core form, targets converted to corner rectangles.
    pub fn steps(&self) -> Vec<Step> {
        self.steps
            .iter()
            .map(|s| Step {
                content: s.content.clone(),
                target: s.target.to_rect(),
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/document.rs"]
mod tests;
