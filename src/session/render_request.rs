use crate::foundation::color::Color;
use crate::foundation::core::Rect;
use crate::model::step::{ResolvedText, Step, StepContent};
use crate::model::theme::{ButtonLabels, Theme};
use crate::placement::{PlacementResult, place_step};

/// Minimum width of the action button.
pub const ACTION_BUTTON_MIN_WIDTH: f64 = 65.0;
/// Horizontal padding inside the action button, per side.
pub const ACTION_BUTTON_PADDING: f64 = 16.0;
/// Height of the action button row.
pub const ACTION_BUTTON_HEIGHT: f64 = 33.0;
/// Inner padding of the popup card.
pub const CARD_PADDING: f64 = 12.0;

/// Label and visibility of the two popup buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonState {
    /// Back button is hidden on the first step.
    pub back_visible: bool,
    /// Back button caption.
    pub back_label: String,
    /// Action button caption: finish text on the last (or only) step.
    pub action_label: String,
    /// `true` when pressing the action button ends the tour.
    pub is_finish: bool,
}

impl ButtonState {
    /// Button state for step `index` of `count`.
    pub fn for_index(index: usize, count: usize, labels: &ButtonLabels) -> Self {
        let is_finish = count == 1 || index + 1 == count;
        Self {
            back_visible: index > 0,
            back_label: labels.back.clone(),
            action_label: if is_finish {
                labels.finish.clone()
            } else {
                labels.next.clone()
            },
            is_finish,
        }
    }
}

/// Progress dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepIndicator {
    /// Number of dots.
    pub count: usize,
    /// Highlighted dot.
    pub current: usize,
    /// Dots are hidden for single-step tours.
    pub visible: bool,
}

/// Layout hints for the card interior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupLayout {
    /// Image slot height; 0 when the step has no image.
    pub image_height: f64,
    /// Title row shown. Without it the description sits right under the image slot.
    pub show_title: bool,
    /// Title font and color after per-step overrides.
    pub title_text: ResolvedText,
    /// Description font and color after per-step overrides.
    pub description_text: ResolvedText,
}

impl PopupLayout {
    /// Action button width for a caption measured at `text_width` points.
    pub fn action_button_width(text_width: f64) -> f64 {
        ACTION_BUTTON_MIN_WIDTH.max(text_width + 2.0 * ACTION_BUTTON_PADDING)
    }
}

/// Everything a presentation layer needs to draw the current step.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest<'a> {
    /// Current index, for presentation bookkeeping only.
    pub index: usize,
    /// Content of the current step.
    pub content: &'a StepContent,
    /// Target captured at start.
    pub target: Rect,
    /// Cutout and popup frame.
    pub placement: PlacementResult,
    /// Buttons.
    pub buttons: ButtonState,
    /// Progress dots.
    pub indicator: StepIndicator,
    /// Card interior hints.
    pub layout: PopupLayout,
    /// Overlay color with opacity applied.
    pub overlay_tint: Color,
}

impl<'a> RenderRequest<'a> {
    /// Build the request for `steps[index]`; `None` if `index` is out of range.
    pub fn build(steps: &'a [Step], index: usize, theme: &Theme, viewport: Rect) -> Option<Self> {
        let step = steps.get(index)?;
        let count = steps.len();
        Some(Self {
            index,
            content: &step.content,
            target: step.target,
            placement: place_step(viewport, step, theme),
            buttons: ButtonState::for_index(index, count, &theme.labels),
            indicator: StepIndicator {
                count,
                current: index,
                visible: count > 1,
            },
            layout: PopupLayout {
                image_height: if step.has_image() {
                    theme.dimensions.image_height
                } else {
                    0.0
                },
                show_title: step.content.title.is_some(),
                title_text: step
                    .content
                    .title_style
                    .resolve(theme.fonts.title, theme.colors.title),
                description_text: step
                    .content
                    .description_style
                    .resolve(theme.fonts.description, theme.colors.description),
            },
            overlay_tint: theme.overlay_tint(),
        })
    }

    /// Image slot rectangle at the top of the card, if the step has an image.
    pub fn image_slot(&self) -> Option<Rect> {
        if self.layout.image_height <= 0.0 {
            return None;
        }
        let f = self.placement.popup_frame;
        Some(Rect::new(f.x0, f.y0, f.x1, f.y0 + self.layout.image_height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/render_request.rs"]
mod tests;
