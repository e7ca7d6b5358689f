use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::core::{Rect, ScreenRect};
use crate::foundation::error::{TourError, TourResult};
use crate::model::step::Step;
use crate::model::theme::Theme;
use crate::session::observer::TourObserver;
use crate::session::render_request::RenderRequest;

/// Hard cap on steps per tour; longer lists are truncated at start.
pub const MAX_STEPS: usize = 9;

/// Opaque identifier of one session, handed to the presentation layer.
///
/// Handles are unique across every controller in the process and never
/// reused, so a handle to a finished session stays inert even after a new
/// session has started, and a handle from one controller never drives
/// another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionHandle(u64);

/// Lifecycle of the session behind a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Running, showing `index`.
    Active {
        /// Current 0-based step index.
        index: usize,
    },
    /// Ended by advancing past the last step; its state has been released.
    Finished,
}

/// Input events from the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TourInput {
    /// Action button.
    Next,
    /// Back button.
    Back,
    /// Tap on the dimmed background; behaves exactly like `Next`.
    BackgroundTap,
}

/// What triggered a transition.
///
/// Background taps move the tour exactly like `Next`; the reason only lets
/// hosts tell them apart (for analytics and the like).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceReason {
    /// Action button.
    Next,
    /// Back button.
    Back,
    /// Dimmed background tap.
    BackgroundTap,
}

/// Outcome of a navigation call that changed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// A new step is current.
    StepShown {
        /// New index.
        index: usize,
        /// Input that caused it.
        reason: AdvanceReason,
    },
    /// The tour completed.
    Finished {
        /// Input that caused it.
        reason: AdvanceReason,
    },
}

struct TourSession {
    id: u64,
    steps: Vec<Step>,
    theme: Theme,
    index: usize,
    observer: Box<dyn TourObserver>,
}

impl TourSession {
    fn emit_step_shown(&mut self) {
        // Index stays in range while the session is active.
        let Some(step) = self.steps.get(self.index) else {
            return;
        };
        self.observer.on_step_shown(&step.content);
    }

    fn is_last(&self) -> bool {
        self.index + 1 >= self.steps.len()
    }
}

/// Owns the at-most-one active tour and drives its navigation.
///
/// The host keeps one controller for its window and calls it from the UI
/// thread. Starting a tour while another is active is rejected, and every
/// navigation call on a stale or finished handle is a silent no-op, so
/// redundant UI events (double taps and the like) are harmless.
#[derive(Default)]
pub struct TourController {
    active: Option<TourSession>,
}

// Shared by every controller in the process.
static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

impl std::fmt::Debug for TourController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TourController")
            .field("active", &self.active.as_ref().map(|s| (s.id, s.index)))
            .finish()
    }
}

impl TourController {
    /// Controller with no active session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a tour and show its first step.
    ///
    /// Lists longer than [`MAX_STEPS`] are truncated with a warning. Empty
    /// lists, an invalid theme, a non-finite or inverted target rectangle, or
    /// an already active session reject the request without touching
    /// existing state.
    #[tracing::instrument(level = "debug", skip_all, fields(steps = steps.len()))]
    pub fn start(
        &mut self,
        mut steps: Vec<Step>,
        theme: Theme,
        observer: impl TourObserver + 'static,
    ) -> TourResult<SessionHandle> {
        if steps.is_empty() {
            tracing::warn!("tour start rejected: no steps provided");
            return Err(TourError::EmptyTour);
        }
        if let Some(active) = &self.active {
            tracing::debug!(active = active.id, "tour start ignored: session already active");
            return Err(TourError::SessionActive);
        }
        theme.validate()?;

        if steps.len() > MAX_STEPS {
            tracing::warn!(
                provided = steps.len(),
                limit = MAX_STEPS,
                "too many tour steps, keeping the first {MAX_STEPS}"
            );
            steps.truncate(MAX_STEPS);
        }
        for (i, step) in steps.iter().enumerate() {
            ScreenRect::from(step.target)
                .validate()
                .map_err(|e| TourError::validation(format!("step {i}: {e}")))?;
        }

        let id = NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed);
        let session = self.active.insert(TourSession {
            id,
            steps,
            theme,
            index: 0,
            observer: Box::new(observer),
        });
        session.emit_step_shown();
        tracing::debug!(session = id, "tour started");
        Ok(SessionHandle(id))
    }

    fn session_mut(&mut self, handle: SessionHandle) -> Option<&mut TourSession> {
        self.active.as_mut().filter(|s| s.id == handle.0)
    }

    fn session(&self, handle: SessionHandle) -> Option<&TourSession> {
        self.active.as_ref().filter(|s| s.id == handle.0)
    }

    /// Move forward, finishing the tour when already on the last step.
    pub fn advance(&mut self, handle: SessionHandle) -> Option<Transition> {
        self.advance_with(handle, AdvanceReason::Next)
    }

    /// Background taps continue the tour; they are not a cancellation.
    pub fn cancel_via_background_tap(&mut self, handle: SessionHandle) -> Option<Transition> {
        self.advance_with(handle, AdvanceReason::BackgroundTap)
    }

    fn advance_with(&mut self, handle: SessionHandle, reason: AdvanceReason) -> Option<Transition> {
        let session = self.session_mut(handle)?;
        if !session.is_last() {
            session.index += 1;
            let index = session.index;
            session.emit_step_shown();
            tracing::debug!(session = handle.0, index, ?reason, "tour advanced");
            return Some(Transition::StepShown { index, reason });
        }

        // Released before notifying, so the host observes no active session.
        let mut finished = self.active.take()?;
        finished.observer.on_finish();
        tracing::debug!(session = handle.0, ?reason, "tour finished");
        Some(Transition::Finished { reason })
    }

    /// Move back one step; a no-op on the first step.
    pub fn retreat(&mut self, handle: SessionHandle) -> Option<Transition> {
        let session = self.session_mut(handle)?;
        if session.index == 0 {
            return None;
        }
        session.index -= 1;
        let index = session.index;
        session.emit_step_shown();
        tracing::debug!(session = handle.0, index, "tour went back");
        Some(Transition::StepShown {
            index,
            reason: AdvanceReason::Back,
        })
    }

    /// Dispatch a presentation-layer input event.
    pub fn handle_input(&mut self, handle: SessionHandle, input: TourInput) -> Option<Transition> {
        match input {
            TourInput::Next => self.advance(handle),
            TourInput::Back => self.retreat(handle),
            TourInput::BackgroundTap => self.cancel_via_background_tap(handle),
        }
    }

    /// `true` while any session is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Handle of the running session, if any.
    pub fn active_handle(&self) -> Option<SessionHandle> {
        self.active.as_ref().map(|s| SessionHandle(s.id))
    }

    /// Lifecycle of `handle`'s session.
    pub fn state(&self, handle: SessionHandle) -> SessionState {
        match self.session(handle) {
            Some(s) => SessionState::Active { index: s.index },
            None => SessionState::Finished,
        }
    }

    /// Current index of an active session.
    pub fn current_index(&self, handle: SessionHandle) -> Option<usize> {
        self.session(handle).map(|s| s.index)
    }

    /// Current step of an active session.
    pub fn current_step(&self, handle: SessionHandle) -> Option<&Step> {
        self.session(handle).and_then(|s| s.steps.get(s.index))
    }

    /// All (capped) steps of an active session.
    pub fn steps(&self, handle: SessionHandle) -> Option<&[Step]> {
        self.session(handle).map(|s| s.steps.as_slice())
    }

    /// Theme of an active session.
    pub fn theme(&self, handle: SessionHandle) -> Option<&Theme> {
        self.session(handle).map(|s| &s.theme)
    }

    /// What to draw for the current step inside `viewport`.
    ///
    /// Recompute on every layout change; targets themselves are not re-queried.
    pub fn render_request(
        &self,
        handle: SessionHandle,
        viewport: Rect,
    ) -> Option<RenderRequest<'_>> {
        let s = self.session(handle)?;
        RenderRequest::build(&s.steps, s.index, &s.theme, viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/controller.rs"]
mod tests;
