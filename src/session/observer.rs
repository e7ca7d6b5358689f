use std::sync::mpsc;

use crate::model::step::StepContent;

/// Notification delivered to the host, owned so it can cross a channel.
#[derive(Clone, Debug, PartialEq)]
pub enum TourEvent {
    /// A step became current (including the first one at start).
    StepShown {
        /// The step's domain data.
        step: StepContent,
    },
    /// The last step was advanced past. Fired exactly once per session.
    Finished,
}

/// Host callback interface.
///
/// Called synchronously from inside the navigation call that caused the
/// transition, after the controller state has already been updated.
pub trait TourObserver {
    /// A step became current.
    fn on_step_shown(&mut self, step: &StepContent);

    /// The session finished and has been released.
    fn on_finish(&mut self);
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TourObserver for NoopObserver {
    fn on_step_shown(&mut self, _step: &StepContent) {}

    fn on_finish(&mut self) {}
}

/// Forwards every notification as a [`TourEvent`] into a channel.
///
/// A disconnected receiver is not an error; events are dropped.
#[derive(Clone, Debug)]
pub struct ChannelObserver(
    /// Sending end.
    pub mpsc::Sender<TourEvent>,
);

impl ChannelObserver {
    /// Observer plus the receiving end.
    pub fn channel() -> (Self, mpsc::Receiver<TourEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self(tx), rx)
    }
}

impl TourObserver for ChannelObserver {
    fn on_step_shown(&mut self, step: &StepContent) {
        let _ = self.0.send(TourEvent::StepShown { step: step.clone() });
    }

    fn on_finish(&mut self) {
        let _ = self.0.send(TourEvent::Finished);
    }
}

/// Adapts a closure over [`TourEvent`] into an observer.
pub struct FnObserver<F>(
    /// Callback.
    pub F,
);

impl<F> TourObserver for FnObserver<F>
where
    F: FnMut(TourEvent),
{
    fn on_step_shown(&mut self, step: &StepContent) {
        (self.0)(TourEvent::StepShown { step: step.clone() });
    }

    fn on_finish(&mut self) {
        (self.0)(TourEvent::Finished);
    }
}
