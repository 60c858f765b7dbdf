use crate::platform::RuntimeScheduler;
use std::fmt;
use std::rc::Rc;

/// Single-slot "run on the next frame" coalescer.
///
/// A handler calls [`request`](Self::request) from its input callbacks as
/// often as it likes; only the first request since the last frame asks the
/// host for a tick, and later requests just overwrite the stored arguments.
/// When the tick arrives the handler drains the slot with
/// [`take`](Self::take), so any burst of requests between two frames yields
/// exactly one frame callback carrying the most recent arguments.
pub struct FrameScheduler<A> {
    label: &'static str,
    scheduler: Rc<dyn RuntimeScheduler>,
    pending: Option<A>,
}

impl<A> FrameScheduler<A> {
    pub fn new(label: &'static str, scheduler: Rc<dyn RuntimeScheduler>) -> Self {
        Self {
            label,
            scheduler,
            pending: None,
        }
    }

    /// Stores `args` for the next frame, scheduling one if none is pending.
    pub fn request(&mut self, args: A) {
        if self.pending.is_none() {
            log::trace!("{}: frame requested", self.label);
            self.scheduler.schedule_frame();
        }
        self.pending = Some(args);
    }

    /// Drops any scheduled invocation. Calling it with nothing pending is a
    /// no-op.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::trace!("{}: frame cancelled", self.label);
        }
    }

    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes the pending arguments. Called once per delivered frame.
    pub fn take(&mut self) -> Option<A> {
        self.pending.take()
    }
}

impl<A> fmt::Debug for FrameScheduler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("label", &self.label)
            .field("scheduled", &self.pending.is_some())
            .finish()
    }
}
