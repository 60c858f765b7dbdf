//! Platform abstraction traits for gesture runtime services.
//!
//! These traits allow the gesture handlers to delegate scheduling and clock
//! responsibilities to the host, so the same state machines run under a
//! browser animation loop, a native event loop, or a deterministic test
//! harness.

/// Schedules render ticks on behalf of the gesture handlers.
///
/// Everything runs on the host's UI thread, so implementations only need to
/// be usable through a shared `Rc`.
pub trait RuntimeScheduler {
    /// Request that the host deliver a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for the handlers.
pub trait Clock {
    /// Returns the current time in milliseconds from an arbitrary but fixed
    /// origin, with sub-millisecond precision where the host offers it.
    fn now(&self) -> f64;

    /// Returns the number of milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: f64) -> f64 {
        self.now() - since
    }
}
