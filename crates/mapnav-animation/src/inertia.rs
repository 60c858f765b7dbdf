//! Rolling-window inertia for drag flings.
//!
//! A drag session records every sample it sees in an [`InertiaTracker`].
//! On release the tracker picks the oldest sample that is still recent
//! enough and the newest one, and hands the pair to a [`DecayModel`] that
//! turns the motion between them into a bounded [`Fling`].

use mapnav_core::Clock;
use mapnav_graphics::Point;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

/// Samples older than this (in ms) do not contribute to the fling.
pub const INERTIA_CUTOFF_MS: f64 = 160.0;

/// Upper bound on the number of retained samples.
pub const MAX_SAMPLES: usize = 1000;

/// Minimum number of samples dropped when the window overflows.
const MIN_REMOVE: usize = MAX_SAMPLES / 2;

/// A timestamped value recorded during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<V> {
    pub time: f64,
    pub value: V,
}

/// Continuation of a released drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fling<V> {
    /// Animation length in milliseconds.
    pub duration_ms: f64,
    /// Displacement to apply over the animation.
    pub offset: V,
}

/// A quantity whose motion can be extrapolated into a fling.
pub trait InertiaValue: Copy + fmt::Debug {
    /// `last - first`.
    fn difference(last: Self, first: Self) -> Self;

    fn is_zero(&self) -> bool;

    fn magnitude(&self) -> f64;

    fn scale(&self, factor: f64) -> Self;

    /// Displacement covered while decaying from `velocity` over
    /// `duration_s` seconds, given the raw `delta` that produced it.
    fn fling_offset(velocity: Self, delta: Self, duration_s: f64) -> Self;
}

impl InertiaValue for Point {
    fn difference(last: Self, first: Self) -> Self {
        last - first
    }

    fn is_zero(&self) -> bool {
        Point::is_zero(self)
    }

    fn magnitude(&self) -> f64 {
        self.mag()
    }

    fn scale(&self, factor: f64) -> Self {
        *self * factor
    }

    // Screen offsets are expressed as camera pan offsets, which point the
    // opposite way from the pointer motion.
    fn fling_offset(velocity: Self, _delta: Self, duration_s: f64) -> Self {
        velocity * (-duration_s / 2.0)
    }
}

impl InertiaValue for f64 {
    fn difference(last: Self, first: Self) -> Self {
        last - first
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }

    fn scale(&self, factor: f64) -> Self {
        self * factor
    }

    fn fling_offset(velocity: Self, delta: Self, duration_s: f64) -> Self {
        let sign = if delta < 0.0 { -1.0 } else { 1.0 };
        sign * velocity.abs() * (duration_s / 2.0)
    }
}

/// Turns the motion between two samples into a fling, or `None` when there
/// is nothing to continue.
pub trait DecayModel<V> {
    fn fling(&self, first: &Sample<V>, last: &Sample<V>) -> Option<Fling<V>>;
}

/// Linear-deceleration fling: velocity is clamped to `max_speed` and then
/// bled off at `deceleration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearDecay {
    /// Fraction of the measured velocity kept, compensating for the fast
    /// start of the ease-out curve.
    pub linearity: f64,
    /// Units per second.
    pub max_speed: f64,
    /// Units per second squared.
    pub deceleration: f64,
}

impl LinearDecay {
    /// Drag-pan tuning, in pixels.
    pub const PAN: LinearDecay = LinearDecay {
        linearity: 0.3,
        max_speed: 1400.0,
        deceleration: 2500.0,
    };

    /// Drag-rotate tuning, in degrees.
    pub const ROTATE: LinearDecay = LinearDecay {
        linearity: 0.25,
        max_speed: 180.0,
        deceleration: 720.0,
    };
}

impl<V: InertiaValue> DecayModel<V> for LinearDecay {
    fn fling(&self, first: &Sample<V>, last: &Sample<V>) -> Option<Fling<V>> {
        let delta = V::difference(last.value, first.value);
        let elapsed_s = (last.time - first.time) / 1000.0;

        if elapsed_s == 0.0 || delta.is_zero() {
            return None;
        }

        let mut velocity = delta.scale(self.linearity / elapsed_s);
        let mut speed = velocity.magnitude();
        if speed > self.max_speed {
            velocity = velocity.scale(self.max_speed / speed);
            speed = self.max_speed;
        }

        let duration_s = speed / (self.deceleration * self.linearity);
        let offset = V::fling_offset(velocity, delta, duration_s);

        Some(Fling {
            duration_ms: duration_s * 1000.0,
            offset,
        })
    }
}

/// Bounded, time-windowed record of a drag's recent values.
pub struct InertiaTracker<V, D = LinearDecay> {
    clock: Rc<dyn Clock>,
    decay: D,
    samples: VecDeque<Sample<V>>,
}

impl<V: InertiaValue, D: DecayModel<V>> InertiaTracker<V, D> {
    pub fn new(clock: Rc<dyn Clock>, decay: D) -> Self {
        Self {
            clock,
            decay,
            samples: VecDeque::new(),
        }
    }

    /// Records `value` at the current time.
    pub fn update(&mut self, value: V) {
        let now = self.clock.now();
        self.samples.push_back(Sample { time: now, value });

        let len = self.samples.len();
        if len > MAX_SAMPLES {
            let remove = match self.first_recent(now) {
                Some(first) => first.max(MIN_REMOVE),
                None => len - MAX_SAMPLES / 2,
            };
            log::trace!("inertia: dropping {remove} of {len} samples");
            self.samples.drain(..remove);
        }
    }

    /// Computes the fling implied by the recent samples.
    pub fn calculate(&self) -> Option<Fling<V>> {
        let first = self.first_recent(self.clock.now())?;
        let last = self.samples.len() - 1;
        if first >= last {
            return None;
        }
        self.decay.fling(&self.samples[first], &self.samples[last])
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> impl Iterator<Item = &Sample<V>> {
        self.samples.iter()
    }

    fn first_recent(&self, now: f64) -> Option<usize> {
        self.samples
            .iter()
            .position(|sample| now - sample.time < INERTIA_CUTOFF_MS)
    }
}

impl<V, D> fmt::Debug for InertiaTracker<V, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InertiaTracker")
            .field("samples", &self.samples.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Default)]
    struct StepClock {
        now: Cell<f64>,
    }

    impl StepClock {
        fn advance(&self, ms: f64) {
            self.now.set(self.now.get() + ms);
        }
    }

    impl Clock for StepClock {
        fn now(&self) -> f64 {
            self.now.get()
        }
    }

    fn tracker<V: InertiaValue>(clock: &Rc<StepClock>, decay: LinearDecay) -> InertiaTracker<V> {
        InertiaTracker::new(clock.clone(), decay)
    }

    #[test]
    fn equal_values_produce_no_fling() {
        let first = Sample {
            time: 0.0,
            value: Point::new(3.0, 3.0),
        };
        let last = Sample {
            time: 50.0,
            value: Point::new(3.0, 3.0),
        };
        assert_eq!(LinearDecay::PAN.fling(&first, &last), None);
    }

    #[test]
    fn zero_elapsed_time_produces_no_fling() {
        let first = Sample {
            time: 10.0,
            value: 0.0,
        };
        let last = Sample {
            time: 10.0,
            value: 25.0,
        };
        assert_eq!(LinearDecay::ROTATE.fling(&first, &last), None);
    }

    #[test]
    fn pan_offset_opposes_pointer_motion() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<Point>(&clock, LinearDecay::PAN);
        inertia.update(Point::ZERO);
        clock.advance(100.0);
        inertia.update(Point::new(100.0, 0.0));

        let fling = inertia.calculate().expect("pan fling");
        // velocity = 100 * 0.3 / 0.1 = 300 px/s, duration = 300 / 750 = 0.4s
        assert!((fling.duration_ms - 400.0).abs() < 1e-9);
        assert!((fling.offset.x + 60.0).abs() < 1e-9);
        assert_eq!(fling.offset.y, 0.0);
    }

    #[test]
    fn rotate_offset_follows_bearing_motion() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<f64>(&clock, LinearDecay::ROTATE);
        inertia.update(0.0);
        clock.advance(100.0);
        inertia.update(-20.0);

        let fling = inertia.calculate().expect("rotate fling");
        // speed = 20 * 0.25 / 0.1 = 50 deg/s, duration = 50 / 180 s
        let duration_s = 50.0 / 180.0;
        assert!((fling.duration_ms - duration_s * 1000.0).abs() < 1e-9);
        assert!((fling.offset + 50.0 * duration_s / 2.0).abs() < 1e-9);
    }

    #[test]
    fn speed_is_clamped_preserving_direction() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<Point>(&clock, LinearDecay::PAN);
        inertia.update(Point::ZERO);
        clock.advance(10.0);
        inertia.update(Point::new(0.0, -1000.0));

        let fling = inertia.calculate().expect("clamped fling");
        let duration_s = 1400.0 / (2500.0 * 0.3);
        assert!((fling.duration_ms - duration_s * 1000.0).abs() < 1e-6);
        assert!((fling.offset.y - 1400.0 * duration_s / 2.0).abs() < 1e-6);
        assert_eq!(fling.offset.x, 0.0);
    }

    #[test]
    fn stale_samples_are_ignored() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<Point>(&clock, LinearDecay::PAN);
        inertia.update(Point::ZERO);
        clock.advance(50.0);
        inertia.update(Point::new(40.0, 0.0));
        clock.advance(200.0);

        assert_eq!(inertia.calculate(), None);
    }

    #[test]
    fn single_recent_sample_is_empty() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<f64>(&clock, LinearDecay::ROTATE);
        inertia.update(5.0);
        assert_eq!(inertia.calculate(), None);
    }

    #[test]
    fn window_never_exceeds_capacity() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<f64>(&clock, LinearDecay::ROTATE);
        for i in 0..2_500 {
            clock.advance(1.0);
            inertia.update(i as f64);
            assert!(inertia.len() <= MAX_SAMPLES);
        }
        // Every surviving sample is still usable for a fling.
        assert!(inertia.calculate().is_some());
    }

    #[test]
    fn overflow_with_only_stale_samples_keeps_newest_half() {
        let clock = Rc::new(StepClock::default());
        let mut inertia = tracker::<f64>(&clock, LinearDecay::ROTATE);
        for i in 0..MAX_SAMPLES {
            inertia.update(i as f64);
        }
        clock.advance(1_000.0);
        inertia.update(-1.0);

        assert_eq!(inertia.len(), MAX_SAMPLES / 2);
        assert_eq!(inertia.samples().last().map(|s| s.value), Some(-1.0));
    }
}
