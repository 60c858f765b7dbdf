//! Mouse-wheel vs. trackpad detection.
//!
//! Browsers report both devices through the same wheel event, so the device
//! is inferred from the size of each delta and the timing between events.
//! A lone ambiguous event starts a short deferral: if nothing follows it is
//! taken to be a single wheel tick, otherwise the two events are combined
//! and classified by delta-per-time.

use mapnav_core::Timer;

/// `deltaY` of one mouse-wheel notch; wheel events arrive as exact
/// multiples of it.
pub const WHEEL_DELTA_QUANTUM: f64 = 4.000244140625;

/// Deltas below this magnitude only come from trackpads.
pub const TRACKPAD_DELTA_THRESHOLD: f64 = 4.0;

/// A gap longer than this starts a new scroll action.
pub const NEW_GESTURE_GAP_MS: f64 = 400.0;

/// How long a lone ambiguous event waits for a follow-up.
pub const DEFERRAL_MS: f64 = 40.0;

/// Below this `|gap · delta|` a repeated event is a fast trackpad stream.
pub const TRACKPAD_RATE_THRESHOLD: f64 = 200.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDevice {
    Wheel,
    Trackpad,
}

#[derive(Clone, Debug, Default)]
pub struct WheelClassifier {
    device: Option<WheelDevice>,
    last_event_time: Option<f64>,
    deferred_value: f64,
    deferral: Timer,
}

impl WheelClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies an event with the normalized `value` arriving at `now`
    /// and returns the value to accumulate, which includes a deferred
    /// event's delta when the two are combined.
    ///
    /// While the device is unknown nothing should be accumulated; check
    /// [`device`](Self::device) after calling.
    pub fn classify(&mut self, now: f64, value: f64) -> f64 {
        let gap = self.last_event_time.map(|last| now - last);
        self.last_event_time = Some(now);

        let mut value = value;
        if value != 0.0 && value % WHEEL_DELTA_QUANTUM == 0.0 {
            self.device = Some(WheelDevice::Wheel);
        } else if value != 0.0 && value.abs() < TRACKPAD_DELTA_THRESHOLD {
            self.device = Some(WheelDevice::Trackpad);
        } else if gap.map_or(true, |gap| gap > NEW_GESTURE_GAP_MS) {
            self.device = None;
            self.deferred_value = value;
            self.deferral.start(now, DEFERRAL_MS);
            log::debug!("wheel: deferring classification of {value}");
        } else if self.device.is_none() {
            let gap = gap.unwrap_or_default();
            self.device = Some(if (gap * value).abs() < TRACKPAD_RATE_THRESHOLD {
                WheelDevice::Trackpad
            } else {
                WheelDevice::Wheel
            });
            if self.deferral.cancel() {
                value += self.deferred_value;
            }
            log::debug!("wheel: classified as {:?}", self.device);
        }
        value
    }

    /// Resolves an expired deferral as a single wheel tick, returning the
    /// deferred delta.
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        if !self.deferral.fire(now) {
            return None;
        }
        self.device = Some(WheelDevice::Wheel);
        log::debug!("wheel: lone event classified as a wheel tick");
        Some(self.deferred_value)
    }

    pub fn device(&self) -> Option<WheelDevice> {
        self.device
    }

    /// Time of the most recent classified event.
    pub fn last_event_time(&self) -> Option<f64> {
        self.last_event_time
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.deferral.deadline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_quantum_multiples_are_wheel_ticks() {
        let mut classifier = WheelClassifier::new();
        let value = classifier.classify(0.0, -WHEEL_DELTA_QUANTUM * 2.0);
        assert_eq!(classifier.device(), Some(WheelDevice::Wheel));
        assert_eq!(value, -WHEEL_DELTA_QUANTUM * 2.0);
        assert_eq!(classifier.next_deadline(), None);
    }

    #[test]
    fn tiny_deltas_are_trackpad() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(0.0, 1.5);
        assert_eq!(classifier.device(), Some(WheelDevice::Trackpad));
    }

    #[test]
    fn lone_ambiguous_event_becomes_wheel_after_deferral() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(1_000.0, 53.0);
        assert_eq!(classifier.device(), None);
        assert_eq!(classifier.next_deadline(), Some(1_040.0));

        assert_eq!(classifier.poll(1_039.0), None);
        assert_eq!(classifier.poll(1_040.0), Some(53.0));
        assert_eq!(classifier.device(), Some(WheelDevice::Wheel));
        assert_eq!(classifier.poll(2_000.0), None);
    }

    #[test]
    fn quick_follow_up_combines_and_uses_rate_rule() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(1_000.0, 10.0);
        let value = classifier.classify(1_010.0, 12.0);

        // |10ms * 12| < 200
        assert_eq!(classifier.device(), Some(WheelDevice::Trackpad));
        assert_eq!(value, 22.0);
        assert_eq!(classifier.next_deadline(), None);
    }

    #[test]
    fn slow_large_follow_up_is_wheel() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(1_000.0, 100.0);
        let value = classifier.classify(1_030.0, 100.0);
        assert_eq!(classifier.device(), Some(WheelDevice::Wheel));
        assert_eq!(value, 200.0);
    }

    #[test]
    fn long_gap_resets_known_device() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(0.0, 2.0);
        assert_eq!(classifier.device(), Some(WheelDevice::Trackpad));

        classifier.classify(1_000.0, 30.0);
        assert_eq!(classifier.device(), None);
    }

    #[test]
    fn known_device_sticks_within_a_burst() {
        let mut classifier = WheelClassifier::new();
        classifier.classify(0.0, 2.0);
        let value = classifier.classify(16.0, 50.0);
        assert_eq!(classifier.device(), Some(WheelDevice::Trackpad));
        assert_eq!(value, 50.0);
    }
}
