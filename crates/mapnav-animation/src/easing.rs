//! Bezier easing curves.

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for mapnav_graphics::Point {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        *self + (*target - *self) * fraction
    }
}

/// Precision used when inverting the curve's x polynomial.
const SOLVE_EPSILON: f64 = 1e-6;

/// A unit cubic bezier easing curve through (0, 0) and (1, 1) with two free
/// control points, in the CSS `cubic-bezier()` sense.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    p1: (f64, f64),
    p2: (f64, f64),
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl CubicBezier {
    pub fn new(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> Self {
        let cx = 3.0 * p1x;
        let bx = 3.0 * (p2x - p1x) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * p1y;
        let by = 3.0 * (p2y - p1y) - cy;
        let ay = 1.0 - cy - by;

        Self {
            p1: (p1x, p1y),
            p2: (p2x, p2y),
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    pub fn control_points(&self) -> [(f64, f64); 2] {
        [self.p1, self.p2]
    }

    /// Apply the easing curve to a linear fraction in [0, 1].
    pub fn transform(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        sample_curve(self.ay, self.by, self.cy, self.solve_t(fraction))
    }

    /// Finds the curve parameter `t` whose x coordinate equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        // Newton-Raphson first; it converges in a handful of steps for the
        // curves used here.
        let mut t = x;
        for _ in 0..8 {
            let error = sample_curve(self.ax, self.bx, self.cx, t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = sample_derivative(self.ax, self.bx, self.cx, t);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            t -= error / slope;
        }

        // Fall back to bisection when Newton stalls on a flat section.
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = x;
        while lo < hi {
            let sample = sample_curve(self.ax, self.bx, self.cx, t);
            if (sample - x).abs() < SOLVE_EPSILON {
                return t;
            }
            if x > sample {
                lo = t;
            } else {
                hi = t;
            }
            let next = (hi - lo) * 0.5 + lo;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }
}

fn sample_curve(a: f64, b: f64, c: f64, t: f64) -> f64 {
    ((a * t + b) * t + c) * t
}

fn sample_derivative(a: f64, b: f64, c: f64, t: f64) -> f64 {
    (3.0 * a * t + 2.0 * b) * t + c
}

/// Shorthand for [`CubicBezier::new`].
pub fn bezier(p1x: f64, p1y: f64, p2x: f64, p2y: f64) -> CubicBezier {
    CubicBezier::new(p1x, p1y, p2x, p2y)
}

/// The default camera easing, control points (0.25, 0.1) and (0.25, 1).
pub fn ease() -> CubicBezier {
    CubicBezier::new(0.25, 0.1, 0.25, 1.0)
}

/// Step used to sample the previous curve's slope.
const SLOPE_SAMPLE_STEP: f64 = 0.01;
/// Length of the first control arm of a continuation curve.
const CONTINUATION_ARM: f64 = 0.27;

/// The easing that most recently drove a zoom animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingRecord {
    /// Clock time at which the animation started, in milliseconds.
    pub start: f64,
    pub duration: f64,
    pub easing: CubicBezier,
}

impl EasingRecord {
    /// Fraction of the animation elapsed at `now`; exceeds 1 once finished.
    pub fn elapsed_fraction(&self, now: f64) -> f64 {
        (now - self.start) / self.duration
    }
}

/// Builds a curve whose initial slope matches `previous` at
/// `elapsed_fraction`, so a new animation picks up at the speed the old one
/// had reached.
pub fn continuous_easing(previous: &EasingRecord, elapsed_fraction: f64) -> CubicBezier {
    let t = elapsed_fraction;
    let speed = previous.easing.transform(t + SLOPE_SAMPLE_STEP) - previous.easing.transform(t);

    let x = CONTINUATION_ARM / (speed * speed + 0.0001).sqrt() * SLOPE_SAMPLE_STEP;
    let y = (CONTINUATION_ARM * CONTINUATION_ARM - x * x).max(0.0).sqrt();

    CubicBezier::new(x, y, 0.25, 1.0)
}

/// Stateful factory for easing curves that join without a velocity jump.
///
/// Only the single most recent [`EasingRecord`] is kept.
#[derive(Debug, Clone, Default)]
pub struct SmoothOutEasing {
    previous: Option<EasingRecord>,
}

impl SmoothOutEasing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the easing for an animation of `duration` ms starting at
    /// `now`, continuous with the previous one if there was one.
    pub fn compute(&mut self, now: f64, duration: f64) -> CubicBezier {
        let easing = match &self.previous {
            Some(previous) => continuous_easing(previous, previous.elapsed_fraction(now)),
            None => ease(),
        };

        self.previous = Some(EasingRecord {
            start: now,
            duration,
            easing,
        });

        easing
    }

    pub fn previous(&self) -> Option<&EasingRecord> {
        self.previous.as_ref()
    }
}
