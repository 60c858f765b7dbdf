use std::fmt;

/// Configuration problems detected when the gesture arbiter is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureError {
    /// Click tolerance must be a finite, non-negative pixel distance.
    InvalidClickTolerance { value: f64 },
    /// Bearing snap must be a finite, non-negative angle in degrees.
    InvalidBearingSnap { value: f64 },
    /// The camera reported a minimum zoom above its maximum zoom.
    InvalidZoomRange { min: f64, max: f64 },
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::InvalidClickTolerance { value } => {
                write!(f, "click tolerance {value} is not a finite non-negative distance")
            }
            GestureError::InvalidBearingSnap { value } => {
                write!(f, "bearing snap {value} is not a finite non-negative angle")
            }
            GestureError::InvalidZoomRange { min, max } => {
                write!(f, "min zoom {min} exceeds max zoom {max}")
            }
        }
    }
}

impl std::error::Error for GestureError {}
