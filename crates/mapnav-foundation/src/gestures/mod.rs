pub mod box_zoom;
pub mod drag_pan;
pub mod drag_rotate;
pub mod scroll_zoom;
pub mod state;
pub mod wheel_classifier;

pub use box_zoom::BoxZoomGesture;
pub use drag_pan::DragPanGesture;
pub use drag_rotate::{DragRotateGesture, DragRotateOptions, RotateButton};
pub use scroll_zoom::{ScrollZoomGesture, ScrollZoomOptions, ZoomAnchor};
pub use state::GestureState;
pub use wheel_classifier::{WheelClassifier, WheelDevice};
