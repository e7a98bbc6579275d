//! Application services for deadline tracking over meeting records.

mod board;
mod tracking;

pub use board::DeadlineBoard;
pub use tracking::{DeadlineTrackingService, TrackingError, TrackingResult};
