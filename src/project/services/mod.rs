//! Service layer for deliverable tracking.

mod tracking;

pub use tracking::{
    ProjectTrackingError, ProjectTrackingResult, ProjectTrackingService, TrackedProject,
};
