//! Domain model for deliverable tracking.

mod error;
mod ids;
mod projeto;

pub use error::ProjectDomainError;
pub use ids::ProjectId;
pub use projeto::{NewProjeto, Projeto};
