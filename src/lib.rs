//! Atas: deadline tracking for meeting-minutes records.
//!
//! Meeting records ("atas") hold agenda items, and each agenda item holds
//! assignments with a responsible party and an optional deadline. This
//! crate flattens those assignments into tasks, derives their status
//! against the current date, and provides the grouped, sorted and
//! summarised views used by dashboards and reports.
//!
//! # Architecture
//!
//! The persistence-facing modules follow hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage
//! - **Adapters**: Concrete implementations of ports (in-memory, JSON files)
//!
//! # Modules
//!
//! - [`deadline`]: Date parsing, status classification and task projection
//! - [`ata`]: Meeting records, their storage and the deadline services
//! - [`project`]: Standalone deliverables with their own deadlines
//! - [`report`]: Markdown deadline reports
//! - [`config`]: Labels and tunables for the tracking views

pub mod ata;
pub mod clock;
pub mod config;
pub mod deadline;
pub mod project;
pub mod report;
pub mod telemetry;
