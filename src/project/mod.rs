//! Standalone deliverables ("entregáveis") tracked against one deadline each.
//!
//! Uses the same layering as [`crate::ata`]: [`domain`], [`ports`],
//! [`adapters`] and [`services`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
