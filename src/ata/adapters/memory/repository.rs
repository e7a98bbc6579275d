//! In-memory repository for meeting records.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::ata::{
    domain::{AtaId, MeetingRecord},
    ports::{AtaRepository, AtaRepositoryError, AtaRepositoryResult},
};

/// Thread-safe in-memory meeting record repository.
///
/// `load_all` returns records in first-save order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAtaRepository {
    state: Arc<RwLock<InMemoryAtaState>>,
}

#[derive(Debug, Default)]
struct InMemoryAtaState {
    records: HashMap<AtaId, MeetingRecord>,
    order: Vec<AtaId>,
}

impl InMemoryAtaRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> AtaRepositoryError {
    AtaRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AtaRepository for InMemoryAtaRepository {
    async fn load_all(&self) -> AtaRepositoryResult<Vec<MeetingRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.records.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: &AtaId) -> AtaRepositoryResult<Option<MeetingRecord>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.records.get(id).cloned())
    }

    async fn save(&self, record: &MeetingRecord) -> AtaRepositoryResult<AtaId> {
        let mut state = self.state.write().map_err(lock_error)?;
        let id = record.id.clone().unwrap_or_else(AtaId::generate);
        let stored = record.clone().with_id(id.clone());

        if state.records.insert(id.clone(), stored).is_none() {
            state.order.push(id.clone());
        }
        tracing::debug!(record_id = %id, "stored meeting record in memory");
        Ok(id)
    }
}
