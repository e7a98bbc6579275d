//! Directory-backed repository storing one JSON document per record.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use std::io;
use std::sync::Arc;

use crate::ata::{
    domain::{AtaId, MeetingRecord},
    ports::{AtaRepository, AtaRepositoryError, AtaRepositoryResult},
};

const EXTENSION: &str = ".json";
const TEMP_SUFFIX: &str = ".tmp";

/// Meeting record repository over a directory of `<id>.json` documents.
///
/// Access is confined to the directory handle opened at construction.
/// Writes go to a temporary file first and are renamed into place, so a
/// reader never observes a half-written record. `load_all` returns records
/// ordered by identifier. File access runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct JsonFileAtaRepository {
    dir: Arc<Dir>,
}

impl JsonFileAtaRepository {
    /// Opens (creating if necessary) the directory at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AtaRepositoryError::Persistence`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Utf8Path) -> AtaRepositoryResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(AtaRepositoryError::persistence)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(AtaRepositoryError::persistence)?;
        Ok(Self { dir: Arc::new(dir) })
    }

    async fn run_blocking<F, T>(&self, f: F) -> AtaRepositoryResult<T>
    where
        F: FnOnce(&Dir) -> AtaRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let dir = Arc::clone(&self.dir);
        tokio::task::spawn_blocking(move || f(&dir))
            .await
            .map_err(AtaRepositoryError::persistence)?
    }
}

fn read_record(dir: &Dir, file_name: &str) -> AtaRepositoryResult<MeetingRecord> {
    let contents = dir
        .read_to_string(file_name)
        .map_err(AtaRepositoryError::persistence)?;
    decode_record(file_name, &contents)
}

fn list_record_files(dir: &Dir) -> AtaRepositoryResult<Vec<String>> {
    let mut file_names = Vec::new();
    for entry in dir.entries().map_err(AtaRepositoryError::persistence)? {
        let name = entry
            .and_then(|dir_entry| dir_entry.file_name())
            .map_err(AtaRepositoryError::persistence)?;
        if name.ends_with(EXTENSION) {
            file_names.push(name);
        }
    }
    file_names.sort();
    Ok(file_names)
}

fn decode_record(file_name: &str, contents: &str) -> AtaRepositoryResult<MeetingRecord> {
    serde_json::from_str(contents).map_err(|err| AtaRepositoryError::Corrupt {
        id: file_name.to_owned(),
        reason: err.to_string(),
    })
}

fn file_name_for(id: &AtaId) -> AtaRepositoryResult<String> {
    let is_safe = !id.as_str().is_empty()
        && id
            .as_str()
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
    if !is_safe {
        return Err(AtaRepositoryError::persistence(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("record id '{id}' cannot be used as a file name"),
        )));
    }
    Ok(format!("{id}{EXTENSION}"))
}

#[async_trait]
impl AtaRepository for JsonFileAtaRepository {
    async fn load_all(&self) -> AtaRepositoryResult<Vec<MeetingRecord>> {
        let records = self
            .run_blocking(|dir| {
                list_record_files(dir)?
                    .iter()
                    .map(|name| read_record(dir, name))
                    .collect::<AtaRepositoryResult<Vec<_>>>()
            })
            .await?;
        tracing::debug!(count = records.len(), "loaded meeting records from disk");
        Ok(records)
    }

    async fn find_by_id(&self, id: &AtaId) -> AtaRepositoryResult<Option<MeetingRecord>> {
        let file_name = file_name_for(id)?;
        self.run_blocking(move |dir| match dir.read_to_string(&file_name) {
            Ok(contents) => decode_record(&file_name, &contents).map(Some),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AtaRepositoryError::persistence(err)),
        })
        .await
    }

    async fn save(&self, record: &MeetingRecord) -> AtaRepositoryResult<AtaId> {
        let id = record.id.clone().unwrap_or_else(AtaId::generate);
        let file_name = file_name_for(&id)?;
        let stored = record.clone().with_id(id.clone());
        let contents =
            serde_json::to_vec_pretty(&stored).map_err(AtaRepositoryError::persistence)?;

        let written = file_name.clone();
        self.run_blocking(move |dir| {
            let temp_name = format!("{written}{TEMP_SUFFIX}");
            dir.write(&temp_name, contents)
                .map_err(AtaRepositoryError::persistence)?;
            dir.rename(&temp_name, dir, &written)
                .map_err(AtaRepositoryError::persistence)
        })
        .await?;
        tracing::debug!(record_id = %id, file = %file_name, "wrote meeting record");
        Ok(id)
    }
}
