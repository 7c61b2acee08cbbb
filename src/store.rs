//! Snippet storage
//!
//! The store validates submissions against the shared catalogs, assigns
//! ids and creation times, and optionally persists every change to a TOML
//! file on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalogs;
use crate::error::{Result, SnippetError};
use crate::snippet::{Defaults, NewSnippet, Snippet, SnippetId};

/// Highest id a store hands out; TOML integers are signed 64-bit
pub const MAX_ID: u64 = i64::MAX as u64 - 1;

/// On-disk layout of a store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    next_id: u64,
    #[serde(default)]
    snippets: Vec<Snippet>,
}

/// Snippet store with optional file persistence
#[derive(Debug)]
pub struct SnippetStore {
    /// Records by id
    snippets: BTreeMap<SnippetId, Snippet>,
    /// Next id to hand out; ids are never reused
    next_id: u64,
    /// Backing file (None for a purely in-memory store)
    path: Option<PathBuf>,
    catalogs: Arc<Catalogs>,
    defaults: Defaults,
}

impl SnippetStore {
    /// Create an empty store that lives only in memory
    pub fn in_memory(catalogs: Arc<Catalogs>, defaults: Defaults) -> Self {
        Self {
            snippets: BTreeMap::new(),
            next_id: 1,
            path: None,
            catalogs,
            defaults,
        }
    }

    /// Open a file-backed store; a missing file opens empty
    pub fn open(
        path: impl Into<PathBuf>,
        catalogs: Arc<Catalogs>,
        defaults: Defaults,
    ) -> Result<Self> {
        let path = path.into();
        let mut store = Self::in_memory(catalogs, defaults);

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let file: StoreFile =
                toml::from_str(&contents).map_err(|source| SnippetError::Decode {
                    path: path.clone(),
                    source,
                })?;

            for snippet in file.snippets {
                let id = snippet.id();
                if store.snippets.insert(id, snippet).is_some() {
                    return Err(SnippetError::DuplicateId { path, id });
                }
            }

            let highest = store.snippets.keys().last().map_or(0, |id| id.get());
            store.next_id = file.next_id.max(highest + 1).max(1);
        }

        tracing::debug!(
            path = %path.display(),
            count = store.snippets.len(),
            "opened snippet store"
        );
        store.path = Some(path);
        Ok(store)
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Validate and insert a new snippet
    pub fn create(&mut self, new: NewSnippet) -> Result<Snippet> {
        let valid = new.validate(&self.catalogs, &self.defaults)?;
        if self.next_id > MAX_ID {
            return Err(SnippetError::IdsExhausted);
        }

        let id = SnippetId::new(self.next_id);
        let snippet = valid.into_snippet(id, Utc::now());

        self.snippets.insert(id, snippet.clone());
        self.next_id += 1;

        if let Err(e) = self.persist() {
            self.snippets.remove(&id);
            self.next_id -= 1;
            return Err(e);
        }

        tracing::info!(%id, language = %snippet.language(), "created snippet");
        Ok(snippet)
    }

    /// Look up a snippet by id
    pub fn get(&self, id: SnippetId) -> Result<&Snippet> {
        self.snippets.get(&id).ok_or(SnippetError::NotFound(id))
    }

    /// All snippets, oldest first (ties broken by id)
    pub fn list(&self) -> Vec<&Snippet> {
        let mut snippets: Vec<_> = self.snippets.values().collect();
        snippets.sort_by(|a, b| {
            a.created()
                .cmp(&b.created())
                .then_with(|| a.id().cmp(&b.id()))
        });
        snippets
    }

    /// Remove a snippet, returning it
    pub fn delete(&mut self, id: SnippetId) -> Result<Snippet> {
        let snippet = self.snippets.remove(&id).ok_or(SnippetError::NotFound(id))?;

        if let Err(e) = self.persist() {
            self.snippets.insert(id, snippet);
            return Err(e);
        }

        tracing::info!(%id, "deleted snippet");
        Ok(snippet)
    }

    /// Write the whole store to its backing file, if it has one
    fn persist(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let file = StoreFile {
            next_id: self.next_id,
            snippets: self.snippets.values().cloned().collect(),
        };
        let contents = toml::to_string_pretty(&file)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        // Write beside the target then rename, so a crash never leaves half a file
        let mut tmp = path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, path)?;

        Ok(())
    }
}
