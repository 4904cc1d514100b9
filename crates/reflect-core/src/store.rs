//! Answer persistence.
//!
//! Every save is a full overwrite of the backing file. There is no locking
//! and no partial-write protocol: one user, one process, one file.

use std::cell::{Cell, RefCell};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::model::AnswerMap;

/// Loads and saves the answer map.
pub trait AnswerStore {
    /// Load previously saved answers. A store with nothing saved yet
    /// returns an empty map.
    fn load(&self) -> Result<AnswerMap, StoreError>;

    /// Replace the saved answers with `answers`.
    fn save(&self, answers: &AnswerMap) -> Result<(), StoreError>;
}

/// Pretty-printed JSON file store.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AnswerStore for JsonFileStore {
    fn load(&self) -> Result<AnswerMap, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no answers file yet, starting empty");
                return Ok(AnswerMap::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let answers: AnswerMap =
            serde_json::from_str(&content).map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        tracing::debug!(path = %self.path.display(), entries = answers.len(), "loaded answers");
        Ok(answers)
    }

    fn save(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        // serde_json writes non-ASCII characters verbatim
        let json = serde_json::to_string_pretty(answers).map_err(StoreError::Serialize)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        std::fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), entries = answers.len(), "saved answers");
        Ok(())
    }
}

/// In-memory store. Useful for tests and for embedding the session without
/// touching the file system.
#[derive(Debug, Default)]
pub struct MemoryStore {
    answers: RefCell<AnswerMap>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `answers`.
    pub fn with_answers(answers: AnswerMap) -> Self {
        Self {
            answers: RefCell::new(answers),
            saves: Cell::new(0),
        }
    }

    /// The most recently saved answers.
    pub fn snapshot(&self) -> AnswerMap {
        self.answers.borrow().clone()
    }

    /// How many times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl AnswerStore for MemoryStore {
    fn load(&self) -> Result<AnswerMap, StoreError> {
        Ok(self.answers.borrow().clone())
    }

    fn save(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        *self.answers.borrow_mut() = answers.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: AnswerStore + ?Sized> AnswerStore for &S {
    fn load(&self) -> Result<AnswerMap, StoreError> {
        (**self).load()
    }

    fn save(&self, answers: &AnswerMap) -> Result<(), StoreError> {
        (**self).save(answers)
    }
}
