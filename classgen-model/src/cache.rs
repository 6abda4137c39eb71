//! Loaded-model cache keyed by canonical resolved path.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{Error, Model, Result};

/// Cache of loaded models.
///
/// Keys are canonical resolved paths, so two spellings of the same file
/// share one entry. Entries are never invalidated: a model edited on disk
/// after its first load keeps serving the original snapshot for the
/// lifetime of the cache. Callers that need fresh reads should load through
/// [`Model::from_file`] instead.
#[derive(Debug, Default)]
pub struct ModelCache {
    entries: HashMap<PathBuf, Arc<Model>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the model at `path`, reusing a previously loaded snapshot when
    /// the canonical path is already cached.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Model>> {
        let key = path.canonicalize().map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;

        if let Some(model) = self.entries.get(&key) {
            tracing::debug!(path = %key.display(), "model served from cache");
            return Ok(Arc::clone(model));
        }

        let model = Arc::new(Model::from_file(&key)?);
        self.entries.insert(key, Arc::clone(&model));
        Ok(model)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
