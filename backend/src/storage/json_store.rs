//! # JSON Document Store
//!
//! A single JSON document persisted as one file and always read or written
//! wholesale.
//!
//! ## Semantics
//!
//! - `load` materializes and persists the default document when the file is absent
//! - A present file is parsed verbatim; malformed JSON is an error, never replaced
//! - `save` overwrites the whole file through a temp file + rename
//! - `update` runs load → modify → save while holding the store lock, so two
//!   concurrent updates are applied one after the other

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

pub struct JsonStore<T> {
    path: PathBuf,
    default_document: fn() -> T,
    lock: Arc<Mutex<()>>,
}

impl<T> Clone for JsonStore<T> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            default_document: self.default_document,
            lock: Arc::clone(&self.lock),
        }
    }
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new<P: AsRef<Path>>(path: P, default_document: fn() -> T) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            default_document,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load the document, creating it from the default if the file does not exist
    pub async fn load(&self) -> Result<T> {
        let _guard = self.lock.lock().await;
        self.load_or_create().await
    }

    /// Overwrite the stored document
    pub async fn save(&self, document: &T) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.write(document).await
    }

    /// Apply `modify` to the current document and persist the result.
    ///
    /// The store stays locked for the whole read-modify-write.
    pub async fn update<R, F>(&self, modify: F) -> Result<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let _guard = self.lock.lock().await;
        let mut document = self.load_or_create().await?;
        let result = modify(&mut document);
        self.write(&document).await?;
        Ok(result)
    }

    /// Raw bytes of the stored file, materializing the default first if needed
    pub async fn raw_bytes(&self) -> Result<Vec<u8>> {
        let _guard = self.lock.lock().await;
        self.load_or_create().await?;
        let bytes = fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        Ok(bytes)
    }

    async fn load_or_create(&self) -> Result<T> {
        if fs::try_exists(&self.path).await? {
            let content = fs::read(&self.path)
                .await
                .with_context(|| format!("Failed to read {}", self.path.display()))?;
            let document = serde_json::from_slice(&content)
                .with_context(|| format!("Malformed JSON in {}", self.path.display()))?;
            debug!("Loaded JSON document from {:?}", self.path);
            Ok(document)
        } else {
            let document = (self.default_document)();
            self.write(&document).await?;
            info!("Created default JSON document at {:?}", self.path);
            Ok(document)
        }
    }

    async fn write(&self, document: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !fs::try_exists(parent).await? {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_vec_pretty(document)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .await
            .with_context(|| format!("Failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        debug!("Saved JSON document to {:?}", self.path);
        Ok(())
    }
}
