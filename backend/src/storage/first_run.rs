use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::info;

use super::connection::DataDirectory;

/// Presence-based marker recording that the welcome flow was completed
#[derive(Debug, Clone)]
pub struct FirstRunFlag {
    path: PathBuf,
}

impl FirstRunFlag {
    pub fn new(data_dir: &DataDirectory) -> Self {
        Self {
            path: data_dir.first_run_flag_path(),
        }
    }

    /// True until [`FirstRunFlag::mark_complete`] has been called
    pub async fn is_first_run(&self) -> Result<bool> {
        Ok(!fs::try_exists(&self.path).await?)
    }

    pub async fn mark_complete(&self) -> Result<()> {
        fs::write(&self.path, "done").await?;
        info!("Marked first run as complete");
        Ok(())
    }

    /// Remove the marker so the welcome flow shows again
    pub async fn clear(&self) -> Result<()> {
        if fs::try_exists(&self.path).await? {
            fs::remove_file(&self.path).await?;
            info!("Cleared first run flag");
        }
        Ok(())
    }
}
