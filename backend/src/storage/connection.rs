use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// DataDirectory resolves every persisted file path and makes sure the
/// directory tree exists
#[derive(Debug, Clone)]
pub struct DataDirectory {
    base_directory: PathBuf,
}

impl DataDirectory {
    /// Create a data directory rooted at `base_directory`, creating the
    /// invoice archive and logo folders if they are missing
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();
        let data_dir = Self {
            base_directory: base_path,
        };

        for dir in [
            data_dir.base_directory(),
            data_dir.invoices_directory(),
            data_dir.logo_directory(),
        ] {
            if !dir.exists() {
                fs::create_dir_all(&dir)?;
                info!("Created data directory: {}", dir.display());
            }
        }

        Ok(data_dir)
    }

    pub fn base_directory(&self) -> PathBuf {
        self.base_directory.clone()
    }

    pub fn settings_file_path(&self) -> PathBuf {
        self.base_directory.join("settings.json")
    }

    pub fn history_file_path(&self) -> PathBuf {
        self.base_directory.join("invoices.json")
    }

    pub fn first_run_flag_path(&self) -> PathBuf {
        self.base_directory.join("first_run.flag")
    }

    /// Folder holding rendered invoice PDFs, one `<invoice_no>.pdf` per invoice
    pub fn invoices_directory(&self) -> PathBuf {
        self.base_directory.join("invoices")
    }

    /// Root of user-provided static files served under `/static`
    pub fn static_directory(&self) -> PathBuf {
        self.base_directory.join("static")
    }

    pub fn logo_directory(&self) -> PathBuf {
        self.static_directory().join("logo")
    }
}
