/// Test utilities for isolated data directories
///
/// The temporary directory is removed when the TestEnvironment is dropped,
/// even if the test panics.

use anyhow::Result;
use shared::InvoiceRecord;
use std::path::PathBuf;
use tempfile::TempDir;

use super::connection::DataDirectory;

pub struct TestEnvironment {
    /// Kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    pub data_dir: DataDirectory,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = DataDirectory::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            data_dir,
            base_path,
        })
    }
}

/// A minimal history record for storage tests
pub fn sample_record(invoice_no: &str) -> InvoiceRecord {
    InvoiceRecord {
        invoice_no: invoice_no.to_string(),
        name: "Asha".to_string(),
        service: "Tailoring".to_string(),
        amount: 450.0,
        date: "01-01-2025".to_string(),
    }
}
