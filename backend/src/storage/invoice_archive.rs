use anyhow::Result;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, info, warn};

use super::connection::DataDirectory;

/// Stores rendered invoice PDFs as `invoices/<invoice_no>.pdf`
#[derive(Debug, Clone)]
pub struct InvoiceArchive {
    directory: PathBuf,
}

impl InvoiceArchive {
    pub fn new(data_dir: &DataDirectory) -> Self {
        Self {
            directory: data_dir.invoices_directory(),
        }
    }

    /// Invoice numbers are used as file names, so only `[A-Za-z0-9_-]` is accepted
    pub fn is_valid_invoice_no(invoice_no: &str) -> bool {
        !invoice_no.is_empty()
            && invoice_no
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    fn pdf_path(&self, invoice_no: &str) -> PathBuf {
        self.directory.join(format!("{}.pdf", invoice_no))
    }

    pub async fn store_pdf(&self, invoice_no: &str, bytes: &[u8]) -> Result<()> {
        if !Self::is_valid_invoice_no(invoice_no) {
            return Err(anyhow::anyhow!("Invalid invoice number '{}'", invoice_no));
        }
        if !fs::try_exists(&self.directory).await? {
            fs::create_dir_all(&self.directory).await?;
        }

        let path = self.pdf_path(invoice_no);
        fs::write(&path, bytes).await?;
        info!("Archived {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Load a previously archived PDF; `None` when it does not exist
    pub async fn load_pdf(&self, invoice_no: &str) -> Result<Option<Vec<u8>>> {
        if !Self::is_valid_invoice_no(invoice_no) {
            warn!("Rejected archive lookup for invalid invoice number '{}'", invoice_no);
            return Ok(None);
        }

        let path = self.pdf_path(invoice_no);
        if !fs::try_exists(&path).await? {
            debug!("No archived PDF at {}", path.display());
            return Ok(None);
        }

        Ok(Some(fs::read(&path).await?))
    }
}
