use anyhow::Result;
use shared::InvoiceRecord;
use tracing::info;

use crate::domain::commands::history::{
    DeleteInvoiceCommand, DeleteInvoiceResult, ExportHistoryResult,
};
use crate::storage::{HistoryRepository, InvoiceArchive};

pub const EXPORT_FILE_NAME: &str = "invoice_history.json";

/// Listing, deleting, clearing and exporting invoice history, plus lookup of
/// archived PDFs
#[derive(Clone)]
pub struct HistoryService {
    history_repository: HistoryRepository,
    archive: InvoiceArchive,
}

impl HistoryService {
    pub fn new(history_repository: HistoryRepository, archive: InvoiceArchive) -> Self {
        Self {
            history_repository,
            archive,
        }
    }

    pub async fn list_invoices(&self) -> Result<Vec<InvoiceRecord>> {
        let records = self.history_repository.list_records().await?;
        info!("Listing {} invoice record(s)", records.len());
        Ok(records)
    }

    /// Remove the record from history. The archived PDF is left on disk.
    pub async fn delete_invoice(&self, command: DeleteInvoiceCommand) -> Result<DeleteInvoiceResult> {
        let deleted_count = self
            .history_repository
            .delete_record(&command.invoice_no)
            .await?;

        let success_message = if deleted_count == 0 {
            format!("No invoice {} in history", command.invoice_no)
        } else {
            format!("Deleted invoice {}", command.invoice_no)
        };

        Ok(DeleteInvoiceResult {
            deleted_count,
            success_message,
        })
    }

    pub async fn clear_history(&self) -> Result<()> {
        self.history_repository.clear().await
    }

    /// The history file as stored, untransformed
    pub async fn export_history(&self) -> Result<ExportHistoryResult> {
        let content = self.history_repository.raw_document().await?;
        info!("Exporting invoice history ({} bytes)", content.len());
        Ok(ExportHistoryResult {
            file_name: EXPORT_FILE_NAME.to_string(),
            content,
        })
    }

    pub async fn get_invoice_pdf(&self, invoice_no: &str) -> Result<Option<Vec<u8>>> {
        self.archive.load_pdf(invoice_no).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_record, TestEnvironment};

    async fn setup() -> (TestEnvironment, HistoryService, HistoryRepository, InvoiceArchive) {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);
        let archive = InvoiceArchive::new(&env.data_dir);
        let service = HistoryService::new(repo.clone(), archive.clone());
        (env, service, repo, archive)
    }

    #[tokio::test]
    async fn test_delete_preserves_order_of_the_rest() {
        let (_env, service, repo, _archive) = setup().await;
        for no in ["INV-1", "INV-2", "INV-3", "INV-4"] {
            repo.append_record(|_| sample_record(no)).await.unwrap();
        }

        let result = service
            .delete_invoice(DeleteInvoiceCommand {
                invoice_no: "INV-2".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(result.deleted_count, 1);
        let numbers: Vec<String> = service
            .list_invoices()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.invoice_no)
            .collect();
        assert_eq!(numbers, vec!["INV-1", "INV-3", "INV-4"]);
    }

    #[tokio::test]
    async fn test_delete_leaves_archived_pdf() {
        let (env, service, repo, archive) = setup().await;
        repo.append_record(|_| sample_record("INV-1")).await.unwrap();
        archive.store_pdf("INV-1", b"%PDF").await.unwrap();

        service
            .delete_invoice(DeleteInvoiceCommand {
                invoice_no: "INV-1".to_string(),
            })
            .await
            .unwrap();

        assert!(env.data_dir.invoices_directory().join("INV-1.pdf").exists());
        assert!(service.get_invoice_pdf("INV-1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_clear_history_empties_any_content() {
        let (_env, service, repo, _archive) = setup().await;
        service.clear_history().await.unwrap();
        assert!(service.list_invoices().await.unwrap().is_empty());

        for no in ["INV-1", "INV-2"] {
            repo.append_record(|_| sample_record(no)).await.unwrap();
        }
        service.clear_history().await.unwrap();
        assert!(service.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_export_returns_stored_file() {
        let (env, service, repo, _archive) = setup().await;
        repo.append_record(|_| sample_record("INV-1")).await.unwrap();

        let export = service.export_history().await.unwrap();

        assert_eq!(export.file_name, "invoice_history.json");
        assert_eq!(
            export.content,
            std::fs::read(env.data_dir.history_file_path()).unwrap()
        );
    }

    #[tokio::test]
    async fn test_missing_pdf_lookup_does_not_touch_stores() {
        let (env, service, _repo, _archive) = setup().await;

        assert!(service.get_invoice_pdf("INV-does-not-exist").await.unwrap().is_none());
        assert!(!env.data_dir.history_file_path().exists());
        assert!(!env.data_dir.settings_file_path().exists());
    }
}
