//! # History Repository
//!
//! Persists the ordered invoice history in `invoices.json`.
//!
//! Insertion order is display order. Records are never rewritten in place:
//! they are appended, filtered out, or dropped all at once.

use anyhow::Result;
use shared::InvoiceRecord;
use tracing::info;

use super::connection::DataDirectory;
use super::json_store::JsonStore;

#[derive(Clone)]
pub struct HistoryRepository {
    store: JsonStore<Vec<InvoiceRecord>>,
}

impl HistoryRepository {
    pub fn new(data_dir: &DataDirectory) -> Self {
        Self {
            store: JsonStore::new(data_dir.history_file_path(), Vec::new),
        }
    }

    /// All records in insertion order
    pub async fn list_records(&self) -> Result<Vec<InvoiceRecord>> {
        self.store.load().await
    }

    /// Build a record from the current history and append it, atomically.
    ///
    /// `build` sees the existing records so it can pick an invoice number that
    /// is not taken yet.
    pub async fn append_record<F>(&self, build: F) -> Result<InvoiceRecord>
    where
        F: FnOnce(&[InvoiceRecord]) -> InvoiceRecord,
    {
        let record = self
            .store
            .update(|records| {
                let record = build(records);
                records.push(record.clone());
                record
            })
            .await?;

        info!("Appended invoice {} to history", record.invoice_no);
        Ok(record)
    }

    /// Remove every record with the given invoice number.
    /// Returns the number of records removed.
    pub async fn delete_record(&self, invoice_no: &str) -> Result<usize> {
        let removed = self
            .store
            .update(|records| {
                let before = records.len();
                records.retain(|record| record.invoice_no != invoice_no);
                before - records.len()
            })
            .await?;

        info!("Deleted {} history record(s) for {}", removed, invoice_no);
        Ok(removed)
    }

    pub async fn clear(&self) -> Result<()> {
        self.store.save(&Vec::new()).await?;
        info!("Cleared invoice history");
        Ok(())
    }

    /// The history file exactly as stored on disk
    pub async fn raw_document(&self) -> Result<Vec<u8>> {
        self.store.raw_bytes().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::{sample_record, TestEnvironment};

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);

        for no in ["INV-1", "INV-2", "INV-3"] {
            repo.append_record(|_| sample_record(no)).await.unwrap();
        }

        let numbers: Vec<String> = repo
            .list_records()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.invoice_no)
            .collect();
        assert_eq!(numbers, vec!["INV-1", "INV-2", "INV-3"]);
    }

    #[tokio::test]
    async fn test_append_sees_existing_records() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);
        repo.append_record(|_| sample_record("INV-1")).await.unwrap();

        let record = repo
            .append_record(|existing| sample_record(&format!("INV-{}", existing.len() + 1)))
            .await
            .unwrap();

        assert_eq!(record.invoice_no, "INV-2");
    }

    #[tokio::test]
    async fn test_delete_removes_only_matching_record() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);
        for no in ["INV-1", "INV-2", "INV-3"] {
            repo.append_record(|_| sample_record(no)).await.unwrap();
        }

        let removed = repo.delete_record("INV-2").await.unwrap();

        assert_eq!(removed, 1);
        let remaining = repo.list_records().await.unwrap();
        assert_eq!(remaining, vec![sample_record("INV-1"), sample_record("INV-3")]);
    }

    #[tokio::test]
    async fn test_delete_unknown_number_is_a_no_op() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);
        repo.append_record(|_| sample_record("INV-1")).await.unwrap();

        assert_eq!(repo.delete_record("INV-404").await.unwrap(), 0);
        assert_eq!(repo.list_records().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_and_raw_document() {
        let env = TestEnvironment::new().await.unwrap();
        let repo = HistoryRepository::new(&env.data_dir);
        repo.append_record(|_| sample_record("INV-1")).await.unwrap();

        repo.clear().await.unwrap();

        assert!(repo.list_records().await.unwrap().is_empty());
        let raw = repo.raw_document().await.unwrap();
        let parsed: Vec<InvoiceRecord> = serde_json::from_slice(&raw).unwrap();
        assert!(parsed.is_empty());
    }
}
