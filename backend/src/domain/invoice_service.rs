use anyhow::Result;
use chrono::{DateTime, Local};
use shared::InvoiceRecord;
use std::path::PathBuf;
use tracing::info;

use crate::domain::commands::invoice::{GenerateInvoiceCommand, GenerateInvoiceResult};
use crate::domain::invoice_layout::{build_layout, InvoiceContent};
use crate::domain::models::invoice::{
    base_invoice_no, download_file_name, invoice_date, unique_invoice_no,
};
use crate::domain::pdf_renderer::PdfRenderer;
use crate::storage::{HistoryRepository, InvoiceArchive, SettingsRepository};

/// Service that turns a parsed invoice form into a history record and a PDF
#[derive(Clone)]
pub struct InvoiceService {
    settings_repository: SettingsRepository,
    history_repository: HistoryRepository,
    archive: InvoiceArchive,
}

impl InvoiceService {
    pub fn new(
        settings_repository: SettingsRepository,
        history_repository: HistoryRepository,
        archive: InvoiceArchive,
    ) -> Self {
        Self {
            settings_repository,
            history_repository,
            archive,
        }
    }

    pub async fn generate_invoice(
        &self,
        command: GenerateInvoiceCommand,
    ) -> Result<GenerateInvoiceResult> {
        self.generate_invoice_at(command, Local::now()).await
    }

    /// Generate an invoice as if it were `now`.
    ///
    /// Steps: read settings → compute total → append history → render → archive.
    pub async fn generate_invoice_at(
        &self,
        command: GenerateInvoiceCommand,
        now: DateTime<Local>,
    ) -> Result<GenerateInvoiceResult> {
        info!(
            "Generating {} invoice for '{}' ({} x {:.2})",
            command.category, command.customer_name, command.quantity, command.rate
        );

        let total = command.total()?;
        let settings = self.settings_repository.get_settings().await?;
        let date = invoice_date(&now);
        let base_no = base_invoice_no(&now);

        let record = self
            .history_repository
            .append_record(|existing| InvoiceRecord {
                invoice_no: unique_invoice_no(&base_no, existing),
                name: command.customer_name.clone(),
                service: command.service.clone(),
                amount: total,
                date: date.clone(),
            })
            .await?;

        let content = InvoiceContent {
            business_name: settings.business_name.clone(),
            title: command.category.title().to_string(),
            invoice_no: record.invoice_no.clone(),
            date,
            customer_name: command.customer_name.clone(),
            mobile: command.mobile.clone(),
            show_mobile: command.show_mobile,
            service: command.service.clone(),
            quantity: command.quantity,
            rate: command.rate,
            total,
            currency: settings.currency.clone(),
            note: command.note.clone(),
            show_note: command.show_note,
        };

        let logo_path = Some(settings.logo_path.trim())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let layout = build_layout(&content);
        let pdf_bytes = PdfRenderer::render(&layout, &record.invoice_no, logo_path.as_deref())?;
        self.archive.store_pdf(&record.invoice_no, &pdf_bytes).await?;

        let file_name = download_file_name(command.file_name.as_deref(), &record.invoice_no);
        info!(
            "Generated invoice {} (total {:.2}) as {}",
            record.invoice_no, total, file_name
        );

        Ok(GenerateInvoiceResult {
            record,
            pdf_bytes,
            file_name,
        })
    }
}
