//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over HTTP. The REST layer maps the form DTOs defined in the
//! `shared` crate to these internal types.

pub mod invoice {
    use shared::{InvoiceCategory, InvoiceRecord};

    use crate::domain::models::invoice::{checked_total, InvoiceError};

    /// Fully parsed input for generating one invoice.
    #[derive(Debug, Clone, PartialEq)]
    pub struct GenerateInvoiceCommand {
        pub category: InvoiceCategory,
        pub customer_name: String,
        pub mobile: String,
        pub service: String,
        pub quantity: i64,
        pub rate: f64,
        pub note: String,
        pub show_mobile: bool,
        pub show_note: bool,
        /// Custom download name; the invoice number is used when absent
        pub file_name: Option<String>,
    }

    impl GenerateInvoiceCommand {
        pub fn total(&self) -> Result<f64, InvoiceError> {
            checked_total(self.quantity, self.rate)
        }
    }

    /// Result of generating an invoice.
    #[derive(Debug, Clone)]
    pub struct GenerateInvoiceResult {
        pub record: InvoiceRecord,
        pub pdf_bytes: Vec<u8>,
        /// Sanitized attachment name including the `.pdf` extension
        pub file_name: String,
    }
}

pub mod history {
    /// Command for deleting one invoice from history.
    #[derive(Debug, Clone)]
    pub struct DeleteInvoiceCommand {
        pub invoice_no: String,
    }

    #[derive(Debug, Clone)]
    pub struct DeleteInvoiceResult {
        pub deleted_count: usize,
        pub success_message: String,
    }

    /// Raw history document ready for download.
    #[derive(Debug, Clone)]
    pub struct ExportHistoryResult {
        pub file_name: String,
        pub content: Vec<u8>,
    }
}

pub mod settings {
    use shared::SettingsUpdate;

    /// An uploaded logo file as received from the settings form.
    #[derive(Debug, Clone)]
    pub struct LogoUpload {
        pub file_name: String,
        pub bytes: Vec<u8>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct UpdateSettingsCommand {
        pub update: SettingsUpdate,
        pub logo: Option<LogoUpload>,
    }
}
