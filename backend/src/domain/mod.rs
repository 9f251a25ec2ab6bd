//! # Domain Module
//!
//! Business logic for the invoice desk, independent of HTTP and of the file
//! layout used by the storage layer.
//!
//! ## Module Organization
//!
//! - **invoice_service**: generation flow (settings → total → history → PDF → archive)
//! - **invoice_layout**: ordered, visibility-aware line layout for the invoice page
//! - **pdf_renderer**: draws a layout onto an A4 PDF with printpdf
//! - **history_service**: list / delete / clear / export history, archived PDF lookup
//! - **settings_service**: allow-listed settings merge and logo upload
//! - **onboarding_service**: first-run welcome flow and full reset
//! - **commands**: internal command/result types used by the services
//! - **models**: validation errors and invoice number / formatting rules

pub mod commands;
pub mod models;
pub mod invoice_layout;
pub mod pdf_renderer;
pub mod invoice_service;
pub mod history_service;
pub mod settings_service;
pub mod onboarding_service;

pub use history_service::HistoryService;
pub use invoice_service::InvoiceService;
pub use onboarding_service::OnboardingService;
pub use settings_service::SettingsService;
