//! # Storage Module
//!
//! Handles all data persistence for the invoice desk.
//!
//! Everything lives in flat files under a single data directory:
//!
//! ```text
//! data/
//! ├── settings.json       ← SettingsRepository
//! ├── invoices.json       ← HistoryRepository
//! ├── first_run.flag      ← FirstRunFlag
//! ├── invoices/           ← InvoiceArchive (rendered PDFs)
//! └── static/logo/        ← LogoRepository (uploaded logos)
//! ```
//!
//! The JSON documents are read and written wholesale. Each one is owned by a
//! [`JsonStore`] that serializes every read-modify-write behind an async mutex,
//! so concurrent requests cannot lose updates.

pub mod connection;
pub mod json_store;
pub mod settings_repository;
pub mod history_repository;
pub mod first_run;
pub mod invoice_archive;
pub mod logo_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::DataDirectory;
pub use first_run::FirstRunFlag;
pub use history_repository::HistoryRepository;
pub use invoice_archive::InvoiceArchive;
pub use json_store::JsonStore;
pub use logo_repository::LogoRepository;
pub use settings_repository::SettingsRepository;
