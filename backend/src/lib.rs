//! # Invoice Desk Backend
//!
//! A small local web application for writing invoices. It keeps settings and
//! invoice history as JSON documents in a data directory and renders each
//! invoice to a PDF for download.
//!
//! ## Architecture
//!
//! ```text
//! Browser (HTML forms)
//!     ↓
//! IO Layer (axum handlers, tera pages)
//!     ↓
//! Domain Layer (services, invoice layout, PDF rendering)
//!     ↓
//! Storage Layer (JSON stores, first-run flag, PDF archive, logos)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::Result;
use axum::Router;
use std::path::PathBuf;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::config::AppConfig;
use crate::domain::{HistoryService, InvoiceService, OnboardingService, SettingsService};
use crate::io::pages::PageRenderer;
use crate::io::rest::{history_apis, invoice_apis, page_apis, settings_apis};
use crate::storage::{
    DataDirectory, FirstRunFlag, HistoryRepository, InvoiceArchive, LogoRepository,
    SettingsRepository,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub invoice_service: InvoiceService,
    pub history_service: HistoryService,
    pub settings_service: SettingsService,
    pub onboarding_service: OnboardingService,
    pub pages: PageRenderer,
    pub data_dir: DataDirectory,
    pub assets_dir: PathBuf,
}

impl AppState {
    /// Wire every service to the stores under `data_dir`.
    ///
    /// Repositories are cloned into the services that share them so each JSON
    /// document has exactly one lock.
    pub fn new(data_dir: DataDirectory, assets_dir: PathBuf) -> Result<Self> {
        let settings_repository = SettingsRepository::new(&data_dir);
        let history_repository = HistoryRepository::new(&data_dir);
        let archive = InvoiceArchive::new(&data_dir);

        let invoice_service = InvoiceService::new(
            settings_repository.clone(),
            history_repository.clone(),
            archive.clone(),
        );
        let history_service = HistoryService::new(history_repository.clone(), archive);
        let settings_service =
            SettingsService::new(settings_repository.clone(), LogoRepository::new(&data_dir));
        let onboarding_service = OnboardingService::new(
            FirstRunFlag::new(&data_dir),
            settings_repository,
            history_repository,
        );

        Ok(Self {
            invoice_service,
            history_service,
            settings_service,
            onboarding_service,
            pages: PageRenderer::new()?,
            data_dir,
            assets_dir,
        })
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: &AppConfig) -> Result<AppState> {
    info!("Setting up data directory at {}", config.data_dir.display());
    let data_dir = DataDirectory::new(&config.data_dir)?;

    info!("Setting up application state");
    AppState::new(data_dir, config.assets_dir.clone())
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    // uploaded logos first, bundled assets second
    let static_files = ServeDir::new(app_state.data_dir.static_directory())
        .fallback(ServeDir::new(&app_state.assets_dir));

    Router::new()
        .merge(page_apis::router())
        .merge(invoice_apis::router())
        .merge(history_apis::router())
        .merge(settings_apis::router())
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
