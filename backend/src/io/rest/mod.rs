//! # HTTP Interface Layer
//!
//! Form-driven routes for the invoice desk. Handlers here only translate
//! between HTTP and the domain layer:
//! - form and multipart decoding into domain commands
//! - domain and storage errors into status codes (see [`error::AppError`])
//! - page rendering, PDF downloads and post-action redirects
//!
//! Each module exposes a `router()` that is merged into the application
//! router in [`crate::create_router`].

pub mod error;
pub mod mappers;
pub mod page_apis;
pub mod invoice_apis;
pub mod history_apis;
pub mod settings_apis;
