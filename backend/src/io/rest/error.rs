//! # HTTP Error Mapping
//!
//! Converts domain and storage failures into HTTP responses.
//!
//! | Failure                               | Status |
//! |---------------------------------------|--------|
//! | archived PDF missing                  | 404    |
//! | bad quantity / rate, bad settings form | 400    |
//! | malformed JSON store, I/O, rendering  | 500    |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::domain::models::invoice::InvoiceError;
use crate::domain::models::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        if let Some(invoice_err) = err.downcast_ref::<InvoiceError>() {
            return AppError::InvalidInput(invoice_err.to_string());
        }
        if let Some(settings_err) = err.downcast_ref::<SettingsError>() {
            return AppError::InvalidInput(settings_err.to_string());
        }
        AppError::Internal(err)
    }
}

impl From<InvoiceError> for AppError {
    fn from(err: InvoiceError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<SettingsError> for AppError {
    fn from(err: SettingsError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(anyhow::Error::new(err).context("Failed to render page"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not Found").into_response(),
            AppError::InvalidInput(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message).into_response()
            }
            AppError::Internal(err) => {
                error!("Request failed: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::InvalidInput("bad".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::from(anyhow::anyhow!("disk on fire")).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_domain_errors_inside_anyhow_become_bad_requests() {
        let err = anyhow::Error::new(InvoiceError::InvalidRate("abc".to_string()));
        assert!(matches!(AppError::from(err), AppError::InvalidInput(_)));

        let err = anyhow::Error::new(SettingsError::UnknownField("logo_path".to_string()));
        assert!(matches!(AppError::from(err), AppError::InvalidInput(_)));
    }
}
