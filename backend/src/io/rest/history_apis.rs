//! # History Routes

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use tera::Context;
use tracing::info;

use crate::domain::commands::history::DeleteInvoiceCommand;
use crate::io::rest::error::AppError;
use crate::io::rest::mappers::history_mapper::HistoryMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(history_page))
        .route("/clear-history", get(clear_history))
        .route("/export-history", get(export_history))
        .route("/delete/:invoice_no", get(delete_invoice))
}

pub async fn history_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.settings_service.get_settings().await?;
    let records = state.history_service.list_invoices().await?;
    let rows = HistoryMapper::to_rows(records, &settings.currency);

    let mut context = Context::new();
    context.insert("settings", &settings);
    context.insert("invoices", &rows);
    Ok(state.pages.render("history.html", &context)?.into_response())
}

pub async fn clear_history(State(state): State<AppState>) -> Result<Redirect, AppError> {
    info!("GET /clear-history");
    state.history_service.clear_history().await?;
    Ok(Redirect::to("/history"))
}

/// Download the history document exactly as it is stored
pub async fn export_history(State(state): State<AppState>) -> Result<Response, AppError> {
    let export = state.history_service.export_history().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.file_name),
            ),
        ],
        export.content,
    )
        .into_response())
}

pub async fn delete_invoice(
    State(state): State<AppState>,
    Path(invoice_no): Path<String>,
) -> Result<Redirect, AppError> {
    let result = state
        .history_service
        .delete_invoice(DeleteInvoiceCommand { invoice_no })
        .await?;
    info!("GET /delete - {}", result.success_message);
    Ok(Redirect::to("/history"))
}
