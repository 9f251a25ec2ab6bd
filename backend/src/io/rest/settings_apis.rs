//! # Settings Routes
//!
//! The settings form is posted as `multipart/form-data` so it can carry an
//! optional logo upload next to the text fields.

use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use std::path::Path;
use tera::Context;
use tracing::info;

use crate::domain::commands::settings::{LogoUpload, UpdateSettingsCommand};
use crate::domain::models::settings::settings_update_from_fields;
use crate::io::rest::error::AppError;
use crate::AppState;

/// Largest accepted settings submission, logo included
pub const MAX_SETTINGS_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const LOGO_FIELD: &str = "logo";

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/settings",
            get(settings_page)
                .post(update_settings)
                .layer(DefaultBodyLimit::max(MAX_SETTINGS_UPLOAD_BYTES)),
        )
        .route("/reset-app", get(reset_app))
}

/// Public URL of the stored logo, served from the data directory's `static/`
fn logo_url(logo_path: &str) -> Option<String> {
    if logo_path.trim().is_empty() {
        return None;
    }
    Path::new(logo_path)
        .file_name()
        .map(|name| format!("/static/logo/{}", name.to_string_lossy()))
}

pub async fn settings_page(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.settings_service.get_settings().await?;

    let mut context = Context::new();
    context.insert("logo_url", &logo_url(&settings.logo_path));
    context.insert("settings", &settings);
    Ok(state.pages.render("settings.html", &context)?.into_response())
}

pub async fn update_settings(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, AppError> {
    let mut fields = Vec::new();
    let mut logo = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == LOGO_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(e.body_text()))?;
            logo = Some(LogoUpload {
                file_name,
                bytes: bytes.to_vec(),
            });
        } else {
            let value = field
                .text()
                .await
                .map_err(|e| AppError::InvalidInput(e.body_text()))?;
            fields.push((name, value));
        }
    }

    let update = settings_update_from_fields(fields)?;
    state
        .settings_service
        .update_settings(UpdateSettingsCommand { update, logo })
        .await?;

    info!("POST /settings - saved");
    Ok(Redirect::to("/settings"))
}

pub async fn reset_app(State(state): State<AppState>) -> Result<Redirect, AppError> {
    info!("GET /reset-app");
    state.onboarding_service.reset_app().await?;
    Ok(Redirect::to("/"))
}
