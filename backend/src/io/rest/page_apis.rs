//! # Page Routes
//!
//! Welcome flow, the category picker and the per-category invoice forms,
//! plus the two informational pages.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use shared::InvoiceCategory;
use tera::Context;
use tracing::info;

use crate::io::rest::error::AppError;
use crate::AppState;

/// Served from the site root so its scope covers every page
const SERVICE_WORKER: &str = include_str!("../../../static/service-worker.js");

/// What the index page and the form pages need to know about a category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    pub slug: String,
    pub label: &'static str,
    pub title: &'static str,
    pub name_label: &'static str,
    pub service_label: &'static str,
}

impl CategoryPage {
    pub fn new(category: &InvoiceCategory) -> Self {
        let (label, name_label, service_label) = match category {
            InvoiceCategory::Shop => ("Shop", "Customer name", "Item / service"),
            InvoiceCategory::Office => ("Office", "Client name", "Work description"),
            InvoiceCategory::School => ("School", "Student name", "Fee type"),
            InvoiceCategory::Personal => ("Personal", "Name", "Service"),
            InvoiceCategory::Other(_) => ("Other", "Name", "Service"),
        };

        Self {
            slug: category.as_str().to_string(),
            label,
            title: category.title(),
            name_label,
            service_label,
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/welcome", get(welcome_page).post(complete_welcome))
        .route("/shop", get(shop_form))
        .route("/office", get(office_form))
        .route("/school", get(school_form))
        .route("/personal", get(personal_form))
        .route("/about", get(about_page))
        .route("/privacy", get(privacy_page))
        .route("/service-worker.js", get(service_worker))
}

/// Render a page whose only dynamic input is the current settings
async fn render_simple(state: &AppState, template: &str) -> Result<Response, AppError> {
    let settings = state.settings_service.get_settings().await?;
    let mut context = Context::new();
    context.insert("settings", &settings);
    Ok(state.pages.render(template, &context)?.into_response())
}

pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    if state.onboarding_service.is_first_run().await? {
        info!("GET / - first run, redirecting to welcome");
        return Ok(Redirect::to("/welcome").into_response());
    }

    let settings = state.settings_service.get_settings().await?;
    let categories: Vec<CategoryPage> = InvoiceCategory::KNOWN.iter().map(CategoryPage::new).collect();

    let mut context = Context::new();
    context.insert("settings", &settings);
    context.insert("categories", &categories);
    Ok(state.pages.render("index.html", &context)?.into_response())
}

pub async fn welcome_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render_simple(&state, "welcome.html").await
}

pub async fn complete_welcome(State(state): State<AppState>) -> Result<Redirect, AppError> {
    info!("POST /welcome - marking first run complete");
    state.onboarding_service.complete_welcome().await?;
    Ok(Redirect::to("/"))
}

async fn category_form(state: &AppState, category: InvoiceCategory) -> Result<Response, AppError> {
    let settings = state.settings_service.get_settings().await?;
    let page = CategoryPage::new(&category);

    let mut context = Context::new();
    context.insert("settings", &settings);
    context.insert("category", &page.slug);
    context.insert("title", page.title);
    context.insert("name_label", page.name_label);
    context.insert("service_label", page.service_label);
    Ok(state.pages.render("invoice_form.html", &context)?.into_response())
}

pub async fn shop_form(State(state): State<AppState>) -> Result<Response, AppError> {
    category_form(&state, InvoiceCategory::Shop).await
}

pub async fn office_form(State(state): State<AppState>) -> Result<Response, AppError> {
    category_form(&state, InvoiceCategory::Office).await
}

pub async fn school_form(State(state): State<AppState>) -> Result<Response, AppError> {
    category_form(&state, InvoiceCategory::School).await
}

pub async fn personal_form(State(state): State<AppState>) -> Result<Response, AppError> {
    category_form(&state, InvoiceCategory::Personal).await
}

pub async fn about_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render_simple(&state, "about.html").await
}

pub async fn privacy_page(State(state): State<AppState>) -> Result<Response, AppError> {
    render_simple(&state, "privacy.html").await
}

pub async fn service_worker() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript")],
        SERVICE_WORKER,
    )
}
