//! # Invoice Routes
//!
//! `POST /generate` turns the invoice form into a history record and a PDF
//! download. `GET /invoice/:invoice_no` serves a previously generated PDF.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Router,
};
use shared::GenerateInvoiceRequest;
use tracing::{info, warn};

use crate::io::rest::error::AppError;
use crate::io::rest::mappers::invoice_mapper::InvoiceMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_invoice))
        .route("/invoice/:invoice_no", get(get_invoice))
}

fn pdf_response(bytes: Vec<u8>, disposition: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

pub async fn generate_invoice(
    State(state): State<AppState>,
    Form(request): Form<GenerateInvoiceRequest>,
) -> Result<Response, AppError> {
    info!("POST /generate - type: {:?}", request.invoice_type);

    let command = InvoiceMapper::to_command(request)?;
    let result = state.invoice_service.generate_invoice(command).await?;

    Ok(pdf_response(
        result.pdf_bytes,
        format!("attachment; filename=\"{}\"", result.file_name),
    ))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(invoice_no): Path<String>,
) -> Result<Response, AppError> {
    info!("GET /invoice/{}", invoice_no);

    match state.history_service.get_invoice_pdf(&invoice_no).await? {
        Some(bytes) => Ok(pdf_response(
            bytes,
            format!("inline; filename=\"{}.pdf\"", invoice_no),
        )),
        None => {
            warn!("No archived PDF for invoice {}", invoice_no);
            Err(AppError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_utils::TestEnvironment;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::util::ServiceExt; // for `oneshot`

    async fn setup_test_app() -> (TestEnvironment, AppState, Router) {
        let env = TestEnvironment::new().await.unwrap();
        let state = AppState::new(env.data_dir.clone(), env.base_path.join("assets")).unwrap();
        let app = router().with_state(state.clone());
        (env, state, app)
    }

    fn form_post(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/generate")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_generate_downloads_pdf_and_records_history() {
        let (_env, state, app) = setup_test_app().await;

        let response = app
            .oneshot(form_post(
                "invoice_type=shop&name=Asha&service_name=Tailoring&quantity=3&rate=150&name_pdf=asha-march",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"asha-march.pdf\""
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));

        let records = state.history_service.list_invoices().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[0].service, "Tailoring");
        assert_eq!(records[0].amount, 450.0);
        assert!(records[0].invoice_no.starts_with("INV-"));
    }

    #[tokio::test]
    async fn test_generated_invoice_can_be_downloaded_again() {
        let (_env, state, app) = setup_test_app().await;

        let response = app
            .clone()
            .oneshot(form_post("name=Ravi&quantity=2&rate=10"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let records = state.history_service.list_invoices().await.unwrap();
        let invoice_no = &records[0].invoice_no;

        let request = Request::builder()
            .uri(format!("/invoice/{}", invoice_no))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_bad_quantity_is_rejected_without_a_record() {
        let (_env, state, app) = setup_test_app().await;

        let response = app
            .oneshot(form_post("name=Asha&quantity=three&rate=150"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.history_service.list_invoices().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_overflowing_total_is_rejected_and_history_stays_readable() {
        let (_env, state, app) = setup_test_app().await;

        let response = app
            .clone()
            .oneshot(form_post("name=A&quantity=10&rate=1e308"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.history_service.list_invoices().await.unwrap().is_empty());

        let response = app
            .oneshot(form_post("name=A&quantity=1&rate=5"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(state.history_service.list_invoices().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_blank_quantity_and_rate_use_defaults() {
        let (_env, state, app) = setup_test_app().await;

        let response = app
            .oneshot(form_post("name=Asha&quantity=&rate="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let records = state.history_service.list_invoices().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, 0.0);
    }

    #[tokio::test]
    async fn test_missing_invoice_is_not_found() {
        let (env, _state, app) = setup_test_app().await;

        for uri in ["/invoice/INV-19990101000000", "/invoice/..%2Fsettings"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
        }

        // lookups never create store files
        assert!(!env.data_dir.settings_file_path().exists());
        assert!(!env.data_dir.history_file_path().exists());
    }
}
