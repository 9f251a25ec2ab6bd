//! HTML page rendering with templates compiled into the binary.

use anyhow::Result;
use axum::response::Html;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::io::rest::error::AppError;

const TEMPLATES: [(&str, &str); 8] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("welcome.html", include_str!("../../templates/welcome.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("invoice_form.html", include_str!("../../templates/invoice_form.html")),
    ("history.html", include_str!("../../templates/history.html")),
    ("settings.html", include_str!("../../templates/settings.html")),
    ("about.html", include_str!("../../templates/about.html")),
    ("privacy.html", include_str!("../../templates/privacy.html")),
];

#[derive(Clone)]
pub struct PageRenderer {
    tera: Arc<Tera>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.to_vec())?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, template: &str, context: &Context) -> Result<Html<String>, AppError> {
        Ok(Html(self.tera.render(template, context)?))
    }
}
