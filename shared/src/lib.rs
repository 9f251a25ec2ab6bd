use serde::{Deserialize, Serialize};
use std::fmt;

/// Business-wide settings used to decorate every rendered invoice.
///
/// Missing keys in a persisted document fall back to the defaults so older or
/// hand-edited `settings.json` files keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// UI theme, `light` or `dark`
    pub theme: String,
    /// Business name printed at the top of every invoice
    pub business_name: String,
    /// Currency symbol prefixed to rates and totals
    pub currency: String,
    /// Path of the uploaded logo on disk (empty when no logo was uploaded)
    pub logo_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            business_name: "SS Web Studio".to_string(),
            currency: "₹".to_string(),
            logo_path: String::new(),
        }
    }
}

/// Allow-listed settings fields accepted from the settings form.
///
/// `logo_path` is absent here; it only changes through a logo upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsUpdate {
    pub theme: Option<String>,
    pub business_name: Option<String>,
    pub currency: Option<String>,
}

impl SettingsUpdate {
    /// Merge the submitted fields into `settings`, leaving absent fields untouched
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
        if let Some(business_name) = &self.business_name {
            settings.business_name = business_name.clone();
        }
        if let Some(currency) = &self.currency {
            settings.currency = currency.clone();
        }
    }
}

/// Summary of one generated invoice, kept in the history store.
///
/// Invoice number format: "INV-YYYYMMDDHHMMSS" with an optional "-N" suffix
/// when two invoices are generated within the same second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub invoice_no: String,
    /// Customer name
    pub name: String,
    /// Service or purpose description
    pub service: String,
    /// Quantity multiplied by rate
    pub amount: f64,
    /// Generation date as DD-MM-YYYY
    pub date: String,
}

/// Kind of invoice being generated; selects the printed title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InvoiceCategory {
    Shop,
    Office,
    School,
    Personal,
    /// Any unrecognised category, kept verbatim
    Other(String),
}

impl InvoiceCategory {
    /// The four categories that have their own form page
    pub const KNOWN: [InvoiceCategory; 4] = [
        InvoiceCategory::Shop,
        InvoiceCategory::Office,
        InvoiceCategory::School,
        InvoiceCategory::Personal,
    ];

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "shop" => InvoiceCategory::Shop,
            "office" => InvoiceCategory::Office,
            "school" => InvoiceCategory::School,
            "personal" => InvoiceCategory::Personal,
            _ => InvoiceCategory::Other(value.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InvoiceCategory::Shop => "shop",
            InvoiceCategory::Office => "office",
            InvoiceCategory::School => "school",
            InvoiceCategory::Personal => "personal",
            InvoiceCategory::Other(value) => value,
        }
    }

    /// Title printed under the business name
    pub fn title(&self) -> &'static str {
        match self {
            InvoiceCategory::Shop => "SHOP / BUSINESS INVOICE",
            InvoiceCategory::Office => "OFFICE / FREELANCE INVOICE",
            InvoiceCategory::School => "SCHOOL / FEES RECEIPT",
            InvoiceCategory::Personal => "PERSONAL INVOICE",
            InvoiceCategory::Other(_) => "INVOICE",
        }
    }
}

impl Default for InvoiceCategory {
    fn default() -> Self {
        InvoiceCategory::Personal
    }
}

impl From<String> for InvoiceCategory {
    fn from(value: String) -> Self {
        InvoiceCategory::parse(&value)
    }
}

impl From<InvoiceCategory> for String {
    fn from(value: InvoiceCategory) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InvoiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw invoice form as submitted by the browser.
///
/// Numeric fields stay strings here; parsing happens when the form is mapped
/// to a domain command so a bad number becomes a validation error. The two
/// `show_*` checkboxes count as ticked whenever the field is present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub invoice_type: Option<String>,
    pub name: Option<String>,
    pub mobile: Option<String>,
    pub service_name: Option<String>,
    pub quantity: Option<String>,
    pub rate: Option<String>,
    pub note: Option<String>,
    pub show_mobile: Option<String>,
    pub show_note: Option<String>,
    /// Custom download file name (without extension)
    pub name_pdf: Option<String>,
}
