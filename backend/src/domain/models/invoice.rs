use chrono::{DateTime, TimeZone};
use shared::InvoiceRecord;

/// Validation errors for invoice form input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvoiceError {
    #[error("Quantity must be a whole number, got '{0}'")]
    InvalidQuantity(String),
    #[error("Rate must be a number, got '{0}'")]
    InvalidRate(String),
    #[error("Total of {quantity} x {rate} is too large")]
    InvalidTotal { quantity: i64, rate: f64 },
}

pub const INVOICE_NO_PREFIX: &str = "INV-";

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

/// Quantity defaults to 1 when the field is missing or blank; zero and negative values are accepted
pub fn parse_quantity(raw: Option<&str>) -> Result<i64, InvoiceError> {
    match non_blank(raw) {
        None => Ok(1),
        Some(value) => value
            .parse::<i64>()
            .map_err(|_| InvoiceError::InvalidQuantity(value.to_string())),
    }
}

/// Rate defaults to 0 when the field is missing or blank. NaN and infinities
/// are rejected; JSON has no representation for them.
pub fn parse_rate(raw: Option<&str>) -> Result<f64, InvoiceError> {
    match non_blank(raw) {
        None => Ok(0.0),
        Some(value) => value
            .parse::<f64>()
            .ok()
            .filter(|rate| rate.is_finite())
            .ok_or_else(|| InvoiceError::InvalidRate(value.to_string())),
    }
}

/// `quantity * rate`, rejected when it overflows to infinity
pub fn checked_total(quantity: i64, rate: f64) -> Result<f64, InvoiceError> {
    let total = quantity as f64 * rate;
    if total.is_finite() {
        Ok(total)
    } else {
        Err(InvoiceError::InvalidTotal { quantity, rate })
    }
}

/// `INV-` followed by the timestamp to second precision
pub fn base_invoice_no<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}{}", INVOICE_NO_PREFIX, now.format("%Y%m%d%H%M%S"))
}

/// Pick an invoice number not yet present in `existing`.
///
/// The first invoice of a second keeps the plain number; later ones get `-2`, `-3`, ...
pub fn unique_invoice_no(base: &str, existing: &[InvoiceRecord]) -> String {
    let taken = |candidate: &str| existing.iter().any(|r| r.invoice_no == candidate);

    if !taken(base) {
        return base.to_string();
    }

    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}", base, suffix);
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Date stored in history and printed on the invoice: DD-MM-YYYY
pub fn invoice_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format("%d-%m-%Y").to_string()
}

/// Currency-prefixed amount with exactly two decimals
pub fn format_amount(currency: &str, value: f64) -> String {
    format!("{}{:.2}", currency, value)
}

/// Attachment name for the generated PDF.
///
/// Uses the custom name when it survives sanitization, otherwise the invoice number.
pub fn download_file_name(custom: Option<&str>, invoice_no: &str) -> String {
    let cleaned: String = custom
        .unwrap_or_default()
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' || c == ' ' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim();
    let stem = cleaned
        .strip_suffix(".pdf")
        .unwrap_or(cleaned)
        .trim_matches(|c| c == '.' || c == ' ');

    if stem.is_empty() || stem.chars().all(|c| c == '_') {
        format!("{}.pdf", invoice_no)
    } else {
        format!("{}.pdf", stem)
    }
}
