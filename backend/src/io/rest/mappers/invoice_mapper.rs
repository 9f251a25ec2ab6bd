use shared::{GenerateInvoiceRequest, InvoiceCategory};

use crate::domain::commands::invoice::GenerateInvoiceCommand;
use crate::domain::models::invoice::{parse_quantity, parse_rate, InvoiceError};

/// Mapper between the submitted invoice form and the domain command
pub struct InvoiceMapper;

impl InvoiceMapper {
    /// Parse the raw form. Quantity, rate and their product are the only things that can fail.
    pub fn to_command(request: GenerateInvoiceRequest) -> Result<GenerateInvoiceCommand, InvoiceError> {
        let quantity = parse_quantity(request.quantity.as_deref())?;
        let rate = parse_rate(request.rate.as_deref())?;

        let command = GenerateInvoiceCommand {
            category: request
                .invoice_type
                .as_deref()
                .map(InvoiceCategory::parse)
                .unwrap_or_default(),
            customer_name: request.name.unwrap_or_default(),
            mobile: request.mobile.unwrap_or_default(),
            service: request.service_name.unwrap_or_default(),
            quantity,
            rate,
            note: request.note.unwrap_or_default(),
            show_mobile: request.show_mobile.is_some(),
            show_note: request.show_note.is_some(),
            file_name: request.name_pdf.filter(|name| !name.trim().is_empty()),
        };
        command.total()?;
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_missing_fields() {
        let command = InvoiceMapper::to_command(GenerateInvoiceRequest::default()).unwrap();

        assert_eq!(command.category, InvoiceCategory::Personal);
        assert_eq!(command.quantity, 1);
        assert_eq!(command.rate, 0.0);
        assert_eq!(command.total(), Ok(0.0));
        assert!(!command.show_mobile);
        assert!(!command.show_note);
        assert_eq!(command.file_name, None);
    }

    #[test]
    fn test_full_form() {
        let request = GenerateInvoiceRequest {
            invoice_type: Some("shop".to_string()),
            name: Some("Asha".to_string()),
            mobile: Some("9876543210".to_string()),
            service_name: Some("Tailoring".to_string()),
            quantity: Some("3".to_string()),
            rate: Some("150.0".to_string()),
            note: Some("Thanks".to_string()),
            show_mobile: Some("on".to_string()),
            show_note: Some(String::new()),
            name_pdf: Some("asha".to_string()),
        };

        let command = InvoiceMapper::to_command(request).unwrap();

        assert_eq!(command.category, InvoiceCategory::Shop);
        assert_eq!(command.total(), Ok(450.0));
        assert!(command.show_mobile);
        // presence is enough, even with an empty value
        assert!(command.show_note);
        assert_eq!(command.file_name.as_deref(), Some("asha"));
    }

    #[test]
    fn test_non_numeric_input_is_rejected() {
        let request = GenerateInvoiceRequest {
            quantity: Some("two".to_string()),
            ..Default::default()
        };
        assert_eq!(
            InvoiceMapper::to_command(request),
            Err(InvoiceError::InvalidQuantity("two".to_string()))
        );

        let request = GenerateInvoiceRequest {
            rate: Some("cheap".to_string()),
            ..Default::default()
        };
        assert!(InvoiceMapper::to_command(request).is_err());
    }

    #[test]
    fn test_blank_numbers_use_defaults() {
        let request = GenerateInvoiceRequest {
            quantity: Some(String::new()),
            rate: Some(" ".to_string()),
            ..Default::default()
        };

        let command = InvoiceMapper::to_command(request).unwrap();
        assert_eq!(command.quantity, 1);
        assert_eq!(command.rate, 0.0);
    }

    #[test]
    fn test_overflowing_total_is_rejected() {
        let request = GenerateInvoiceRequest {
            quantity: Some("10".to_string()),
            rate: Some("1e308".to_string()),
            ..Default::default()
        };

        assert_eq!(
            InvoiceMapper::to_command(request),
            Err(InvoiceError::InvalidTotal { quantity: 10, rate: 1e308 })
        );
    }
}
