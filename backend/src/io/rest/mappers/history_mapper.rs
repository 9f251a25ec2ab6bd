use serde::Serialize;
use shared::InvoiceRecord;

use crate::domain::models::invoice::format_amount;

/// One row of the history table as shown on the history page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub invoice_no: String,
    pub name: String,
    pub service: String,
    pub amount: String,
    pub date: String,
}

pub struct HistoryMapper;

impl HistoryMapper {
    pub fn to_row(record: InvoiceRecord, currency: &str) -> HistoryRow {
        HistoryRow {
            amount: format_amount(currency, record.amount),
            invoice_no: record.invoice_no,
            name: record.name,
            service: record.service,
            date: record.date,
        }
    }

    pub fn to_rows(records: Vec<InvoiceRecord>, currency: &str) -> Vec<HistoryRow> {
        records
            .into_iter()
            .map(|record| Self::to_row(record, currency))
            .collect()
    }
}
