pub mod invoice_mapper;
pub mod history_mapper;
