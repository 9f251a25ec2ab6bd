pub mod invoice;
pub mod settings;
