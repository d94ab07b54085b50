//! Application service layer.
//!
//! Services orchestrate a contact source and the conversion engine. They provide
//! a clean boundary between the CLI and the pure conversion code.

mod phonebook_service;

pub use phonebook_service::{PhonebookService, PhonebookServiceImpl};
