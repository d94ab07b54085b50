//! Data models for contact conversion.
//!
//! Source records come in from a directory source; appliance entries go out to the
//! phonebook document writer.

pub mod contact;
pub mod entry;

pub use contact::{NamePart, NameParts, SourceContact, TypedValue};
pub use entry::{ClassifiedEmail, ClassifiedNumber, OutputEntry, Phonebook};
