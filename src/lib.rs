//! Phonebook Converter - turns address-book contacts into home-router phonebook entries.
//!
//! The core is a pure conversion engine: one contact plus a validated configuration
//! yields zero or more capacity-bounded appliance entries. Around it sit a directory
//! source abstraction, a service that converts whole directories in parallel, and a
//! small CLI.
//!
//! # Architecture
//!
//! - **models**: Source contacts and appliance entries
//! - **conversion**: Filter, name synthesis, type classification, preference
//!   resolution and capacity splitting
//! - **sources**: Where contacts come from (JSON file, memory)
//! - **services**: Phonebook assembly over a contact source
//! - **metrics**: Conversion counters
//! - **config**: Process settings from environment variables
//! - **error**: Custom error types for precise error handling

pub mod config;
pub mod conversion;
pub mod error;
pub mod metrics;
pub mod models;
pub mod services;
pub mod sources;

pub use config::Config;
pub use conversion::{convert, ConfigFile, ConversionConfig, Converter, Outcome};
pub use error::{ConfigError, PhonebookError, SourceError};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{ClassifiedEmail, ClassifiedNumber, OutputEntry, Phonebook, SourceContact};
pub use services::{PhonebookService, PhonebookServiceImpl};
pub use sources::{ContactSource, JsonFileSource, MemorySource};
