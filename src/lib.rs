pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::HttpDocumentStore;
pub use config::{CliConfig, Settings};
pub use core::pipeline::EnrichmentPipeline;
pub use domain::model::{ClassRecord, EnrichedStudent, StudentRecord, StudentRef};
pub use domain::ports::{Document, DocumentStore, MEMBERSHIP_QUERY_CAP};
pub use utils::error::{Result, RosterError};
