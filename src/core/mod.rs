pub mod batch;
pub mod enrich;
pub mod pipeline;
pub mod roster;

pub use crate::domain::model::{Batch, ClassRecord, EnrichedStudent, StudentRecord, StudentRef};
pub use crate::domain::ports::{Document, DocumentStore, MEMBERSHIP_QUERY_CAP};
pub use crate::utils::error::Result;
