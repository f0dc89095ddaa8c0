use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Hard upper bound on the number of values one membership query may
/// carry. Fixed by the backing store, not by this crate.
pub const MEMBERSHIP_QUERY_CAP: usize = 10;

/// A raw document: its store id plus its fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub data: HashMap<String, serde_json::Value>,
}

/// The document store the pipeline runs against.
///
/// Three capabilities, nothing more: point lookup, bounded
/// equality-membership query, and nested-document existence probe.
/// Absence (`None` / missing matches) is a normal outcome; only
/// transport or backend failures surface as errors.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Point lookup. `None` when no such document exists.
    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// Returns every document in `collection` whose `field` equals one of
    /// `values`. Ids without a match produce no entry and no error.
    /// Fails when `values` exceeds [`MEMBERSHIP_QUERY_CAP`].
    async fn query_by_field_membership(
        &self,
        collection: &str,
        field: &str,
        values: &[String],
    ) -> Result<Vec<Document>>;

    /// Fetches a document nested under `parent_id`, e.g. the
    /// `Questionnaire/Responses` child of a student. `None` when absent.
    async fn get_nested_document(
        &self,
        parent_collection: &str,
        parent_id: &str,
        child_path: &str,
    ) -> Result<Option<Document>>;
}
