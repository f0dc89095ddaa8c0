use crate::domain::model::{ClassRecord, CLASSES_COLLECTION};
use crate::domain::ports::DocumentStore;
use crate::utils::error::{Result, RosterError};

/// Loads class documents and extracts their member rosters.
///
/// Identity is always an explicit parameter here; this crate never
/// consults ambient session state to find out who is asking.
pub struct RosterResolver<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> RosterResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// One point read against the class collection. A class that exists
    /// but lists no students resolves to an empty roster.
    pub async fn resolve(&self, class_id: &str) -> Result<ClassRecord> {
        tracing::debug!("Loading class document: {}", class_id);

        let doc = self
            .store
            .get_document(CLASSES_COLLECTION, class_id)
            .await?
            .ok_or_else(|| RosterError::ClassNotFound {
                class_id: class_id.to_string(),
            })?;

        ClassRecord::from_document(doc)
    }

    /// Classes owned by `teacher_id`, for building a class picker.
    /// Equality filter expressed as a one-value membership query.
    pub async fn classes_for_teacher(&self, teacher_id: &str) -> Result<Vec<ClassRecord>> {
        tracing::debug!("Listing classes for teacher: {}", teacher_id);

        let docs = self
            .store
            .query_by_field_membership(
                CLASSES_COLLECTION,
                "teacherId",
                &[teacher_id.to_string()],
            )
            .await?;

        docs.into_iter().map(ClassRecord::from_document).collect()
    }
}
