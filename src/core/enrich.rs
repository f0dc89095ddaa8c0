use crate::domain::model::{
    Batch, StudentRecord, RESPONSES_CHILD_PATH, STUDENTS_COLLECTION,
};
use crate::domain::ports::DocumentStore;
use crate::utils::error::Result;

/// Resolves one batch of roster ids into the matching student records.
pub struct StudentFetcher<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> StudentFetcher<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// One membership query per batch. Ids with no stored record are
    /// silently omitted; a transport failure fails the whole batch.
    pub async fn fetch_batch(&self, batch: &Batch) -> Result<Vec<StudentRecord>> {
        let docs = self
            .store
            .query_by_field_membership(STUDENTS_COLLECTION, "id", &batch.ids)
            .await?;

        tracing::debug!(
            "Membership query matched {}/{} ids",
            docs.len(),
            batch.len()
        );

        docs.into_iter().map(StudentRecord::from_document).collect()
    }
}

/// Decides per student whether the questionnaire response sub-resource
/// exists.
pub struct SubmissionStatusChecker<'a, S: DocumentStore> {
    store: &'a S,
}

impl<'a, S: DocumentStore> SubmissionStatusChecker<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Existence probe. Absence means "not submitted", never an error.
    pub async fn check(&self, student_id: &str) -> Result<bool> {
        let doc = self
            .store
            .get_nested_document(STUDENTS_COLLECTION, student_id, RESPONSES_CHILD_PATH)
            .await?;

        Ok(doc.is_some())
    }
}
