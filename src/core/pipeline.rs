use crate::core::batch;
use crate::core::enrich::{StudentFetcher, SubmissionStatusChecker};
use crate::core::roster::RosterResolver;
use crate::domain::model::{Batch, EnrichedStudent, StudentRecord};
use crate::domain::ports::{DocumentStore, MEMBERSHIP_QUERY_CAP};
use crate::utils::error::Result;
use futures::future::try_join_all;

/// The resolve-and-enrich pipeline.
///
/// One run is: load the class roster, split it into membership-query-sized
/// batches, then per batch fetch the student records and probe each one's
/// submission status. Batches run strictly one after another; the status
/// probes inside a batch run together and are joined all-or-nothing. Any
/// failure at any stage aborts the run with no partial result.
pub struct EnrichmentPipeline<S: DocumentStore> {
    store: S,
    batch_cap: usize,
}

impl<S: DocumentStore> EnrichmentPipeline<S> {
    pub fn new(store: S) -> Self {
        Self::with_batch_cap(store, MEMBERSHIP_QUERY_CAP)
    }

    pub fn with_batch_cap(store: S, batch_cap: usize) -> Self {
        Self { store, batch_cap }
    }

    /// Resolves `class_id` into enriched student rows.
    ///
    /// Returns every stored student the roster points at, each with its
    /// derived `has_submitted` flag. Roster ids with no stored record are
    /// omitted. Repeated roster ids are fetched repeatedly; deduplication
    /// is the roster owner's problem, not ours.
    pub async fn run(&self, class_id: &str) -> Result<Vec<EnrichedStudent>> {
        let resolver = RosterResolver::new(&self.store);
        let class = resolver.resolve(class_id).await?;

        let roster = class.student_ids();
        if roster.is_empty() {
            tracing::info!("Class {} has an empty roster", class_id);
            return Ok(Vec::new());
        }

        let batches = batch::plan(&roster, self.batch_cap)?;
        tracing::info!(
            "Resolving {} roster ids in {} batches (cap {})",
            roster.len(),
            batches.len(),
            self.batch_cap
        );

        // Sequential across batches: batch N+1 is not issued until batch N
        // has fully joined. Keeps concurrent store load bounded by the cap.
        let mut enriched = Vec::with_capacity(roster.len());
        for (index, batch) in batches.iter().enumerate() {
            let rows = self.enrich_batch(batch).await?;
            tracing::debug!("Batch {}/{}: {} rows", index + 1, batches.len(), rows.len());
            enriched.extend(rows);
        }

        Ok(enriched)
    }

    /// Fetches one batch and joins its status probes. Produces the batch's
    /// rows as a whole; nothing reaches the run's accumulator until every
    /// probe in the batch has succeeded.
    async fn enrich_batch(&self, batch: &Batch) -> Result<Vec<EnrichedStudent>> {
        let fetcher = StudentFetcher::new(&self.store);
        let checker = SubmissionStatusChecker::new(&self.store);

        let records = fetcher.fetch_batch(batch).await?;

        // All probes for the batch launched together; try_join_all fails
        // the whole batch on the first probe failure.
        try_join_all(
            records
                .into_iter()
                .map(|record| Self::enrich_record(&checker, record)),
        )
        .await
    }

    async fn enrich_record(
        checker: &SubmissionStatusChecker<'_, S>,
        record: StudentRecord,
    ) -> Result<EnrichedStudent> {
        let has_submitted = checker.check(&record.id).await?;
        Ok(EnrichedStudent {
            record,
            has_submitted,
        })
    }
}
