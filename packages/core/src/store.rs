//! In-memory holder of the job collection.

use crate::error::RequestError;
use crate::job::{Job, JobId};

/// Monotonic counter whose change asks the collection to reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefetchToken(pub u64);

impl RefetchToken {
    /// The next token; bump this after every successful mutation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn bump(&mut self) {
        *self = self.next();
    }
}

/// Sequence number of a dispatched load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// What happened to a finished load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The collection now holds `count` records.
    Applied { count: usize },
    /// The request failed; the collection is now empty.
    Degraded { reason: RequestError },
    /// A newer load was dispatched after this one; its result was dropped.
    Stale,
}

/// The full list of jobs, whether a load is running, and the load sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStore {
    jobs: Vec<Job>,
    loading: bool,
    dispatched: u64,
    last_failure: Option<RequestError>,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn get(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Why the collection was last degraded to empty, until the next good load.
    pub fn last_failure(&self) -> Option<&RequestError> {
        self.last_failure.as_ref()
    }

    /// Start a load. The caller issues the request and hands the result to
    /// [`CollectionStore::finish_load`] with the returned ticket.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.dispatched += 1;
        self.loading = true;
        tracing::debug!(ticket = self.dispatched, "jobs load dispatched");
        LoadTicket(self.dispatched)
    }

    /// Apply a finished load unless a newer one has been dispatched since.
    ///
    /// Failures replace the collection with an empty list.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: Result<Vec<Job>, RequestError>,
    ) -> LoadOutcome {
        if ticket.0 < self.dispatched {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.dispatched,
                "dropping stale jobs load"
            );
            return LoadOutcome::Stale;
        }

        self.loading = false;
        match result {
            Ok(jobs) => {
                let count = jobs.len();
                self.jobs = jobs;
                self.last_failure = None;
                tracing::debug!(count, "jobs loaded");
                LoadOutcome::Applied { count }
            }
            Err(reason) => {
                tracing::warn!(
                    status = reason.status,
                    kind = reason.kind.as_str(),
                    error = %reason,
                    "jobs load failed, showing empty list"
                );
                self.jobs.clear();
                self.last_failure = Some(reason.clone());
                LoadOutcome::Degraded { reason }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::JobPayload;

    fn job(id: i64, title: &str) -> Job {
        Job::from_payload(JobId(id), JobPayload::new(title, "Acme"))
    }

    #[test]
    fn load_replaces_collection() {
        let mut store = CollectionStore::new();
        let ticket = store.begin_load();
        assert!(store.is_loading());

        let outcome = store.finish_load(ticket, Ok(vec![job(1, "a"), job(2, "b")]));
        assert_eq!(outcome, LoadOutcome::Applied { count: 2 });
        assert!(!store.is_loading());
        assert_eq!(store.get(JobId(2)).map(|j| j.title.as_str()), Some("b"));
    }

    #[test]
    fn failure_degrades_to_empty() {
        let mut store = CollectionStore::new();
        let ticket = store.begin_load();
        store.finish_load(ticket, Ok(vec![job(1, "a")]));

        let ticket = store.begin_load();
        let outcome = store.finish_load(ticket, Err(RequestError::status(502, "bad gateway")));
        assert!(matches!(outcome, LoadOutcome::Degraded { .. }));
        assert!(store.is_empty());
        assert_eq!(store.last_failure().and_then(|e| e.status), Some(502));
        assert!(!store.is_loading());
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut store = CollectionStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        assert_eq!(
            store.finish_load(second, Ok(vec![job(1, "fresh")])),
            LoadOutcome::Applied { count: 1 }
        );
        assert_eq!(
            store.finish_load(first, Ok(vec![job(1, "old"), job(2, "older")])),
            LoadOutcome::Stale
        );
        assert_eq!(store.jobs().len(), 1);
        assert_eq!(store.jobs()[0].title, "fresh");
    }

    #[test]
    fn loading_stays_set_until_latest_load_finishes() {
        let mut store = CollectionStore::new();
        let first = store.begin_load();
        let second = store.begin_load();

        store.finish_load(first, Ok(vec![]));
        assert!(store.is_loading());
        store.finish_load(second, Ok(vec![]));
        assert!(!store.is_loading());
    }

    #[test]
    fn refetch_token_is_monotonic() {
        let mut token = RefetchToken::default();
        token.bump();
        token.bump();
        assert_eq!(token, RefetchToken(2));
        assert!(token.next() > token);
    }
}
