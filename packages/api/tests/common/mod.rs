use api::{InMemoryJobsApi, Job, JobId, JobPayload, JobStatus, JobsApi};
use tracker_core::{CollectionStore, LoadOutcome};

pub fn seeded() -> InMemoryJobsApi {
    InMemoryJobsApi::with_jobs(vec![
        Job::from_payload(
            JobId(1),
            JobPayload::new("Backend Dev", "Acme")
                .with_status(JobStatus::Applied)
                .with_date_applied("2024-03-15T00:00:00.000Z"),
        ),
        Job::from_payload(
            JobId(2),
            JobPayload::new("SRE", "Globex").with_place("Remote"),
        ),
    ])
}

/// Run one load through the store the way the list view does.
pub async fn load(store: &mut CollectionStore, api: &impl JobsApi) -> LoadOutcome {
    let ticket = store.begin_load();
    let result = api.list_jobs().await;
    store.finish_load(ticket, result)
}
