#![allow(clippy::disallowed_methods)]

mod common;

use std::error::Error;

use api::{InMemoryJobsApi, JobId, JobStatus, JobsApi, RecordedRequest, RequestError};
use tracker_core::{
    CollectionStore, CreateState, CreateWorkflow, DeleteFlow, DetailState, DetailWorkflow, Field,
    LoadOutcome, NotificationKind, SubmitRejected,
};

#[tokio::test]
async fn invalid_create_sends_nothing() -> Result<(), Box<dyn Error>> {
    let api = InMemoryJobsApi::new();
    let mut create = CreateWorkflow::new();
    create.form.company = "Acme".into();

    let rejected = create.begin_submit();
    assert!(matches!(rejected, Err(SubmitRejected::Invalid(_))));
    assert_eq!(
        create.errors().message(Field::Title).as_deref(),
        Some("Please enter a title")
    );
    assert_eq!(create.state(), CreateState::Idle);
    assert_eq!(api.request_count(), 0);
    Ok(())
}

#[tokio::test]
async fn create_then_refetch_shows_new_job() -> Result<(), Box<dyn Error>> {
    let api = InMemoryJobsApi::new();
    let mut store = CollectionStore::new();
    let mut create = CreateWorkflow::new();

    create.form.title = "  Frontend Dev ".into();
    create.form.company = "Initech".into();
    create.form.status = Some(JobStatus::Applied);
    create.form.salary = "$85,000".into();
    create.form.date_applied = "2024-05-01".into();

    let payload = create.begin_submit()?;
    assert!(create.is_submitting());

    let outcome = create.finish_submit(api.create_job(&payload).await);
    assert!(outcome.is_created());
    assert_eq!(outcome.notification().message, "Job created!");
    assert_eq!(create.state(), CreateState::Idle);
    assert!(create.form.title.is_empty());

    assert_eq!(common::load(&mut store, &api).await, LoadOutcome::Applied { count: 1 });
    let job = store.get(JobId(1)).ok_or("created job missing")?;
    assert_eq!(job.title, "Frontend Dev");
    assert_eq!(job.salary, Some(85000.0));
    assert_eq!(job.date_applied.as_deref(), Some("2024-05-01T00:00:00.000Z"));
    Ok(())
}

#[tokio::test]
async fn failed_create_keeps_form() -> Result<(), Box<dyn Error>> {
    let api = InMemoryJobsApi::new();
    api.fail_next(500);

    let mut create = CreateWorkflow::new();
    create.form.title = "Dev".into();
    create.form.company = "Acme".into();

    let payload = create.begin_submit()?;
    let outcome = create.finish_submit(api.create_job(&payload).await);

    let note = outcome.notification();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.message, "Failed to create job (500)");
    assert_eq!(create.form.title, "Dev");
    assert!(api.jobs().is_empty());
    Ok(())
}

#[tokio::test]
async fn edit_save_and_refetch() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut store = CollectionStore::new();
    common::load(&mut store, &api).await;

    let mut detail = DetailWorkflow::new();
    detail.open(store.get(JobId(1)).ok_or("missing")?.clone());
    assert!(detail.edit());
    detail.form.status = Some(JobStatus::Interviewing);
    detail.form.notes = "Phone screen Friday".into();

    let request = detail.begin_save()?;
    assert!(detail.is_saving());
    let outcome = detail.finish_save(&request, api.update_job(request.id, &request.payload).await);
    assert_eq!(outcome.updated_id(), Some(JobId(1)));
    assert_eq!(outcome.notification().message, "Job updated");
    assert_eq!(detail.state(), DetailState::Viewing);
    assert!(!detail.is_saving());

    common::load(&mut store, &api).await;
    detail.sync(store.jobs());

    let updated = store.get(JobId(1)).ok_or("missing")?;
    assert_eq!(updated.status, Some(JobStatus::Interviewing));
    assert_eq!(updated.notes.as_deref(), Some("Phone screen Friday"));
    assert_eq!(detail.selected(), Some(updated));

    let untouched = store.get(JobId(2)).ok_or("missing")?;
    assert_eq!(untouched.title, "SRE");
    assert_eq!(untouched.place.as_deref(), Some("Remote"));
    Ok(())
}

#[tokio::test]
async fn unchanged_date_is_resent_verbatim() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut detail = DetailWorkflow::new();
    detail.open(api.jobs()[0].clone());
    detail.edit();
    detail.form.title = "Backend Engineer".into();

    let request = detail.begin_save()?;
    api.update_job(request.id, &request.payload).await?;

    let sent = api.requests();
    let Some(RecordedRequest::Update(id, payload)) = sent.last() else {
        return Err("expected an update".into());
    };
    assert_eq!(*id, JobId(1));
    assert_eq!(payload.date_applied.as_deref(), Some("2024-03-15T00:00:00.000Z"));
    Ok(())
}

#[tokio::test]
async fn failed_update_stays_editing() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut store = CollectionStore::new();
    common::load(&mut store, &api).await;
    let before = store.jobs().to_vec();

    let mut detail = DetailWorkflow::new();
    detail.open(before[0].clone());
    detail.edit();
    detail.form.title = "Changed".into();

    api.fail_next(500);
    let request = detail.begin_save()?;
    let outcome = detail.finish_save(&request, api.update_job(request.id, &request.payload).await);

    assert_eq!(outcome.notification().message, "Update failed (500)");
    assert_eq!(detail.state(), DetailState::Editing);
    assert_eq!(detail.form.title, "Changed");
    assert!(!detail.is_saving());

    common::load(&mut store, &api).await;
    assert_eq!(store.jobs(), before.as_slice());
    Ok(())
}

#[tokio::test]
async fn delete_requires_confirmation() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut store = CollectionStore::new();
    common::load(&mut store, &api).await;
    let mut flow = DeleteFlow::new();

    assert!(flow.request(JobId(2)));
    flow.dismiss();
    assert_eq!(flow.confirm(), None);
    assert_eq!(api.request_count(), 1);

    flow.request(JobId(2));
    let id = flow.confirm().ok_or("nothing to delete")?;
    assert!(flow.is_deleting(id));
    let outcome = flow.finish(id, api.delete_job(id).await);
    assert!(outcome.is_deleted());
    assert_eq!(outcome.notification().message, "Job Deleted!");

    common::load(&mut store, &api).await;
    assert!(store.get(JobId(2)).is_none());
    assert_eq!(store.jobs().len(), 1);
    Ok(())
}

#[tokio::test]
async fn deleting_unknown_job_is_404() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut flow = DeleteFlow::new();
    flow.request(JobId(99));
    let id = flow.confirm().ok_or("nothing to delete")?;

    let outcome = flow.finish(id, api.delete_job(id).await);
    assert_eq!(outcome.notification().message, "Delete failed (404)");
    assert_eq!(api.jobs().len(), 2);
    Ok(())
}

#[tokio::test]
async fn failed_load_degrades_to_empty() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut store = CollectionStore::new();
    common::load(&mut store, &api).await;
    assert_eq!(store.jobs().len(), 2);

    api.fail_next_with(RequestError::transport("connection refused"));
    let outcome = common::load(&mut store, &api).await;
    assert!(matches!(outcome, LoadOutcome::Degraded { .. }));
    assert!(store.is_empty());
    assert!(store.last_failure().is_some());

    common::load(&mut store, &api).await;
    assert_eq!(store.jobs().len(), 2);
    assert!(store.last_failure().is_none());
    Ok(())
}

#[tokio::test]
async fn stale_load_is_dropped() -> Result<(), Box<dyn Error>> {
    let api = common::seeded();
    let mut store = CollectionStore::new();

    let first = store.begin_load();
    let early = api.list_jobs().await;
    api.delete_job(JobId(1)).await?;
    let second = store.begin_load();
    let late = api.list_jobs().await;

    assert_eq!(store.finish_load(second, late), LoadOutcome::Applied { count: 1 });
    assert_eq!(store.finish_load(first, early), LoadOutcome::Stale);
    assert_eq!(store.jobs().len(), 1);
    Ok(())
}
