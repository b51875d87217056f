//! Integration tests for reorder and move operations.

use super::helpers::{TestService, create_all, listed_ids, service};
use rstest::rstest;
use tasklist::task::{
    domain::{StatusFilter, Task, TaskId},
    services::TaskOrderingError,
};

fn ids_of(tasks: &[Task]) -> Vec<TaskId> {
    tasks.iter().map(Task::id).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reorder_matches_requested_sequence(service: TestService) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["A", "B", "C"]).await?;
    let [a, b, c] = ids_of(&tasks)
        .try_into()
        .map_err(|_| eyre::eyre!("expected three tasks"))?;

    service.reorder(&[c, a, b]).await?;

    let listed = service.list(StatusFilter::All).await?;
    let orders: Vec<i64> = listed
        .iter()
        .map(|task| task.effective_order().value())
        .collect();
    assert_eq!(ids_of(&listed), vec![c, a, b]);
    assert_eq!(orders, vec![0, 1, 2]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn partial_reorder_is_not_rolled_back(service: TestService) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["A", "B", "C"]).await?;
    let [a, b, c] = ids_of(&tasks)
        .try_into()
        .map_err(|_| eyre::eyre!("expected three tasks"))?;
    let unknown = TaskId::new();

    let result = service.reorder(&[c, unknown, a, b]).await;

    assert!(matches!(result, Err(TaskOrderingError::NotFound(id)) if id == unknown));
    let listed = service.list(StatusFilter::All).await?;
    let patched = listed
        .iter()
        .find(|task| task.id() == c)
        .ok_or_else(|| eyre::eyre!("task C missing"))?;
    assert_eq!(patched.effective_order().value(), 0);
    assert_eq!(ids_of(&listed), vec![c, a, b]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn subset_reorder_only_touches_listed_tasks(
    service: TestService,
) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["A", "B", "C"]).await?;
    let [a, b, c] = ids_of(&tasks)
        .try_into()
        .map_err(|_| eyre::eyre!("expected three tasks"))?;

    service.reorder(&[c, b]).await?;

    let listed = service.list(StatusFilter::All).await?;
    let orders: Vec<i64> = listed
        .iter()
        .map(|task| task.effective_order().value())
        .collect();
    assert_eq!(ids_of(&listed), vec![c, a, b]);
    assert_eq!(orders, vec![0, 1, 1]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moving_within_completed_view_preserves_active_slots(
    service: TestService,
) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["A", "B", "C", "D"]).await?;
    let [a, b, c, d] = ids_of(&tasks)
        .try_into()
        .map_err(|_| eyre::eyre!("expected four tasks"))?;
    service.set_completion(b, true).await?;
    service.set_completion(d, true).await?;

    service.move_task(StatusFilter::Completed, 1, 0).await?;

    assert_eq!(
        listed_ids(&service, StatusFilter::Completed).await?,
        vec![d, b]
    );
    assert_eq!(listed_ids(&service, StatusFilter::Active).await?, vec![a, c]);
    assert_eq!(
        listed_ids(&service, StatusFilter::All).await?,
        vec![a, d, c, b]
    );
    Ok(())
}
