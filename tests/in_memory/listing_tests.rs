//! Integration tests for filtered, ordered list queries.

use super::helpers::{TestService, create_all, ensure_sorted, listed_ids, service};
use rstest::rstest;
use std::collections::HashSet;
use tasklist::task::domain::{StatusFilter, TaskId};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_store_lists_nothing(service: TestService) -> Result<(), eyre::Report> {
    for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed] {
        eyre::ensure!(
            service.list(filter).await?.is_empty(),
            "expected no tasks for {filter}"
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_task_is_listed_as_active(service: TestService) -> Result<(), eyre::Report> {
    let created = service.create("buy milk").await?;

    let all = service.list(StatusFilter::All).await?;
    let found = all
        .iter()
        .find(|task| task.id() == created.id())
        .ok_or_else(|| eyre::eyre!("created task missing from list"))?;

    assert_eq!(found.text().as_str(), "buy milk");
    assert!(!found.is_completed());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn active_and_completed_partition_all(service: TestService) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["one", "two", "three", "four", "five"]).await?;
    for task in tasks.iter().step_by(2) {
        service.set_completion(task.id(), true).await?;
    }

    let all: HashSet<TaskId> = listed_ids(&service, StatusFilter::All)
        .await?
        .into_iter()
        .collect();
    let active: HashSet<TaskId> = listed_ids(&service, StatusFilter::Active)
        .await?
        .into_iter()
        .collect();
    let completed: HashSet<TaskId> = listed_ids(&service, StatusFilter::Completed)
        .await?
        .into_iter()
        .collect();

    assert!(active.is_disjoint(&completed));
    assert_eq!(&active | &completed, all);
    assert_eq!(completed.len(), 3);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_task_moves_between_views(service: TestService) -> Result<(), eyre::Report> {
    let task = service.create("file taxes").await?;

    service.set_completion(task.id(), true).await?;

    let completed = listed_ids(&service, StatusFilter::Completed).await?;
    let active = listed_ids(&service, StatusFilter::Active).await?;
    assert!(completed.contains(&task.id()));
    assert!(!active.contains(&task.id()));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_stays_sorted_after_mixed_operations(
    service: TestService,
) -> Result<(), eyre::Report> {
    let tasks = create_all(&service, &["a", "b", "c", "d"]).await?;
    let ids: Vec<TaskId> = tasks.iter().map(|task| task.id()).collect();
    if let [a, b, c, d] = ids.as_slice() {
        service.reorder(&[*d, *b]).await?;
        service.delete(*c).await?;
        service.create("e").await?;
        service.set_completion(*a, true).await?;
    }

    for filter in [StatusFilter::All, StatusFilter::Active, StatusFilter::Completed] {
        ensure_sorted(&service.list(filter).await?)?;
    }
    Ok(())
}
