//! In-memory integration tests for the task lifecycle.

use super::helpers::{Practice, client, date, practice};
use caseboard::task::{
    domain::TaskStatus,
    services::{CreateTaskRequest, TaskLifecycleError, TaskListRequest, TransitionTaskRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn board_reflects_every_committed_move(practice: Practice) {
    let mut ids = Vec::new();
    for title in ["Intake form", "Consent form", "Referral letter"] {
        let task = practice
            .tasks
            .create_task(CreateTaskRequest::new(title, date(2024, 5, 2)))
            .await
            .expect("task created");
        ids.push(task.id());
    }
    let [first, second, third] = ids.as_slice() else {
        panic!("expected three tasks");
    };

    practice
        .tasks
        .move_card(*second, "in-progress")
        .await
        .expect("first move");
    let board = practice
        .tasks
        .move_card(*third, "completed")
        .await
        .expect("second move");

    assert_eq!(board.status_of(*first), Some(TaskStatus::Todo));
    assert_eq!(board.status_of(*second), Some(TaskStatus::InProgress));
    assert_eq!(board.status_of(*third), Some(TaskStatus::Completed));
    assert_eq!(board.len(), 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completed_tasks_can_be_reopened(practice: Practice) {
    let task = practice
        .tasks
        .create_task(CreateTaskRequest::new("Reopen me", date(2024, 5, 2)).with_status("completed"))
        .await
        .expect("task created");

    let reopened = practice
        .tasks
        .transition_task(TransitionTaskRequest::new(task.id(), "todo"))
        .await
        .expect("reopen should succeed");

    assert_eq!(reopened.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_filters_by_client_and_priority(practice: Practice) {
    let ana = client("Ana Silva");
    practice
        .tasks
        .create_task(
            CreateTaskRequest::new("Ana high", date(2024, 5, 3))
                .with_client(ana.clone())
                .with_priority("high"),
        )
        .await
        .expect("task created");
    practice
        .tasks
        .create_task(CreateTaskRequest::new("Ana low", date(2024, 5, 4)).with_client(ana.clone()))
        .await
        .expect("task created");
    practice
        .tasks
        .create_task(CreateTaskRequest::new("Other", date(2024, 5, 5)).with_priority("high"))
        .await
        .expect("task created");

    let found = practice
        .tasks
        .list_tasks(
            &TaskListRequest::new()
                .with_client(ana.id())
                .with_priority("HIGH"),
        )
        .await
        .expect("list");

    let titles: Vec<&str> = found.iter().map(|task| task.title().as_str()).collect();
    assert_eq!(titles, ["Ana high"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_priority_filter_is_rejected(practice: Practice) {
    let result = practice
        .tasks
        .list_tasks(&TaskListRequest::new().with_priority("urgent"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::InvalidPriority(_))));
}
