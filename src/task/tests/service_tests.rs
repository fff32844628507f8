//! Service orchestration tests for task lifecycle operations.

use std::sync::Arc;

use crate::{
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{TaskDomainError, TaskEdit, TaskId, TaskStatus, TransitionPolicy},
        ports::{TaskRepository, TaskRepositoryError},
        services::{
            CreateTaskRequest, EditTaskRequest, TaskLifecycleError, TaskLifecycleService,
            TaskListRequest, TransitionTaskRequest,
        },
    },
    test_support::{FixedClock, MockTaskStore, date, task_due},
};
use rstest::{fixture, rstest};

type TestService = TaskLifecycleService<InMemoryTaskRepository, FixedClock>;

#[fixture]
fn service() -> TestService {
    TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(FixedClock::on(date(2024, 6, 10))),
    )
}

fn create(title: &str, due: chrono::NaiveDate) -> CreateTaskRequest {
    CreateTaskRequest::new(title, due)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_persists_and_is_retrievable(service: TestService) {
    let created = service
        .create_task(
            create("Call insurer", date(2024, 6, 12))
                .with_priority("high")
                .with_assignee("dr. lee"),
        )
        .await
        .expect("task creation should succeed");

    let fetched = service
        .find_task(created.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(created));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_rejects_unknown_status(service: TestService) {
    let result = service
        .create_task(create("Bad", date(2024, 6, 12)).with_status("archived"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::InvalidStatus(_))));
    let board = service.kanban_board().await.expect("board builds");
    assert!(board.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn kanban_move_round_trip(service: TestService) {
    let first = service
        .create_task(create("First", date(2024, 6, 11)))
        .await
        .expect("created");
    let second = service
        .create_task(create("Second", date(2024, 6, 12)))
        .await
        .expect("created");

    let board = service
        .move_card(first.id(), "in-progress")
        .await
        .expect("move should succeed");

    assert_eq!(board.count(TaskStatus::Todo), 1);
    assert_eq!(board.count(TaskStatus::InProgress), 1);
    assert_eq!(board.status_of(second.id()), Some(TaskStatus::Todo));
    assert_eq!(board.status_of(first.id()), Some(TaskStatus::InProgress));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn invalid_target_leaves_stored_status(service: TestService) {
    let task = service
        .create_task(create("Keep me", date(2024, 6, 11)))
        .await
        .expect("created");

    let result = service
        .transition_task(TransitionTaskRequest::new(task.id(), "bogus"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::InvalidStatus(_))));
    let stored = service.find_task(task.id()).await.expect("lookup");
    assert_eq!(stored.map(|t| t.status()), Some(TaskStatus::Todo));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_field_update_keeps_committed_status() {
    let repository = Arc::new(InMemoryTaskRepository::new());
    let service = TaskLifecycleService::new(
        Arc::clone(&repository),
        Arc::new(FixedClock::on(date(2024, 6, 10))),
    );
    let task = service
        .create_task(create("Race me", date(2024, 6, 11)))
        .await
        .expect("created");
    let mut stale = repository
        .find_by_id(task.id())
        .await
        .expect("lookup")
        .expect("task exists");

    service
        .transition_task(TransitionTaskRequest::new(task.id(), "completed"))
        .await
        .expect("transition");
    stale.apply_edit(
        TaskEdit::new().with_description("edited from an old snapshot"),
        &FixedClock::on(date(2024, 6, 10)),
    );
    repository.update(&stale).await.expect("field update");

    let stored = service
        .find_task(task.id())
        .await
        .expect("lookup")
        .expect("task exists");
    assert_eq!(stored.status(), TaskStatus::Completed);
    assert_eq!(stored.description(), "edited from an old snapshot");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn transition_of_missing_task_is_not_found(service: TestService) {
    let missing = TaskId::new();
    let result = service
        .transition_task(TransitionTaskRequest::new(missing, "completed"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::NotFound(id)) if id == missing));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn restricted_policy_rejects_skipping_columns() {
    let service = TaskLifecycleService::new(
        Arc::new(InMemoryTaskRepository::new()),
        Arc::new(FixedClock::on(date(2024, 6, 10))),
    )
    .with_policy(TransitionPolicy::sequential());
    let task = service
        .create_task(create("Stepwise", date(2024, 6, 11)))
        .await
        .expect("created");

    let result = service.move_card(task.id(), "completed").await;

    assert!(matches!(
        result,
        Err(TaskLifecycleError::Domain(TaskDomainError::TransitionNotAllowed { .. }))
    ));
    let stored = service.find_task(task.id()).await.expect("lookup");
    assert_eq!(stored.map(|t| t.status()), Some(TaskStatus::Todo));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_status_transition_skips_the_write() {
    let task = task_due("Stable", date(2024, 6, 11), TaskStatus::InProgress);
    let stored = task.clone();
    let mut store = MockTaskStore::new();
    store
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored.clone())));
    store.expect_update_status().never();
    let service = TaskLifecycleService::new(
        Arc::new(store),
        Arc::new(FixedClock::on(date(2024, 6, 10))),
    );

    let result = service
        .transition_task(TransitionTaskRequest::new(task.id(), "in-progress"))
        .await
        .expect("no-op transition should succeed");

    assert_eq!(result, task);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_status_write_is_reported_and_board_not_rebuilt() {
    let task = task_due("Fragile", date(2024, 6, 11), TaskStatus::Todo);
    let stored = task.clone();
    let mut store = MockTaskStore::new();
    store
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored.clone())));
    store.expect_update_status().returning(|_, _, _| {
        Err(TaskRepositoryError::persistence(std::io::Error::other(
            "write timed out",
        )))
    });
    store.expect_list().never();
    let service = TaskLifecycleService::new(
        Arc::new(store),
        Arc::new(FixedClock::on(date(2024, 6, 10))),
    );

    let result = service.move_card(task.id(), "completed").await;

    let Err(err) = result else {
        panic!("expected persistence failure");
    };
    assert!(err.is_persistence_failure());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn edit_task_updates_fields_but_not_status(service: TestService) {
    let task = service
        .create_task(create("Draft letter", date(2024, 6, 11)).with_status("in-progress"))
        .await
        .expect("created");

    let edited = service
        .edit_task(
            EditTaskRequest::new(task.id())
                .with_title("Send letter")
                .with_priority("low"),
        )
        .await
        .expect("edit should succeed");

    assert_eq!(edited.title().as_str(), "Send letter");
    assert_eq!(edited.status(), TaskStatus::InProgress);
    let stored = service.find_task(task.id()).await.expect("lookup");
    assert_eq!(stored, Some(edited));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_task_removes_and_then_reports_missing(service: TestService) {
    let task = service
        .create_task(create("Short lived", date(2024, 6, 11)))
        .await
        .expect("created");

    service.delete_task(task.id()).await.expect("first delete");
    let again = service.delete_task(task.id()).await;

    assert!(matches!(again, Err(TaskLifecycleError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_applies_windows_and_orders_by_due_date(service: TestService) {
    for (title, due, status) in [
        ("Later", date(2024, 6, 15), "todo"),
        ("Late", date(2024, 6, 3), "todo"),
        ("Late but done", date(2024, 6, 4), "completed"),
        ("Soon", date(2024, 6, 11), "in-progress"),
        ("Far", date(2024, 7, 30), "todo"),
    ] {
        service
            .create_task(create(title, due).with_status(status))
            .await
            .expect("created");
    }

    let overdue = service
        .list_tasks(&TaskListRequest::new().with_due("overdue"))
        .await
        .expect("list");
    let upcoming = service
        .list_tasks(&TaskListRequest::new().with_due("upcoming"))
        .await
        .expect("list");
    let all = service
        .list_tasks(&TaskListRequest::new().with_status(" "))
        .await
        .expect("blank filters match everything");

    let names = |tasks: &[crate::task::domain::Task]| -> Vec<String> {
        tasks.iter().map(|t| t.title().as_str().to_owned()).collect()
    };
    assert_eq!(names(&overdue), ["Late"]);
    assert_eq!(names(&upcoming), ["Soon", "Later"]);
    assert_eq!(all.len(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_tasks_rejects_unknown_window(service: TestService) {
    let result = service
        .list_tasks(&TaskListRequest::new().with_due("someday"))
        .await;

    assert!(matches!(result, Err(TaskLifecycleError::InvalidDueWindow(_))));
}
