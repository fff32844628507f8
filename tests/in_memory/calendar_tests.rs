//! In-memory integration tests for calendar month views.

use super::helpers::{Practice, client, date, practice, starts_at};
use caseboard::{
    calendar::{
        domain::{CalendarMonth, EventKind, EventSource},
        services::CalendarRequest,
    },
    session::services::ScheduleSessionRequest,
    task::services::{CreateTaskRequest, TaskListRequest},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn leap_day_holds_session_and_task(practice: Practice) {
    practice
        .sessions
        .schedule(
            ScheduleSessionRequest::new(client("Ana Silva"), starts_at(2024, 2, 29, 14))
                .with_type("assessment"),
        )
        .await
        .expect("session scheduled");
    practice
        .tasks
        .create_task(CreateTaskRequest::new("Write report", date(2024, 2, 29)))
        .await
        .expect("task created");

    let grid = practice
        .calendar
        .month_view_from_query(Some("1"), Some("2024"))
        .await
        .expect("month view builds");

    let leap_day = grid.day(29).expect("February 2024 has 29 days");
    let kinds: Vec<EventKind> = leap_day.events().iter().map(|event| event.kind()).collect();
    assert_eq!(kinds, [EventKind::Session, EventKind::Task]);
    assert_eq!(
        leap_day.events().first().map(|event| event.title()),
        Some("Assessment - Ana Silva")
    );
    assert_eq!(grid.total_events(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn navigating_months_moves_events_between_grids(practice: Practice) {
    practice
        .tasks
        .create_task(CreateTaskRequest::new("New year task", date(2025, 1, 2)))
        .await
        .expect("task created");
    let december = CalendarMonth::new(2024, 11).expect("valid month");

    let december_grid = practice
        .calendar
        .month_view(&CalendarRequest::new(december))
        .await
        .expect("december builds");
    let january_grid = practice
        .calendar
        .month_view(&CalendarRequest::new(december.next().expect("next month")))
        .await
        .expect("january builds");

    assert_eq!(december_grid.days().len(), 31);
    assert_eq!(december_grid.total_events(), 0);
    assert_eq!(january_grid.day(2).map(|bucket| bucket.total()), Some(1));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn busy_day_keeps_overflow_reachable(practice: Practice) {
    for hour in 8..13 {
        practice
            .sessions
            .schedule(ScheduleSessionRequest::new(
                client("Bruno Costa"),
                starts_at(2024, 3, 12, hour),
            ))
            .await
            .expect("session scheduled");
    }

    let grid = practice
        .calendar
        .month_view(&CalendarRequest::new(
            CalendarMonth::new(2024, 2).expect("valid month"),
        ))
        .await
        .expect("month view builds");
    let busy = grid.day(12).expect("day exists");

    assert_eq!(busy.visible_events().len(), 3);
    assert_eq!(busy.hidden_count(), 2);
    assert_eq!(busy.events().len(), 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_task_leaves_board_calendar_and_list(practice: Practice) {
    let kept = practice
        .tasks
        .create_task(CreateTaskRequest::new("Keep me", date(2024, 4, 10)))
        .await
        .expect("task created");
    let removed = practice
        .tasks
        .create_task(CreateTaskRequest::new("Remove me", date(2024, 4, 10)))
        .await
        .expect("task created");

    practice
        .tasks
        .delete_task(removed.id())
        .await
        .expect("task deleted");

    let board = practice.tasks.kanban_board().await.expect("board builds");
    assert_eq!(board.status_of(removed.id()), None);
    assert_eq!(board.len(), 1);

    let april = CalendarMonth::new(2024, 3).expect("valid month");
    let grid = practice
        .calendar
        .month_view(&CalendarRequest::new(april))
        .await
        .expect("month view builds");
    let sources: Vec<EventSource> = grid
        .day(10)
        .expect("April has a tenth")
        .events()
        .iter()
        .map(|event| event.source())
        .collect();
    assert_eq!(sources, [EventSource::Task(kept.id())]);

    let listed = practice
        .tasks
        .list_tasks(&TaskListRequest::new())
        .await
        .expect("tasks listed");
    let ids: Vec<_> = listed.iter().map(|task| task.id()).collect();
    assert_eq!(ids, [kept.id()]);
}
