//! Fixtures shared by the unit test modules.

use crate::{
    client::{ClientId, ClientRef},
    session::{
        domain::{
            NewSessionData, Payment, Session, SessionFilter, SessionId, SessionStatus,
            SessionType,
        },
        ports::{SessionRepository, SessionRepositoryResult},
    },
    task::{
        domain::{NewTaskData, Task, TaskFilter, TaskId, TaskPriority, TaskStatus, TaskTitle},
        ports::{TaskRepository, TaskRepositoryResult},
    },
};
use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use mockable::Clock;
use mockall::mock;

mock! {
    pub TaskStore {}

    #[async_trait]
    impl TaskRepository for TaskStore {
        async fn store(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;
        async fn update_status(
            &self,
            id: TaskId,
            status: TaskStatus,
            updated_at: DateTime<Utc>,
        ) -> TaskRepositoryResult<bool>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<bool>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn list(&self, filter: &TaskFilter) -> TaskRepositoryResult<Vec<Task>>;
    }
}

mock! {
    pub SessionStore {}

    #[async_trait]
    impl SessionRepository for SessionStore {
        async fn store(&self, session: &Session) -> SessionRepositoryResult<()>;
        async fn update(&self, session: &Session) -> SessionRepositoryResult<()>;
        async fn find_by_id(&self, id: SessionId) -> SessionRepositoryResult<Option<Session>>;
        async fn list(&self, filter: &SessionFilter) -> SessionRepositoryResult<Vec<Session>>;
    }
}

/// Clock pinned to one local wall-clock instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    pub fn at(local: NaiveDateTime) -> Self {
        let pinned = Local
            .from_local_datetime(&local)
            .earliest()
            .expect("test instant should exist in the local zone");
        Self(pinned)
    }

    pub fn on(date: NaiveDate) -> Self {
        Self::at(date.and_hms_opt(12, 0, 0).expect("noon is valid"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

pub fn client(name: &str) -> ClientRef {
    ClientRef::new(ClientId::new(), name)
}

pub fn task_due(title: &str, due_date: NaiveDate, status: TaskStatus) -> Task {
    Task::new(
        NewTaskData {
            title: TaskTitle::new(title).expect("valid task title"),
            description: String::new(),
            status,
            priority: TaskPriority::default(),
            due_date,
            client: None,
            session_id: None,
            assignee: String::new(),
        },
        &FixedClock::on(due_date),
    )
}

pub fn session_at(client_name: &str, starts_at: NaiveDateTime, session_type: SessionType) -> Session {
    Session::new(
        NewSessionData {
            client: client(client_name),
            starts_at,
            session_type,
            status: SessionStatus::Scheduled,
            duration_minutes: 60,
            location: String::new(),
            notes: String::new(),
            payment: Payment::default(),
        },
        &FixedClock::at(starts_at),
    )
    .expect("valid test session")
}
