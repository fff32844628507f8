//! Uniform calendar projection of sessions and tasks.

use crate::{
    session::domain::{Session, SessionId, SessionStatus},
    task::domain::{Task, TaskId, TaskStatus},
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Which record stream an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Projected from a session.
    Session,
    /// Projected from a task.
    Task,
}

/// Identifier of the record behind an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum EventSource {
    /// A session record.
    Session(SessionId),
    /// A task record.
    Task(TaskId),
}

impl EventSource {
    /// Returns the kind of record.
    #[must_use]
    pub const fn kind(self) -> EventKind {
        match self {
            Self::Session(_) => EventKind::Session,
            Self::Task(_) => EventKind::Task,
        }
    }
}

/// Status of the record behind an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum EventStatus {
    /// Session status.
    Session(SessionStatus),
    /// Task status.
    Task(TaskStatus),
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session(status) => f.write_str(status.label()),
            Self::Task(status) => f.write_str(status.as_str()),
        }
    }
}

/// A session or task placed on the calendar.
///
/// `date` is the normalized bucketing key: a plain calendar date with any
/// time of day and zone already discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    source: EventSource,
    title: String,
    date: NaiveDate,
    time: Option<NaiveTime>,
    status: EventStatus,
    client_name: Option<String>,
}

impl CalendarEvent {
    /// Returns the record behind the event.
    #[must_use]
    pub const fn source(&self) -> EventSource {
        self.source
    }

    /// Returns the kind of record.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.source.kind()
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the normalized date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the start time for timed events.
    #[must_use]
    pub const fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    /// Returns the record status.
    #[must_use]
    pub const fn status(&self) -> EventStatus {
        self.status
    }

    /// Returns the related client's name, if any.
    #[must_use]
    pub fn client_name(&self) -> Option<&str> {
        self.client_name.as_deref()
    }
}

impl From<&Session> for CalendarEvent {
    fn from(session: &Session) -> Self {
        let starts_at = session.starts_at();
        Self {
            source: EventSource::Session(session.id()),
            title: format!("{} - {}", session.session_type(), session.client().name()),
            date: starts_at.date(),
            time: Some(starts_at.time()),
            status: EventStatus::Session(session.status()),
            client_name: Some(session.client().name().to_owned()),
        }
    }
}

impl From<&Task> for CalendarEvent {
    fn from(task: &Task) -> Self {
        Self {
            source: EventSource::Task(task.id()),
            title: task.title().as_str().to_owned(),
            date: task.due_date(),
            time: None,
            status: EventStatus::Task(task.status()),
            client_name: task.client().map(|client| client.name().to_owned()),
        }
    }
}

/// Projects both record streams into one event list, sessions first.
#[must_use]
pub fn project_events(sessions: &[Session], tasks: &[Task]) -> Vec<CalendarEvent> {
    sessions
        .iter()
        .map(CalendarEvent::from)
        .chain(tasks.iter().map(CalendarEvent::from))
        .collect()
}
