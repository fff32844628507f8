//! Given steps for calendar month BDD scenarios.

use super::world::{CalendarWorld, parse_date, run_async};
use caseboard::{
    client::{ClientId, ClientRef},
    session::services::ScheduleSessionRequest,
    task::services::CreateTaskRequest,
};
use chrono::NaiveTime;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a session with "{name}" on {day} at {time}"#)]
fn session_on(
    world: &mut CalendarWorld,
    name: String,
    day: String,
    time: String,
) -> Result<(), eyre::Report> {
    let start_time = NaiveTime::parse_from_str(&time, "%H:%M")
        .map_err(|err| eyre::eyre!("invalid scenario time {time}: {err}"))?;
    let starts_at = parse_date(&day)?.and_time(start_time);
    run_async(world.sessions.schedule(ScheduleSessionRequest::new(
        ClientRef::new(ClientId::new(), name),
        starts_at,
    )))
    .wrap_err("schedule session for calendar scenario")?;
    Ok(())
}

#[given(r#"{count:usize} sessions with "{name}" on {day}"#)]
fn sessions_on(
    world: &mut CalendarWorld,
    count: usize,
    name: String,
    day: String,
) -> Result<(), eyre::Report> {
    let date = parse_date(&day)?;
    let client = ClientRef::new(ClientId::new(), name);
    for hour in (8..).take(count) {
        let starts_at = date
            .and_hms_opt(hour, 0, 0)
            .ok_or_else(|| eyre::eyre!("too many sessions for one day"))?;
        run_async(
            world
                .sessions
                .schedule(ScheduleSessionRequest::new(client.clone(), starts_at)),
        )
        .wrap_err("schedule session for calendar scenario")?;
    }
    Ok(())
}

#[given(r#"a task "{title}" due on {day}"#)]
fn task_due_on(world: &mut CalendarWorld, title: String, day: String) -> Result<(), eyre::Report> {
    let due = parse_date(&day)?;
    run_async(world.tasks.create_task(CreateTaskRequest::new(title, due)))
        .wrap_err("create task for calendar scenario")?;
    Ok(())
}
