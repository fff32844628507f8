//! Then steps for calendar month BDD scenarios.

use super::world::CalendarWorld;
use rstest_bdd_macros::then;

#[then("the grid has {days:usize} days")]
fn grid_has_days(world: &CalendarWorld, days: usize) -> Result<(), eyre::Report> {
    let actual = world.grid()?.days().len();
    if actual != days {
        return Err(eyre::eyre!("expected {days} day buckets, found {actual}"));
    }
    Ok(())
}

#[then("day {day:u32} holds {count:usize} events")]
fn day_holds_events(world: &CalendarWorld, day: u32, count: usize) -> Result<(), eyre::Report> {
    let bucket = world
        .grid()?
        .day(day)
        .ok_or_else(|| eyre::eyre!("day {day} missing from grid"))?;
    if bucket.total() != count {
        return Err(eyre::eyre!(
            "expected {count} events on day {day}, found {}",
            bucket.total()
        ));
    }
    Ok(())
}

#[then("day {day:u32} shows {visible:usize} events and hides {hidden:usize}")]
fn day_shows_and_hides(
    world: &CalendarWorld,
    day: u32,
    visible: usize,
    hidden: usize,
) -> Result<(), eyre::Report> {
    let bucket = world
        .grid()?
        .day(day)
        .ok_or_else(|| eyre::eyre!("day {day} missing from grid"))?;
    let shown = bucket.visible_events().len();
    if shown != visible || bucket.hidden_count() != hidden {
        return Err(eyre::eyre!(
            "expected {visible} shown and {hidden} hidden, found {shown} and {}",
            bucket.hidden_count()
        ));
    }
    Ok(())
}

#[then("the grid shows year {year:i32}")]
fn grid_shows_year(world: &CalendarWorld, year: i32) -> Result<(), eyre::Report> {
    let actual = world.grid()?.month().year();
    if actual != year {
        return Err(eyre::eyre!("expected year {year}, found {actual}"));
    }
    Ok(())
}
