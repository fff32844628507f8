//! When steps for calendar month BDD scenarios.

use super::world::{CalendarWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#"the calendar for month "{month}" of year "{year}" is requested"#)]
fn calendar_requested(world: &mut CalendarWorld, month: String, year: String) {
    let result = run_async(
        world
            .calendar
            .month_view_from_query(Some(&month), Some(&year)),
    );
    world.last_grid = Some(result);
}
