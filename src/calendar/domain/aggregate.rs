//! Bucketing of calendar events into a month grid.

use super::{CalendarEvent, CalendarGrid, CalendarMonth, DayBucket};
use crate::config::CalendarConfig;
use chrono::{Datelike, NaiveDate};

/// Builds the grid for `month` from an unwindowed event stream.
///
/// Every day of the month gets a bucket, even when empty. Events outside
/// the month are ignored. Within a bucket, timed events come first in start
/// order, then untimed ones; ties keep their input order.
#[must_use]
pub fn aggregate(
    month: CalendarMonth,
    config: &CalendarConfig,
    events: impl IntoIterator<Item = CalendarEvent>,
    today: Option<NaiveDate>,
) -> CalendarGrid {
    let mut days: Vec<DayBucket> = (1..=month.days_in_month())
        .filter_map(|day| {
            let date = month.day(day)?;
            Some(DayBucket::new(
                date,
                day,
                config.display_cap,
                today == Some(date),
            ))
        })
        .collect();

    for event in events {
        if !month.contains(event.date()) {
            continue;
        }
        let slot = usize::try_from(event.date().day0())
            .ok()
            .and_then(|index| days.get_mut(index));
        if let Some(bucket) = slot {
            bucket.push(event);
        }
    }

    for bucket in &mut days {
        bucket.order_events();
    }

    CalendarGrid::new(
        month,
        config.week_start,
        month.first_weekday_offset(config.week_start),
        days,
    )
}
