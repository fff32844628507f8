//! Month grid of day buckets.

use super::{CalendarEvent, CalendarMonth, weekday_offset};
use chrono::{NaiveDate, Weekday};
use serde::Serialize;

/// Events falling on one day of a rendered month.
///
/// The display cap only limits [`DayBucket::visible_events`]; the full set
/// is always available from [`DayBucket::events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayBucket {
    day: u32,
    date: NaiveDate,
    events: Vec<CalendarEvent>,
    display_cap: usize,
    is_today: bool,
}

impl DayBucket {
    pub(super) const fn new(
        date: NaiveDate,
        day: u32,
        display_cap: usize,
        is_today: bool,
    ) -> Self {
        Self {
            day,
            date,
            events: Vec::new(),
            display_cap,
            is_today,
        }
    }

    pub(super) fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }

    pub(super) fn order_events(&mut self) {
        self.events
            .sort_by_key(|event| (event.time().is_none(), event.time()));
    }

    /// Returns the 1-based day of month.
    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Returns the bucket's date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns whether the bucket is the current day.
    #[must_use]
    pub const fn is_today(&self) -> bool {
        self.is_today
    }

    /// Returns every event on this day.
    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    /// Returns the events shown in the day cell, at most the display cap.
    #[must_use]
    pub fn visible_events(&self) -> &[CalendarEvent] {
        let shown = self.events.len().min(self.display_cap);
        self.events.get(..shown).unwrap_or_default()
    }

    /// Returns how many events are hidden behind the "N more" affordance.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.events.len().saturating_sub(self.display_cap)
    }

    /// Returns the total number of events on this day.
    #[must_use]
    pub fn total(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` when no events fall on this day.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One cell of the rendered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell<'a> {
    /// Empty cell before day 1.
    Padding,
    /// A day of the month.
    Day(&'a DayBucket),
}

/// A month laid out as a weekday-aligned grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    month: CalendarMonth,
    week_start: Weekday,
    leading_offset: u32,
    days: Vec<DayBucket>,
}

impl CalendarGrid {
    pub(super) const fn new(
        month: CalendarMonth,
        week_start: Weekday,
        leading_offset: u32,
        days: Vec<DayBucket>,
    ) -> Self {
        Self {
            month,
            week_start,
            leading_offset,
            days,
        }
    }

    /// Returns the month shown.
    #[must_use]
    pub const fn month(&self) -> CalendarMonth {
        self.month
    }

    /// Returns the weekday of the first column.
    #[must_use]
    pub const fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Returns the number of empty cells before day 1, in `0..=6`.
    #[must_use]
    pub const fn leading_offset(&self) -> u32 {
        self.leading_offset
    }

    /// Returns one bucket per day of the month, in order.
    #[must_use]
    pub fn days(&self) -> &[DayBucket] {
        &self.days
    }

    /// Returns the bucket for the 1-based `day`.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<&DayBucket> {
        let index = usize::try_from(day.checked_sub(1)?).ok()?;
        self.days.get(index)
    }

    /// Returns the total number of events placed on the grid.
    #[must_use]
    pub fn total_events(&self) -> usize {
        self.days.iter().map(DayBucket::total).sum()
    }

    /// Returns the column headings, starting at the configured week start.
    #[must_use]
    pub fn weekday_header(&self) -> [Weekday; 7] {
        let mut header = [self.week_start; 7];
        let mut current = self.week_start;
        for slot in &mut header {
            *slot = current;
            current = current.succ();
        }
        header
    }

    /// Iterates the grid cells: leading padding followed by each day.
    pub fn cells(&self) -> impl Iterator<Item = GridCell<'_>> {
        let padding = usize::try_from(self.leading_offset).unwrap_or_default();
        std::iter::repeat_n(GridCell::Padding, padding).chain(self.days.iter().map(GridCell::Day))
    }

    /// Returns the grid column (0-based) that `weekday` occupies.
    #[must_use]
    pub fn column_of(&self, weekday: Weekday) -> u32 {
        weekday_offset(weekday, self.week_start)
    }
}
