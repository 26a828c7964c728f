// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar arithmetic boundary.
//!
//! The recurrence engine never does calendar math of its own; every
//! field rebinding, period-aligned truncation, and checked addition it
//! needs is funnelled through the [`CalendarOps`] extension trait,
//! implemented here for `chrono::DateTime<Tz>`.  Keeping the surface
//! this narrow means the selection logic in the rest of the crate reads
//! as pure rule evaluation.
//!
//! # Week convention
//!
//! Weeks run **Sunday through Saturday**, and week 1 of a year is the
//! week containing January 1.  This is not ISO-8601; it is the
//! numbering the rule vocabulary was defined against, so ordinal
//! day-of-week 1 means Sunday and week numbers agree with the rules'
//! historical meaning.
//!
//! # Failure model
//!
//! Every operation returns `Option`: an out-of-range ordinal (the 31st
//! of February), an overflowing addition, or a rebinding that lands on
//! a nonexistent or ambiguous local wall-clock time (a DST gap) all
//! yield `None`.  Callers treat `None` as "no candidate" — nothing in
//! this module panics.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone, Timelike};

use super::clock::TimeOfDay;
use super::rule::Unit;

/// Narrow calendar capability consumed by the recurrence engine.
///
/// Implemented for `chrono::DateTime<Tz>`; the engine is written
/// against this trait so the calendar library stays an injected
/// dependency rather than a hard-wired one.
pub trait CalendarOps: Sized {
    /// Override hour/minute/second and zero the sub-second field.
    fn with_clock(&self, time: TimeOfDay) -> Option<Self>;

    /// Move to the given day of the current Sunday-first week
    /// (0 = Sunday … 6 = Saturday), keeping the clock time.
    ///
    /// Values above 6 keep shifting forward into following weeks,
    /// mirroring the overflow behaviour of the original rule format.
    fn with_day_of_week(&self, day: u32) -> Option<Self>;

    /// Rebind the day-of-month (1-based). Out-of-range ordinals reject.
    fn with_day_of_month(&self, day: u32) -> Option<Self>;

    /// Rebind the day-of-year (1-based). Out-of-range ordinals reject.
    fn with_day_of_year(&self, day: u32) -> Option<Self>;

    /// Rebind the month (1 = January … 12 = December), clamping the
    /// day-of-month to the target month's length.
    fn with_month_of_year(&self, month: u32) -> Option<Self>;

    /// Rebind the week-of-year, keeping weekday and clock time.
    /// Week numbers past the year's end shift into the next year.
    fn with_week(&self, week: u32) -> Option<Self>;

    /// Week number of this instant (week 1 contains January 1).
    fn week_of_year(&self) -> u32;

    /// Number of weeks in this instant's year under the same numbering.
    fn weeks_in_year(&self) -> u32;

    /// Number of days in this instant's month (28–31).
    fn days_in_month(&self) -> u32;

    /// Number of days in this instant's year (365 or 366).
    fn days_in_year(&self) -> u32;

    /// Midnight of the first day of the enclosing period
    /// (week ⇒ Sunday, month ⇒ the 1st, year ⇒ January 1).
    fn start_of(&self, unit: Unit) -> Option<Self>;

    /// Checked addition of `count` periods.  Month and year steps clamp
    /// the day-of-month the way `chrono::Months` does.
    fn add_units(&self, unit: Unit, count: i64) -> Option<Self>;
}

/// Signed day shift over the checked `chrono` API.
fn shift_days<Tz: TimeZone>(instant: &DateTime<Tz>, delta: i64) -> Option<DateTime<Tz>> {
    if delta >= 0 {
        instant.clone().checked_add_days(Days::new(delta as u64))
    } else {
        instant.clone().checked_sub_days(Days::new(delta.unsigned_abs()))
    }
}

/// Signed month shift over the checked `chrono` API.
fn shift_months<Tz: TimeZone>(instant: &DateTime<Tz>, delta: i64) -> Option<DateTime<Tz>> {
    if delta >= 0 {
        let months = u32::try_from(delta).ok()?;
        instant.clone().checked_add_months(Months::new(months))
    } else {
        let months = u32::try_from(delta.unsigned_abs()).ok()?;
        instant.clone().checked_sub_months(Months::new(months))
    }
}

/// Length of `month` in `year`, via the first of the following month.
fn month_length(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    Some(NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?.day())
}

/// Days from Sunday to January 1 of `year`.
fn january_first_offset(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 1, 1).map_or(0, |d| d.weekday().num_days_from_sunday())
}

impl<Tz: TimeZone> CalendarOps for DateTime<Tz> {
    fn with_clock(&self, time: TimeOfDay) -> Option<Self> {
        self.with_hour(time.hour)?
            .with_minute(time.minute)?
            .with_second(time.second)?
            .with_nanosecond(0)
    }

    fn with_day_of_week(&self, day: u32) -> Option<Self> {
        let current = self.weekday().num_days_from_sunday();
        shift_days(self, i64::from(day) - i64::from(current))
    }

    fn with_day_of_month(&self, day: u32) -> Option<Self> {
        // chrono rejects out-of-range ordinals, which is exactly the
        // policy this crate documents: no roll-over, no clamping.
        self.with_day(day)
    }

    fn with_day_of_year(&self, day: u32) -> Option<Self> {
        self.with_ordinal(day)
    }

    fn with_month_of_year(&self, month: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        match self.with_month(month) {
            Some(rebound) => Some(rebound),
            // Day-of-month exceeds the target month: clamp to its last day.
            None => {
                let last = month_length(self.year(), month)?;
                self.with_day(last)?.with_month(month)
            }
        }
    }

    fn with_week(&self, week: u32) -> Option<Self> {
        let delta = i64::from(week) - i64::from(self.week_of_year());
        shift_days(self, delta.checked_mul(7)?)
    }

    fn week_of_year(&self) -> u32 {
        (self.ordinal() - 1 + january_first_offset(self.year())) / 7 + 1
    }

    fn weeks_in_year(&self) -> u32 {
        (self.days_in_year() - 1 + january_first_offset(self.year())) / 7 + 1
    }

    fn days_in_month(&self) -> u32 {
        // Infallible for any representable date short of chrono's year
        // ceiling; the conservative fallback only matters there.
        month_length(self.year(), self.month()).unwrap_or(28)
    }

    fn days_in_year(&self) -> u32 {
        NaiveDate::from_ymd_opt(self.year(), 12, 31).map_or(365, |d| d.ordinal())
    }

    fn start_of(&self, unit: Unit) -> Option<Self> {
        let first_day = match unit {
            Unit::Day => self.clone(),
            Unit::Week => self.with_day_of_week(0)?,
            Unit::Month => self.with_day(1)?,
            Unit::Year => self.with_ordinal(1)?,
        };
        first_day.with_clock(TimeOfDay::MIDNIGHT)
    }

    fn add_units(&self, unit: Unit, count: i64) -> Option<Self> {
        match unit {
            Unit::Day => shift_days(self, count),
            Unit::Week => shift_days(self, count.checked_mul(7)?),
            Unit::Month => shift_months(self, count),
            Unit::Year => shift_months(self, count.checked_mul(12)?),
        }
    }
}
