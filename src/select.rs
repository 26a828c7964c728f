// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-of-period selection.
//!
//! Given a period anchor and the rule's day specifiers, resolve which
//! concrete days inside that period qualify, then hand each one to the
//! time-of-day expander.  An [`Ordinal`](DaySpec::Ordinal) specifier
//! rebinds a single day field; an [`Nth`](DaySpec::Nth) specifier
//! scans the period's days forward, counting weekday-class matches.
//!
//! Specifiers that cannot be satisfied — an ordinal the period does
//! not have, an nth beyond the available matches — contribute nothing,
//! silently.  Candidate order follows specifier order; chronological
//! sorting is the generator's job.

use chrono::{DateTime, Datelike, TimeZone};

use super::calendar::CalendarOps;
use super::clock::{self, TimeOfDay};
use super::rule::{DaySpec, Unit};

/// Resolve `days` against `anchor`'s period and expand each hit.
pub(crate) fn select<Tz, F>(
    anchor: &DateTime<Tz>,
    unit: Unit,
    days: &[DaySpec],
    times: &[TimeOfDay],
    accept: &F,
) -> Vec<DateTime<Tz>>
where
    Tz: TimeZone,
    F: Fn(&DateTime<Tz>) -> bool,
{
    if days.is_empty() {
        return clock::expand(anchor, times, accept);
    }

    // Exclusive upper boundary of the period under consideration.
    let period_end = match anchor
        .start_of(unit)
        .and_then(|start| start.add_units(unit, 1))
    {
        Some(end) => end,
        None => return Vec::new(),
    };

    let mut found = Vec::new();
    for day in days {
        match *day {
            DaySpec::Ordinal(ordinal) => {
                let resolved = match unit {
                    Unit::Week => {
                        let number = if ordinal == 0 { 7 } else { ordinal };
                        anchor.with_day_of_week(number - 1)
                    }
                    Unit::Month => {
                        let number = if ordinal == 0 { anchor.days_in_month() } else { ordinal };
                        anchor.with_day_of_month(number)
                    }
                    Unit::Day | Unit::Year => {
                        let number = if ordinal == 0 { anchor.days_in_year() } else { ordinal };
                        anchor.with_day_of_year(number)
                    }
                };
                if let Some(candidate) = resolved {
                    found.extend(clock::expand(&candidate, times, accept));
                }
            }
            DaySpec::Nth { kind, nth } => {
                let first = match unit {
                    Unit::Week => anchor.with_day_of_week(0),
                    Unit::Month => anchor.with_day_of_month(1),
                    Unit::Day | Unit::Year => anchor.with_day_of_year(1),
                };
                let mut cursor = match first {
                    Some(cursor) => cursor,
                    None => continue,
                };

                let mut seen = 0u32;
                let mut last_match: Option<DateTime<Tz>> = None;
                let mut resolved: Option<DateTime<Tz>> = None;
                while cursor < period_end {
                    if kind.matches(cursor.weekday()) {
                        seen += 1;
                        if seen == nth {
                            // nth >= 1: no need to look past the hit.
                            resolved = Some(cursor);
                            break;
                        }
                        last_match = Some(cursor.clone());
                    }
                    cursor = match cursor.add_units(Unit::Day, 1) {
                        Some(next) => next,
                        None => break,
                    };
                }

                if resolved.is_none() && nth == 0 {
                    resolved = last_match;
                }
                if let Some(candidate) = resolved {
                    found.extend(clock::expand(&candidate, times, accept));
                }
            }
        }
    }
    found
}
