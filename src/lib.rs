// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Recurrence Module
//!
//! This crate expands declarative recurrence rules — "the 4th Thursday
//! of November, every year, at 17:30" — into lazy, chronologically
//! ordered streams of `chrono::DateTime` occurrences.  Rules follow a
//! nested-period model (year → month/week → day → time-of-day) rather
//! than the full iCalendar RRULE grammar.
//!
//! # Core types
//!
//! | Type | Role |
//! |------|------|
//! | [`Rule<Tz>`](Rule) | self-contained recurrence rule, bound to its start's timezone |
//! | [`Unit`] | period granularity: day, week, month, year |
//! | [`DaySpec`] | day-of-period selector (raw ordinal or nth-weekday) |
//! | [`DayKind`] | weekday class for nth-weekday selectors |
//! | [`MonthSpec`] | month fan-out entry, by number or name |
//! | [`TimeOfDay`] | `"HH[:MM[:SS]]"` wall-clock time |
//! | [`Occurrences`] | lazy iterator over a rule's occurrences |
//! | [`CalendarOps`] | narrow calendar-arithmetic boundary over `chrono` |
//!
//! # Quick example
//!
//! ```
//! use chrono::{TimeZone, Utc, Weekday};
//! use recurro::{DayKind, DaySpec, Rule, Unit};
//!
//! // Thanksgiving dinner, three years running.
//! let rule = Rule::starting(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
//!     .unit(Unit::Year)
//!     .months([11])
//!     .days([DaySpec::nth(DayKind::On(Weekday::Thu), 4)])
//!     .times(["17:30"])
//!     .count(3);
//!
//! for dinner in rule.occurrences() {
//!     println!("{dinner}");
//! }
//! ```
//!
//! # Semantics in brief
//!
//! Generation walks periods of `frequency × unit` starting at `start`,
//! recomputing every period anchor from `start` itself so the walk
//! cannot drift.  Within a period, `months` (or else `weeks`) fan the
//! anchor out, `days` picks concrete days, `times` expands each day
//! into instants; candidates are sorted and then filtered by the
//! `start`/`end`/`count`/`years` bounds and any caller predicate.
//! Weeks are Sunday-first and week 1 contains January 1.
//!
//! Malformed input degrades silently — an unsatisfiable selector
//! contributes no occurrences, never an error.  A rule with no upper
//! bound and no reachable match terminates at a fixed step ceiling.

mod calendar;
mod clock;
mod occurrences;
mod rule;
mod select;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::CalendarOps;
pub use clock::TimeOfDay;
pub use occurrences::Occurrences;
pub use rule::{DayKind, DaySpec, MonthSpec, Rule, Unit};
