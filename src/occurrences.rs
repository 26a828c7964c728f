// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Lazy occurrence stream.
//!
//! [`Occurrences`] walks successive periods of its rule, resolves each
//! period's candidate instants through the day selector and time
//! expander, sorts them, and yields them one at a time through the
//! standard [`Iterator`] protocol.  Nothing is computed between pulls
//! and nothing is materialized beyond the current period's candidates,
//! so abandoning the iterator early costs nothing.
//!
//! The stream is always finite: it ends at the rule's `end` bound, at
//! its `count`, or — for rules that can never match and carry neither
//! bound — at a fixed period-step ceiling of 36 525 steps (a century
//! of day-stepping).  Hitting the ceiling is a designed termination,
//! not an error.

use std::collections::VecDeque;

use chrono::{DateTime, Datelike, TimeZone};

use super::calendar::CalendarOps;
use super::clock;
use super::rule::{Rule, Unit};
use super::select::select;

/// Ceiling on period steps per generation run, so a rule with no
/// reachable match and no `end`/`count` cannot spin forever.
const STEP_CAP: u32 = 36_525;

/// Lazy iterator over a rule's occurrences, in chronological order.
///
/// Created by [`Rule::occurrences`] or [`Rule::occurrences_where`].
/// Each instance owns its whole generation state; it is not
/// restartable, and independent instances (even over the same rule)
/// do not share anything.
pub struct Occurrences<'r, Tz: TimeZone, F> {
    rule: &'r Rule<Tz>,
    accept: F,
    /// Anchor of the period currently under consideration; recomputed
    /// from `rule.start` at every advance so period math cannot drift.
    anchor: DateTime<Tz>,
    /// Sorted candidates of the current period, not yet yielded.
    pending: VecDeque<DateTime<Tz>>,
    step: u32,
    emitted: usize,
    done: bool,
}

impl<'r, Tz, F> Occurrences<'r, Tz, F>
where
    Tz: TimeZone,
    F: Fn(&DateTime<Tz>) -> bool,
{
    pub(crate) fn new(rule: &'r Rule<Tz>, accept: F) -> Self {
        Self {
            rule,
            accept,
            anchor: rule.start.clone(),
            pending: VecDeque::new(),
            step: 0,
            emitted: 0,
            done: false,
        }
    }

    /// Candidate instants of the period anchored at `self.anchor`,
    /// in specifier order (sorted by the caller).
    fn collect_period(&self) -> Vec<DateTime<Tz>> {
        let rule = self.rule;
        let accept = |candidate: &DateTime<Tz>| {
            *candidate >= rule.start && (self.accept)(candidate)
        };

        if rule.unit == Unit::Day {
            return clock::expand(&self.anchor, &rule.times, &accept);
        }

        let mut found = Vec::new();
        if !rule.months.is_empty() {
            // Month fan-out wins over weeks whenever both are present.
            for month in &rule.months {
                if let Some(month_anchor) = self.anchor.with_month_of_year(month.resolve()) {
                    found.extend(select(
                        &month_anchor,
                        Unit::Month,
                        &rule.days,
                        &rule.times,
                        &accept,
                    ));
                }
            }
        } else if !rule.weeks.is_empty() {
            for &week in &rule.weeks {
                let number = if week == 0 { self.anchor.weeks_in_year() } else { week };
                if let Some(week_anchor) = self.anchor.with_week(number) {
                    found.extend(select(
                        &week_anchor,
                        Unit::Week,
                        &rule.days,
                        &rule.times,
                        &accept,
                    ));
                }
            }
        } else {
            found = select(&self.anchor, rule.unit, &rule.days, &rule.times, &accept);
        }
        found
    }
}

impl<Tz, F> Iterator for Occurrences<'_, Tz, F>
where
    Tz: TimeZone,
    F: Fn(&DateTime<Tz>) -> bool,
{
    type Item = DateTime<Tz>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            while let Some(candidate) = self.pending.pop_front() {
                if let Some(end) = &self.rule.end {
                    if candidate > *end {
                        // The stream is ordered, so the first candidate
                        // past `end` ends the whole run, not just this
                        // period.
                        self.done = true;
                        return None;
                    }
                }
                if !self.rule.years.is_empty() && !self.rule.years.contains(&candidate.year()) {
                    continue;
                }
                self.emitted += 1;
                if self.rule.count.is_some_and(|count| self.emitted >= count) {
                    self.done = true;
                }
                return Some(candidate);
            }

            if self.step >= STEP_CAP {
                self.done = true;
                return None;
            }
            self.step += 1;

            let mut found = self.collect_period();
            found.sort();
            self.pending = found.into();

            // Drift-free advance: always measured from the rule's start.
            let offset = i64::from(self.step) * i64::from(self.rule.frequency);
            match self.rule.start.add_units(self.rule.unit, offset) {
                Some(next) => self.anchor = next,
                // Past the calendar's representable range: drain what
                // this period produced, then stop.
                None => self.step = STEP_CAP,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .rule
            .count
            .map(|count| count.saturating_sub(self.emitted));
        (0, remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::{DayKind, DaySpec};
    use chrono::{Timelike, Utc, Weekday};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn daily_rule_steps_one_day_at_a_time() {
        let rule = Rule::starting(at(2024, 1, 1, 9, 0));
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(
            first,
            [at(2024, 1, 1, 9, 0), at(2024, 1, 2, 9, 0), at(2024, 1, 3, 9, 0)]
        );
    }

    #[test]
    fn frequency_multiplies_the_period_step() {
        let rule = Rule::starting(at(2024, 1, 1, 0, 0)).frequency(10);
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(
            first,
            [at(2024, 1, 1, 0, 0), at(2024, 1, 11, 0, 0), at(2024, 1, 21, 0, 0)]
        );
    }

    #[test]
    fn times_are_sorted_within_a_day_regardless_of_input_order() {
        let rule = Rule::starting(at(2024, 1, 1, 0, 0)).times(["12:00", "09:00"]);
        let first: Vec<_> = rule.occurrences().take(4).collect();
        assert_eq!(
            first,
            [
                at(2024, 1, 1, 9, 0),
                at(2024, 1, 1, 12, 0),
                at(2024, 1, 2, 9, 0),
                at(2024, 1, 2, 12, 0),
            ]
        );
    }

    #[test]
    fn start_bound_filters_same_day_times() {
        // 09:00 on the start day is already in the past at 10:00.
        let rule = Rule::starting(at(2024, 1, 1, 10, 0)).times(["09:00", "11:00"]);
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(
            first,
            [at(2024, 1, 1, 11, 0), at(2024, 1, 2, 9, 0), at(2024, 1, 2, 11, 0)]
        );
    }

    #[test]
    fn end_bound_is_inclusive_and_terminates() {
        let rule = Rule::starting(at(2024, 1, 1, 9, 0)).until(at(2024, 1, 3, 9, 0));
        let all: Vec<_> = rule.occurrences().collect();
        assert_eq!(
            all,
            [at(2024, 1, 1, 9, 0), at(2024, 1, 2, 9, 0), at(2024, 1, 3, 9, 0)]
        );
    }

    #[test]
    fn end_before_first_match_yields_empty_stream() {
        let rule = Rule::starting(at(2024, 1, 1, 9, 0))
            .times(["10:00"])
            .until(at(2024, 1, 1, 9, 30));
        assert_eq!(rule.occurrences().count(), 0);
    }

    #[test]
    fn count_caps_the_stream() {
        let rule = Rule::starting(at(2024, 1, 1, 0, 0)).count(5);
        assert_eq!(rule.occurrences().count(), 5);
    }

    #[test]
    fn year_allow_list_skips_without_consuming_count() {
        let rule = Rule::starting(at(2023, 6, 15, 0, 0))
            .unit(Unit::Year)
            .years([2025, 2026])
            .count(2);
        let hits: Vec<_> = rule.occurrences().collect();
        assert_eq!(hits, [at(2025, 6, 15, 0, 0), at(2026, 6, 15, 0, 0)]);
    }

    #[test]
    fn monthly_rule_on_last_day() {
        let rule = Rule::starting(at(2024, 1, 15, 0, 0))
            .unit(Unit::Month)
            .days([0u32]);
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(
            first,
            [at(2024, 1, 31, 0, 0), at(2024, 2, 29, 0, 0), at(2024, 3, 31, 0, 0)]
        );
    }

    #[test]
    fn weekly_rule_picks_the_same_weekday() {
        // Ordinal 2 in a Sunday-first week is Monday; 2024-01-01 is one.
        let rule = Rule::starting(at(2024, 1, 1, 0, 0))
            .unit(Unit::Week)
            .days([2u32]);
        let first: Vec<_> = rule.occurrences().take(3).collect();
        assert_eq!(
            first,
            [at(2024, 1, 1, 0, 0), at(2024, 1, 8, 0, 0), at(2024, 1, 15, 0, 0)]
        );
        assert!(first.iter().all(|d| d.weekday() == Weekday::Mon));
    }

    #[test]
    fn month_fan_out_silently_wins_over_weeks() {
        let base = Rule::starting(at(2024, 1, 1, 0, 0))
            .unit(Unit::Year)
            .months([6])
            .days([DaySpec::Ordinal(1)])
            .count(1);
        let with_weeks = base.clone().weeks([1, 2, 3]);
        let a: Vec<_> = base.occurrences().collect();
        let b: Vec<_> = with_weeks.occurrences().collect();
        assert_eq!(a, b);
        assert_eq!(a, [at(2024, 6, 1, 0, 0)]);
    }

    #[test]
    fn week_fan_out_with_last_week_marker() {
        // Week 2 of 2024 starts Sunday Jan 7; week 0 means the last
        // week, which contains Dec 29 (the year's final Sunday).
        let rule = Rule::starting(at(2024, 1, 1, 0, 0))
            .unit(Unit::Year)
            .weeks([2, 0])
            .days([DaySpec::Ordinal(1)])
            .count(2);
        let hits: Vec<_> = rule.occurrences().collect();
        assert_eq!(hits, [at(2024, 1, 7, 0, 0), at(2024, 12, 29, 0, 0)]);
    }

    #[test]
    fn caller_predicate_composes_with_rule_filters() {
        let rule = Rule::starting(at(2024, 1, 1, 0, 0)).count(3);
        let fridays: Vec<_> = rule
            .occurrences_where(|d| d.weekday() == Weekday::Fri)
            .collect();
        assert_eq!(
            fridays,
            [at(2024, 1, 5, 0, 0), at(2024, 1, 12, 0, 0), at(2024, 1, 19, 0, 0)]
        );
    }

    #[test]
    fn impossible_rule_hits_the_step_ceiling_and_ends() {
        // February never has a 31st day.
        let rule = Rule::starting(at(2024, 1, 1, 0, 0))
            .unit(Unit::Year)
            .months([2])
            .days([31u32]);
        assert_eq!(rule.occurrences().next(), None);
    }

    #[test]
    fn generation_is_idempotent() {
        let rule = Rule::starting(at(2023, 1, 1, 0, 0))
            .unit(Unit::Year)
            .months([11])
            .days([DaySpec::nth(DayKind::On(Weekday::Thu), 4)])
            .times(["17:30"])
            .count(3);
        let first: Vec<_> = rule.occurrences().collect();
        let second: Vec<_> = rule.occurrences().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn occurrences_are_non_decreasing() {
        let rule = Rule::starting(at(2024, 1, 31, 18, 45))
            .unit(Unit::Month)
            .days([DaySpec::Ordinal(0), DaySpec::Ordinal(1)])
            .times(["08:00", "20:00"]);
        let stream: Vec<_> = rule.occurrences().take(40).collect();
        assert!(stream.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(stream.iter().all(|d| *d >= rule.start));
        assert!(stream.iter().all(|d| d.minute() == 0));
    }

    #[test]
    fn size_hint_upper_bound_tracks_count() {
        let rule = Rule::starting(at(2024, 1, 1, 0, 0)).count(4);
        let mut stream = rule.occurrences();
        assert_eq!(stream.size_hint(), (0, Some(4)));
        stream.next();
        assert_eq!(stream.size_hint(), (0, Some(3)));

        let unbounded = Rule::starting(at(2024, 1, 1, 0, 0));
        assert_eq!(unbounded.occurrences().size_hint(), (0, None));
    }
}
