// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Recurrence rule model.
//!
//! # Core types
//!
//! - [`Rule<Tz>`] — the self-contained, immutable rule: period unit,
//!   frequency, day/time/week/month/year selectors, start, and the
//!   optional end/count bounds.
//! - [`Unit`] — the recurrence granularity (day, week, month, year).
//! - [`DaySpec`] — which day(s) inside a period qualify.
//! - [`DayKind`] — the weekday class a [`DaySpec::Nth`] matches.
//! - [`MonthSpec`] — a month by number or by name.
//!
//! The rule is plain data: the caller builds it once, then pulls
//! occurrences from [`Rule::occurrences`].  Nothing validates the rule
//! beyond defensive normalization (zero frequency becomes 1, zero
//! count means unbounded); a rule that can never match simply produces
//! an empty stream.
//!
//! # Wire format
//!
//! With the `serde` feature the selector vocabulary keeps its
//! historical JSON shape: a bare integer is an ordinal day specifier,
//! `{"type": ..., "value": ...}` is an nth-weekday one, months are
//! numbers (0 meaning December) or names, units are lowercase strings.

use chrono::{DateTime, Month, TimeZone, Weekday};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{
    de::{self, MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use super::clock::TimeOfDay;
use super::occurrences::Occurrences;

// ═══════════════════════════════════════════════════════════════════════════
// Unit
// ═══════════════════════════════════════════════════════════════════════════

/// Recurrence granularity: the period that `frequency` steps by and
/// inside which day specifiers are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Unit {
    /// Calendar day.
    #[default]
    Day,
    /// Sunday-first calendar week.
    Week,
    /// Calendar month.
    Month,
    /// Calendar year.
    Year,
}

impl Unit {
    /// Lowercase name, as used by the wire format.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Day specifiers
// ═══════════════════════════════════════════════════════════════════════════

/// The weekday class matched by [`DaySpec::Nth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    WeekendDay,
    /// Exactly the given weekday.
    On(Weekday),
}

impl DayKind {
    /// Does `weekday` belong to this class?
    #[inline]
    pub fn matches(self, weekday: Weekday) -> bool {
        match self {
            DayKind::Weekday => !matches!(weekday, Weekday::Sat | Weekday::Sun),
            DayKind::WeekendDay => matches!(weekday, Weekday::Sat | Weekday::Sun),
            DayKind::On(day) => day == weekday,
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayKind::Weekday => f.write_str("weekday"),
            DayKind::WeekendDay => f.write_str("weekendDay"),
            DayKind::On(day) => f.write_str(weekday_name(*day)),
        }
    }
}

/// Selects which day(s) within a period qualify.
///
/// Both variants use `0` as "the last one": `Ordinal(0)` is the final
/// day unit of the period, `Nth { nth: 0, .. }` is the last day in the
/// period matching the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySpec {
    /// The n-th day of the period by raw ordinal: day-of-week 1–7
    /// (Sunday-first) inside a week, day-of-month inside a month,
    /// day-of-year otherwise.
    Ordinal(u32),
    /// The nth day of the period whose weekday matches `kind`,
    /// counting forward from the period's first day.
    Nth {
        /// Weekday class to match.
        kind: DayKind,
        /// 1-based match index; 0 selects the last match.
        nth: u32,
    },
}

impl DaySpec {
    /// The nth day of the period matching `kind` (`nth == 0` ⇒ last).
    #[inline]
    pub const fn nth(kind: DayKind, nth: u32) -> Self {
        DaySpec::Nth { kind, nth }
    }

    /// The last day of the period matching `kind`.
    #[inline]
    pub const fn last(kind: DayKind) -> Self {
        DaySpec::Nth { kind, nth: 0 }
    }
}

impl From<u32> for DaySpec {
    #[inline]
    fn from(ordinal: u32) -> Self {
        DaySpec::Ordinal(ordinal)
    }
}

impl From<Weekday> for DayKind {
    #[inline]
    fn from(weekday: Weekday) -> Self {
        DayKind::On(weekday)
    }
}

/// Full weekday name, for display and the wire format.
pub(crate) fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday from a Sunday-first 1–7 number.
pub(crate) fn weekday_from_sunday_number(number: u32) -> Option<Weekday> {
    match number {
        1 => Some(Weekday::Sun),
        2 => Some(Weekday::Mon),
        3 => Some(Weekday::Tue),
        4 => Some(Weekday::Wed),
        5 => Some(Weekday::Thu),
        6 => Some(Weekday::Fri),
        7 => Some(Weekday::Sat),
        _ => None,
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Month specifiers
// ═══════════════════════════════════════════════════════════════════════════

/// A month named by number (1–12, with 0 standing in for December) or
/// by calendar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MonthSpec {
    /// Month number; 0 resolves to December.
    Number(u32),
    /// Month by name.
    Named(Month),
}

impl MonthSpec {
    /// The 1–12 month number this specifier stands for.
    ///
    /// Out-of-range numbers pass through unchanged and fail later at
    /// the calendar boundary, contributing no occurrences.
    pub fn resolve(self) -> u32 {
        match self {
            MonthSpec::Number(0) => 12,
            MonthSpec::Number(number) => number,
            MonthSpec::Named(month) => month.number_from_month(),
        }
    }
}

impl From<u32> for MonthSpec {
    #[inline]
    fn from(number: u32) -> Self {
        MonthSpec::Number(number)
    }
}

impl From<Month> for MonthSpec {
    #[inline]
    fn from(month: Month) -> Self {
        MonthSpec::Named(month)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Rule
// ═══════════════════════════════════════════════════════════════════════════

/// A self-contained recurrence rule, bound to the timezone of its
/// `start` instant.
///
/// All selector fields are public plain data; [`Rule::starting`] plus
/// the chainable setters cover the common construction path.
///
/// # Examples
///
/// Thanksgiving dinner — the 4th Thursday of November at 17:30, three
/// years running:
///
/// ```
/// use chrono::{TimeZone, Utc, Weekday};
/// use recurro::{DayKind, DaySpec, Rule, Unit};
///
/// let rule = Rule::starting(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
///     .unit(Unit::Year)
///     .months([11])
///     .days([DaySpec::nth(DayKind::On(Weekday::Thu), 4)])
///     .times(["17:30"])
///     .count(3);
///
/// let dinners: Vec<_> = rule.occurrences().collect();
/// assert_eq!(dinners.len(), 3);
/// assert_eq!(dinners[0], Utc.with_ymd_and_hms(2023, 11, 23, 17, 30, 0).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<Tz: TimeZone> {
    /// Period granularity. Default [`Unit::Day`].
    pub unit: Unit,
    /// Step multiplier in units of `unit`, at least 1.
    pub frequency: u32,
    /// Times of day to expand each candidate day into; empty means
    /// "the day itself, at the anchor's own clock time".
    pub times: Vec<TimeOfDay>,
    /// Day selectors; empty means "the period anchor directly".
    pub days: Vec<DaySpec>,
    /// Week-of-year fan-out (1–53, 0 ⇒ the year's last week).
    /// Consulted only when `unit ≠ Day` and `months` is empty.
    pub weeks: Vec<u32>,
    /// Month fan-out; consulted only when `unit ≠ Day`, and it wins
    /// over `weeks` when both are present.
    pub months: Vec<MonthSpec>,
    /// Calendar-year allow-list; empty means unrestricted.
    pub years: Vec<i32>,
    /// Inclusive lower bound and generation origin.
    pub start: DateTime<Tz>,
    /// Inclusive upper bound; the first candidate beyond it ends the
    /// stream.
    pub end: Option<DateTime<Tz>>,
    /// Maximum number of occurrences to emit.
    pub count: Option<usize>,
}

impl<Tz: TimeZone> Rule<Tz> {
    /// A daily rule starting (and bounded below) at `start`, with no
    /// selectors and no upper bounds.
    pub fn starting(start: DateTime<Tz>) -> Self {
        Self {
            unit: Unit::Day,
            frequency: 1,
            times: Vec::new(),
            days: Vec::new(),
            weeks: Vec::new(),
            months: Vec::new(),
            years: Vec::new(),
            start,
            end: None,
            count: None,
        }
    }

    /// Set the period unit.
    #[must_use]
    pub fn unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Set the step multiplier; 0 is raised to 1.
    #[must_use]
    pub fn frequency(mut self, frequency: u32) -> Self {
        self.frequency = frequency.max(1);
        self
    }

    /// Set the time-of-day list from anything time-like
    /// (`"HH[:MM[:SS]]"` strings or [`TimeOfDay`] values).
    #[must_use]
    pub fn times<I>(mut self, times: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TimeOfDay>,
    {
        self.times = times.into_iter().map(Into::into).collect();
        self
    }

    /// Set the day selectors (bare ordinals or [`DaySpec`] values).
    #[must_use]
    pub fn days<I>(mut self, days: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<DaySpec>,
    {
        self.days = days.into_iter().map(Into::into).collect();
        self
    }

    /// Set the week-of-year fan-out list.
    #[must_use]
    pub fn weeks<I: IntoIterator<Item = u32>>(mut self, weeks: I) -> Self {
        self.weeks = weeks.into_iter().collect();
        self
    }

    /// Set the month fan-out list (numbers or [`chrono::Month`]s).
    #[must_use]
    pub fn months<I>(mut self, months: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<MonthSpec>,
    {
        self.months = months.into_iter().map(Into::into).collect();
        self
    }

    /// Set the calendar-year allow-list.
    #[must_use]
    pub fn years<I: IntoIterator<Item = i32>>(mut self, years: I) -> Self {
        self.years = years.into_iter().collect();
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub fn until(mut self, end: DateTime<Tz>) -> Self {
        self.end = Some(end);
        self
    }

    /// Cap the number of occurrences; 0 means unbounded.
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = if count == 0 { None } else { Some(count) };
        self
    }

    /// Lazily iterate the rule's occurrences in chronological order.
    pub fn occurrences(&self) -> Occurrences<'_, Tz, fn(&DateTime<Tz>) -> bool> {
        Occurrences::new(self, accept_all::<Tz> as fn(&DateTime<Tz>) -> bool)
    }

    /// Like [`Rule::occurrences`], with an extra caller-supplied
    /// acceptance predicate AND-ed onto the rule's own filters.
    ///
    /// A predicate that panics does so at the pull that invoked it;
    /// the engine does not catch it.
    pub fn occurrences_where<F>(&self, accept: F) -> Occurrences<'_, Tz, F>
    where
        F: Fn(&DateTime<Tz>) -> bool,
    {
        Occurrences::new(self, accept)
    }
}

fn accept_all<Tz: TimeZone>(_: &DateTime<Tz>) -> bool {
    true
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde — historical wire format
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        match text.as_str() {
            "day" => Ok(Unit::Day),
            "week" => Ok(Unit::Week),
            "month" => Ok(Unit::Month),
            "year" => Ok(Unit::Year),
            other => Err(de::Error::unknown_variant(
                other,
                &["day", "week", "month", "year"],
            )),
        }
    }
}

#[cfg(feature = "serde")]
impl Serialize for DaySpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        match self {
            DaySpec::Ordinal(ordinal) => serializer.serialize_u32(*ordinal),
            DaySpec::Nth { kind, nth } => {
                let mut s = serializer.serialize_struct("DaySpec", 2)?;
                s.serialize_field("type", &kind.to_string())?;
                s.serialize_field("value", nth)?;
                s.end()
            }
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DaySpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DaySpecVisitor;

        impl<'de> Visitor<'de> for DaySpecVisitor {
            type Value = DaySpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an ordinal day number or a {type, value} map")
            }

            fn visit_u64<E: de::Error>(self, ordinal: u64) -> Result<DaySpec, E> {
                let ordinal = u32::try_from(ordinal)
                    .map_err(|_| E::custom("day ordinal out of range"))?;
                Ok(DaySpec::Ordinal(ordinal))
            }

            fn visit_i64<E: de::Error>(self, ordinal: i64) -> Result<DaySpec, E> {
                let ordinal = u32::try_from(ordinal)
                    .map_err(|_| E::custom("day ordinal out of range"))?;
                Ok(DaySpec::Ordinal(ordinal))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<DaySpec, A::Error> {
                let mut kind: Option<SpecKind> = None;
                let mut value: Option<u32> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "type" => kind = Some(map.next_value()?),
                        "value" => value = Some(map.next_value()?),
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                let kind = kind.ok_or_else(|| de::Error::missing_field("type"))?;
                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                Ok(match kind {
                    SpecKind::Number => DaySpec::Ordinal(value),
                    SpecKind::Class(kind) => DaySpec::Nth { kind, nth: value },
                })
            }
        }

        deserializer.deserialize_any(DaySpecVisitor)
    }
}

/// Target for the `"type"` field of a day-specifier map: the literal
/// `"number"`, a class keyword, a weekday name, or a Sunday-first
/// weekday number.
#[cfg(feature = "serde")]
enum SpecKind {
    Number,
    Class(DayKind),
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SpecKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KindVisitor;

        impl Visitor<'_> for KindVisitor {
            type Value = SpecKind;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("`number`, a day class, a weekday name, or a weekday number 1-7")
            }

            fn visit_u64<E: de::Error>(self, number: u64) -> Result<SpecKind, E> {
                u32::try_from(number)
                    .ok()
                    .and_then(weekday_from_sunday_number)
                    .map(|day| SpecKind::Class(DayKind::On(day)))
                    .ok_or_else(|| E::custom("weekday number must be 1-7 (Sunday-first)"))
            }

            fn visit_str<E: de::Error>(self, text: &str) -> Result<SpecKind, E> {
                match text {
                    "number" => Ok(SpecKind::Number),
                    "weekday" => Ok(SpecKind::Class(DayKind::Weekday)),
                    "weekendDay" | "weekend_day" => Ok(SpecKind::Class(DayKind::WeekendDay)),
                    name => name
                        .parse::<Weekday>()
                        .map(|day| SpecKind::Class(DayKind::On(day)))
                        .map_err(|_| E::custom(format!("unknown day class `{name}`"))),
                }
            }
        }

        deserializer.deserialize_any(KindVisitor)
    }
}

#[cfg(feature = "serde")]
impl Serialize for MonthSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            MonthSpec::Number(number) => serializer.serialize_u32(*number),
            MonthSpec::Named(month) => serializer.serialize_str(month.name()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for MonthSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MonthVisitor;

        impl Visitor<'_> for MonthVisitor {
            type Value = MonthSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a month number or a month name")
            }

            fn visit_u64<E: de::Error>(self, number: u64) -> Result<MonthSpec, E> {
                u32::try_from(number)
                    .map(MonthSpec::Number)
                    .map_err(|_| E::custom("month number out of range"))
            }

            fn visit_i64<E: de::Error>(self, number: i64) -> Result<MonthSpec, E> {
                u32::try_from(number)
                    .map(MonthSpec::Number)
                    .map_err(|_| E::custom("month number out of range"))
            }

            fn visit_str<E: de::Error>(self, name: &str) -> Result<MonthSpec, E> {
                name.parse::<Month>()
                    .map(MonthSpec::Named)
                    .map_err(|_| E::custom(format!("unknown month name `{name}`")))
            }
        }

        deserializer.deserialize_any(MonthVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn day_kind_matches_classes() {
        assert!(DayKind::Weekday.matches(Weekday::Mon));
        assert!(DayKind::Weekday.matches(Weekday::Fri));
        assert!(!DayKind::Weekday.matches(Weekday::Sat));
        assert!(DayKind::WeekendDay.matches(Weekday::Sun));
        assert!(!DayKind::WeekendDay.matches(Weekday::Wed));
        assert!(DayKind::On(Weekday::Thu).matches(Weekday::Thu));
        assert!(!DayKind::On(Weekday::Thu).matches(Weekday::Fri));
    }

    #[test]
    fn month_spec_resolution() {
        assert_eq!(MonthSpec::Number(0).resolve(), 12);
        assert_eq!(MonthSpec::Number(7).resolve(), 7);
        assert_eq!(MonthSpec::Named(Month::November).resolve(), 11);
    }

    #[test]
    fn sunday_first_weekday_numbers() {
        assert_eq!(weekday_from_sunday_number(1), Some(Weekday::Sun));
        assert_eq!(weekday_from_sunday_number(5), Some(Weekday::Thu));
        assert_eq!(weekday_from_sunday_number(7), Some(Weekday::Sat));
        assert_eq!(weekday_from_sunday_number(0), None);
        assert_eq!(weekday_from_sunday_number(8), None);
    }

    #[test]
    fn builder_normalizes_degenerate_bounds() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rule = Rule::starting(start).frequency(0).count(0);
        assert_eq!(rule.frequency, 1);
        assert_eq!(rule.count, None);
    }

    #[test]
    fn builder_collects_mixed_inputs() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let rule = Rule::starting(start)
            .unit(Unit::Month)
            .times(["09:00", "17:30"])
            .days([0u32, 15])
            .months([Month::June, Month::December])
            .years([2024, 2025]);
        assert_eq!(rule.times[1], TimeOfDay::new(17, 30, 0));
        assert_eq!(rule.days, vec![DaySpec::Ordinal(0), DaySpec::Ordinal(15)]);
        assert_eq!(rule.months[0].resolve(), 6);
        assert_eq!(rule.years, vec![2024, 2025]);
    }

    #[cfg(feature = "serde")]
    mod wire {
        use super::*;

        #[test]
        fn unit_round_trips_as_lowercase_string() {
            assert_eq!(serde_json::to_string(&Unit::Month).unwrap(), "\"month\"");
            let unit: Unit = serde_json::from_str("\"week\"").unwrap();
            assert_eq!(unit, Unit::Week);
            assert!(serde_json::from_str::<Unit>("\"fortnight\"").is_err());
        }

        #[test]
        fn bare_integer_is_an_ordinal_day() {
            let spec: DaySpec = serde_json::from_str("0").unwrap();
            assert_eq!(spec, DaySpec::Ordinal(0));
            let spec: DaySpec = serde_json::from_str("31").unwrap();
            assert_eq!(spec, DaySpec::Ordinal(31));
        }

        #[test]
        fn explicit_number_map_is_an_ordinal_day() {
            let spec: DaySpec = serde_json::from_str(r#"{"type": "number", "value": 31}"#).unwrap();
            assert_eq!(spec, DaySpec::Ordinal(31));
        }

        #[test]
        fn named_day_map_forms() {
            let spec: DaySpec =
                serde_json::from_str(r#"{"type": "Thursday", "value": 4}"#).unwrap();
            assert_eq!(spec, DaySpec::nth(DayKind::On(Weekday::Thu), 4));

            let spec: DaySpec = serde_json::from_str(r#"{"type": "weekday", "value": 1}"#).unwrap();
            assert_eq!(spec, DaySpec::nth(DayKind::Weekday, 1));

            // Both historical spellings of the weekend class parse.
            let a: DaySpec =
                serde_json::from_str(r#"{"type": "weekendDay", "value": 0}"#).unwrap();
            let b: DaySpec =
                serde_json::from_str(r#"{"type": "weekend_day", "value": 0}"#).unwrap();
            assert_eq!(a, DaySpec::last(DayKind::WeekendDay));
            assert_eq!(a, b);

            // Sunday-first weekday number: 5 is Thursday.
            let spec: DaySpec = serde_json::from_str(r#"{"type": 5, "value": 2}"#).unwrap();
            assert_eq!(spec, DaySpec::nth(DayKind::On(Weekday::Thu), 2));
        }

        #[test]
        fn day_spec_serializes_back_to_wire_shape() {
            let json = serde_json::to_string(&DaySpec::nth(DayKind::On(Weekday::Thu), 4)).unwrap();
            assert_eq!(json, r#"{"type":"Thursday","value":4}"#);
            assert_eq!(serde_json::to_string(&DaySpec::Ordinal(15)).unwrap(), "15");
        }

        #[test]
        fn month_spec_accepts_numbers_and_names() {
            let m: MonthSpec = serde_json::from_str("11").unwrap();
            assert_eq!(m, MonthSpec::Number(11));
            let m: MonthSpec = serde_json::from_str("\"November\"").unwrap();
            assert_eq!(m, MonthSpec::Named(Month::November));
            assert!(serde_json::from_str::<MonthSpec>("\"Smarch\"").is_err());
        }

        #[test]
        fn time_of_day_round_trips_as_string() {
            let t: TimeOfDay = serde_json::from_str("\"17:30\"").unwrap();
            assert_eq!(t, TimeOfDay::new(17, 30, 0));
            assert_eq!(serde_json::to_string(&t).unwrap(), "\"17:30:00\"");
        }
    }
}
