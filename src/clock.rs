// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day expansion.
//!
//! A rule's `times` list fans one candidate day out into one instant
//! per wall-clock time.  [`TimeOfDay`] is the parsed form of a
//! `"HH[:MM[:SS]]"` string; parsing never fails — a missing or
//! non-numeric component reads as 0, because a rule with a garbled
//! time is still a rule, it just names midnight.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::calendar::CalendarOps;

/// A wall-clock time of day, second precision.
///
/// Values are stored as given; an out-of-range field (hour 24 and up)
/// simply never lands on a real instant, so the candidate it would
/// have produced is dropped during expansion.
///
/// # Examples
///
/// ```
/// use recurro::TimeOfDay;
///
/// assert_eq!(TimeOfDay::parse("17:30"), TimeOfDay::new(17, 30, 0));
/// assert_eq!(TimeOfDay::parse("7"), TimeOfDay::new(7, 0, 0));
/// assert_eq!(TimeOfDay::parse("bogus"), TimeOfDay::MIDNIGHT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeOfDay {
    /// 00:00:00.
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0 };

    /// Build from explicit fields.
    #[inline]
    pub const fn new(hour: u32, minute: u32, second: u32) -> Self {
        Self { hour, minute, second }
    }

    /// Parse `"HH[:MM[:SS]]"`.
    ///
    /// Only the first three `:`-separated components are considered;
    /// each missing or unparseable component defaults to 0.
    pub fn parse(text: &str) -> Self {
        let mut parts = text.splitn(3, ':');
        let mut field = || {
            parts
                .next()
                .and_then(|part| part.trim().parse().ok())
                .unwrap_or(0)
        };
        Self {
            hour: field(),
            minute: field(),
            second: field(),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl From<&str> for TimeOfDay {
    #[inline]
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl FromStr for TimeOfDay {
    type Err = Infallible;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(text))
    }
}

#[cfg(feature = "serde")]
impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        Ok(Self::parse(&text))
    }
}

/// Expand one candidate day into the instants named by `times`.
///
/// With an empty `times` list the day itself is the single candidate,
/// kept at its current clock time.  Otherwise each time yields one
/// rebound instant, in input order; sorting across days happens at the
/// generator level.  Every produced instant must pass `accept`, which
/// carries at least the rule's "not before start" bound.
pub(crate) fn expand<Tz, F>(
    anchor: &DateTime<Tz>,
    times: &[TimeOfDay],
    accept: &F,
) -> Vec<DateTime<Tz>>
where
    Tz: TimeZone,
    F: Fn(&DateTime<Tz>) -> bool,
{
    if times.is_empty() {
        return if accept(anchor) {
            vec![anchor.clone()]
        } else {
            Vec::new()
        };
    }

    let mut out = Vec::with_capacity(times.len());
    for time in times {
        if let Some(instant) = anchor.with_clock(*time) {
            if accept(&instant) {
                out.push(instant);
            }
        }
    }
    out
}
