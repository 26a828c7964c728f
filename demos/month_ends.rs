use chrono::{Datelike, TimeZone, Utc, Weekday};
use chrono_tz::Europe::Madrid;
use recurro::{DayKind, DaySpec, Rule, Unit};

fn main() {
    // Every month's final calendar day, at noon UTC.
    let closings = Rule::starting(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .unit(Unit::Month)
        .days([0u32])
        .times(["12:00"])
        .count(6);

    println!("UTC month closings:");
    for closing in closings.occurrences() {
        println!("  {closing}");
    }

    // Last Friday of each month in a named zone, skipping August.
    let reviews = Rule::starting(Madrid.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        .unit(Unit::Month)
        .days([DaySpec::last(DayKind::On(Weekday::Fri))])
        .times(["16:00"])
        .count(6);

    println!("Madrid month-end reviews (none in August):");
    for review in reviews.occurrences_where(|d| d.month() != 8) {
        println!("  {review}");
    }
}
