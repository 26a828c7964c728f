use chrono::{TimeZone, Utc, Weekday};
use recurro::{DayKind, DaySpec, Rule, Unit};

fn main() {
    // Thanksgiving dinner: the 4th Thursday of November, 17:30.
    let rule = Rule::starting(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
        .unit(Unit::Year)
        .months([11])
        .days([DaySpec::nth(DayKind::On(Weekday::Thu), 4)])
        .times(["17:30"]);

    for dinner in rule.occurrences().take(10) {
        println!("{}", dinner.to_rfc3339());
    }
}
