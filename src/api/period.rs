use std::fmt;
use chrono::{ Datelike, Duration, NaiveDate };

/// Calendar range a top-rated query is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Month,
    Week
}

impl Period {
    /// Inclusive first and last day of the period containing `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Period::Month => {
                let first = today.with_day(1).unwrap_or(today);
                (first, last_day_of_month(first))
            }
            Period::Week => {
                let monday = monday_of_week_containing(today);
                (monday, monday + Duration::days(6))
            }
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Month => f.write_str("month"),
            Period::Week => f.write_str("week")
        }
    }
}

/// Weeks run Monday through Sunday, so a Sunday belongs to the week that began six days earlier.
pub fn monday_of_week_containing(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let next_month_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    match next_month_first {
        Some(next) => next - Duration::days(1),
        None => first
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn sunday_belongs_to_the_preceding_monday() {
        // 2024-03-10 is a Sunday
        assert_eq!(monday_of_week_containing(date(2024, 3, 10)), date(2024, 3, 4));
    }

    #[test]
    fn every_day_of_a_week_maps_to_its_monday() {
        for day in 4..=10 {
            assert_eq!(monday_of_week_containing(date(2024, 3, day)), date(2024, 3, 4));
        }
        assert_eq!(monday_of_week_containing(date(2024, 3, 11)), date(2024, 3, 11));
    }

    #[test]
    fn week_can_cross_a_year() {
        // 2025-01-01 is a Wednesday
        assert_eq!(Period::Week.bounds(date(2025, 1, 1)), (date(2024, 12, 30), date(2025, 1, 5)));
    }

    #[test]
    fn month_bounds_cover_the_whole_month() {
        assert_eq!(Period::Month.bounds(date(2024, 2, 17)), (date(2024, 2, 1), date(2024, 2, 29)));
        assert_eq!(Period::Month.bounds(date(2023, 12, 31)), (date(2023, 12, 1), date(2023, 12, 31)));
        assert_eq!(Period::Month.bounds(date(2024, 3, 1)), (date(2024, 3, 1), date(2024, 3, 31)));
    }
}
