use chrono::{DateTime, Datelike, NaiveDate, Utc};
use core_types::{PeriodRange, PeriodToken};

/// Maps a period token to a concrete, calendar-aligned half-open interval
/// anchored at `now`.
///
/// Boundaries are real calendar boundaries (first of the month, first month
/// of the quarter, January 1st), never fixed-day-count windows. For a given
/// token and instant this is total and deterministic.
pub fn resolve_period(token: PeriodToken, now: DateTime<Utc>) -> PeriodRange {
    let today = now.date_naive();
    let year = today.year();
    let month = today.month();

    match token {
        PeriodToken::CurrentMonth => {
            let start = month_start(year, month);
            PeriodRange {
                label: start.format("%B %Y").to_string(),
                start: at_midnight(start),
                end: at_midnight(next_month(start)),
            }
        }
        PeriodToken::LastMonth => {
            let this_month = month_start(year, month);
            let start = previous_month(this_month);
            PeriodRange {
                label: start.format("%B %Y").to_string(),
                start: at_midnight(start),
                end: at_midnight(this_month),
            }
        }
        PeriodToken::CurrentQuarter => {
            let quarter = (month - 1) / 3; // zero-based
            let start = month_start(year, quarter * 3 + 1);
            let end = next_month(next_month(next_month(start)));
            PeriodRange {
                label: format!("Q{} {}", quarter + 1, year),
                start: at_midnight(start),
                end: at_midnight(end),
            }
        }
        PeriodToken::LastYear => PeriodRange {
            label: (year - 1).to_string(),
            start: at_midnight(month_start(year - 1, 1)),
            end: at_midnight(month_start(year, 1)),
        },
    }
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    // Month is always in 1..=12 here, so the date is always constructible.
    NaiveDate::from_ymd_opt(year, month, 1).expect("first of month is a valid date")
}

fn next_month(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        month_start(date.year() + 1, 1)
    } else {
        month_start(date.year(), date.month() + 1)
    }
}

fn previous_month(date: NaiveDate) -> NaiveDate {
    if date.month() == 1 {
        month_start(date.year() - 1, 12)
    } else {
        month_start(date.year(), date.month() - 1)
    }
}

fn at_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn anchor() -> DateTime<Utc> {
        // A Saturday in late August, inside Q3.
        Utc.with_ymd_and_hms(2026, 8, 29, 15, 42, 7).unwrap()
    }

    #[test]
    fn current_month_is_calendar_aligned() {
        let range = resolve_period(PeriodToken::CurrentMonth, anchor());
        assert_eq!(range.label, "August 2026");
        assert_eq!(range.start, Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap());
        assert!(range.start < range.end);
    }

    #[test]
    fn last_month_handles_january_rollback() {
        let january = Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap();
        let range = resolve_period(PeriodToken::LastMonth, january);
        assert_eq!(range.label, "December 2025");
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn current_quarter_spans_three_months() {
        let range = resolve_period(PeriodToken::CurrentQuarter, anchor());
        assert_eq!(range.label, "Q3 2026");
        assert_eq!(range.start, Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn fourth_quarter_ends_on_new_year() {
        let november = Utc.with_ymd_and_hms(2026, 11, 2, 0, 0, 0).unwrap();
        let range = resolve_period(PeriodToken::CurrentQuarter, november);
        assert_eq!(range.label, "Q4 2026");
        assert_eq!(range.start, Utc.with_ymd_and_hms(2026, 10, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn last_year_is_the_full_previous_calendar_year() {
        let range = resolve_period(PeriodToken::LastYear, anchor());
        assert_eq!(range.label, "2025");
        assert_eq!(range.start, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(range.end, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn adjacent_periods_neither_overlap_nor_gap() {
        let range = resolve_period(PeriodToken::LastMonth, anchor());
        let next = resolve_period(PeriodToken::CurrentMonth, anchor());
        assert_eq!(range.end, next.start);
        assert!(!range.contains(range.end));
        assert!(next.contains(next.start));
    }
}
