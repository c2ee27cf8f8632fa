use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use datekit::utils::datetime::*;
use datekit::{DateError, FixedClock, Instant};

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> Instant {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(hh, mm, ss).unwrap()
}

fn midnight(y: i32, m: u32, d: u32) -> Instant {
    at(y, m, d, 0, 0, 0)
}

#[test]
fn test_format_date_ymd() {
    assert_eq!(format_date(midnight(2024, 3, 5), "YYYY-MM-DD"), "2024-03-05");
}

#[test]
fn test_format_date_all_tokens() {
    let instant = at(2024, 3, 5, 14, 7, 9);
    assert_eq!(format_date(instant, "YYYY-MM-DD HH:mm:ss"), "2024-03-05 14:07:09");
    assert_eq!(format_date(instant, "DD/MM/YYYY at HH:mm"), "05/03/2024 at 14:07");
}

#[test]
fn test_format_date_without_tokens() {
    let instant = at(2024, 3, 5, 14, 7, 9);
    assert_eq!(format_date(instant, "no tokens here"), "no tokens here");
    assert_eq!(format_date(instant, ""), "");
}

#[test]
fn test_format_date_only_first_occurrence() {
    let instant = midnight(2024, 3, 5);
    assert_eq!(format_date(instant, "YYYY/YYYY"), "2024/YYYY");
    assert_eq!(format_date(instant, "DD DD"), "05 DD");
}

#[test]
fn test_format_date_pads_small_years() {
    assert_eq!(format_date(midnight(987, 1, 2), "YYYY-MM-DD"), "0987-01-02");
}

#[test]
fn test_parse_date() {
    let instant = parse_date("2024-03-05").unwrap();
    assert_eq!(instant.year(), 2024);
    assert_eq!(instant.month(), 3);
    assert_eq!(instant.day(), 5);
    assert_eq!((instant.hour(), instant.minute(), instant.second()), (0, 0, 0));
}

#[test]
fn test_parse_date_wrong_shape() {
    assert_eq!(
        parse_date("2024/03/05"),
        Err(DateError::InvalidFormat("2024/03/05".to_string()))
    );
    assert!(matches!(parse_date(""), Err(DateError::InvalidFormat(_))));
    assert!(matches!(parse_date("2024-03-05-01"), Err(DateError::InvalidFormat(_))));
}

#[test]
fn test_parse_date_non_numeric_part() {
    assert_eq!(
        parse_date("2024-xx-05"),
        Err(DateError::InvalidComponent {
            part: "month",
            value: "xx".to_string()
        })
    );
    assert!(matches!(parse_date("2024-03-"), Err(DateError::InvalidComponent { part: "day", .. })));
}

#[test]
fn test_parse_date_rolls_over_overflowing_fields() {
    assert_eq!(parse_date("2023-02-29").unwrap(), midnight(2023, 3, 1));
    assert_eq!(parse_date("2024-02-29").unwrap(), midnight(2024, 2, 29));
    assert_eq!(parse_date("2024-13-01").unwrap(), midnight(2025, 1, 1));
    assert_eq!(parse_date("2024-01-32").unwrap(), midnight(2024, 2, 1));
}

#[test]
fn test_parse_date_zero_month_and_day() {
    // day 0 is the last day of the previous month, month 0 is December
    assert_eq!(parse_date("2024-03-00").unwrap(), midnight(2024, 2, 29));
    assert_eq!(parse_date("2024-00-15").unwrap(), midnight(2023, 12, 15));
    assert_eq!(parse_date("2024-01-00").unwrap(), midnight(2023, 12, 31));
}

#[test]
fn test_parse_date_outside_calendar_range() {
    assert_eq!(
        parse_date("999999-01-01"),
        Err(DateError::OutOfRange("999999-01-01".to_string()))
    );
    assert!(matches!(parse_date("2024-01-99999999999"), Err(DateError::OutOfRange(_))));
    assert!(matches!(
        parse_date("2024-9223372036854775807-01"),
        Err(DateError::OutOfRange(_))
    ));
    assert!(matches!(
        parse_date("9223372036854775807-01-01"),
        Err(DateError::OutOfRange(_))
    ));
}

#[test]
fn test_parse_date_time() {
    assert_eq!(parse_date_time("2024-03-05 14:07:09").unwrap(), at(2024, 3, 5, 14, 7, 9));
    assert_eq!(parse_date_time("2024-03-05T14:07:09").unwrap(), at(2024, 3, 5, 14, 7, 9));
    assert_eq!(parse_date_time("2024-03-05").unwrap(), midnight(2024, 3, 5));
    assert!(parse_date_time("yesterday").is_err());
}

#[test]
fn test_format_parse_is_stable() {
    for instant in [midnight(2024, 3, 5), midnight(1999, 12, 31), midnight(2000, 2, 29)] {
        let once = format_date(instant, "YYYY-MM-DD");
        let twice = format_date(parse_date(&once).unwrap(), "YYYY-MM-DD");
        assert_eq!(once, twice);
    }
}

#[test]
fn test_add_days_leap_rollover() {
    let next = add_days(parse_date("2024-02-28").unwrap(), 1).unwrap();
    assert_eq!(next, midnight(2024, 2, 29));
}

#[test]
fn test_add_days_non_leap_rollover() {
    let next = add_days(parse_date("2023-02-28").unwrap(), 1).unwrap();
    assert_eq!(next, midnight(2023, 3, 1));
}

#[test]
fn test_add_days_negative_and_year_boundary() {
    assert_eq!(add_days(midnight(2024, 3, 1), -1).unwrap(), midnight(2024, 2, 29));
    assert_eq!(add_days(midnight(2023, 12, 31), 1).unwrap(), midnight(2024, 1, 1));
    assert_eq!(add_days(midnight(2024, 1, 1), -366).unwrap(), midnight(2022, 12, 31));
}

#[test]
fn test_add_days_out_of_range() {
    let instant = midnight(2024, 1, 1);
    assert!(matches!(add_days(instant, 100_000_000), Err(DateError::OutOfRange(_))));
    assert!(matches!(add_days(instant, -100_000_000), Err(DateError::OutOfRange(_))));
    assert!(matches!(add_days(instant, i64::MAX), Err(DateError::OutOfRange(_))));
    assert!(matches!(add_days(instant, i64::MIN), Err(DateError::OutOfRange(_))));
}

#[test]
fn test_add_days_to_calendar_edges() {
    let last = NaiveDate::MAX.and_hms_opt(0, 0, 0).unwrap();
    assert!(add_days(last, 1).is_err());
    assert_eq!(add_days(last, -1).unwrap().date(), NaiveDate::MAX.pred_opt().unwrap());
    assert!(add_days(NaiveDate::MIN.and_hms_opt(0, 0, 0).unwrap(), -1).is_err());
}

#[test]
fn test_add_days_keeps_time_of_day() {
    assert_eq!(add_days(at(2024, 3, 5, 23, 59, 30), 10).unwrap(), at(2024, 3, 15, 23, 59, 30));
}

#[test]
fn test_is_today_at() {
    let now = at(2024, 3, 5, 12, 0, 0);
    assert!(is_today_at(now, now));
    assert!(is_today_at(midnight(2024, 3, 5), now));
    assert!(is_today_at(at(2024, 3, 5, 23, 59, 59), now));
    assert!(!is_today_at(add_days(now, -2).unwrap(), now));
    assert!(!is_today_at(at(2023, 3, 5, 12, 0, 0), now));
}

#[test]
fn test_is_today_with_clock() {
    let clock = FixedClock::new(at(2024, 3, 5, 8, 30, 0));
    assert!(is_today_with(midnight(2024, 3, 5), &clock));
    assert!(!is_today_with(midnight(2024, 3, 6), &clock));
}

#[test]
fn test_is_today_system_clock() {
    let now: NaiveDateTime = chrono::Local::now().naive_local();
    assert!(is_today(now));
    assert!(!is_today(add_days(now, -2).unwrap()));
}

#[test]
fn test_day_of_year() {
    assert_eq!(day_of_year(parse_date("2024-01-01").unwrap()), 1);
    assert_eq!(day_of_year(midnight(2024, 3, 1)), 61);
    assert_eq!(day_of_year(midnight(2023, 3, 1)), 60);
    assert_eq!(day_of_year(midnight(2024, 12, 31)), 366);
    assert_eq!(day_of_year(at(2023, 12, 31, 23, 59, 59)), 365);
}

#[test]
fn test_week_number() {
    // 2024-01-01 is a Monday
    assert_eq!(midnight(2024, 1, 1).weekday(), Weekday::Mon);
    assert_eq!(week_number(midnight(2024, 1, 1)), 1);
    assert_eq!(week_number(midnight(2024, 1, 5)), 1);
    assert_eq!(week_number(midnight(2024, 1, 6)), 2);
    assert_eq!(week_number(midnight(2024, 12, 31)), 53);
}

#[test]
fn test_week_number_saturday_new_year() {
    // 2022-01-01 is a Saturday, so the formula already places it in week 2
    assert_eq!(midnight(2022, 1, 1).weekday(), Weekday::Sat);
    assert_eq!(week_number(midnight(2022, 1, 1)), 2);
}

#[test]
fn test_week_number_sunday_new_year() {
    // 2023-01-01 is a Sunday
    assert_eq!(week_number(midnight(2023, 1, 1)), 1);
    assert_eq!(week_number(midnight(2023, 1, 6)), 1);
    assert_eq!(week_number(midnight(2023, 1, 7)), 2);
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2, 2024), 29);
    assert_eq!(days_in_month(2, 2023), 28);
    assert_eq!(days_in_month(2, 1900), 28);
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(1, 2023), 31);
    assert_eq!(days_in_month(4, 2023), 30);
    assert_eq!(days_in_month(12, 2023), 31);
}

#[test]
fn test_days_in_month_rollover() {
    // month 0 is December of the previous year, 14 is February of the next
    assert_eq!(days_in_month(0, 2024), 31);
    assert_eq!(days_in_month(14, 2023), 29);
}

#[test]
fn test_describe() {
    let now = at(2024, 3, 7, 10, 0, 0);
    let info = describe(midnight(2024, 3, 5), "YYYY-MM-DD", now);
    assert_eq!(info.formatted, "2024-03-05");
    assert_eq!(info.day_of_year, 65);
    assert_eq!(info.days_in_month, 31);
    assert!(!info.is_today);
    assert_eq!(info.relative, "2 days ago");
}
