/// PHP `date()`-style format rendering over chrono.
///
/// The public wire contract inherits PHP date templates (`"F j, Y"` and
/// friends) from the original content platform, so the `format` request
/// parameter is interpreted with PHP token semantics rather than strftime.
/// Unrecognized characters pass through verbatim; a backslash escapes the
/// next character. Month and weekday names are English.
use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English ordinal suffix for a day of month (1st, 2nd, 3rd, 4th, 11th...)
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid first of next month");
    next.signed_duration_since(first).num_days() as u32
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Render `dt` using a PHP `date()` format template.
pub fn format_php<Tz>(format: &str, dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    let offset_secs = dt.offset().fix().local_minus_utc();
    let (hour12_pm, hour12) = dt.hour12();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }

            // Day
            'd' => out.push_str(&format!("{:02}", dt.day())),
            'j' => out.push_str(&dt.day().to_string()),
            'D' => out.push_str(&WEEKDAYS[dt.weekday().num_days_from_monday() as usize][..3]),
            'l' => out.push_str(WEEKDAYS[dt.weekday().num_days_from_monday() as usize]),
            'N' => out.push_str(&dt.weekday().number_from_monday().to_string()),
            'S' => out.push_str(ordinal_suffix(dt.day())),
            'w' => out.push_str(&dt.weekday().num_days_from_sunday().to_string()),
            'z' => out.push_str(&dt.ordinal0().to_string()),

            // Week
            'W' => out.push_str(&format!("{:02}", dt.iso_week().week())),

            // Month
            'F' => out.push_str(MONTHS[dt.month0() as usize]),
            'm' => out.push_str(&format!("{:02}", dt.month())),
            'M' => out.push_str(&MONTHS[dt.month0() as usize][..3]),
            'n' => out.push_str(&dt.month().to_string()),
            't' => out.push_str(&days_in_month(dt.year(), dt.month()).to_string()),

            // Year
            'L' => out.push(if is_leap_year(dt.year()) { '1' } else { '0' }),
            'o' => out.push_str(&dt.iso_week().year().to_string()),
            'Y' => out.push_str(&dt.year().to_string()),
            'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),

            // Time
            'a' => out.push_str(if hour12_pm { "pm" } else { "am" }),
            'A' => out.push_str(if hour12_pm { "PM" } else { "AM" }),
            'g' => out.push_str(&hour12.to_string()),
            'G' => out.push_str(&dt.hour().to_string()),
            'h' => out.push_str(&format!("{:02}", hour12)),
            'H' => out.push_str(&format!("{:02}", dt.hour())),
            'i' => out.push_str(&format!("{:02}", dt.minute())),
            's' => out.push_str(&format!("{:02}", dt.second())),
            'u' => out.push_str(&format!("{:06}", dt.nanosecond() / 1_000)),
            'v' => out.push_str(&format!("{:03}", dt.nanosecond() / 1_000_000)),

            // Timezone
            'e' | 'T' => out.push_str(&dt.offset().to_string()),
            'O' => out.push_str(&format!(
                "{}{:02}{:02}",
                if offset_secs < 0 { '-' } else { '+' },
                offset_secs.abs() / 3600,
                (offset_secs.abs() % 3600) / 60
            )),
            'P' => out.push_str(&format!(
                "{}{:02}:{:02}",
                if offset_secs < 0 { '-' } else { '+' },
                offset_secs.abs() / 3600,
                (offset_secs.abs() % 3600) / 60
            )),
            'Z' => out.push_str(&offset_secs.to_string()),

            // Full date/time
            'c' => out.push_str(&dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string()),
            'r' => out.push_str(&dt.to_rfc2822()),
            'U' => out.push_str(&dt.timestamp().to_string()),

            other => out.push(other),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn dt(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_default_template() {
        assert_eq!(format_php("F j, Y", &dt("2026-08-07T09:30:00Z")), "August 7, 2026");
    }

    #[test]
    fn test_numeric_date() {
        assert_eq!(format_php("d/m/Y", &dt("2026-08-07T09:30:00Z")), "07/08/2026");
        assert_eq!(format_php("Y-m-d", &dt("2026-01-02T00:00:00Z")), "2026-01-02");
    }

    #[test]
    fn test_weekday_names() {
        // 2026-08-07 is a Friday
        let d = dt("2026-08-07T09:30:00Z");
        assert_eq!(format_php("D", &d), "Fri");
        assert_eq!(format_php("l", &d), "Friday");
        assert_eq!(format_php("N", &d), "5");
        assert_eq!(format_php("w", &d), "5");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(format_php("jS", &dt("2026-08-01T00:00:00Z")), "1st");
        assert_eq!(format_php("jS", &dt("2026-08-02T00:00:00Z")), "2nd");
        assert_eq!(format_php("jS", &dt("2026-08-03T00:00:00Z")), "3rd");
        assert_eq!(format_php("jS", &dt("2026-08-11T00:00:00Z")), "11th");
        assert_eq!(format_php("jS", &dt("2026-08-12T00:00:00Z")), "12th");
        assert_eq!(format_php("jS", &dt("2026-08-13T00:00:00Z")), "13th");
        assert_eq!(format_php("jS", &dt("2026-08-21T00:00:00Z")), "21st");
        assert_eq!(format_php("jS", &dt("2026-08-04T00:00:00Z")), "4th");
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(format_php("g:i A", &dt("2026-08-07T15:05:00Z")), "3:05 PM");
        assert_eq!(format_php("g:i a", &dt("2026-08-07T00:30:00Z")), "12:30 am");
        assert_eq!(format_php("h:i:s", &dt("2026-08-07T09:05:07Z")), "09:05:07");
        assert_eq!(format_php("G", &dt("2026-08-07T15:05:00Z")), "15");
        assert_eq!(format_php("H:i", &dt("2026-08-07T05:05:00Z")), "05:05");
    }

    #[test]
    fn test_month_metadata() {
        assert_eq!(format_php("t", &dt("2026-02-10T00:00:00Z")), "28");
        assert_eq!(format_php("t", &dt("2024-02-10T00:00:00Z")), "29");
        assert_eq!(format_php("L", &dt("2024-06-01T00:00:00Z")), "1");
        assert_eq!(format_php("L", &dt("2026-06-01T00:00:00Z")), "0");
        assert_eq!(format_php("M n", &dt("2026-09-04T00:00:00Z")), "Sep 9");
    }

    #[test]
    fn test_escaping_and_passthrough() {
        // "jS \o\f F" renders the literal word "of"
        assert_eq!(
            format_php("jS \\o\\f F", &dt("2026-08-07T00:00:00Z")),
            "7th of August"
        );
        // Unrecognized characters are literals
        assert_eq!(format_php("Y-m-d Q", &dt("2026-08-07T00:00:00Z")), "2026-08-07 Q");
    }

    #[test]
    fn test_epoch_and_offsets_utc() {
        let d = dt("2026-08-07T00:00:00Z");
        assert_eq!(format_php("U", &d), d.timestamp().to_string());
        assert_eq!(format_php("O", &d), "+0000");
        assert_eq!(format_php("P", &d), "+00:00");
        assert_eq!(format_php("Z", &d), "0");
    }

    #[test]
    fn test_site_timezone_rendering() {
        use chrono_tz::America::New_York;
        // 2026-01-15T03:30:00Z is the evening of Jan 14 in New York (UTC-5)
        let local = dt("2026-01-15T03:30:00Z").with_timezone(&New_York);
        assert_eq!(format_php("F j, Y", &local), "January 14, 2026");
        assert_eq!(format_php("g:i a", &local), "10:30 pm");
        assert_eq!(format_php("P", &local), "-05:00");
    }

    #[test]
    fn test_iso_week() {
        // 2026-01-01 falls in ISO week 1 of 2026
        assert_eq!(format_php("W", &dt("2026-01-01T00:00:00Z")), "01");
        assert_eq!(format_php("o", &dt("2026-01-01T00:00:00Z")), "2026");
    }
}
