/// time and date
///
/// chrono's formatter is English-only, which keeps these locale independent.

use chrono::NaiveDateTime;

/// "The current time is 03:07 PM"
pub fn time(now: NaiveDateTime) -> String {
    format!("The current time is {}", now.format("%I:%M %p"))
}

/// "Today is Wednesday, January 15, 2025"
pub fn date(now: NaiveDateTime) -> String {
    format!("Today is {}", now.format("%A, %B %d, %Y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_time_twelve_hour() {
        assert_eq!(time(at(15, 7)), "The current time is 03:07 PM");
        assert_eq!(time(at(0, 30)), "The current time is 12:30 AM");
    }

    #[test]
    fn test_date_long_form() {
        assert_eq!(date(at(9, 0)), "Today is Wednesday, January 15, 2025");
    }
}
