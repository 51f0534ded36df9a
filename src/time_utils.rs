use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::domain::errors::AppError;

/// Calendar month labels, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a lower bound. `YYYY-MM-DD` means the start of that day (UTC).
pub fn parse_range_start(text: &str) -> Result<DateTime<Utc>, AppError> {
    parse_bound(text, NaiveTime::MIN)
}

/// Parse an upper bound. `YYYY-MM-DD` means the last millisecond of that day (UTC).
pub fn parse_range_end(text: &str) -> Result<DateTime<Utc>, AppError> {
    let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
    parse_bound(text, end_of_day)
}

fn parse_bound(text: &str, time_of_day: NaiveTime) -> Result<DateTime<Utc>, AppError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Ok(instant.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, DATE_INPUT_FORMAT)
        .map(|date| date.and_time(time_of_day).and_utc())
        .map_err(|e| AppError::InvalidInput(format!("'{}' is not a date: {}", text, e)))
}

/// Value for an `<input type="date">`; empty when unbounded
pub fn to_date_input_value(instant: Option<DateTime<Utc>>) -> String {
    instant.map(|at| at.format(DATE_INPUT_FORMAT).to_string()).unwrap_or_default()
}

/// `YYYY-MM-DD` of the given instant, used in report file names
pub fn report_date(now: DateTime<Utc>) -> String {
    now.format(DATE_INPUT_FORMAT).to_string()
}

/// `$1,234.56` style label for metric cards
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_only_bounds_cover_whole_day() {
        let start = parse_range_start("2024-02-29").unwrap();
        let end = parse_range_end("2024-02-29").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 2, 29, 0, 0, 0).unwrap());
        assert_eq!(end.to_rfc3339(), "2024-02-29T23:59:59.999+00:00");
    }

    #[test]
    fn iso_timestamps_are_taken_verbatim() {
        let start = parse_range_start("2024-01-15T10:30:00.000Z").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
    }

    #[test]
    fn report_date_is_iso_calendar_date() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 23, 59, 0).unwrap();
        assert_eq!(report_date(now), "2026-10-19");
        assert_eq!(to_date_input_value(Some(now)), "2026-10-19");
        assert_eq!(to_date_input_value(None), "");
    }
}
