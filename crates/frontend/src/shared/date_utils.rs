/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the dashboard

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_name(month: &str) -> Option<&'static str> {
    let index: usize = month.parse().ok()?;
    MONTHS.get(index.checked_sub(1)?).copied()
}

/// Format ISO datetime string to "15 Mar 2024 14:02" form.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                if let Some(month) = month_name(month) {
                    let time = time_part.split(['.', 'Z']).next().unwrap_or(time_part);
                    let hm = time.rsplit_once(':').map(|(hm, _)| hm).unwrap_or(time);
                    return format!("{} {} {} {}", day, month, year, hm);
                }
            }
        }
    }
    datetime_str.to_string()
}

/// Format ISO date string (with or without a time part) to "15 Mar 2024".
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if let Some(month) = month_name(month) {
                return format!("{} {} {}", day, month, year);
            }
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15 Mar 2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31 Dec 2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15 Mar 2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15 Mar 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_date("2024-99-01"), "2024-99-01");
    }
}
