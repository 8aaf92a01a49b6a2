use crate::time::print_time;
use crate::week::OpeningDay;
use itertools::Itertools;

/// Prints a single day, e.g. `"Monday: 8 AM - 1 PM, 6 PM - 1 AM"`
///
/// # Examples
/// ```
/// use opening_hours_libs::print::print_day;
/// use opening_hours_libs::week::OpeningDay;
/// use opening_hours_libs::weekday::Weekday;
///
/// let saturday = OpeningDay {
///     day_of_week: Weekday::Saturday,
///     hours: vec![],
///     is_open: false,
/// };
///
/// assert_eq!(print_day(&saturday), "Saturday: Closed");
/// ```
pub fn print_day(day: &OpeningDay) -> String {
    let hours = if day.is_open {
        day.hours
            .iter()
            .map(|shift| format!("{} - {}", print_time(shift.open), print_time(shift.close)))
            .join(", ")
    } else {
        "Closed".to_string()
    };

    format!("{}: {}", day.day_of_week.title(), hours)
}

/// One line per day, separated by new lines
pub fn print_opening_hours(days: &[OpeningDay]) -> String {
    days.iter().map(print_day).join("\n")
}
