use crate::error::WorkingHoursError;
use crate::time::{Event, Shift, MAX_SECONDS_OF_DAY};
use crate::weekday::Weekday;
use log::debug;

/// Hours of a single day before shifts crossing midnight are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHours {
    pub day: Weekday,
    pub shifts: Vec<Shift>,
    /// Opening hour of a shift that closes on the next day
    pub unmatched_opening: Option<u32>,
    /// Closing hour of a shift that opened on the previous day
    pub unmatched_closing: Option<u32>,
}

impl DayHours {
    /// A day with no hours at all
    pub fn closed(day: Weekday) -> DayHours {
        DayHours {
            day,
            shifts: vec![],
            unmatched_opening: None,
            unmatched_closing: None,
        }
    }

    /// Groups one day's events into shifts.
    ///
    /// A leading closing event belongs to a shift opened the previous day, and a
    /// trailing opening event to a shift that closes the next day. These are kept
    /// aside as `unmatched_closing` and `unmatched_opening`. Everything in between
    /// must be consecutive (open, close) pairs with open before close.
    ///
    /// Events are taken in the order given; they are not sorted.
    ///
    /// # Examples
    /// ```
    /// use opening_hours_libs::day::DayHours;
    /// use opening_hours_libs::time::{Event, Shift};
    /// use opening_hours_libs::weekday::Weekday;
    ///
    /// let saturday = DayHours::pair(
    ///     Weekday::Saturday,
    ///     &[Event::close(3600), Event::open(36000)],
    /// ).unwrap();
    ///
    /// assert!(saturday.shifts.is_empty());
    /// assert_eq!(saturday.unmatched_closing, Some(3600));
    /// assert_eq!(saturday.unmatched_opening, Some(36000));
    ///
    /// let friday = DayHours::pair(
    ///     Weekday::Friday,
    ///     &[Event::open(32400), Event::close(39600)],
    /// ).unwrap();
    ///
    /// assert_eq!(friday.shifts, vec![Shift { open: 32400, close: 39600 }]);
    /// ```
    pub fn pair(day: Weekday, events: &[Event]) -> Result<DayHours, WorkingHoursError> {
        if let Some(event) = events.iter().find(|e| e.value > MAX_SECONDS_OF_DAY) {
            return Err(WorkingHoursError::OutOfRange {
                day,
                value: event.value,
                max: MAX_SECONDS_OF_DAY,
            });
        }

        let mut hours = DayHours::closed(day);
        let mut events = events;

        if let Some((first, rest)) = events.split_first() {
            if first.is_closing() {
                hours.unmatched_closing = Some(first.value);
                events = rest;
            }
        }

        if let Some((last, rest)) = events.split_last() {
            if last.is_opening() {
                hours.unmatched_opening = Some(last.value);
                events = rest;
            }
        }

        hours.shifts = events
            .chunks(2)
            .map(|pair| match pair {
                [open, close] => pair_shift(day, *open, *close),
                _ => Err(WorkingHoursError::UnmatchedHours {
                    day,
                    values: pair.iter().map(|e| e.value).collect(),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "{}: {} shift(s), unmatched opening {:?}, unmatched closing {:?}",
            day,
            hours.shifts.len(),
            hours.unmatched_opening,
            hours.unmatched_closing
        );

        Ok(hours)
    }

    /// True once no shift of this day waits for an adjacent day
    pub fn is_resolved(&self) -> bool {
        self.unmatched_opening.is_none() && self.unmatched_closing.is_none()
    }
}

fn pair_shift(day: Weekday, open: Event, close: Event) -> Result<Shift, WorkingHoursError> {
    let invalid = WorkingHoursError::InvalidShift {
        day,
        open: open.value,
        close: close.value,
    };

    if !open.is_opening() || !close.is_closing() {
        return Err(invalid);
    }

    match Shift::new(open.value, close.value) {
        Some(shift) if shift.crosses_midnight() => Err(invalid),
        Some(shift) => Ok(shift),
        None => Err(WorkingHoursError::EmptyShift {
            day,
            value: open.value,
        }),
    }
}
