use crate::weekday::Weekday;
use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

/// Business rule violations found while pairing opening and closing hours
#[derive(Serialize, Error, Debug, Eq, PartialEq)]
pub enum WorkingHoursError {
    #[error("Missing day: {day}")]
    MissingDay { day: Weekday },
    #[error("Found unmatched hours on {day}: {}", .values.iter().join(", "))]
    UnmatchedHours { day: Weekday, values: Vec<u32> },
    #[error("Invalid opening and closing hours found on {day}. Opening hour should be before closing hour. Opening hour: {open}, Closing hour: {close}")]
    InvalidShift { day: Weekday, open: u32, close: u32 },
    #[error("Opening and closing hours on {day} are both {value}. Shifts cannot be empty")]
    EmptyShift { day: Weekday, value: u32 },
    #[error("Hour {value} on {day} is outside of the day. Expected at most {max}")]
    OutOfRange { day: Weekday, value: u32, max: u32 },
    #[error("Found opening hour {open} on {day} without matching closing hour on {next}")]
    OpeningWithoutClosing {
        day: Weekday,
        next: Weekday,
        open: u32,
    },
    #[error("Found closing hour {close} on {day} without matching opening hour on {previous}")]
    ClosingWithoutOpening {
        day: Weekday,
        previous: Weekday,
        close: u32,
    },
}
