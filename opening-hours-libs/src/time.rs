use serde::{Deserialize, Serialize};

/// Seconds in one day. Valid event values are `0..SECONDS_PER_DAY`.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// Largest value an event may carry (11:59:59 PM)
pub const MAX_SECONDS_OF_DAY: u32 = SECONDS_PER_DAY - 1;

#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Open,
    Close,
}

/// A single opening or closing boundary
/// `value` is the number of seconds since local midnight
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub value: u32,
}

impl Event {
    pub fn open(value: u32) -> Event {
        Event {
            kind: EventKind::Open,
            value,
        }
    }

    pub fn close(value: u32) -> Event {
        Event {
            kind: EventKind::Close,
            value,
        }
    }

    /// # Examples
    /// ```
    /// use opening_hours_libs::time::Event;
    ///
    /// assert!(Event::open(36000).is_opening());
    /// assert!(!Event::close(36000).is_opening());
    /// ```
    pub fn is_opening(&self) -> bool {
        self.kind == EventKind::Open
    }

    pub fn is_closing(&self) -> bool {
        self.kind == EventKind::Close
    }
}

/// A complete shift. `open` may be numerically greater than `close`
/// when the shift runs past midnight into the following day.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Shift {
    pub open: u32,
    pub close: u32,
}

impl Shift {
    /// Construct a new Shift
    /// Returns `None` for a zero length shift
    ///
    /// # Examples
    /// ```
    /// use opening_hours_libs::time::Shift;
    ///
    /// let overnight = Shift::new(82800, 3600).unwrap();
    /// assert!(overnight.crosses_midnight());
    ///
    /// assert_eq!(Shift::new(3600, 3600), None);
    /// ```
    pub fn new(open: u32, close: u32) -> Option<Shift> {
        if open == close {
            None
        } else {
            Some(Shift { open, close })
        }
    }

    /// True when the shift closes on the following day
    pub fn crosses_midnight(self) -> bool {
        self.open > self.close
    }
}

/// Prints seconds since midnight on a 12-hour clock.
/// Minutes are only shown when the time is not on the hour; seconds are dropped.
///
/// # Examples
/// ```
/// use opening_hours_libs::time::print_time;
///
/// assert_eq!(print_time(36000), "10 AM");
/// assert_eq!(print_time(0), "12 AM");
/// assert_eq!(print_time(43200), "12 PM");
/// assert_eq!(print_time(66600), "6:30 PM");
/// ```
pub fn print_time(seconds: u32) -> String {
    let seconds = seconds % SECONDS_PER_DAY;
    let hour = seconds / 3600;
    let minute = seconds % 3600 / 60;

    let period = if hour < 12 { "AM" } else { "PM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    if minute == 0 {
        format!("{} {}", hour, period)
    } else {
        format!("{}:{:02} {}", hour, minute, period)
    }
}
