use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week, in the order the schedule is printed.
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every day, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Position within the week, Monday being 0
    pub fn index(self) -> usize {
        self as usize
    }

    /// The following day. Sunday wraps around to Monday.
    ///
    /// # Examples
    /// ```
    /// use opening_hours_libs::weekday::Weekday;
    ///
    /// assert_eq!(Weekday::Friday.succ(), Weekday::Saturday);
    /// assert_eq!(Weekday::Sunday.succ(), Weekday::Monday);
    /// ```
    pub fn succ(self) -> Weekday {
        Weekday::ALL[(self.index() + 1) % Weekday::ALL.len()]
    }

    /// The preceding day. Monday wraps around to Sunday.
    ///
    /// # Examples
    /// ```
    /// use opening_hours_libs::weekday::Weekday;
    ///
    /// assert_eq!(Weekday::Monday.pred(), Weekday::Sunday);
    /// ```
    pub fn pred(self) -> Weekday {
        Weekday::ALL[(self.index() + Weekday::ALL.len() - 1) % Weekday::ALL.len()]
    }

    /// Lowercase name, as used for the request keys
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }

    /// Capitalized name, as printed in the schedule
    pub fn title(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Weekday {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weekday::ALL
            .iter()
            .find(|day| day.as_str() == s)
            .copied()
            .ok_or_else(|| format!("invalid weekday: {}", s))
    }
}
