use crate::day::DayHours;
use crate::error::WorkingHoursError;
use crate::time::{Event, Shift};
use crate::weekday::Weekday;
use log::trace;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ops::{Index, IndexMut};

/// Raw events for each day, as received in the request
pub type WeekEvents = HashMap<Weekday, Vec<Event>>;

/// Final hours of one day
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct OpeningDay {
    pub day_of_week: Weekday,
    pub hours: Vec<Shift>,
    pub is_open: bool,
}

/// All seven days, indexed by `Weekday`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: [DayHours; 7],
}

impl Index<Weekday> for Week {
    type Output = DayHours;

    fn index(&self, day: Weekday) -> &DayHours {
        &self.days[day.index()]
    }
}

impl IndexMut<Weekday> for Week {
    fn index_mut(&mut self, day: Weekday) -> &mut DayHours {
        &mut self.days[day.index()]
    }
}

impl Week {
    /// Pairs the hours of every day, then resolves the shifts that cross midnight.
    ///
    /// # Errors
    /// The first structural problem found aborts the whole week; see
    /// `WorkingHoursError` for the possible failures.
    ///
    /// # Examples
    /// ```
    /// use opening_hours_libs::time::{Event, Shift};
    /// use opening_hours_libs::week::{Week, WeekEvents};
    /// use opening_hours_libs::weekday::Weekday;
    ///
    /// let mut events: WeekEvents = Weekday::ALL.iter().map(|&d| (d, vec![])).collect();
    /// events.insert(Weekday::Sunday, vec![Event::open(82800)]);
    /// events.insert(Weekday::Monday, vec![Event::close(3600)]);
    ///
    /// let days = Week::from_events(&events).unwrap().into_days();
    ///
    /// assert!(!days[0].is_open);
    /// assert_eq!(days[6].hours, vec![Shift { open: 82800, close: 3600 }]);
    /// ```
    pub fn from_events(events: &WeekEvents) -> Result<Week, WorkingHoursError> {
        let mut week = Week::pair_days(events)?;
        week.match_unmatched()?;
        Ok(week)
    }

    /// Pairs every day on its own. Shifts crossing midnight stay unmatched.
    pub fn pair_days(events: &WeekEvents) -> Result<Week, WorkingHoursError> {
        let mut week = Week {
            days: Weekday::ALL.map(DayHours::closed),
        };

        for day in Weekday::ALL {
            let day_events = events
                .get(&day)
                .ok_or(WorkingHoursError::MissingDay { day })?;
            week[day] = DayHours::pair(day, day_events)?;
        }

        Ok(week)
    }

    /// Single pass from Monday to Sunday, wrapping around at the end of the week.
    ///
    /// For each day an unmatched opening is closed by the next day's unmatched
    /// closing and the shift is kept on this day. Then a remaining unmatched
    /// closing is matched with the previous day's unmatched opening, and the shift
    /// is kept on the previous day. Both steps must run for a day before moving on.
    pub fn match_unmatched(&mut self) -> Result<(), WorkingHoursError> {
        for day in Weekday::ALL {
            if let Some(open) = self[day].unmatched_opening.take() {
                let next = day.succ();
                let missing = WorkingHoursError::OpeningWithoutClosing { day, next, open };
                let close = self[next].unmatched_closing.take().ok_or(missing)?;
                self.push_crossing(day, open, close)?;
            }

            if let Some(close) = self[day].unmatched_closing.take() {
                let previous = day.pred();
                let missing = WorkingHoursError::ClosingWithoutOpening {
                    day,
                    previous,
                    close,
                };
                let open = self[previous].unmatched_opening.take().ok_or(missing)?;
                self.push_crossing(previous, open, close)?;
            }
        }

        debug_assert!(self.days.iter().all(DayHours::is_resolved));

        Ok(())
    }

    fn push_crossing(
        &mut self,
        day: Weekday,
        open: u32,
        close: u32,
    ) -> Result<(), WorkingHoursError> {
        let empty = WorkingHoursError::EmptyShift { day, value: open };
        let shift = Shift::new(open, close).ok_or(empty)?;

        if shift.crosses_midnight() {
            trace!("{}: shift {} - {} past midnight", day, open, close);
        } else {
            trace!("{}: shift {} - {} longer than a day", day, open, close);
        }

        self[day].shifts.push(shift);

        Ok(())
    }

    /// Days from Monday to Sunday with their final hours
    pub fn into_days(self) -> Vec<OpeningDay> {
        self.days
            .into_iter()
            .map(|day| OpeningDay {
                day_of_week: day.day,
                is_open: !day.shifts.is_empty(),
                hours: day.shifts,
            })
            .collect()
    }
}
