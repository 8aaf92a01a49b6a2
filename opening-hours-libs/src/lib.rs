pub mod config;
pub mod day;
pub mod error;
pub mod print;
pub mod request;
pub mod response;
pub mod time;
pub mod validate;
pub mod week;
pub mod weekday;

#[cfg(test)]
mod tests {
    use crate::response::ResponseBody;
    use crate::time::{Event, Shift};
    use crate::week::{OpeningDay, WeekEvents};
    use crate::weekday::Weekday;

    fn closed_week() -> WeekEvents {
        Weekday::ALL.iter().map(|&day| (day, vec![])).collect()
    }

    fn hours(days: &[OpeningDay], day: Weekday) -> &[Shift] {
        &days[day.index()].hours
    }

    fn shift(open: u32, close: u32) -> Shift {
        Shift { open, close }
    }

    #[test]
    fn closed_every_day() {
        use crate::week::Week;

        let days = Week::from_events(&closed_week()).unwrap().into_days();

        assert_eq!(days.len(), 7);
        assert!(days.iter().all(|d| !d.is_open && d.hours.is_empty()));
    }

    #[test]
    fn days_are_ordered_monday_to_sunday() {
        use crate::week::Week;

        // Inserted backwards
        let events: WeekEvents = Weekday::ALL
            .iter()
            .rev()
            .map(|&day| (day, vec![]))
            .collect();
        let days = Week::from_events(&events).unwrap().into_days();

        assert_eq!(
            days.iter().map(|d| d.day_of_week).collect::<Vec<_>>(),
            Weekday::ALL.to_vec()
        );
    }

    #[test]
    fn single_shift() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(
            Weekday::Wednesday,
            vec![Event::open(36000), Event::close(64800)],
        );

        let days = Week::from_events(&events).unwrap().into_days();

        assert!(days[Weekday::Wednesday.index()].is_open);
        assert_eq!(hours(&days, Weekday::Wednesday), [shift(36000, 64800)]);
    }

    #[test]
    fn multiple_shifts_in_one_day() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(
            Weekday::Friday,
            vec![
                Event::open(32400),
                Event::close(39600),
                Event::open(57600),
                Event::close(82800),
            ],
        );

        let days = Week::from_events(&events).unwrap().into_days();

        assert_eq!(
            hours(&days, Weekday::Friday),
            [shift(32400, 39600), shift(57600, 82800)]
        );
    }

    #[test]
    fn closes_on_the_next_day() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Friday, vec![Event::open(82800)]);
        events.insert(Weekday::Saturday, vec![Event::close(32400)]);

        let days = Week::from_events(&events).unwrap().into_days();

        assert_eq!(hours(&days, Weekday::Friday), [shift(82800, 32400)]);
        assert!(hours(&days, Weekday::Friday)[0].crosses_midnight());
        assert!(!days[Weekday::Saturday.index()].is_open);
    }

    #[test]
    fn sunday_closes_on_monday() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Sunday, vec![Event::open(82800)]);
        events.insert(Weekday::Monday, vec![Event::close(32400)]);

        let days = Week::from_events(&events).unwrap().into_days();

        assert!(!days[Weekday::Monday.index()].is_open);
        assert_eq!(hours(&days, Weekday::Sunday), [shift(82800, 32400)]);
    }

    #[test]
    fn open_through_the_night_every_night() {
        use crate::week::Week;

        // Each day closes the previous night's shift and opens the next one
        let events: WeekEvents = Weekday::ALL
            .iter()
            .map(|&day| (day, vec![Event::close(7200), Event::open(64800)]))
            .collect();

        let days = Week::from_events(&events).unwrap().into_days();

        assert!(days.iter().all(|d| d.hours == [shift(64800, 7200)]));
    }

    #[test]
    fn longer_than_a_day() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Monday, vec![Event::open(32400)]);
        events.insert(Weekday::Tuesday, vec![Event::close(43200)]);

        let days = Week::from_events(&events).unwrap().into_days();

        assert_eq!(hours(&days, Weekday::Monday), [shift(32400, 43200)]);
        assert!(!hours(&days, Weekday::Monday)[0].crosses_midnight());
    }

    #[test]
    fn both_unmatched_hours_on_one_day() {
        use crate::day::DayHours;

        let events = [
            Event::close(3600),
            Event::open(36000),
            Event::close(50400),
            Event::open(72000),
        ];
        let day = DayHours::pair(Weekday::Saturday, &events).unwrap();

        assert_eq!(day.unmatched_closing, Some(3600));
        assert_eq!(day.unmatched_opening, Some(72000));
        assert_eq!(day.shifts, vec![shift(36000, 50400)]);
    }

    #[test]
    fn single_event_days() {
        use crate::day::DayHours;

        let closing = DayHours::pair(Weekday::Monday, &[Event::close(0)]).unwrap();
        assert_eq!(closing.unmatched_closing, Some(0));
        assert_eq!(closing.unmatched_opening, None);

        let opening = DayHours::pair(Weekday::Monday, &[Event::open(0)]).unwrap();
        assert_eq!(opening.unmatched_opening, Some(0));
        assert_eq!(opening.unmatched_closing, None);
    }

    #[test]
    fn midnight_is_a_valid_closing_hour() {
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Tuesday, vec![Event::open(64800)]);
        events.insert(Weekday::Wednesday, vec![Event::close(0)]);

        let days = Week::from_events(&events).unwrap().into_days();

        assert_eq!(hours(&days, Weekday::Tuesday), [shift(64800, 0)]);
    }

    #[test]
    fn opening_without_closing() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(
            Weekday::Sunday,
            vec![Event::close(3600), Event::open(43200)],
        );

        // Sunday's opening is checked before its closing
        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::OpeningWithoutClosing {
                day: Weekday::Sunday,
                next: Weekday::Monday,
                open: 43200,
            })
        );

        let mut events = closed_week();
        events.insert(Weekday::Friday, vec![Event::open(57600)]);

        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::OpeningWithoutClosing {
                day: Weekday::Friday,
                next: Weekday::Saturday,
                open: 57600,
            })
        );
    }

    #[test]
    fn closing_without_opening() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Friday, vec![Event::close(57600)]);

        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::ClosingWithoutOpening {
                day: Weekday::Friday,
                previous: Weekday::Thursday,
                close: 57600,
            })
        );
    }

    #[test]
    fn monday_closing_without_sunday_opening() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Monday, vec![Event::close(3600)]);

        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::ClosingWithoutOpening {
                day: Weekday::Monday,
                previous: Weekday::Sunday,
                close: 3600,
            })
        );
    }

    #[test]
    fn repeated_closing_hours() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(
            Weekday::Friday,
            vec![Event::close(57600), Event::close(57600)],
        );

        let err = Week::from_events(&events).unwrap_err();

        assert_eq!(
            err,
            WorkingHoursError::UnmatchedHours {
                day: Weekday::Friday,
                values: vec![57600],
            }
        );
        assert!(err.to_string().contains("friday"));
    }

    #[test]
    fn malformed_pairs() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(
            Weekday::Monday,
            vec![
                Event::open(36000),
                Event::open(39600),
                Event::close(50400),
                Event::close(64800),
            ],
        );
        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::InvalidShift {
                day: Weekday::Monday,
                open: 36000,
                close: 39600,
            })
        );

        let mut events = closed_week();
        events.insert(
            Weekday::Tuesday,
            vec![Event::open(64800), Event::close(36000)],
        );
        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::InvalidShift {
                day: Weekday::Tuesday,
                open: 64800,
                close: 36000,
            })
        );

        let mut events = closed_week();
        events.insert(
            Weekday::Thursday,
            vec![Event::open(36000), Event::close(36000)],
        );
        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::EmptyShift {
                day: Weekday::Thursday,
                value: 36000,
            })
        );
    }

    #[test]
    fn empty_shift_across_days() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Friday, vec![Event::open(3600)]);
        events.insert(Weekday::Saturday, vec![Event::close(3600)]);

        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::EmptyShift {
                day: Weekday::Friday,
                value: 3600,
            })
        );
    }

    #[test]
    fn missing_day() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.remove(&Weekday::Thursday);

        assert_eq!(
            Week::from_events(&events),
            Err(WorkingHoursError::MissingDay {
                day: Weekday::Thursday,
            })
        );
    }

    #[test]
    fn hour_outside_of_the_day() {
        use crate::error::WorkingHoursError;
        use crate::week::Week;

        let mut events = closed_week();
        events.insert(Weekday::Monday, vec![Event::open(0), Event::close(90000)]);

        assert!(matches!(
            Week::from_events(&events),
            Err(WorkingHoursError::OutOfRange { value: 90000, .. })
        ));
    }

    fn encode(request: serde_json::Value) -> String {
        crate::request::encode_query(&request.to_string()).unwrap()
    }

    fn error_body(error: &str) -> ResponseBody {
        ResponseBody::Error {
            error: error.to_string(),
        }
    }

    #[test]
    fn responds_with_working_hours() {
        use crate::config::Config;
        use crate::response::respond;
        use serde_json::json;

        let query = encode(json!({
            "monday": [],
            "tuesday": [{ "type": "open", "value": 36000 }, { "type": "close", "value": 64800 }],
            "wednesday": [],
            "thursday": [{ "type": "open", "value": 36000 }, { "type": "close", "value": 64800 }],
            "friday": [{ "type": "open", "value": 36000 }],
            "saturday": [{ "type": "close", "value": 3600 }, { "type": "open", "value": 36000 }],
            "sunday": [
                { "type": "close", "value": 3600 },
                { "type": "open", "value": 43200 },
                { "type": "close", "value": 75600 }
            ]
        }));

        let (status, body) = respond(Some(&query), &Config::default());

        let expected = [
            "Monday: Closed",
            "Tuesday: 10 AM - 6 PM",
            "Wednesday: Closed",
            "Thursday: 10 AM - 6 PM",
            "Friday: 10 AM - 1 AM",
            "Saturday: 10 AM - 1 AM",
            "Sunday: 12 PM - 9 PM",
        ]
        .join("\n");

        assert_eq!(status, 200);
        assert_eq!(
            body,
            ResponseBody::WorkingHours {
                working_hours: expected,
            }
        );

        let json = serde_json::to_value(&body).unwrap();
        let printed = json["working_hours"].as_str().unwrap_or_default();
        assert_eq!(printed.lines().count(), 7);
    }

    #[test]
    fn responds_with_bad_request() {
        use crate::config::Config;
        use crate::response::respond;
        use serde_json::json;

        let config = Config::default();

        let query = encode(json!({
            "monday": [], "tuesday": [], "wednesday": [],
            "thursday": [], "friday": [], "saturday": []
        }));
        assert_eq!(
            respond(Some(&query), &config),
            (400, error_body("'sunday' is a required property"))
        );

        assert_eq!(
            respond(Some("invalid-base-64"), &config),
            (400, error_body("Invalid base64 format"))
        );

        assert_eq!(
            respond(None, &config),
            (400, error_body("Query parameter \"query\" is missing"))
        );
    }

    #[test]
    fn responds_with_unprocessable_entity() {
        use crate::config::Config;
        use crate::response::respond;
        use serde_json::json;

        let query = encode(json!({
            "monday": [], "tuesday": [], "wednesday": [],
            "thursday": [], "friday": [], "saturday": [],
            "sunday": [{ "type": "open", "value": 43200 }]
        }));

        let (status, body) = respond(Some(&query), &Config::default());

        let error = "Found opening hour 43200 on sunday without matching closing hour on monday";
        assert_eq!(status, 422);
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            json!({ "error": error }).to_string()
        );
    }
}
