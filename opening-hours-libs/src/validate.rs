//! Request schema:
//!
//! ```text
//! {
//!     "<weekday>": [ { "type": "open" | "close", "value": 0..=86399 }, ... ],
//!     ... exactly the seven lowercase weekdays ...
//! }
//! ```
//!
//! The first violation found is reported. Days are checked Monday to Sunday,
//! and events in the order received.

use crate::time::{Event, EventKind, MAX_SECONDS_OF_DAY};
use crate::week::WeekEvents;
use crate::weekday::Weekday;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum SchemaError {
    #[error("'{property}' is a required property")]
    RequiredProperty { property: String },
    #[error("Additional properties are not allowed ('{property}' was unexpected)")]
    AdditionalProperty { property: String },
    #[error("{found} is not of type '{expected}' ({location})")]
    WrongType {
        location: String,
        found: String,
        expected: &'static str,
    },
    #[error("{found} is not one of ['open', 'close'] ({location})")]
    UnknownEventType { location: String, found: String },
    #[error("{found} is less than the minimum of {minimum} ({location})")]
    BelowMinimum {
        location: String,
        found: String,
        minimum: u32,
    },
    #[error("{found} is greater than the maximum of {maximum} ({location})")]
    AboveMaximum {
        location: String,
        found: String,
        maximum: u32,
    },
    #[error("Unsupported length of input ({location}). Expected at most {expected}, got {found}")]
    UnsupportedLength {
        location: String,
        expected: usize,
        found: usize,
    },
}

/// Validates decoded request JSON and returns the events of each day.
///
/// # Examples
/// ```
/// use opening_hours_libs::validate::validate_request;
/// use serde_json::json;
///
/// let request = json!({
///     "monday": [{ "type": "open", "value": 32400 }, { "type": "close", "value": 39600 }],
///     "tuesday": [], "wednesday": [], "thursday": [], "friday": [], "saturday": [],
/// });
///
/// let err = validate_request(&request, 48).unwrap_err();
/// assert_eq!(err.to_string(), "'sunday' is a required property");
/// ```
pub fn validate_request(
    request: &Value,
    max_events_per_day: usize,
) -> Result<WeekEvents, SchemaError> {
    let days = as_object(request, "request")?;

    if let Some(day) = Weekday::ALL.iter().find(|day| !days.contains_key(day.as_str())) {
        return Err(SchemaError::RequiredProperty {
            property: day.as_str().to_string(),
        });
    }

    if let Some(key) = days.keys().find(|key| key.parse::<Weekday>().is_err()) {
        return Err(SchemaError::AdditionalProperty {
            property: key.clone(),
        });
    }

    let mut events = WeekEvents::new();
    for day in Weekday::ALL {
        let day_events = validate_day(day, &days[day.as_str()], max_events_per_day)?;
        events.insert(day, day_events);
    }

    Ok(events)
}

fn validate_day(
    day: Weekday,
    value: &Value,
    max_events: usize,
) -> Result<Vec<Event>, SchemaError> {
    let location = day.as_str();
    let events = value.as_array().ok_or_else(|| wrong_type(location, value, "array"))?;

    if events.len() > max_events {
        return Err(SchemaError::UnsupportedLength {
            location: location.to_string(),
            expected: max_events,
            found: events.len(),
        });
    }

    events
        .iter()
        .enumerate()
        .map(|(i, event)| validate_event(&format!("{}[{}]", location, i), event))
        .collect()
}

fn validate_event(location: &str, value: &Value) -> Result<Event, SchemaError> {
    let event = as_object(value, location)?;

    for property in ["type", "value"] {
        if !event.contains_key(property) {
            return Err(SchemaError::RequiredProperty {
                property: property.to_string(),
            });
        }
    }

    let kind = &event["type"];
    let kind = match kind.as_str() {
        Some("open") => EventKind::Open,
        Some("close") => EventKind::Close,
        Some(_) => {
            return Err(SchemaError::UnknownEventType {
                location: format!("{}.type", location),
                found: repr(kind),
            })
        }
        None => return Err(wrong_type(&format!("{}.type", location), kind, "string")),
    };

    let value_location = format!("{}.value", location);
    let value = &event["value"];
    let seconds = match value.as_u64() {
        Some(seconds) => seconds,
        None if value.is_i64() => {
            return Err(SchemaError::BelowMinimum {
                location: value_location,
                found: repr(value),
                minimum: 0,
            })
        }
        None => return Err(wrong_type(&value_location, value, "integer")),
    };

    match u32::try_from(seconds) {
        Ok(seconds) if seconds <= MAX_SECONDS_OF_DAY => Ok(Event {
            kind,
            value: seconds,
        }),
        _ => Err(SchemaError::AboveMaximum {
            location: value_location,
            found: repr(value),
            maximum: MAX_SECONDS_OF_DAY,
        }),
    }
}

fn as_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>, SchemaError> {
    value.as_object().ok_or_else(|| wrong_type(location, value, "object"))
}

fn wrong_type(location: &str, value: &Value, expected: &'static str) -> SchemaError {
    SchemaError::WrongType {
        location: location.to_string(),
        found: repr(value),
        expected,
    }
}

/// Strings are quoted the way jsonschema messages quote them
fn repr(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s),
        other => other.to_string(),
    }
}
