use crate::config::Config;
use crate::error::WorkingHoursError;
use crate::print::print_opening_hours;
use crate::request::{decode_and_load_json, get_query_param, ParseError, QueryError};
use crate::validate::{validate_request, SchemaError};
use crate::week::Week;
use serde::Serialize;
use thiserror::Error;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_UNPROCESSABLE_ENTITY: u16 = 422;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RequestError {
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    WorkingHours(#[from] WorkingHoursError),
}

impl RequestError {
    /// Malformed requests are the client's fault; well formed requests with
    /// hours that cannot be paired are unprocessable.
    pub fn status_code(&self) -> u16 {
        match self {
            RequestError::Query(_) | RequestError::Parse(_) | RequestError::Schema(_) => {
                STATUS_BAD_REQUEST
            }
            RequestError::WorkingHours(_) => STATUS_UNPROCESSABLE_ENTITY,
        }
    }
}

/// JSON body of every response
#[derive(Serialize, Debug, Eq, PartialEq)]
#[serde(untagged)]
pub enum ResponseBody {
    WorkingHours { working_hours: String },
    Error { error: String },
}

/// Turns a base64 query into the printed weekly schedule
///
/// # Examples
/// ```
/// use opening_hours_libs::config::Config;
/// use opening_hours_libs::response::format_working_hours;
///
/// // Every day empty
/// let query = opening_hours_libs::request::encode_query(
///     r#"{"monday": [], "tuesday": [], "wednesday": [], "thursday": [],
///         "friday": [], "saturday": [], "sunday": []}"#,
/// ).unwrap();
///
/// let hours = format_working_hours(Some(&query), &Config::default()).unwrap();
/// assert!(hours.starts_with("Monday: Closed\nTuesday: Closed"));
/// ```
pub fn format_working_hours(query: Option<&str>, config: &Config) -> Result<String, RequestError> {
    let query = get_query_param(query, &config.query_parameter)?;
    let request = decode_and_load_json(query)?;
    let events = validate_request(&request, config.max_events_per_day)?;
    let days = Week::from_events(&events)?.into_days();

    Ok(print_opening_hours(&days))
}

/// Status code and body for a query
pub fn respond(query: Option<&str>, config: &Config) -> (u16, ResponseBody) {
    match format_working_hours(query, config) {
        Ok(working_hours) => (STATUS_OK, ResponseBody::WorkingHours { working_hours }),
        Err(err) => (
            err.status_code(),
            ResponseBody::Error {
                error: err.to_string(),
            },
        ),
    }
}
