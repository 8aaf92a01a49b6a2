use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum QueryError {
    #[error("Query parameter \"{parameter}\" is missing")]
    Missing { parameter: String },
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ParseError {
    #[error("Invalid base64 format")]
    InvalidBase64,
    #[error("Invalid json format")]
    InvalidJson,
}

/// Returns the value of `parameter`, failing if the request has none
pub fn get_query_param<'a>(value: Option<&'a str>, parameter: &str) -> Result<&'a str, QueryError> {
    value.ok_or_else(|| QueryError::Missing {
        parameter: parameter.to_string(),
    })
}

/// Decodes a base64 query and parses the JSON inside
///
/// # Examples
/// ```
/// use opening_hours_libs::request::{decode_and_load_json, ParseError};
///
/// // {"test": "test"}
/// let json = decode_and_load_json("eyJ0ZXN0IjogInRlc3QifQ==").unwrap();
/// assert_eq!(json["test"], "test");
///
/// assert_eq!(decode_and_load_json("invalid-base-64"), Err(ParseError::InvalidBase64));
/// ```
pub fn decode_and_load_json(query: &str) -> Result<Value, ParseError> {
    let decoded = STANDARD
        .decode(query.trim())
        .map_err(|_| ParseError::InvalidBase64)?;

    serde_json::from_slice(&decoded).map_err(|_| ParseError::InvalidJson)
}

/// Checks `json` parses and encodes its compact form as a query
pub fn encode_query(json: &str) -> Result<String, ParseError> {
    let value: Value = serde_json::from_str(json).map_err(|_| ParseError::InvalidJson)?;

    Ok(STANDARD.encode(value.to_string()))
}
