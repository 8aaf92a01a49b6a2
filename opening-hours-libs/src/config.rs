use std::env;

pub const DEFAULT_QUERY_PARAMETER: &str = "query";

/// A week of 48 events is 24 shifts, more than any real schedule needs
pub const DEFAULT_MAX_EVENTS_PER_DAY: usize = 48;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Query string parameter holding the base64 encoded request
    pub query_parameter: String,
    pub max_events_per_day: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            query_parameter: DEFAULT_QUERY_PARAMETER.to_string(),
            max_events_per_day: DEFAULT_MAX_EVENTS_PER_DAY,
        }
    }
}

impl Config {
    /// Reads `QUERY_PARAMETER` and `MAX_EVENTS_PER_DAY`
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or unparsable values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        Config {
            query_parameter: lookup("QUERY_PARAMETER")
                .filter(|p| !p.is_empty())
                .unwrap_or(defaults.query_parameter),
            max_events_per_day: lookup("MAX_EVENTS_PER_DAY")
                .and_then(|e| e.parse::<usize>().ok())
                .unwrap_or(defaults.max_events_per_day),
        }
    }
}
