use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// Geographic coordinate the forecast is requested for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat {}, Lon {}", self.latitude, self.longitude)
    }
}

/// Which value the page was asked to show, from the `view` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    Temperature,
    Condition,
    #[default]
    Unrecognized,
}

impl ViewMode {
    /// Exact, case-sensitive match on the parameter value. Anything else,
    /// including a missing parameter, is `Unrecognized`.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("temperature") => Self::Temperature,
            Some("condition") => Self::Condition,
            _ => Self::Unrecognized,
        }
    }

    /// The API variable this view needs, or `None` when nothing is fetched.
    pub fn variable(&self) -> Option<CurrentVariable> {
        match self {
            Self::Temperature => Some(CurrentVariable::Temperature2m),
            Self::Condition => Some(CurrentVariable::WeatherCode),
            Self::Unrecognized => None,
        }
    }
}

/// A variable requested through the `current` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurrentVariable {
    Temperature2m,
    WeatherCode,
}

impl CurrentVariable {
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Temperature2m => "temperature_2m",
            Self::WeatherCode => "weather_code",
        }
    }

    /// Short noun used in loading and failure messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Self::Temperature2m => "temperature",
            Self::WeatherCode => "condition",
        }
    }

    fn missing_message(&self) -> &'static str {
        match self {
            Self::Temperature2m => "Temperature data not found in API response.",
            Self::WeatherCode => "Weather condition data not found in API response.",
        }
    }
}

impl fmt::Display for CurrentVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Subset of the forecast response this crate reads.
/// See: https://open-meteo.com/en/docs#current_weather
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    /// Kept as a raw map: a key that is present counts as data, whatever
    /// its value.
    #[serde(default)]
    pub current: Option<Map<String, Value>>,
}

impl ForecastResponse {
    /// Pull the requested variable out of the `current` block.
    ///
    /// Fails only when `current` or the key is absent. A present key with
    /// an odd value (`null`, a float code) still yields a reading.
    pub fn reading(&self, variable: CurrentVariable) -> Result<CurrentReading, WeatherError> {
        let value = self
            .current
            .as_ref()
            .and_then(|current| current.get(variable.as_param()))
            .ok_or(WeatherError::MissingField(variable))?;

        let reading = match variable {
            CurrentVariable::Temperature2m => CurrentReading::Temperature(value.clone()),
            CurrentVariable::WeatherCode => CurrentReading::WeatherCode(weather_code_from_value(value)),
        };
        Ok(reading)
    }
}

/// A single current value returned by the API
#[derive(Debug, Clone, PartialEq)]
pub enum CurrentReading {
    /// Degrees Celsius, exactly as reported
    Temperature(Value),
    /// WMO weather interpretation code, `None` when the value is not an integer
    WeatherCode(Option<i64>),
}

/// Integer weather code from a JSON value. Integral floats (`3.0`) and
/// canonical integer strings (`"3"`) count; anything else does not.
pub fn weather_code_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.parse::<i64>().ok().filter(|code| code.to_string() == *s),
        _ => None,
    }
}

/// Text for a reported value as it would appear on the page: numbers in
/// shortest form (`20.0` shows as `20`), strings unquoted, `null` as `null`.
pub fn format_reported_value(value: &Value) -> String {
    match value {
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Parse(String),

    #[error("{}", .0.missing_message())]
    MissingField(CurrentVariable),

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("Failed to build HTTP client: {0}")]
    Client(reqwest::Error),
}

impl WeatherError {
    /// Returns a short, non-technical hint for the failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Http { status } if *status >= 500 => {
                "The weather service is experiencing issues. Please try again later."
            }
            WeatherError::Http { .. } => "The weather request was rejected.",
            WeatherError::Parse(_) => "Received an unexpected response from the weather service.",
            WeatherError::MissingField(_) => "The weather service did not return the requested data.",
            WeatherError::Transport(_) => "Unable to reach the weather service. Check your connection.",
            WeatherError::Client(_) => "The HTTP client could not be created.",
        }
    }
}
