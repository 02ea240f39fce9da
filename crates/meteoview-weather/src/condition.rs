//! WMO weather interpretation codes and their display labels.

/// Label for codes outside the table
pub const UNKNOWN_CONDITION_LABEL: &str = "Condition not available";

/// Weather conditions reported by Open-Meteo as WMO codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    ClearSky,
    MainlyClear,
    PartlyCloudy,
    Overcast,
    Fog,
    DepositingRimeFog,
    DrizzleLight,
    DrizzleModerate,
    DrizzleDense,
    FreezingDrizzleLight,
    FreezingDrizzleDense,
    RainSlight,
    RainModerate,
    RainHeavy,
    FreezingRainLight,
    FreezingRainHeavy,
    SnowFallSlight,
    SnowFallModerate,
    SnowFallHeavy,
    SnowGrains,
    RainShowersSlight,
    RainShowersModerate,
    RainShowersViolent,
    SnowShowersSlight,
    SnowShowersHeavy,
    Thunderstorm,
    ThunderstormSlightHail,
    ThunderstormHeavyHail,
}

impl WeatherCondition {
    /// Convert a WMO weather code to a condition, `None` if the code is not
    /// one Open-Meteo documents.
    /// See: https://open-meteo.com/en/docs#weathervariables
    pub fn from_wmo_code(code: i64) -> Option<Self> {
        let condition = match code {
            0 => Self::ClearSky,
            1 => Self::MainlyClear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45 => Self::Fog,
            48 => Self::DepositingRimeFog,
            51 => Self::DrizzleLight,
            53 => Self::DrizzleModerate,
            55 => Self::DrizzleDense,
            56 => Self::FreezingDrizzleLight,
            57 => Self::FreezingDrizzleDense,
            61 => Self::RainSlight,
            63 => Self::RainModerate,
            65 => Self::RainHeavy,
            66 => Self::FreezingRainLight,
            67 => Self::FreezingRainHeavy,
            71 => Self::SnowFallSlight,
            73 => Self::SnowFallModerate,
            75 => Self::SnowFallHeavy,
            77 => Self::SnowGrains,
            80 => Self::RainShowersSlight,
            81 => Self::RainShowersModerate,
            82 => Self::RainShowersViolent,
            85 => Self::SnowShowersSlight,
            86 => Self::SnowShowersHeavy,
            95 => Self::Thunderstorm,
            96 => Self::ThunderstormSlightHail,
            99 => Self::ThunderstormHeavyHail,
            _ => return None,
        };
        Some(condition)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::MainlyClear => "Mainly clear",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::DepositingRimeFog => "Depositing rime fog",
            Self::DrizzleLight => "Drizzle: Light",
            Self::DrizzleModerate => "Drizzle: Moderate",
            Self::DrizzleDense => "Drizzle: Dense",
            Self::FreezingDrizzleLight => "Freezing Drizzle: Light",
            Self::FreezingDrizzleDense => "Freezing Drizzle: Dense",
            Self::RainSlight => "Rain: Slight",
            Self::RainModerate => "Rain: Moderate",
            Self::RainHeavy => "Rain: Heavy",
            Self::FreezingRainLight => "Freezing Rain: Light",
            Self::FreezingRainHeavy => "Freezing Rain: Heavy",
            Self::SnowFallSlight => "Snow fall: Slight",
            Self::SnowFallModerate => "Snow fall: Moderate",
            Self::SnowFallHeavy => "Snow fall: Heavy",
            Self::SnowGrains => "Snow grains",
            Self::RainShowersSlight => "Rain showers: Slight",
            Self::RainShowersModerate => "Rain showers: Moderate",
            Self::RainShowersViolent => "Rain showers: Violent",
            Self::SnowShowersSlight => "Snow showers: Slight",
            Self::SnowShowersHeavy => "Snow showers: Heavy",
            Self::Thunderstorm => "Thunderstorm: Slight or moderate",
            Self::ThunderstormSlightHail => "Thunderstorm with slight hail",
            Self::ThunderstormHeavyHail => "Thunderstorm with heavy hail",
        }
    }
}

/// Label for any weather code. Never fails: unknown codes get
/// [`UNKNOWN_CONDITION_LABEL`].
pub fn condition_label(code: i64) -> &'static str {
    WeatherCondition::from_wmo_code(code)
        .map(|c| c.label())
        .unwrap_or(UNKNOWN_CONDITION_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &[(i64, &str)] = &[
        (0, "Clear sky"),
        (1, "Mainly clear"),
        (2, "Partly cloudy"),
        (3, "Overcast"),
        (45, "Fog"),
        (48, "Depositing rime fog"),
        (51, "Drizzle: Light"),
        (53, "Drizzle: Moderate"),
        (55, "Drizzle: Dense"),
        (56, "Freezing Drizzle: Light"),
        (57, "Freezing Drizzle: Dense"),
        (61, "Rain: Slight"),
        (63, "Rain: Moderate"),
        (65, "Rain: Heavy"),
        (66, "Freezing Rain: Light"),
        (67, "Freezing Rain: Heavy"),
        (71, "Snow fall: Slight"),
        (73, "Snow fall: Moderate"),
        (75, "Snow fall: Heavy"),
        (77, "Snow grains"),
        (80, "Rain showers: Slight"),
        (81, "Rain showers: Moderate"),
        (82, "Rain showers: Violent"),
        (85, "Snow showers: Slight"),
        (86, "Snow showers: Heavy"),
        (95, "Thunderstorm: Slight or moderate"),
        (96, "Thunderstorm with slight hail"),
        (99, "Thunderstorm with heavy hail"),
    ];

    #[test]
    fn test_every_documented_code() {
        for (code, label) in TABLE {
            assert_eq!(condition_label(*code), *label, "code {code}");
        }
    }

    #[test]
    fn test_unknown_codes_fall_back() {
        for code in [-1, 4, 13, 44, 50, 100, 999, i64::MAX, i64::MIN] {
            assert_eq!(condition_label(code), UNKNOWN_CONDITION_LABEL, "code {code}");
        }
    }

    #[test]
    fn test_only_documented_codes_map() {
        let mapped = (-10..=200)
            .filter(|code| WeatherCondition::from_wmo_code(*code).is_some())
            .count();
        assert_eq!(mapped, TABLE.len());
    }

    #[test]
    fn test_overcast() {
        assert_eq!(WeatherCondition::from_wmo_code(3), Some(WeatherCondition::Overcast));
        assert_eq!(WeatherCondition::Overcast.label(), "Overcast");
    }
}
