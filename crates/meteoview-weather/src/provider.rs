use crate::types::{Coordinate, CurrentReading, CurrentVariable, ForecastResponse, WeatherError};
use reqwest::Client;
use std::time::Duration;
use tracing::instrument;

/// Open-Meteo client for single current-value lookups.
///
/// No retries are attempted: one request, one answer.
#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    /// Build a provider for `base_url`. `timeout` of `None` (or zero) waits
    /// indefinitely for the response.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, WeatherError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout.filter(|t| !t.is_zero()) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(WeatherError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    /// Forecast URL asking for one `current` variable at `coordinate`.
    pub fn request_url(&self, coordinate: Coordinate, variable: CurrentVariable) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}latitude={}&longitude={}&current={}",
            self.base_url,
            separator,
            coordinate.latitude,
            coordinate.longitude,
            variable.as_param()
        )
    }

    /// Fetch the current value of `variable`.
    ///
    /// Non-2xx statuses, bodies that are not JSON and responses without the
    /// requested field are all errors.
    #[instrument(skip(self), level = "info")]
    pub async fn fetch_current(
        &self,
        coordinate: Coordinate,
        variable: CurrentVariable,
    ) -> Result<CurrentReading, WeatherError> {
        let url = self.request_url(coordinate, variable);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(WeatherError::Transport)?;
        let forecast: ForecastResponse =
            serde_json::from_str(&body).map_err(|e| WeatherError::Parse(e.to_string()))?;

        let reading = forecast.reading(variable)?;
        tracing::info!("Fetched current {}: {:?}", variable, reading);
        Ok(reading)
    }
}
