//! Page controller: location label, view selection and fetch-and-render.

use askama::Template;
use meteoview_weather::{
    condition_label, format_reported_value, Coordinate, CurrentReading, CurrentVariable,
    ViewMode, WeatherError, WeatherProvider, UNKNOWN_CONDITION_LABEL,
};

use crate::query::view_mode_from_page_url;
use crate::region::{render_markup, PageRegions};

#[derive(Template)]
#[template(source = "<p>Loading {{ subject }}...</p>", ext = "html")]
struct LoadingMarkup<'a> {
    subject: &'a str,
}

#[derive(Template)]
#[template(source = "<p>Temperature: <span>{{ value }}</span> &deg;C</p>", ext = "html")]
struct TemperatureMarkup {
    value: String,
}

#[derive(Template)]
#[template(source = "<p>Condition: <span>{{ label }}</span></p>", ext = "html")]
struct ConditionMarkup<'a> {
    label: &'a str,
}

/// Drives one page load: writes the location, then fetches and renders the
/// single value selected by `view`.
pub struct WeatherViewController {
    provider: WeatherProvider,
    coordinate: Coordinate,
    regions: PageRegions,
}

impl WeatherViewController {
    pub fn new(provider: WeatherProvider, coordinate: Coordinate, regions: PageRegions) -> Self {
        Self {
            provider,
            coordinate,
            regions,
        }
    }

    /// Page-ready entry point. Returns the view mode that was acted on.
    ///
    /// For an unrecognized (or absent) `view`, only the location label is
    /// written; the data and error regions keep their initial markup.
    pub async fn on_ready(&self, page_url: &str) -> ViewMode {
        self.regions
            .location
            .set_text(&format!("Location: {}", self.coordinate));

        let mode = view_mode_from_page_url(page_url);
        if mode == ViewMode::Unrecognized {
            tracing::debug!("No recognized view requested, nothing to fetch");
            return mode;
        }

        self.fetch_and_render(mode).await;
        mode
    }

    /// Fetch the value for `mode` and write it into the page.
    ///
    /// Every outcome overwrites the previous contents of the data and error
    /// regions, so calling this again for the same response gives the same
    /// page.
    pub async fn fetch_and_render(&self, mode: ViewMode) {
        let Some(variable) = mode.variable() else {
            return;
        };

        self.regions
            .weather_data
            .set_html(&render_markup(&LoadingMarkup {
                subject: variable.subject(),
            }));
        self.regions.error_message.clear();

        match self.provider.fetch_current(self.coordinate, variable).await {
            Ok(reading) => {
                self.regions.weather_data.set_html(&render_reading(reading));
                self.regions.error_message.clear();
            }
            Err(err) => self.render_failure(variable, &err),
        }
    }

    fn render_failure(&self, variable: CurrentVariable, err: &WeatherError) {
        tracing::error!(
            hint = err.user_message(),
            "Error fetching {} data: {}",
            variable.subject(),
            err
        );
        self.regions.weather_data.clear();
        self.regions
            .error_message
            .set_text(&format!("Failed to load {}: {}", variable.subject(), err));
    }
}

/// Markup for a successful reading.
///
/// A code that is not an integer gets the same fallback label as an
/// unknown one.
pub fn render_reading(reading: CurrentReading) -> String {
    match reading {
        CurrentReading::Temperature(value) => render_markup(&TemperatureMarkup {
            value: format_reported_value(&value),
        }),
        CurrentReading::WeatherCode(code) => render_markup(&ConditionMarkup {
            label: code.map(condition_label).unwrap_or(UNKNOWN_CONDITION_LABEL),
        }),
    }
}
