use std::io::Write;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use meteoview_core::{AppError, Config};
use meteoview_page::{Page, WeatherViewController};
use meteoview_weather::{Coordinate, WeatherProvider};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

/// Render the weather page for the page URL given as the first argument.
async fn run() -> Result<(), AppError> {
    meteoview_core::init()?;

    let page_url = std::env::args().nth(1).unwrap_or_default();
    let config = Config::load_validated()?;

    let coordinate = Coordinate::new(config.weather.latitude, config.weather.longitude);
    let provider = WeatherProvider::new(
        &config.weather.api_base_url,
        config
            .weather
            .request_timeout_secs
            .map(Duration::from_secs),
    )
    .context("Failed to create weather provider")?;

    let page = Page::new();
    let controller = WeatherViewController::new(provider, coordinate, page.regions());
    let mode = controller.on_ready(&page_url).await;
    tracing::info!("Rendered page for view {:?}", mode);

    let html = page.render().context("Failed to render page")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", html)?;
    stdout.flush()?;
    Ok(())
}
