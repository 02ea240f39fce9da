use askama::Template;
use std::sync::Arc;

use crate::region::{MemoryRegion, PageRegions};

pub const LOCATION_ID: &str = "location";
pub const WEATHER_DATA_ID: &str = "weather-data";
pub const ERROR_MESSAGE_ID: &str = "error-message";

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    location_id: &'a str,
    location: String,
    data_id: &'a str,
    data: String,
    error_id: &'a str,
    error: String,
}

/// The weather page held in memory, rendered to a full HTML document once
/// the controller is done with it.
#[derive(Debug, Clone)]
pub struct Page {
    pub location: Arc<MemoryRegion>,
    pub weather_data: Arc<MemoryRegion>,
    pub error_message: Arc<MemoryRegion>,
}

impl Page {
    pub fn new() -> Self {
        Self {
            location: Arc::new(MemoryRegion::new(LOCATION_ID)),
            weather_data: Arc::new(MemoryRegion::new(WEATHER_DATA_ID)),
            error_message: Arc::new(MemoryRegion::new(ERROR_MESSAGE_ID)),
        }
    }

    /// Handles for the controller to write through.
    pub fn regions(&self) -> PageRegions {
        PageRegions {
            location: self.location.clone(),
            weather_data: self.weather_data.clone(),
            error_message: self.error_message.clone(),
        }
    }

    /// Render the full HTML document. Region contents are already markup.
    pub fn render(&self) -> Result<String, askama::Error> {
        PageTemplate {
            location_id: self.location.id(),
            location: self.location.inner_html(),
            data_id: self.weather_data.id(),
            data: self.weather_data.inner_html(),
            error_id: self.error_message.id(),
            error: self.error_message.inner_html(),
        }
        .render()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_page() {
        let page = Page::new();
        let html = page.render().unwrap();
        assert!(html.contains(r#"<p id="location"></p>"#));
        assert!(html.contains(r#"<div id="weather-data"></div>"#));
        assert!(html.contains(r#"<p id="error-message"></p>"#));
    }

    #[test]
    fn test_render_escapes_text_regions() {
        let page = Page::new();
        page.regions()
            .error_message
            .set_text("Failed to load condition: expected value at line 1 column 1 <html>");
        let html = page.render().unwrap();
        assert!(html.contains("expected value at line 1 column 1 &lt;html&gt;"));
    }

    #[test]
    fn test_regions_share_storage() {
        let page = Page::new();
        page.regions().weather_data.set_html("<p>Loading condition...</p>");
        assert_eq!(page.weather_data.inner_html(), "<p>Loading condition...</p>");
    }
}
