//! Output regions the controller writes into.
//!
//! A region is anything that can hold either plain text or an HTML fragment,
//! like a DOM element's `textContent` / `innerHTML`.

use askama::Template;
use parking_lot::Mutex;
use std::sync::Arc;

pub trait OutputRegion: Send + Sync {
    /// Replace the contents with plain text.
    fn set_text(&self, text: &str);

    /// Replace the contents with an HTML fragment.
    fn set_html(&self, html: &str);

    fn clear(&self) {
        self.set_text("");
    }
}

/// The three regions of the weather page.
#[derive(Clone)]
pub struct PageRegions {
    pub location: Arc<dyn OutputRegion>,
    pub weather_data: Arc<dyn OutputRegion>,
    pub error_message: Arc<dyn OutputRegion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Content {
    Text(String),
    Html(String),
}

/// Region contents as markup: text is escaped, HTML passes through.
#[derive(Template)]
#[template(
    source = "{% match content %}{% when Content::Text with (text) %}{{ text }}{% when Content::Html with (html) %}{{ html|safe }}{% endmatch %}",
    ext = "html"
)]
struct RegionMarkup {
    content: Content,
}

/// In-memory region keyed by its element id.
#[derive(Debug)]
pub struct MemoryRegion {
    id: String,
    content: Mutex<Content>,
}

impl MemoryRegion {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            content: Mutex::new(Content::Text(String::new())),
        }
    }

    /// Region starting out with the given markup.
    pub fn with_html(id: &str, html: &str) -> Self {
        Self {
            id: id.to_string(),
            content: Mutex::new(Content::Html(html.to_string())),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Contents as markup; plain text is escaped.
    pub fn inner_html(&self) -> String {
        let content = self.content.lock().clone();
        render_markup(&RegionMarkup { content })
    }

    /// Contents exactly as last written, text or markup.
    pub fn raw(&self) -> String {
        match &*self.content.lock() {
            Content::Text(s) | Content::Html(s) => s.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match &*self.content.lock() {
            Content::Text(s) | Content::Html(s) => s.is_empty(),
        }
    }
}

impl OutputRegion for MemoryRegion {
    fn set_text(&self, text: &str) {
        *self.content.lock() = Content::Text(text.to_string());
    }

    fn set_html(&self, html: &str) {
        *self.content.lock() = Content::Html(html.to_string());
    }
}

/// Render a markup template. Rendering only fails on formatter errors,
/// which leave the region empty.
pub(crate) fn render_markup(template: &impl Template) -> String {
    template.render().unwrap_or_else(|e| {
        tracing::error!("Template rendering error: {}", e);
        String::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let region = MemoryRegion::new("error-message");
        region.set_text("Failed: a < b & c > d");
        assert_eq!(region.inner_html(), "Failed: a &lt; b &amp; c &gt; d");
        assert_eq!(region.raw(), "Failed: a < b & c > d");
    }

    #[test]
    fn test_html_kept_verbatim() {
        let region = MemoryRegion::new("weather-data");
        region.set_html("<p>Condition: <span>Fog</span></p>");
        assert_eq!(region.inner_html(), "<p>Condition: <span>Fog</span></p>");
    }

    #[test]
    fn test_clear() {
        let region = MemoryRegion::with_html("weather-data", "<p>initial</p>");
        assert!(!region.is_empty());
        region.clear();
        assert!(region.is_empty());
        assert_eq!(region.inner_html(), "");
    }

    #[test]
    fn test_id() {
        assert_eq!(MemoryRegion::new("location").id(), "location");
    }
}
