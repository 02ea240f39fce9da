use meteoview_weather::ViewMode;
use url::{form_urlencoded, Url};

/// Name of the query parameter selecting the view.
pub const VIEW_PARAM: &str = "view";

/// Determine the view mode from the page address.
///
/// Accepts a full URL (`http://host/page?view=condition`) or just its query
/// string (`?view=condition`, `view=condition`). If `view` appears more than
/// once the first value wins. Anything unparseable yields
/// [`ViewMode::Unrecognized`].
pub fn view_mode_from_page_url(page_url: &str) -> ViewMode {
    let page_url = page_url.trim();

    let query = if page_url.contains("://") {
        match Url::parse(page_url) {
            Ok(url) => url.query().map(str::to_owned),
            Err(e) => {
                tracing::debug!("Ignoring unparseable page URL {:?}: {}", page_url, e);
                None
            }
        }
    } else {
        Some(page_url.trim_start_matches('?').to_owned())
    };

    let view = query.and_then(|q| {
        form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == VIEW_PARAM)
            .map(|(_, value)| value.into_owned())
    });

    ViewMode::from_param(view.as_deref())
}
