//! Weather page: output regions, the view controller and HTML rendering.

pub mod controller;
pub mod document;
pub mod query;
pub mod region;

pub use controller::WeatherViewController;
pub use document::Page;
pub use query::view_mode_from_page_url;
pub use region::{MemoryRegion, OutputRegion, PageRegions};
