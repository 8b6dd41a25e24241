//! Data Sources
//!
//! Where tab collections come from. The widget uses [`HttpSource`]; tests
//! script their own.

mod http;

pub use http::HttpSource;

use crate::error::FetchFailure;
use crate::models::Tab;

/// Raw access to one endpoint per tab
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Body of a successful response for `tab`'s endpoint.
    ///
    /// Non-2xx answers must come back as [`FetchFailure::Status`].
    async fn fetch(&self, tab: Tab) -> Result<String, FetchFailure>;
}
