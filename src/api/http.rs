//! HTTP source backed by the browser's `fetch`.

use gloo_net::http::Request;
use gloo_net::Error;

use super::DataSource;
use crate::config::HubConfig;
use crate::error::FetchFailure;
use crate::models::Tab;

#[derive(Debug, Clone)]
pub struct HttpSource {
    config: HubConfig,
}

impl HttpSource {
    pub fn new(config: HubConfig) -> Self {
        Self { config }
    }
}

impl DataSource for HttpSource {
    async fn fetch(&self, tab: Tab) -> Result<String, FetchFailure> {
        let url = self.config.endpoint_url(tab);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchFailure::Transport(transport_message(e)))?;

        if !response.ok() {
            return Err(FetchFailure::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchFailure::Transport(transport_message(e)))
    }
}

/// Message of the underlying failure, without the JS error name
/// ("Failed to fetch", not "TypeError: Failed to fetch").
fn transport_message(err: Error) -> String {
    match err {
        Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}
