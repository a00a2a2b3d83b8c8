pub mod config;
pub mod constants;
pub mod error;
pub mod params;
pub mod resource;

use config::Config;
use error::GetError;
use params::FilterParams;
use resource::Summary;

/// Client for issuing authenticated requests against the GestãoClick API.
#[derive(Clone, Debug)]
pub struct Client {
    http_client: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(http_client: reqwest::Client, config: Config) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetch a single page of `endpoint`, filtered by `params`, and
    /// summarize the response.
    pub async fn get(&self, endpoint: &str, params: &FilterParams) -> Result<Summary, GetError> {
        resource::get(&self.http_client, &self.config, endpoint, params).await
    }
}
