use secrecy::ExposeSecret;
use tracing::info;

use crate::config::Config;
use crate::constants::{ACCESS_TOKEN_HEADER, REQUEST_TIMEOUT, SECRET_ACCESS_TOKEN_HEADER};
use crate::error::GetError;
use crate::params::FilterParams;

use super::summary::ResourcePage;
use super::Summary;

/// Normalize a user-supplied endpoint into a path starting with `/`.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.starts_with('/') {
        endpoint.to_string()
    } else {
        format!("/{endpoint}")
    }
}

/// Perform a single authenticated GET against `endpoint` and summarize the
/// response page.
pub async fn get(
    client: &reqwest::Client,
    config: &Config,
    endpoint: &str,
    params: &FilterParams,
) -> Result<Summary, GetError> {
    let url = format!("{}{}", config.base_url, normalize_endpoint(endpoint));
    info!("sending request to {url}");
    if !params.is_empty() {
        info!("with parameters: {params:?}");
    }
    let response = client
        .get(&url)
        .header("Content-Type", "application/json")
        .header(ACCESS_TOKEN_HEADER, config.access_token.expose_secret())
        .header(
            SECRET_ACCESS_TOKEN_HEADER,
            config.secret_access_token.expose_secret(),
        )
        .query(params)
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.map_err(GetError::ResponseBodyError)?;
        return Err(GetError::ResponseError { status, body });
    }
    let body = response.text().await.map_err(GetError::ResponseBodyError)?;
    let page = serde_json::from_str::<ResourcePage>(&body)?;
    Ok(Summary::from(page))
}
