use std::time::Duration;

/// The default base URL for the GestãoClick API
pub const DEFAULT_BASE_URL: &str = "https://api.gestaoclick.com";

/// Environment variable overriding the API base URL
pub const BASE_URL_VAR: &str = "GESTA_CLICK_BASE_URL";

/// Environment variable holding the API access token
pub const ACCESS_TOKEN_VAR: &str = "ACCESS_TOKEN";

/// Environment variable holding the API secret access token
pub const SECRET_ACCESS_TOKEN_VAR: &str = "SECRET_ACCESS_TOKEN";

/// The header to use to send the access token in requests
pub const ACCESS_TOKEN_HEADER: &str = "access-token";

/// The header to use to send the secret access token in requests
pub const SECRET_ACCESS_TOKEN_HEADER: &str = "secret-access-token";

/// How long a request may take before it is aborted
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }
}
