use std::collections::HashMap;

use tracing::warn;

/// Filter parameters sent as the request query string.
pub type FilterParams = HashMap<String, String>;

/// Convert raw `key=value` tokens into filter parameters.
///
/// Tokens without a `=` or with an empty key are dropped with a warning.
/// Splitting happens on the first `=` only, so values may contain further
/// `=` characters. For duplicate keys the last token wins.
pub fn parse(raw: &[String]) -> FilterParams {
    let mut params = FilterParams::new();
    for token in raw {
        let (key, value) = match token.split_once('=') {
            Some(pair) => pair,
            None => {
                warn!("ignoring filter parameter (expected key=value): {token}");
                continue;
            }
        };
        let key = key.trim();
        if key.is_empty() {
            warn!("ignoring filter parameter (empty key): {token}");
            continue;
        }
        params.insert(key.to_string(), value.trim().to_string());
    }
    params
}
