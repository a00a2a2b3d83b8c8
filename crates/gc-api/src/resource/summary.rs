use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cap on how many first-item fields make it into a summary.
pub const MAX_FIRST_ITEM_FIELDS: usize = 10;

/// Raw response page from the API.
///
/// The real schema varies by endpoint; only the top-level `data` list is
/// assumed, and a missing list counts as an empty page.
#[derive(Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Bounded digest of a response page.
#[derive(Debug, Serialize)]
pub struct Summary {
    /// Number of records in this page.
    pub item_count: usize,
    /// Up to [`MAX_FIRST_ITEM_FIELDS`] fields of the first record, values
    /// rendered as JSON text. Empty when the page has no records.
    pub first_item_fields: Vec<(String, String)>,
}

impl From<ResourcePage> for Summary {
    fn from(page: ResourcePage) -> Self {
        let first_item_fields = page
            .data
            .first()
            .and_then(Value::as_object)
            .map(|item| {
                item.iter()
                    .take(MAX_FIRST_ITEM_FIELDS)
                    .map(|(key, value)| (key.clone(), value.to_string()))
                    .collect()
            })
            .unwrap_or_default();
        Self {
            item_count: page.data.len(),
            first_item_fields,
        }
    }
}
