use serde::{Deserialize, Serialize};

/// One column value of an item, as read from the platform.
///
/// `value` is the raw JSON document the platform stores for the column
/// (e.g. `{"index":1}` for a status column), or `None` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemField {
    pub id: String,
    pub title: String,
    pub value: Option<String>,
}

impl ItemField {
    pub fn new(id: &str, title: &str, value: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value: value.map(String::from),
        }
    }
}
