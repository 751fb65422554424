use crate::TwinRef;

use serde::{Deserialize, Serialize};

/// Back-reference stored in a board's link column.
///
/// `text` is always `"{boardId}:{itemId}"`; `url` points at the item in the
/// account's web UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkValue {
    pub url: String,
    pub text: String,
}

impl LinkValue {
    pub fn for_item(account_subdomain: &str, board_id: i64, item_id: i64) -> Self {
        Self {
            url: format!(
                "https://{}.monday.com/boards/{}/pulses/{}",
                account_subdomain, board_id, item_id
            ),
            text: TwinRef::new(board_id, item_id).encode(),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "url": self.url,
            "text": self.text,
        })
    }
}
