use rb_core::deserialize_id;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapExistingItemsInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub board_id: i64,
}
