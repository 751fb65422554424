use rb_core::deserialize_id;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncItemInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub board_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub item_id: i64,
    /// Column on the source board whose value is copied to the twin
    pub column_id: String,
    pub name_contains: String,
    /// Board holding the link column; the twin's board when it differs from `board_id`
    #[serde(deserialize_with = "deserialize_id")]
    pub another_board_id: i64,
    pub link_column_title: String,
}
