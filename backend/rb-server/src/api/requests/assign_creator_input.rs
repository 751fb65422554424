use rb_core::deserialize_id;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCreatorInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub board_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub item_id: i64,
    pub name_contains: String,
    /// People column to fill
    pub column_id: String,
}
