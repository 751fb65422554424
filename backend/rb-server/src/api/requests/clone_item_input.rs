use rb_core::deserialize_id;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneItemInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub board_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub item_id: i64,
    pub name_contains: String,
    pub target_group_title: String,
    #[serde(deserialize_with = "deserialize_id")]
    pub target_board_id: i64,
    pub link_column_title: String,
}
