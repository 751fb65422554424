use rb_core::deserialize_id;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetMonthInput {
    #[serde(deserialize_with = "deserialize_id")]
    pub board_id: i64,
    #[serde(deserialize_with = "deserialize_id")]
    pub item_id: i64,
    pub name_contains: String,
    /// Date column to fill
    pub column_id: String,
}
