use serde::Serialize;

/// Output fields handed back to the recipe when a trigger fires
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
}

impl TriggerOutput {
    /// No output fields; used when a recipe is first subscribed
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_item(board_id: i64, item_id: i64) -> Self {
        Self {
            board_id: Some(board_id),
            item_id: Some(item_id),
        }
    }
}
