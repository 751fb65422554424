use serde::{Deserialize, Serialize};

/// Item reference as listed on a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    #[serde(deserialize_with = "crate::deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub group_id: Option<String>,
}
