use crate::{CoreError, Result as CoreResult};

use serde::Deserialize;

/// Board/item pair identifying the twin of an item on another board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TwinRef {
    pub board_id: i64,
    pub item_id: i64,
}

#[derive(Deserialize)]
struct StoredLink {
    text: Option<String>,
}

impl TwinRef {
    pub fn new(board_id: i64, item_id: i64) -> Self {
        Self { board_id, item_id }
    }

    /// Link text form: `"{boardId}:{itemId}"`
    pub fn encode(&self) -> String {
        format!("{}:{}", self.board_id, self.item_id)
    }

    /// Parse link text; exactly one colon separating two integer ids
    #[track_caller]
    pub fn decode(text: &str) -> CoreResult<Self> {
        let mut parts = text.split(':');

        let (Some(board), Some(item), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CoreError::invalid_link_value(text));
        };

        match (board.trim().parse(), item.trim().parse()) {
            (Ok(board_id), Ok(item_id)) => Ok(Self { board_id, item_id }),
            _ => Err(CoreError::invalid_link_value(text)),
        }
    }

    /// Parse the raw JSON stored in a link column (`{"url":..,"text":..}`)
    #[track_caller]
    pub fn from_link_column_value(raw_value: &str) -> CoreResult<Self> {
        let stored: StoredLink = serde_json::from_str(raw_value)
            .map_err(|_| CoreError::invalid_link_value(raw_value))?;

        match stored.text {
            Some(text) => Self::decode(&text),
            None => Err(CoreError::invalid_link_value(raw_value)),
        }
    }
}
