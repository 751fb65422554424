//! Response shapes of the queries in [`crate::queries`].

use rb_core::{BoardColumn, BoardGroup, BoardItem, ItemField, deserialize_id};

use serde::Deserialize;

/// Outer GraphQL envelope; `data` stays untyped until errors are checked
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlMessage>,
    /// Some platform failures (complexity budget, auth) use this instead of `errors`
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlMessage {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Id {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Items<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Boards<T> {
    pub boards: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemCreator {
    pub creator: Option<Id>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemColumnValues {
    pub column_values: Vec<ColumnValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ColumnValue {
    #[serde(default)]
    pub id: Option<String>,
    pub value: Option<String>,
    #[serde(default)]
    pub column: Option<ColumnTitle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ColumnTitle {
    pub title: String,
}

impl ColumnValue {
    pub fn into_field(self) -> Option<ItemField> {
        Some(ItemField {
            id: self.id?,
            title: self.column?.title,
            value: self.value,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoardName {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoardColumns {
    pub columns: Vec<BoardColumn>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoardGroups {
    pub groups: Vec<BoardGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BoardItemsPage {
    pub items_page: ItemsPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NextItemsPage {
    pub next_items_page: ItemsPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsPage {
    pub cursor: Option<String>,
    pub items: Vec<PagedItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PagedItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub group: Option<GroupRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GroupRef {
    pub id: String,
}

impl From<PagedItem> for BoardItem {
    fn from(item: PagedItem) -> Self {
        BoardItem {
            id: item.id,
            group_id: item.group.map(|group| group.id),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsByColumnValue {
    pub items_page_by_column_values: Items<Id>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Teams {
    pub teams: Vec<TeamUsers>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamUsers {
    pub users: Vec<Id>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedItem {
    pub create_item: Option<Id>,
}
