use crate::queries;
use crate::responses::{
    BoardColumns, BoardGroups, BoardItemsPage, BoardName, Boards, CreatedItem, Envelope,
    ItemColumnValues, ItemCreator, ItemName, Items, ItemsByColumnValue, NextItemsPage, Teams,
};
use crate::{ClientError, ClientResult};

use rb_config::PlatformConfig;
use rb_core::{BoardColumn, BoardGroup, BoardItem, ItemField};

use std::panic::Location;

use error_location::ErrorLocation;
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

/// Page size for board item listings
const ITEMS_PAGE_LIMIT: u32 = 100;

/// GraphQL client for the platform API.
///
/// Holds one pooled HTTP client; every call is authorized with the caller's
/// short-lived token.
pub struct MondayClient {
    pub api_url: String,
    pub api_version: Option<String>,
    client: ReqwestClient,
}

impl MondayClient {
    /// Create a new client from platform settings
    pub fn new(config: &PlatformConfig) -> ClientResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            api_url: config.api_url.clone(),
            api_version: config.api_version().map(String::from),
            client,
        })
    }

    /// Execute one GraphQL document and decode `data` into `T`
    async fn graphql<T: DeserializeOwned>(
        &self,
        token: &str,
        operation: &'static str,
        query: &str,
        variables: Value,
    ) -> ClientResult<T> {
        debug!("GraphQL {} variables={}", operation, variables);

        let mut req = self
            .client
            .post(&self.api_url)
            .header("Authorization", token)
            .json(&json!({ "query": query, "variables": variables }));

        if let Some(ref version) = self.api_version {
            req = req.header("API-Version", version);
        }

        let response = req.send().await?.error_for_status()?;
        let body = response.text().await?;
        let envelope: Envelope = serde_json::from_str(&body)?;

        let mut messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        messages.extend(envelope.error_message);
        if !messages.is_empty() {
            return Err(ClientError::GraphQl {
                operation,
                messages,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        match envelope.data {
            Some(Value::Null) | None => Err(ClientError::missing_data(format!(
                "data for {}",
                operation
            ))),
            Some(data) => Ok(serde_json::from_value(data)?),
        }
    }

    // =========================================================================
    // Item Operations
    // =========================================================================

    pub async fn get_item_name(&self, token: &str, item_id: i64) -> ClientResult<String> {
        let data: Items<ItemName> = self
            .graphql(token, "get_item_name", queries::ITEM_NAME, json!({ "itemId": [item_id] }))
            .await?;

        data.items
            .into_iter()
            .next()
            .map(|item| item.name)
            .ok_or_else(|| ClientError::missing_data(format!("item {}", item_id)))
    }

    pub async fn get_item_creator_id(&self, token: &str, item_id: i64) -> ClientResult<i64> {
        let data: Items<ItemCreator> = self
            .graphql(
                token,
                "get_item_creator_id",
                queries::ITEM_CREATOR,
                json!({ "itemId": [item_id] }),
            )
            .await?;

        data.items
            .into_iter()
            .next()
            .and_then(|item| item.creator)
            .map(|creator| creator.id)
            .ok_or_else(|| ClientError::missing_data(format!("creator of item {}", item_id)))
    }

    /// Every column value of an item with its column title
    pub async fn get_item_fields(&self, token: &str, item_id: i64) -> ClientResult<Vec<ItemField>> {
        let data: Items<ItemColumnValues> = self
            .graphql(
                token,
                "get_item_fields",
                queries::ITEM_FIELDS,
                json!({ "itemId": [item_id] }),
            )
            .await?;

        let item = data
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::missing_data(format!("item {}", item_id)))?;

        Ok(item
            .column_values
            .into_iter()
            .filter_map(|value| value.into_field())
            .collect())
    }

    /// Raw JSON stored in one column of an item; `None` when the column is empty
    pub async fn get_column_value(
        &self,
        token: &str,
        item_id: i64,
        column_id: &str,
    ) -> ClientResult<Option<String>> {
        let data: Items<ItemColumnValues> = self
            .graphql(
                token,
                "get_column_value",
                queries::COLUMN_VALUE,
                json!({ "itemId": [item_id], "columnId": [column_id] }),
            )
            .await?;

        let item = data
            .items
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::missing_data(format!("item {}", item_id)))?;

        let column = item.column_values.into_iter().next().ok_or_else(|| {
            ClientError::missing_data(format!("column '{}' on item {}", column_id, item_id))
        })?;

        Ok(column.value)
    }

    /// Write a column value. `None` clears the column with `{}`.
    pub async fn change_column_value(
        &self,
        token: &str,
        board_id: i64,
        item_id: i64,
        column_id: &str,
        value: Option<&Value>,
    ) -> ClientResult<()> {
        let value = match value {
            Some(value) => value.to_string(),
            None => "{}".to_string(),
        };

        let _: Value = self
            .graphql(
                token,
                "change_column_value",
                queries::CHANGE_COLUMN_VALUE,
                json!({
                    "boardId": board_id,
                    "itemId": item_id,
                    "columnId": column_id,
                    "value": value,
                }),
            )
            .await?;

        Ok(())
    }

    /// Create an item and return its id
    pub async fn create_item(
        &self,
        token: &str,
        board_id: i64,
        group_id: &str,
        item_name: &str,
        column_values: &Map<String, Value>,
    ) -> ClientResult<i64> {
        let data: CreatedItem = self
            .graphql(
                token,
                "create_item",
                queries::CREATE_ITEM,
                json!({
                    "boardId": board_id,
                    "groupId": group_id,
                    "itemName": item_name,
                    "columnValues": Value::Object(column_values.clone()).to_string(),
                }),
            )
            .await?;

        data.create_item
            .map(|item| item.id)
            .ok_or_else(|| ClientError::missing_data("id of created item"))
    }

    // =========================================================================
    // Board Operations
    // =========================================================================

    pub async fn get_board_name(&self, token: &str, board_id: i64) -> ClientResult<String> {
        let data: Boards<BoardName> = self
            .graphql(
                token,
                "get_board_name",
                queries::BOARD_NAME,
                json!({ "boardId": [board_id] }),
            )
            .await?;

        data.boards
            .into_iter()
            .next()
            .map(|board| board.name)
            .ok_or_else(|| ClientError::missing_data(format!("board {}", board_id)))
    }

    pub async fn get_board_columns(
        &self,
        token: &str,
        board_id: i64,
    ) -> ClientResult<Vec<BoardColumn>> {
        let data: Boards<BoardColumns> = self
            .graphql(
                token,
                "get_board_columns",
                queries::BOARD_COLUMNS,
                json!({ "boardId": [board_id] }),
            )
            .await?;

        data.boards
            .into_iter()
            .next()
            .map(|board| board.columns)
            .ok_or_else(|| ClientError::missing_data(format!("board {}", board_id)))
    }

    pub async fn get_board_groups(
        &self,
        token: &str,
        board_id: i64,
    ) -> ClientResult<Vec<BoardGroup>> {
        let data: Boards<BoardGroups> = self
            .graphql(
                token,
                "get_board_groups",
                queries::BOARD_GROUPS,
                json!({ "boardId": [board_id] }),
            )
            .await?;

        data.boards
            .into_iter()
            .next()
            .map(|board| board.groups)
            .ok_or_else(|| ClientError::missing_data(format!("board {}", board_id)))
    }

    /// All items on a board, following cursor pages until exhausted
    pub async fn get_board_items(&self, token: &str, board_id: i64) -> ClientResult<Vec<BoardItem>> {
        let data: Boards<BoardItemsPage> = self
            .graphql(
                token,
                "get_board_items",
                queries::BOARD_ITEMS_FIRST_PAGE,
                json!({ "boardId": [board_id], "limit": ITEMS_PAGE_LIMIT }),
            )
            .await?;

        let first = data
            .boards
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::missing_data(format!("board {}", board_id)))?;

        let mut items: Vec<BoardItem> = first.items_page.items.into_iter().map(Into::into).collect();
        let mut cursor = first.items_page.cursor;

        while let Some(next) = cursor.take() {
            let page: NextItemsPage = self
                .graphql(
                    token,
                    "get_board_items",
                    queries::BOARD_ITEMS_NEXT_PAGE,
                    json!({ "cursor": next, "limit": ITEMS_PAGE_LIMIT }),
                )
                .await?;

            items.extend(page.next_items_page.items.into_iter().map(BoardItem::from));
            cursor = page.next_items_page.cursor;
        }

        debug!("Board {} has {} items", board_id, items.len());

        Ok(items)
    }

    /// Single lookup of an item whose column holds exactly `value`
    pub async fn find_item_id_by_column_value(
        &self,
        token: &str,
        board_id: i64,
        column_id: &str,
        value: &str,
    ) -> ClientResult<Option<i64>> {
        let data: ItemsByColumnValue = self
            .graphql(
                token,
                "find_item_id_by_column_value",
                queries::ITEMS_BY_COLUMN_VALUE,
                json!({
                    "boardId": board_id,
                    "columnId": column_id,
                    "columnValue": value,
                }),
            )
            .await?;

        Ok(data
            .items_page_by_column_values
            .items
            .into_iter()
            .next()
            .map(|item| item.id))
    }

    // =========================================================================
    // Team Operations
    // =========================================================================

    pub async fn get_team_member_ids(&self, token: &str, team_id: i64) -> ClientResult<Vec<i64>> {
        let data: Teams = self
            .graphql(
                token,
                "get_team_member_ids",
                queries::TEAM_MEMBERS,
                json!({ "teamId": [team_id] }),
            )
            .await?;

        let team = data
            .teams
            .into_iter()
            .next()
            .ok_or_else(|| ClientError::missing_data(format!("team {}", team_id)))?;

        Ok(team.users.into_iter().map(|user| user.id).collect())
    }

    /// Add users to a board as owners
    pub async fn add_subscribers_to_board(
        &self,
        token: &str,
        board_id: i64,
        user_ids: &[i64],
    ) -> ClientResult<()> {
        let _: Value = self
            .graphql(
                token,
                "add_subscribers_to_board",
                queries::ADD_USERS_TO_BOARD,
                json!({ "boardId": board_id, "userIds": user_ids }),
            )
            .await?;

        Ok(())
    }
}
