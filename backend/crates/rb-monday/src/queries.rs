//! GraphQL documents sent to the platform API.

pub(crate) const ITEM_NAME: &str = r#"query ($itemId: [ID!]) {
  items(ids: $itemId) {
    name
  }
}"#;

pub(crate) const ITEM_CREATOR: &str = r#"query ($itemId: [ID!]) {
  items(ids: $itemId) {
    creator {
      id
    }
  }
}"#;

pub(crate) const ITEM_FIELDS: &str = r#"query ($itemId: [ID!]) {
  items(ids: $itemId) {
    column_values {
      id
      value
      column {
        title
      }
    }
  }
}"#;

pub(crate) const COLUMN_VALUE: &str = r#"query ($itemId: [ID!], $columnId: [String!]) {
  items(ids: $itemId) {
    column_values(ids: $columnId) {
      value
    }
  }
}"#;

pub(crate) const CHANGE_COLUMN_VALUE: &str = r#"mutation ($boardId: ID!, $itemId: ID!, $columnId: String!, $value: JSON!) {
  change_column_value(board_id: $boardId, item_id: $itemId, column_id: $columnId, value: $value) {
    id
  }
}"#;

pub(crate) const CREATE_ITEM: &str = r#"mutation ($boardId: ID!, $groupId: String!, $itemName: String!, $columnValues: JSON) {
  create_item(board_id: $boardId, group_id: $groupId, item_name: $itemName, column_values: $columnValues) {
    id
  }
}"#;

pub(crate) const BOARD_NAME: &str = r#"query ($boardId: [ID!]) {
  boards(ids: $boardId) {
    name
  }
}"#;

pub(crate) const BOARD_COLUMNS: &str = r#"query ($boardId: [ID!]) {
  boards(ids: $boardId) {
    columns {
      id
      title
      type
      settings_str
    }
  }
}"#;

pub(crate) const BOARD_GROUPS: &str = r#"query ($boardId: [ID!]) {
  boards(ids: $boardId) {
    groups {
      id
      title
    }
  }
}"#;

pub(crate) const BOARD_ITEMS_FIRST_PAGE: &str = r#"query ($boardId: [ID!], $limit: Int!) {
  boards(ids: $boardId) {
    items_page(limit: $limit) {
      cursor
      items {
        id
        group {
          id
        }
      }
    }
  }
}"#;

pub(crate) const BOARD_ITEMS_NEXT_PAGE: &str = r#"query ($cursor: String!, $limit: Int!) {
  next_items_page(cursor: $cursor, limit: $limit) {
    cursor
    items {
      id
      group {
        id
      }
    }
  }
}"#;

pub(crate) const ITEMS_BY_COLUMN_VALUE: &str = r#"query ($boardId: ID!, $columnId: String!, $columnValue: String!) {
  items_page_by_column_values(limit: 1, board_id: $boardId, columns: [{column_id: $columnId, column_values: [$columnValue]}]) {
    items {
      id
    }
  }
}"#;

pub(crate) const TEAM_MEMBERS: &str = r#"query ($teamId: [ID!]) {
  teams(ids: $teamId) {
    users {
      id
    }
  }
}"#;

pub(crate) const ADD_USERS_TO_BOARD: &str = r#"mutation ($boardId: ID!, $userIds: [ID!]!) {
  add_users_to_board(board_id: $boardId, user_ids: $userIds, kind: owner) {
    id
  }
}"#;
