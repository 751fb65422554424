use crate::{BoardColumn, BoardGroup, ColumnLookup, CoreError, Result as CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Resolve a column on a board; the first match wins when titles repeat
#[track_caller]
pub fn find_column<'a>(
    board_id: i64,
    columns: &'a [BoardColumn],
    lookup: &ColumnLookup,
) -> CoreResult<&'a BoardColumn> {
    let found = match lookup {
        ColumnLookup::Title(title) => column_by_title(columns, title),
        ColumnLookup::Id(id) => columns.iter().find(|column| column.id == *id),
    };

    found.ok_or_else(|| CoreError::column_not_found(board_id, lookup.clone()))
}

/// Case-insensitive title match without failing
pub fn column_by_title<'a>(columns: &'a [BoardColumn], title: &str) -> Option<&'a BoardColumn> {
    let wanted = title.to_lowercase();
    columns
        .iter()
        .find(|column| column.title.to_lowercase() == wanted)
}

/// Resolve a group by case-insensitive title; the first match wins
#[track_caller]
pub fn find_group_by_title<'a>(
    board_id: i64,
    groups: &'a [BoardGroup],
    title: &str,
) -> CoreResult<&'a BoardGroup> {
    let wanted = title.to_lowercase();
    groups
        .iter()
        .find(|group| group.title.to_lowercase() == wanted)
        .ok_or_else(|| CoreError::GroupNotFound {
            board_id,
            title: title.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
