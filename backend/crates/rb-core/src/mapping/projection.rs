use crate::{BoardColumn, CoreError, ItemField, LinkValue, Result as CoreResult};

use serde_json::{Map, Value};

/// Map a source item's fields onto a target board's columns.
///
/// A target column receives the value of the first source field with the
/// same title (exact match) and a non-null value; unmatched columns are left
/// out. The link column is then overwritten with `link`, so every clone
/// carries its back-reference.
pub fn project_column_values(
    source_fields: &[ItemField],
    target_columns: &[BoardColumn],
    link_column_id: &str,
    link: &LinkValue,
) -> CoreResult<Map<String, Value>> {
    let mut values = Map::new();

    for target in target_columns {
        let matched = source_fields
            .iter()
            .filter(|field| field.title == target.title)
            .find_map(|field| field.value.as_deref());

        let Some(raw_value) = matched else {
            continue;
        };

        let value: Value = serde_json::from_str(raw_value)
            .map_err(|e| CoreError::invalid_column_value(&target.id, e))?;
        values.insert(target.id.clone(), value);
    }

    values.insert(link_column_id.to_string(), link.to_json());

    Ok(values)
}
