pub mod error;
pub mod ids;
pub mod mapping;
pub mod models;

pub use error::{CoreError, Result};
pub use ids::{deserialize_id, deserialize_optional_id};
pub use mapping::column_resolution::{column_by_title, find_column, find_group_by_title};
pub use mapping::column_values::{
    current_month_start_value, month_start_value, person_assignment_value,
};
pub use mapping::item_naming::clone_item_name;
pub use mapping::name_gate::name_passes_gate;
pub use mapping::projection::project_column_values;
pub use mapping::status_conversion::convert_status_value;
pub use models::board_column::BoardColumn;
pub use models::board_group::BoardGroup;
pub use models::board_item::BoardItem;
pub use models::column_lookup::ColumnLookup;
pub use models::item_field::ItemField;
pub use models::link_value::LinkValue;
pub use models::status_labels::StatusLabels;
pub use models::twin_ref::TwinRef;
