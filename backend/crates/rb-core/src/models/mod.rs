pub mod board_column;
pub mod board_group;
pub mod board_item;
pub mod column_lookup;
pub mod item_field;
pub mod link_value;
pub mod status_labels;
pub mod twin_ref;
