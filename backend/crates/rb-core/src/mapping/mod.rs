pub mod column_resolution;
pub mod column_values;
pub mod item_naming;
pub mod name_gate;
pub mod projection;
pub mod status_conversion;
