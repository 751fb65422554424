pub mod action_request;
pub mod assign_creator_input;
pub mod clone_item_input;
pub mod map_existing_items_input;
pub mod recipe_request;
pub mod set_month_input;
pub mod subscribe_team_input;
pub mod sync_item_input;
