//! One handler per recipe action route.

pub mod assign_creator;
pub mod clone_item;
pub mod map_existing_items;
pub mod recipe_subscribed;
pub mod recipe_unsubscribed;
pub mod set_month;
pub mod subscribe_team;
pub mod sync_item;

pub use assign_creator::assign_creator;
pub use clone_item::clone_item;
pub use map_existing_items::map_existing_items;
pub use recipe_subscribed::recipe_subscribed;
pub use recipe_unsubscribed::recipe_unsubscribed;
pub use set_month::set_month;
pub use subscribe_team::subscribe_team;
pub use sync_item::sync_item;
