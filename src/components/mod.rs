//! UI Components
//!
//! One file per view component, re-exported here.

mod add_item_form;
mod footer;
mod header;
mod item_row;
mod items_bought;
mod items_to_buy;
mod notification;
mod stats;

pub use add_item_form::AddItemForm;
pub use footer::Footer;
pub use header::Header;
pub use item_row::GroceryItemRow;
pub use items_bought::ItemsBought;
pub use items_to_buy::ItemsToBuy;
pub use notification::Notification;
pub use stats::Stats;
