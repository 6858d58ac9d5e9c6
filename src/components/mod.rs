//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod alert_modal;
mod edit_modal;
mod item_list_view;
mod list_row;

pub use add_item_form::AddItemForm;
pub use alert_modal::AlertModal;
pub use edit_modal::EditModal;
pub use item_list_view::ItemListView;
pub use list_row::ListRow;
