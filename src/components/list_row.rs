//! List Row Component
//!
//! Individual row: item content with Edit and Delete actions.

use leptos::prelude::*;

use crate::models::ListItem;
use crate::store::{store_open_edit, store_remove_item, use_app_store};

/// A single item row
#[component]
pub fn ListRow(item: ListItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let content = item.content.clone();

    view! {
        <div class="item-row">
            <span class="item-text">{content}</span>

            <div class="item-actions">
                <button class="edit-btn" on:click=move |_| store_open_edit(&store, id)>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| store_remove_item(&store, id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
