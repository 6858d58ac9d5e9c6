//! To-Do Frontend App
//!
//! Main application component: add form, reorderable list, dialogs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemForm, AlertModal, EditModal, ItemListView};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // All state lives in the store; provide it to all children
    let store = Store::new(AppState::default());
    provide_context(store);

    view! {
        <main class="app-layout">
            <AddItemForm />

            <div class="list-column">
                <h2>"List"</h2>
                <ItemListView />
                <p class="item-count">{move || format!("{} items", store.list().read().len())}</p>
            </div>

            <EditModal />
            <AlertModal />
        </main>
    }
}
