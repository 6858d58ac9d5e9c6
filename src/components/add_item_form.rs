//! Add Item Form Component
//!
//! Text input plus Add button for appending new items.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{store_show_alert, use_app_store, AppStateStoreFields};

/// Form for adding a new item to the end of the list
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        let result = store.list().write().add(&text);
        match result {
            // Staged text only clears on success
            Ok(_) => set_new_text.set(String::new()),
            Err(_) => store_show_alert(&store, "Oops!", "Please fill the input!"),
        }
    };

    view! {
        <form class="add-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Add new item..."
                prop:value=move || new_text.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_text.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
