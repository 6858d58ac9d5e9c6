//! Edit Modal Component
//!
//! Modal dialog for editing an item's content. Shown while an edit
//! session is open; clicking the backdrop cancels without committing.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::store::{
    store_cancel_edit, store_commit_edit, store_update_draft, use_app_store, AppStateStoreFields,
};

/// Modal edit dialog, driven by the store's edit session
#[component]
pub fn EditModal() -> impl IntoView {
    let store = use_app_store();

    let draft = move || {
        store
            .edit_session()
            .read()
            .as_ref()
            .map(|session| session.draft.clone())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || store.edit_session().read().is_some()>
            <div class="modal-backdrop" on:click=move |_| store_cancel_edit(&store)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <input
                        type="text"
                        placeholder="Edit"
                        prop:value=draft
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            store_update_draft(&store, input.value());
                        }
                    />
                    <button class="ok-btn" on:click=move |_| store_commit_edit(&store)>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
