//! Alert Modal Component
//!
//! Blocking notification for rejected input, with a dismiss button.

use leptos::prelude::*;

use crate::store::{store_dismiss_alert, use_app_store, AppStateStoreFields};

/// Blocking alert dialog, driven by the store's alert message
#[component]
pub fn AlertModal() -> impl IntoView {
    let store = use_app_store();

    let title = move || {
        store
            .alert()
            .read()
            .as_ref()
            .map(|alert| alert.title.clone())
            .unwrap_or_default()
    };
    let text = move || {
        store
            .alert()
            .read()
            .as_ref()
            .map(|alert| alert.text.clone())
            .unwrap_or_default()
    };

    view! {
        <Show when=move || store.alert().read().is_some()>
            <div class="modal-backdrop">
                <div class="modal alert">
                    <h3 class="alert-title">{title}</h3>
                    <p class="alert-text">{text}</p>
                    <button class="ok-btn" on:click=move |_| store_dismiss_alert(&store)>
                        "OK"
                    </button>
                </div>
            </div>
        </Show>
    }
}
