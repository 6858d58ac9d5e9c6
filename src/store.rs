//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::list::{open_edit, TodoList};
use crate::models::{AlertMessage, EditSession};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The ordered item list, the only session-persistent state
    pub list: TodoList,
    /// Open edit dialog, None when closed
    pub edit_session: Option<EditSession>,
    /// Pending validation notification, None when dismissed
    pub alert: Option<AlertMessage>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Show a blocking alert
pub fn store_show_alert(store: &AppStore, title: &str, text: &str) {
    store.alert().set(Some(AlertMessage {
        title: title.to_string(),
        text: text.to_string(),
    }));
}

/// Dismiss the current alert
pub fn store_dismiss_alert(store: &AppStore) {
    store.alert().set(None);
}

/// Open the edit dialog for an item, pre-filling the draft with its
/// current content. Unknown ids leave the dialog closed.
pub fn store_open_edit(store: &AppStore, id: u32) {
    let session = open_edit(&store.list().read(), id);
    if session.is_some() {
        store.edit_session().set(session);
    }
}

/// Update the in-progress draft while the dialog is open
pub fn store_update_draft(store: &AppStore, text: String) {
    if let Some(session) = store.edit_session().write().as_mut() {
        session.draft = text;
    }
}

/// Commit the open edit session and close the dialog.
///
/// The dialog closes on every path. If the target was deleted while the
/// dialog was open the commit is dropped with a console warning.
pub fn store_commit_edit(store: &AppStore) {
    let Some(session) = store.edit_session().write().take() else {
        return;
    };
    let result = store
        .list()
        .write()
        .rename(session.target_id, session.draft);
    if let Err(err) = result {
        web_sys::console::warn_1(&format!("[EDIT] commit dropped: {}", err).into());
    }
}

/// Close the edit dialog without committing
pub fn store_cancel_edit(store: &AppStore) {
    store.edit_session().set(None);
}

/// Remove an item from the list by id
pub fn store_remove_item(store: &AppStore, id: u32) {
    store.list().write().remove(id);
}

/// Translate a finished drag into a reorder command.
///
/// Ids are resolved to current indices here; a missing drop target (or a
/// dragged row that vanished mid-drag) resolves to the no-op destination.
pub fn store_reorder(store: &AppStore, dragged_id: u32, target_id: Option<u32>) {
    let list_field = store.list();
    let mut list = list_field.write();
    let Some(source) = list.index_of(dragged_id) else {
        return;
    };
    let destination = target_id.and_then(|id| list.index_of(id));
    list.reorder(source, destination);
}
