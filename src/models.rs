//! Frontend Models
//!
//! Data structures for the list editor.

use serde::{Deserialize, Serialize};

/// One to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub id: u32,
    pub content: String,
}

/// Transient edit-dialog state: which item is being edited and the
/// in-progress draft text. `None` in the store means the dialog is closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditSession {
    pub target_id: u32,
    pub draft: String,
}

/// Blocking notification shown for rejected input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertMessage {
    pub title: String,
    pub text: String,
}
