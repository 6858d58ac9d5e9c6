//! List Command Core
//!
//! The ordered item list and its mutation commands. Everything here is
//! plain host-runnable Rust so the state contract can be tested without
//! a browser: add, reorder, rename, remove all go through [`TodoList`].

use crate::models::{EditSession, ListItem};

/// Common result type for list commands
pub type ListResult<T> = Result<T, ListError>;

/// List-level errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Add attempted with empty or whitespace-only text
    EmptyInput,
    /// Command targeted an id that is not in the list
    NotFound(u32),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::EmptyInput => write!(f, "empty input"),
            ListError::NotFound(id) => write!(f, "no item with id {}", id),
        }
    }
}

impl std::error::Error for ListError {}

/// The ordered list of items plus the id counter.
///
/// Ids are unique for the session and never reused: the counter only
/// grows, even across deletions. Position in `items` is the display
/// order and the only ordering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TodoList {
    items: Vec<ListItem>,
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Index of the item with `id`, if present
    pub fn index_of(&self, id: u32) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append a new item with the given text.
    ///
    /// The text must be non-empty after trimming; it is stored untrimmed.
    /// Returns the fresh id on success. On rejection the list is unchanged.
    pub fn add(&mut self, input: &str) -> ListResult<u32> {
        if input.trim().is_empty() {
            return Err(ListError::EmptyInput);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(ListItem {
            id,
            content: input.to_string(),
        });
        Ok(id)
    }

    /// Move the item at `source` so it ends up at `destination`.
    ///
    /// Remove-then-insert semantics, not a swap: on `[A,B,C]`,
    /// `reorder(0, Some(2))` yields `[B,C,A]`. A `None` destination
    /// (released outside the list) is a no-op, as is an out-of-bounds
    /// source. The destination clamps to the end of the list.
    pub fn reorder(&mut self, source: usize, destination: Option<usize>) {
        let Some(destination) = destination else {
            return;
        };
        if source >= self.items.len() {
            return;
        }
        let item = self.items.remove(source);
        let destination = destination.min(self.items.len());
        self.items.insert(destination, item);
    }

    /// Replace the content of the item with `id`, keeping its id and
    /// position. Edit imposes no non-empty check; any string is accepted.
    pub fn rename(&mut self, id: u32, content: String) -> ListResult<()> {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.content = content;
                Ok(())
            }
            None => Err(ListError::NotFound(id)),
        }
    }

    /// Remove the item with `id` if present. Removing an id that is not
    /// in the list is a no-op, so the command is idempotent.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|item| item.id != id);
    }
}

/// Start an edit session for the item with `id`: the draft is seeded
/// with the item's current content. `None` if the id is not in the list.
pub fn open_edit(list: &TodoList, id: u32) -> Option<EditSession> {
    list.get(id).map(|item| EditSession {
        target_id: id,
        draft: item.content.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn list_of(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            list.add(text).expect("seed add failed");
        }
        list
    }

    fn contents(list: &TodoList) -> Vec<&str> {
        list.items().iter().map(|i| i.content.as_str()).collect()
    }

    fn ids(list: &TodoList) -> Vec<u32> {
        list.items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn add_appends_to_end() {
        let mut list = TodoList::new();
        let a = list.add("buy milk").unwrap();
        let b = list.add("walk dog").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(contents(&list), vec!["buy milk", "walk dog"]);
        assert_eq!(list.items()[0].id, a);
        assert_eq!(list.items()[1].id, b);
    }

    #[test]
    fn add_rejects_empty_and_whitespace() {
        let mut list = list_of(&["a"]);
        let before = list.clone();

        assert_eq!(list.add(""), Err(ListError::EmptyInput));
        assert_eq!(list.add("   "), Err(ListError::EmptyInput));
        assert_eq!(list.add("\t\n"), Err(ListError::EmptyInput));
        assert_eq!(list, before);
    }

    #[test]
    fn add_keeps_surrounding_whitespace() {
        let mut list = TodoList::new();
        let id = list.add("  note  ").unwrap();
        assert_eq!(list.get(id).unwrap().content, "  note  ");
    }

    #[test]
    fn ids_stay_unique_across_adds_and_removes() {
        let mut list = TodoList::new();
        let mut seen = HashSet::new();
        for i in 0..20 {
            let id = list.add(&format!("item {}", i)).unwrap();
            assert!(seen.insert(id), "id {} handed out twice", id);
            // Delete every other item; freed ids must not come back
            if i % 2 == 0 {
                list.remove(id);
            }
        }
        let current: HashSet<u32> = ids(&list).into_iter().collect();
        assert_eq!(current.len(), list.len());
    }

    #[test]
    fn reorder_moves_first_to_end() {
        let mut list = list_of(&["a", "b", "c"]);
        list.reorder(0, Some(2));
        assert_eq!(contents(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn reorder_moves_last_to_front() {
        let mut list = list_of(&["a", "b", "c"]);
        list.reorder(2, Some(0));
        assert_eq!(contents(&list), vec!["c", "a", "b"]);
    }

    #[test]
    fn reorder_is_a_permutation() {
        let seed = list_of(&["a", "b", "c", "d"]);
        let before: HashSet<u32> = ids(&seed).into_iter().collect();
        for source in 0..4 {
            for dest in 0..4 {
                let mut list = seed.clone();
                list.reorder(source, Some(dest));
                assert_eq!(list.len(), 4);
                let after: HashSet<u32> = ids(&list).into_iter().collect();
                assert_eq!(after, before, "reorder({}, {}) lost items", source, dest);
            }
        }
    }

    #[test]
    fn reorder_without_destination_is_noop() {
        let mut list = list_of(&["a", "b", "c"]);
        let before = list.clone();
        list.reorder(1, None);
        assert_eq!(list, before);
    }

    #[test]
    fn reorder_out_of_bounds_source_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        list.reorder(2, Some(0));
        assert_eq!(list, before);
    }

    #[test]
    fn reorder_clamps_destination_to_end() {
        let mut list = list_of(&["a", "b", "c"]);
        list.reorder(0, Some(99));
        assert_eq!(contents(&list), vec!["b", "c", "a"]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut list = list_of(&["a", "b"]);
        let id = list.items()[0].id;
        list.remove(id);
        let once = list.clone();
        list.remove(id);
        assert_eq!(list, once);
        assert_eq!(contents(&list), vec!["b"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = list_of(&["a"]);
        let before = list.clone();
        list.remove(9999);
        assert_eq!(list, before);
    }

    #[test]
    fn rename_changes_only_the_target() {
        let mut list = list_of(&["a", "b", "c"]);
        let before_ids = ids(&list);
        let target = list.items()[1].id;

        list.rename(target, "bb".to_string()).unwrap();

        assert_eq!(ids(&list), before_ids);
        assert_eq!(contents(&list), vec!["a", "bb", "c"]);
        assert_eq!(list.index_of(target), Some(1));
    }

    #[test]
    fn rename_accepts_empty_text() {
        let mut list = list_of(&["a"]);
        let id = list.items()[0].id;
        list.rename(id, String::new()).unwrap();
        assert_eq!(list.get(id).unwrap().content, "");
    }

    #[test]
    fn rename_stale_id_reports_not_found() {
        let mut list = list_of(&["a"]);
        let id = list.items()[0].id;
        list.remove(id);

        let err = list.rename(id, "ghost".to_string()).unwrap_err();
        assert_eq!(err, ListError::NotFound(id));
        assert!(list.is_empty());
    }

    #[test]
    fn open_edit_seeds_draft_with_current_content() {
        let list = list_of(&["buy milk"]);
        let id = list.items()[0].id;

        let session = open_edit(&list, id).unwrap();
        assert_eq!(session.target_id, id);
        assert_eq!(session.draft, "buy milk");

        assert_eq!(open_edit(&list, id + 1), None);
    }

    #[test]
    fn committing_a_session_after_delete_is_the_stale_branch() {
        let mut list = list_of(&["a", "b"]);
        let target = list.items()[0].id;
        let session = open_edit(&list, target).unwrap();

        // Item deleted while the dialog is open
        list.remove(target);
        let before = list.clone();

        let err = list.rename(session.target_id, session.draft).unwrap_err();
        assert_eq!(err, ListError::NotFound(target));
        assert_eq!(list, before);
    }

    #[test]
    fn full_session_scenario() {
        let mut list = TodoList::new();
        let a = list.add("a").unwrap();
        let b = list.add("b").unwrap();
        let c = list.add("c").unwrap();
        assert_eq!(contents(&list), vec!["a", "b", "c"]);
        assert_eq!(
            [a, b, c].iter().collect::<HashSet<_>>().len(),
            3,
            "ids must be distinct"
        );

        list.reorder(0, Some(2));
        assert_eq!(contents(&list), vec!["b", "c", "a"]);

        list.remove(c);
        assert_eq!(contents(&list), vec!["b", "a"]);

        list.rename(b, "bb".to_string()).unwrap();
        assert_eq!(contents(&list), vec!["bb", "a"]);
        assert_eq!(ids(&list), vec![b, a]);
    }
}
