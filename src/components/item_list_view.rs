//! Item List View Component
//!
//! Displays the item list with drag-and-drop reordering.
//! Rows are keyed by stable id so identity survives reordering.

use leptos::prelude::*;

use crate::components::ListRow;
use crate::store::{store_reorder, use_app_store, AppStateStoreFields};

use leptos_dragdrop::*;

/// Reorderable item list with DnD support
#[component]
pub fn ItemListView() -> impl IntoView {
    let store = use_app_store();

    // Create DnD signals
    let dnd = create_dnd_signals();

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |dragged_id, target| {
        web_sys::console::log_1(
            &format!("[DND] Drop: dragged={}, target={:?}", dragged_id, target).into(),
        );
        store_reorder(&store, dragged_id, target);
    });

    let items = move || store.list().read().items().to_vec();

    let on_mouseleave = make_on_mouseleave(dnd);

    view! {
        <div class="list-view" on:mouseleave=on_mouseleave>
            <For
                each=items
                // Key on id plus content so renames re-render the row
                key=|item| (item.id, item.content.clone())
                children=move |item| {
                    let id = item.id;

                    // DnD handlers
                    let on_mousedown = make_on_mousedown(dnd, id);
                    let on_mouseenter = make_on_row_mouseenter(dnd, id);

                    // Visual state
                    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);
                    let is_drop_target = move || dnd.drop_row_read.get() == Some(id);

                    let row_class = move || {
                        let mut c = String::from("list-row-wrapper");
                        if is_dragging() { c.push_str(" dragging"); }
                        if is_drop_target() { c.push_str(" drop-target"); }
                        c
                    };

                    view! {
                        <div
                            class=row_class
                            on:mousedown=on_mousedown
                            on:mouseenter=on_mouseenter
                        >
                            <ListRow item=item />
                        </div>
                    }
                }
            />
        </div>
    }
}
