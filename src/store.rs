//! Admin State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Toast, ToastKind};

/// Page-wide admin state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last id handed out to a toast
    pub last_toast_id: u32,
}

pub type AdminStore = Store<AdminState>;

// ========================
// Store Helper Functions
// ========================

/// Add a toast and return its id
pub fn store_push_toast(store: &AdminStore, message: String, kind: ToastKind) -> u32 {
    let last_id = store.last_toast_id();
    let id = {
        let mut last = last_id.write();
        *last = last.wrapping_add(1);
        *last
    };
    store.toasts().write().push(Toast { id, message, kind });
    id
}

/// Remove a toast by id
pub fn store_remove_toast(store: &AdminStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_toast_assigns_sequential_ids() {
        let store = Store::new(AdminState::default());
        let first = store_push_toast(&store, "Saved".into(), ToastKind::Success);
        let second = store_push_toast(&store, "Space not defined.".into(), ToastKind::Error);
        assert_eq!((first, second), (1, 2));

        let ids: Vec<u32> = store.toasts().get_untracked().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_remove_toast_keeps_others() {
        let store = Store::new(AdminState::default());
        let first = store_push_toast(&store, "one".into(), ToastKind::Info);
        store_push_toast(&store, "two".into(), ToastKind::Info);
        store_remove_toast(&store, first);

        let toasts = store.toasts().get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "two");
    }
}
