use leptos::*;
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::logging::LogComponent;
use crate::domain::notification::Toast;
use crate::{global_signals, log_debug};

/// Toast plus the id used to dismiss it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

/// Page-independent UI chrome. Everything else is owned by the component
/// that shows it.
pub struct Globals {
    pub toasts: RwSignal<Vec<ToastEntry>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();
static NEXT_TOAST_ID: AtomicU64 = AtomicU64::new(1);

/// At most this many toasts are on screen; older ones are dropped.
pub const MAX_TOASTS: usize = 3;

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals { toasts: create_rw_signal(Vec::new()) })
}

global_signals! {
    /// Visible toasts, oldest first
    pub toasts => toasts: Vec<ToastEntry>,
}

pub fn push_toast(toast: Toast) -> u64 {
    let id = NEXT_TOAST_ID.fetch_add(1, Ordering::Relaxed);
    log_debug!(LogComponent::Presentation("Toasts"), "show #{} {}", id, toast.title);
    toasts().update(|list| {
        list.push(ToastEntry { id, toast });
        let overflow = list.len().saturating_sub(MAX_TOASTS);
        list.drain(..overflow);
    });
    id
}

pub fn dismiss_toast(id: u64) {
    toasts().update(|list| list.retain(|entry| entry.id != id));
}

pub fn clear_toasts() {
    toasts().set(Vec::new());
}
