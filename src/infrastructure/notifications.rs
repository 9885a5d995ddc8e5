use gloo_timers::callback::Timeout;
use std::time::Duration;

use crate::domain::notification::{Notifier, Toast};
use crate::global_state::{dismiss_toast, push_toast};

/// Shows toasts through the global toast list and hides each one after
/// `duration`.
#[derive(Debug, Clone, Copy)]
pub struct ToastNotifier {
    duration: Duration,
}

impl ToastNotifier {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, toast: Toast) {
        let id = push_toast(toast);
        let millis = u32::try_from(self.duration.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || dismiss_toast(id)).forget();
    }
}
