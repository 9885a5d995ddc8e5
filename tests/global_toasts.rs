use commodity_hub::domain::notification::{Toast, ToastVariant};
use commodity_hub::global_state::{MAX_TOASTS, clear_toasts, dismiss_toast, push_toast, toasts};
use leptos::*;

fn titles() -> Vec<String> {
    toasts().get_untracked().into_iter().map(|e| e.toast.title).collect()
}

// Signals live in a thread-local runtime, so everything runs in one test.
#[test]
fn toast_queue_lifecycle() {
    let runtime = create_runtime();

    let first = push_toast(Toast::success("Login Successful", "Redirecting..."));
    let second = push_toast(Toast::new("Heads up", "Markets close early"));
    assert_ne!(first, second);
    assert_eq!(titles(), vec!["Login Successful", "Heads up"]);
    assert_eq!(toasts().get_untracked()[0].toast.variant, ToastVariant::Success);

    dismiss_toast(first);
    assert_eq!(titles(), vec!["Heads up"]);

    dismiss_toast(first);
    assert_eq!(titles().len(), 1);

    for i in 0..5 {
        push_toast(Toast::new(format!("t{i}"), ""));
    }
    assert_eq!(titles().len(), MAX_TOASTS);
    assert_eq!(titles(), vec!["t2", "t3", "t4"]);

    clear_toasts();
    assert!(titles().is_empty());

    runtime.dispose();
}
