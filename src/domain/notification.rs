use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum ToastVariant {
    #[default]
    #[display(fmt = "default")]
    Default,
    #[display(fmt = "success")]
    Success,
}

/// Transient message shown in the corner of the page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { variant: ToastVariant::Success, ..Self::new(title, description) }
    }
}

/// Where toasts go. The browser implementation pushes onto a global
/// signal; tests record them.
pub trait Notifier {
    fn notify(&self, toast: Toast);
}
