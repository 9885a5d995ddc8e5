use derive_more::Display;
use strum::{AsRefStr, EnumIter};

use crate::domain::auth::AuthStep;

/// Form fields that can carry an inline validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter)]
pub enum FormField {
    #[display(fmt = "email")]
    #[strum(serialize = "email")]
    Email,
    #[display(fmt = "password")]
    #[strum(serialize = "password")]
    Password,
    #[display(fmt = "fullName")]
    #[strum(serialize = "fullName")]
    FullName,
    #[display(fmt = "confirmPassword")]
    #[strum(serialize = "confirmPassword")]
    ConfirmPassword,
    #[display(fmt = "termsAccepted")]
    #[strum(serialize = "termsAccepted")]
    TermsAccepted,
    #[display(fmt = "otp")]
    #[strum(serialize = "otp")]
    Otp,
}

/// One failed rule on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: FormField,
    pub message: &'static str,
}

/// Ordered list of field failures produced by a single form check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: FormField, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message shown next to `field`: the first rule it broke.
    pub fn first_for(&self, field: FormField) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    pub fn has(&self, field: FormField) -> bool {
        self.first_for(field).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// `Ok(())` when nothing failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> =
            self.errors.iter().map(|e| format!("{}: {}", e.field, e.message)).collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Why the auth wizard refused a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Validation(ValidationErrors),
    UnexpectedStep { step: AuthStep, action: &'static str },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::Validation(errors) => write!(f, "Invalid form: {}", errors),
            AuthError::UnexpectedStep { step, action } => {
                write!(f, "Cannot {} while on step '{}'", action, step)
            }
        }
    }
}

impl std::error::Error for AuthError {}

impl From<ValidationErrors> for AuthError {
    fn from(errors: ValidationErrors) -> Self {
        AuthError::Validation(errors)
    }
}

/// Simplified error system - no over-engineering!
#[derive(Debug, Clone)]
pub enum AppError {
    BrowserError(String),
    ConfigError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::BrowserError(msg) => write!(f, "Browser Error: {}", msg),
            AppError::ConfigError(msg) => write!(f, "Config Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;
