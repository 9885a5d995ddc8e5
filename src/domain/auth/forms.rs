use serde::{Deserialize, Serialize};

use super::validation::{
    FULL_NAME_MIN_CHARS, MSG_CONFIRM, MSG_EMAIL, MSG_FULL_NAME, MSG_MISMATCH, MSG_OTP,
    MSG_PASSWORD, MSG_TERMS, PASSWORD_MIN_CHARS, has_min_chars, is_valid_email, is_valid_otp,
};
use crate::domain::errors::{FormField, ValidationErrors};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), remember_me: false }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_valid_email(&self.email) {
            errors.push(FormField::Email, MSG_EMAIL);
        }
        if !has_min_chars(&self.password, PASSWORD_MIN_CHARS) {
            errors.push(FormField::Password, MSG_PASSWORD);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !has_min_chars(&self.full_name, FULL_NAME_MIN_CHARS) {
            errors.push(FormField::FullName, MSG_FULL_NAME);
        }
        if !is_valid_email(&self.email) {
            errors.push(FormField::Email, MSG_EMAIL);
        }
        if !has_min_chars(&self.password, PASSWORD_MIN_CHARS) {
            errors.push(FormField::Password, MSG_PASSWORD);
        }
        if !has_min_chars(&self.confirm_password, PASSWORD_MIN_CHARS) {
            errors.push(FormField::ConfirmPassword, MSG_CONFIRM);
        } else if self.password != self.confirm_password {
            errors.push(FormField::ConfirmPassword, MSG_MISMATCH);
        }
        if !self.terms_accepted {
            errors.push(FormField::TermsAccepted, MSG_TERMS);
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpForm {
    pub otp: String,
}

impl OtpForm {
    pub fn new(otp: impl Into<String>) -> Self {
        Self { otp: otp.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if !is_valid_otp(&self.otp) {
            errors.push(FormField::Otp, MSG_OTP);
        }
        errors.into_result()
    }
}

/// File names picked in the KYC dialog. Never inspected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycDocuments {
    pub identity_document: Option<String>,
    pub proof_of_address: Option<String>,
}

impl KycDocuments {
    pub fn selected_count(&self) -> usize {
        [&self.identity_document, &self.proof_of_address].iter().filter(|d| d.is_some()).count()
    }
}
