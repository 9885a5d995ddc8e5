use derive_more::Display;

use super::forms::{KycDocuments, LoginForm, OtpForm, SignupForm};
use crate::domain::errors::AuthError;
use crate::domain::logging::LogComponent;
use crate::domain::navigation::{Route, signup_requested};
use crate::domain::notification::Toast;
use crate::{log_debug, log_info};

/// The four states of the sign-in wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum AuthStep {
    #[display(fmt = "login")]
    Login,
    #[display(fmt = "signup")]
    Signup,
    #[display(fmt = "2fa")]
    TwoFactor,
    #[display(fmt = "kyc")]
    Kyc,
}

impl AuthStep {
    pub fn is_credentials(&self) -> bool {
        matches!(self, AuthStep::Login | AuthStep::Signup)
    }
}

/// What the auth page should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPanel {
    /// Login/Sign Up tabs; the step names the selected tab.
    Credentials(AuthStep),
    TwoFactor,
    /// KYC step 1: the code entry.
    KycCode,
    /// Code accepted, documents still missing.
    KycUpload,
    KycDone,
}

/// Side effects the application layer carries out after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEffect {
    Notify(Toast),
    /// Navigate after the cosmetic pause.
    Redirect(Route),
}

/// Client-only sign-in wizard. Every "verification" succeeds as soon as
/// the form has the right shape; there is no credential or code check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthWizard {
    step: AuthStep,
    kyc_code_verified: bool,
    kyc_dialog_open: bool,
    kyc_complete: bool,
    completion_open: bool,
    documents: KycDocuments,
}

impl Default for AuthWizard {
    fn default() -> Self {
        Self::new(AuthStep::Login)
    }
}

impl AuthWizard {
    pub fn new(step: AuthStep) -> Self {
        Self {
            step,
            kyc_code_verified: false,
            kyc_dialog_open: false,
            kyc_complete: false,
            completion_open: false,
            documents: KycDocuments::default(),
        }
    }

    /// Start on the signup tab when the query asks for it.
    pub fn from_query(query: Option<&str>) -> Self {
        if signup_requested(query) { Self::new(AuthStep::Signup) } else { Self::new(AuthStep::Login) }
    }

    pub fn step(&self) -> AuthStep {
        self.step
    }

    pub fn is_kyc_dialog_open(&self) -> bool {
        self.kyc_dialog_open
    }

    pub fn is_kyc_complete(&self) -> bool {
        self.kyc_complete
    }

    /// The "Verification Complete" drawer.
    pub fn is_completion_open(&self) -> bool {
        self.completion_open
    }

    pub fn dismiss_completion(&mut self) {
        self.completion_open = false;
    }

    pub fn is_kyc_code_verified(&self) -> bool {
        self.kyc_code_verified
    }

    pub fn documents(&self) -> &KycDocuments {
        &self.documents
    }

    pub fn panel(&self) -> AuthPanel {
        match self.step {
            AuthStep::Login | AuthStep::Signup => AuthPanel::Credentials(self.step),
            AuthStep::TwoFactor => AuthPanel::TwoFactor,
            AuthStep::Kyc if !self.kyc_code_verified => AuthPanel::KycCode,
            AuthStep::Kyc if self.kyc_complete => AuthPanel::KycDone,
            AuthStep::Kyc => AuthPanel::KycUpload,
        }
    }

    /// Switch between the Login and Sign Up tabs. Ignored once the user
    /// has moved past the credentials forms.
    pub fn select_tab(&mut self, tab: AuthStep) -> bool {
        if !self.step.is_credentials() || !tab.is_credentials() {
            return false;
        }
        self.step = tab;
        true
    }

    pub fn submit_login(&mut self, form: &LoginForm) -> Result<Vec<AuthEffect>, AuthError> {
        self.expect_step(AuthStep::Login, "submit the login form")?;
        form.validate()?;
        log_info!(LogComponent::Domain("AuthWizard"), "login accepted, moving to 2fa");
        self.step = AuthStep::TwoFactor;
        Ok(vec![AuthEffect::Notify(Toast::success(
            "Login Successful",
            "Redirecting you to 2FA verification...",
        ))])
    }

    pub fn submit_signup(&mut self, form: &SignupForm) -> Result<Vec<AuthEffect>, AuthError> {
        self.expect_step(AuthStep::Signup, "submit the signup form")?;
        form.validate()?;
        log_info!(LogComponent::Domain("AuthWizard"), "signup accepted, moving to kyc");
        self.step = AuthStep::Kyc;
        Ok(vec![AuthEffect::Notify(Toast::success(
            "Account Created",
            "Please verify your identity to complete the signup process.",
        ))])
    }

    /// The same code form serves 2FA and the first KYC step.
    pub fn submit_otp(&mut self, form: &OtpForm) -> Result<Vec<AuthEffect>, AuthError> {
        match self.step {
            AuthStep::TwoFactor => {
                form.validate()?;
                log_info!(LogComponent::Domain("AuthWizard"), "2fa code accepted");
                Ok(vec![
                    AuthEffect::Notify(Toast::success(
                        "Two-Factor Authentication Successful",
                        "Logging you in...",
                    )),
                    AuthEffect::Redirect(Route::Dashboard),
                ])
            }
            AuthStep::Kyc if !self.kyc_code_verified => {
                form.validate()?;
                log_info!(LogComponent::Domain("AuthWizard"), "kyc code accepted, opening upload");
                self.kyc_code_verified = true;
                self.kyc_dialog_open = true;
                Ok(vec![AuthEffect::Notify(Toast::success(
                    "Two-Factor Authentication Successful",
                    "KYC verification complete.",
                ))])
            }
            step => Err(AuthError::UnexpectedStep { step, action: "submit a verification code" }),
        }
    }

    /// Reopen the upload dialog after it was cancelled.
    pub fn open_kyc_dialog(&mut self) -> bool {
        if self.panel() != AuthPanel::KycUpload {
            return false;
        }
        self.kyc_dialog_open = true;
        true
    }

    pub fn close_kyc_dialog(&mut self) {
        if self.kyc_dialog_open {
            log_debug!(LogComponent::Domain("AuthWizard"), "kyc dialog cancelled");
        }
        self.kyc_dialog_open = false;
    }

    /// Accept whatever was picked; the files are never looked at.
    pub fn submit_documents(
        &mut self,
        documents: KycDocuments,
    ) -> Result<Vec<AuthEffect>, AuthError> {
        if !self.kyc_dialog_open {
            return Err(AuthError::UnexpectedStep { step: self.step, action: "submit documents" });
        }
        log_info!(
            LogComponent::Domain("AuthWizard"),
            "kyc documents submitted ({} selected)",
            documents.selected_count()
        );
        self.documents = documents;
        self.kyc_dialog_open = false;
        self.kyc_complete = true;
        self.completion_open = true;
        Ok(vec![
            AuthEffect::Notify(Toast::success(
                "KYC Verification Complete",
                "Your account has been fully verified.",
            )),
            AuthEffect::Redirect(Route::Dashboard),
        ])
    }

    fn expect_step(&self, wanted: AuthStep, action: &'static str) -> Result<(), AuthError> {
        if self.step == wanted {
            Ok(())
        } else {
            Err(AuthError::UnexpectedStep { step: self.step, action })
        }
    }
}
