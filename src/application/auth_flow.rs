use std::time::Duration;

use crate::domain::{
    auth::{AuthEffect, AuthWizard, KycDocuments, LoginForm, OtpForm, SignupForm},
    errors::AuthError,
    logging::{LogComponent, LogEntry, LogLevel, get_logger},
    navigation::{Navigator, Route},
    notification::Notifier,
};

/// Runs wizard transitions and carries out their effects: toasts now,
/// redirects after the configured pause.
pub struct AuthFlowUseCase<N: Navigator, T: Notifier> {
    navigator: N,
    notifier: T,
    redirect_delay: Duration,
}

impl<N: Navigator, T: Notifier> AuthFlowUseCase<N, T> {
    pub fn new(navigator: N, notifier: T, redirect_delay: Duration) -> Self {
        Self { navigator, notifier, redirect_delay }
    }

    pub fn submit_login(&self, wizard: &mut AuthWizard, form: &LoginForm) -> Result<(), AuthError> {
        let result = wizard.submit_login(form);
        self.finish(wizard, "login", result)
    }

    pub fn submit_signup(
        &self,
        wizard: &mut AuthWizard,
        form: &SignupForm,
    ) -> Result<(), AuthError> {
        let result = wizard.submit_signup(form);
        self.finish(wizard, "signup", result)
    }

    pub fn submit_otp(&self, wizard: &mut AuthWizard, form: &OtpForm) -> Result<(), AuthError> {
        let result = wizard.submit_otp(form);
        self.finish(wizard, "otp", result)
    }

    pub fn submit_documents(
        &self,
        wizard: &mut AuthWizard,
        documents: KycDocuments,
    ) -> Result<(), AuthError> {
        let result = wizard.submit_documents(documents);
        self.finish(wizard, "documents", result)
    }

    /// "Go to Dashboard" on the completion panel: no pause.
    pub fn go_to_dashboard(&self) {
        self.navigator.navigate(Route::Dashboard);
    }

    fn finish(
        &self,
        wizard: &AuthWizard,
        action: &'static str,
        result: Result<Vec<AuthEffect>, AuthError>,
    ) -> Result<(), AuthError> {
        match result {
            Ok(effects) => {
                get_logger().log_with_metadata(
                    LogLevel::Info,
                    LogComponent::Application("AuthFlow"),
                    &format!("{} accepted", action),
                    &format!("step={} panel={:?}", wizard.step(), wizard.panel()),
                );
                self.apply(effects);
                Ok(())
            }
            Err(err) => {
                // The UI never offers a form for the wrong step.
                let level = match err {
                    AuthError::Validation(_) => LogLevel::Debug,
                    AuthError::UnexpectedStep { .. } => LogLevel::Warn,
                };
                get_logger().log(LogEntry::new(
                    level,
                    LogComponent::Application("AuthFlow"),
                    &format!("{} rejected: {}", action, err),
                ));
                Err(err)
            }
        }
    }

    fn apply(&self, effects: Vec<AuthEffect>) {
        for effect in effects {
            match effect {
                AuthEffect::Notify(toast) => self.notifier.notify(toast),
                AuthEffect::Redirect(route) => self.navigator.navigate_after(route, self.redirect_delay),
            }
        }
    }
}
