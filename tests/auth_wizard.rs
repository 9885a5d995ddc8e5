use commodity_hub::domain::auth::validation::{MSG_MISMATCH, MSG_PASSWORD, MSG_TERMS};
use commodity_hub::domain::auth::{
    AuthEffect, AuthPanel, AuthStep, AuthWizard, KycDocuments, LoginForm, OtpForm, SignupForm,
};
use commodity_hub::domain::errors::{AuthError, FormField, ValidationErrors};
use commodity_hub::domain::navigation::Route;

fn valid_signup() -> SignupForm {
    SignupForm {
        full_name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        password: "password123".into(),
        confirm_password: "password123".into(),
        terms_accepted: true,
    }
}

fn wizard_at_upload() -> AuthWizard {
    let mut wizard = AuthWizard::new(AuthStep::Signup);
    wizard.submit_signup(&valid_signup()).unwrap();
    wizard.submit_otp(&OtpForm::new("123456")).unwrap();
    wizard
}

fn validation_errors(result: Result<Vec<AuthEffect>, AuthError>) -> ValidationErrors {
    match result {
        Err(AuthError::Validation(errors)) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn valid_login_moves_to_two_factor() {
    let mut wizard = AuthWizard::default();
    let effects = wizard.submit_login(&LoginForm::new("you@example.com", "password123")).unwrap();

    assert_eq!(wizard.step(), AuthStep::TwoFactor);
    assert_eq!(wizard.panel(), AuthPanel::TwoFactor);
    assert!(matches!(
        effects.as_slice(),
        [AuthEffect::Notify(toast)] if toast.title == "Login Successful"
    ));
}

#[test]
fn short_password_keeps_login_step() {
    let mut wizard = AuthWizard::default();
    let errors = validation_errors(wizard.submit_login(&LoginForm::new("you@example.com", "1234567")));

    assert_eq!(errors.first_for(FormField::Password), Some(MSG_PASSWORD));
    assert!(!errors.has(FormField::Email));
    assert_eq!(wizard.step(), AuthStep::Login);
}

#[test]
fn mismatched_confirmation_is_flagged_on_confirm_field() {
    let mut wizard = AuthWizard::new(AuthStep::Signup);
    let form = SignupForm { confirm_password: "password124".into(), ..valid_signup() };
    let errors = validation_errors(wizard.submit_signup(&form));

    assert_eq!(errors.first_for(FormField::ConfirmPassword), Some(MSG_MISMATCH));
    assert_eq!(errors.len(), 1);
    assert_eq!(wizard.step(), AuthStep::Signup);
}

#[test]
fn unchecked_terms_block_signup() {
    let mut wizard = AuthWizard::new(AuthStep::Signup);
    let form = SignupForm { terms_accepted: false, ..valid_signup() };
    let errors = validation_errors(wizard.submit_signup(&form));

    assert_eq!(errors.first_for(FormField::TermsAccepted), Some(MSG_TERMS));
    assert_eq!(wizard.step(), AuthStep::Signup);
}

#[test]
fn signup_moves_to_kyc_code_entry() {
    let mut wizard = AuthWizard::new(AuthStep::Signup);
    wizard.submit_signup(&valid_signup()).unwrap();

    assert_eq!(wizard.step(), AuthStep::Kyc);
    assert_eq!(wizard.panel(), AuthPanel::KycCode);
    assert!(!wizard.is_kyc_dialog_open());
}

#[test]
fn two_factor_code_redirects_to_dashboard() {
    let mut wizard = AuthWizard::default();
    wizard.submit_login(&LoginForm::new("you@example.com", "password123")).unwrap();
    let effects = wizard.submit_otp(&OtpForm::new("000000")).unwrap();

    assert_eq!(effects.last(), Some(&AuthEffect::Redirect(Route::Dashboard)));
    assert_eq!(wizard.step(), AuthStep::TwoFactor);
}

#[test]
fn short_code_is_rejected() {
    let mut wizard = AuthWizard::default();
    wizard.submit_login(&LoginForm::new("you@example.com", "password123")).unwrap();
    let errors = validation_errors(wizard.submit_otp(&OtpForm::new("12345")));

    assert!(errors.has(FormField::Otp));
}

#[test]
fn kyc_code_opens_upload_dialog() {
    let wizard = wizard_at_upload();

    assert!(wizard.is_kyc_code_verified());
    assert!(wizard.is_kyc_dialog_open());
    assert_eq!(wizard.panel(), AuthPanel::KycUpload);
}

#[test]
fn documents_complete_verification_and_redirect() {
    let mut wizard = wizard_at_upload();
    let documents = KycDocuments {
        identity_document: Some("passport.pdf".into()),
        proof_of_address: None,
    };
    let effects = wizard.submit_documents(documents).unwrap();

    assert!(wizard.is_kyc_complete());
    assert!(wizard.is_completion_open());
    assert!(!wizard.is_kyc_dialog_open());
    assert_eq!(wizard.panel(), AuthPanel::KycDone);
    assert_eq!(wizard.documents().selected_count(), 1);
    assert_eq!(effects.last(), Some(&AuthEffect::Redirect(Route::Dashboard)));

    wizard.dismiss_completion();
    assert!(!wizard.is_completion_open());
    assert!(wizard.is_kyc_complete());
}

#[test]
fn empty_document_selection_is_accepted() {
    let mut wizard = wizard_at_upload();
    assert!(wizard.submit_documents(KycDocuments::default()).is_ok());
    assert!(wizard.is_kyc_complete());
}

#[test]
fn cancelled_dialog_can_be_reopened() {
    let mut wizard = wizard_at_upload();
    wizard.close_kyc_dialog();

    assert_eq!(wizard.panel(), AuthPanel::KycUpload);
    assert!(!wizard.is_kyc_dialog_open());
    assert!(wizard.submit_documents(KycDocuments::default()).is_err());

    assert!(wizard.open_kyc_dialog());
    assert!(wizard.is_kyc_dialog_open());
}

#[test]
fn dialog_cannot_open_before_code_is_verified() {
    let mut wizard = AuthWizard::new(AuthStep::Signup);
    wizard.submit_signup(&valid_signup()).unwrap();

    assert!(!wizard.open_kyc_dialog());
    assert!(!wizard.is_kyc_dialog_open());
}

#[test]
fn submissions_out_of_step_leave_wizard_untouched() {
    let mut wizard = AuthWizard::default();
    let before = wizard.clone();

    let result = wizard.submit_signup(&valid_signup());
    assert!(matches!(result, Err(AuthError::UnexpectedStep { step: AuthStep::Login, .. })));
    assert!(matches!(
        wizard.submit_otp(&OtpForm::new("123456")),
        Err(AuthError::UnexpectedStep { .. })
    ));
    assert_eq!(wizard, before);
}

#[test]
fn verified_kyc_code_cannot_be_resubmitted() {
    let mut wizard = wizard_at_upload();
    assert!(matches!(
        wizard.submit_otp(&OtpForm::new("123456")),
        Err(AuthError::UnexpectedStep { step: AuthStep::Kyc, .. })
    ));
}

#[test]
fn tabs_switch_only_between_credentials() {
    let mut wizard = AuthWizard::default();
    assert!(wizard.select_tab(AuthStep::Signup));
    assert_eq!(wizard.panel(), AuthPanel::Credentials(AuthStep::Signup));
    assert!(!wizard.select_tab(AuthStep::Kyc));

    wizard.select_tab(AuthStep::Login);
    wizard.submit_login(&LoginForm::new("you@example.com", "password123")).unwrap();
    assert!(!wizard.select_tab(AuthStep::Signup));
    assert_eq!(wizard.step(), AuthStep::TwoFactor);
}

#[test]
fn query_picks_initial_tab() {
    assert_eq!(AuthWizard::from_query(Some("?signup=true")).step(), AuthStep::Signup);
    assert_eq!(AuthWizard::from_query(Some("foo=1&signup=true")).step(), AuthStep::Signup);
    assert_eq!(AuthWizard::from_query(Some("?signup=false")).step(), AuthStep::Login);
    assert_eq!(AuthWizard::from_query(None).step(), AuthStep::Login);
}

#[test]
fn unexpected_step_message_names_step() {
    let err = AuthError::UnexpectedStep { step: AuthStep::TwoFactor, action: "submit documents" };
    assert_eq!(err.to_string(), "Cannot submit documents while on step '2fa'");
}
