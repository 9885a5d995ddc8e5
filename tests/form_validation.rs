use commodity_hub::domain::auth::validation::{
    MSG_CONFIRM, MSG_EMAIL, MSG_FULL_NAME, MSG_MISMATCH, MSG_OTP, MSG_PASSWORD, MSG_TERMS,
    OTP_LENGTH, is_valid_otp, sanitize_otp_input, utf16_len,
};
use commodity_hub::domain::auth::{LoginForm, OtpForm, SignupForm};
use commodity_hub::domain::errors::FormField;
use quickcheck_macros::quickcheck;

#[test]
fn empty_signup_reports_every_field() {
    let errors = SignupForm::default().validate().unwrap_err();
    let table: Vec<(FormField, &str)> = errors.iter().map(|e| (e.field, e.message)).collect();

    assert_eq!(
        table,
        vec![
            (FormField::FullName, MSG_FULL_NAME),
            (FormField::Email, MSG_EMAIL),
            (FormField::Password, MSG_PASSWORD),
            (FormField::ConfirmPassword, MSG_CONFIRM),
            (FormField::TermsAccepted, MSG_TERMS),
        ]
    );
}

#[test]
fn short_confirmation_reports_length_before_mismatch() {
    let form = SignupForm {
        full_name: "Al".into(),
        email: "al@example.com".into(),
        password: "password123".into(),
        confirm_password: "pass".into(),
        terms_accepted: true,
    };
    let errors = form.validate().unwrap_err();

    assert_eq!(errors.first_for(FormField::ConfirmPassword), Some(MSG_CONFIRM));
    assert_eq!(errors.len(), 1);
}

#[test]
fn field_keys_match_form_names() {
    let keys: Vec<String> =
        [FormField::FullName, FormField::ConfirmPassword, FormField::TermsAccepted, FormField::Otp]
            .iter()
            .map(|f| f.to_string())
            .collect();
    assert_eq!(keys, vec!["fullName", "confirmPassword", "termsAccepted", "otp"]);
}

#[test]
fn error_summary_lists_fields_in_order() {
    let errors = LoginForm::new("nope", "short").validate().unwrap_err();
    assert_eq!(
        errors.to_string(),
        format!("email: {}; password: {}", MSG_EMAIL, MSG_PASSWORD)
    );
}

#[test]
fn otp_message_mentions_six_digits() {
    let errors = OtpForm::new("").validate().unwrap_err();
    assert_eq!(errors.first_for(FormField::Otp), Some(MSG_OTP));
    assert_eq!(OTP_LENGTH, 6);
}

#[quickcheck]
fn password_rule_counts_utf16_units(password: String) -> bool {
    let form = LoginForm::new("trader@example.com", password.clone());
    form.validate().is_ok() == (password.encode_utf16().count() >= 8)
}

#[test]
fn four_emoji_make_a_long_enough_password() {
    assert!(LoginForm::new("trader@example.com", "🛢🥇🌾⛏").validate().is_err());
    assert!(LoginForm::new("trader@example.com", "😀😀😀😀").validate().is_ok());
}

#[quickcheck]
fn any_mismatch_of_long_passwords_is_flagged(a: String, b: String) -> bool {
    let pad = |s: String| format!("{s}padding!");
    let (password, confirm) = (pad(a), pad(b));
    let form = SignupForm {
        full_name: "Trader".into(),
        email: "trader@example.com".into(),
        password: password.clone(),
        confirm_password: confirm.clone(),
        terms_accepted: true,
    };
    let flagged = form
        .validate()
        .err()
        .and_then(|e| e.first_for(FormField::ConfirmPassword))
        == Some(MSG_MISMATCH);
    flagged == (password != confirm)
}

#[quickcheck]
fn sanitized_otp_never_exceeds_six(raw: String) -> bool {
    let cleaned = sanitize_otp_input(&raw);
    utf16_len(&cleaned) <= OTP_LENGTH && !cleaned.chars().any(char::is_whitespace)
}

#[quickcheck]
fn six_digit_codes_are_accepted(digits: u32) -> bool {
    let code = format!("{:06}", digits % 1_000_000);
    is_valid_otp(&code) && OtpForm::new(code).validate().is_ok()
}
