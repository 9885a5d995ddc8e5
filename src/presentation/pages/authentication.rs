use leptos::*;
use leptos_router::use_location;
use web_sys::HtmlInputElement;

use crate::application::AuthFlowUseCase;
use crate::config::AppConfig;
use crate::domain::auth::validation::{OTP_LENGTH, sanitize_otp_input};
use crate::domain::auth::{
    AuthPanel, AuthStep, AuthWizard, KycDocuments, LoginForm, OtpForm, SignupForm,
};
use crate::domain::errors::{AuthError, FormField, ValidationErrors};
use crate::domain::navigation::signup_requested;
use crate::infrastructure::{BrowserNavigator, ToastNotifier};
use crate::presentation::components::{Card, CardContent, CardHeader, FieldMessage, Navbar};

type BrowserAuthFlow = AuthFlowUseCase<BrowserNavigator, ToastNotifier>;

/// Everything the wizard's forms share. Lives as long as the page.
#[derive(Clone, Copy)]
struct AuthContext {
    wizard: RwSignal<AuthWizard>,
    flow: StoredValue<BrowserAuthFlow>,
}

impl AuthContext {
    /// Run one wizard transition and route validation failures to
    /// `errors`. A rejected transition leaves the wizard untouched.
    fn run(
        &self,
        errors: RwSignal<ValidationErrors>,
        step: impl FnOnce(&BrowserAuthFlow, &mut AuthWizard) -> Result<(), AuthError>,
    ) {
        let mut next = self.wizard.get_untracked();
        match self.flow.with_value(|flow| step(flow, &mut next)) {
            Ok(()) => {
                errors.set(ValidationErrors::default());
                self.wizard.set(next);
            }
            Err(AuthError::Validation(found)) => errors.set(found),
            // Logged as a warning by the use case.
            Err(AuthError::UnexpectedStep { .. }) => {}
        }
    }
}

/// Contents and messages of both credential forms. They outlive the
/// cards, which are rebuilt on every tab switch.
#[derive(Clone, Copy)]
struct CredentialDrafts {
    login: RwSignal<LoginForm>,
    login_errors: RwSignal<ValidationErrors>,
    signup: RwSignal<SignupForm>,
    signup_errors: RwSignal<ValidationErrors>,
}

impl CredentialDrafts {
    fn new() -> Self {
        Self {
            login: create_rw_signal(LoginForm::default()),
            login_errors: create_rw_signal(ValidationErrors::default()),
            signup: create_rw_signal(SignupForm::default()),
            signup_errors: create_rw_signal(ValidationErrors::default()),
        }
    }
}

/// Once a submit has failed, re-check the form on every edit so messages
/// disappear as soon as the field is fixed.
fn revalidate(errors: RwSignal<ValidationErrors>, check: impl FnOnce() -> Result<(), ValidationErrors>) {
    if errors.with_untracked(|e| !e.is_empty()) {
        errors.set(check().err().unwrap_or_default());
    }
}

#[component]
pub fn AuthenticationPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let location = use_location();

    let wizard = create_rw_signal(AuthWizard::from_query(Some(&location.search.get_untracked())));
    let flow = store_value(AuthFlowUseCase::new(
        BrowserNavigator::from_router(),
        ToastNotifier::new(config.toast_duration()),
        config.redirect_delay(),
    ));
    let ctx = AuthContext { wizard, flow };

    // Navbar Login / Sign Up while already here only switches the tab.
    create_effect(move |_| {
        let tab = if signup_requested(Some(&location.search.get())) {
            AuthStep::Signup
        } else {
            AuthStep::Login
        };
        if wizard.with_untracked(|w| w.step().is_credentials() && w.step() != tab) {
            wizard.update(|w| {
                w.select_tab(tab);
            });
        }
    });

    let drafts = CredentialDrafts::new();
    let otp = create_rw_signal(OtpForm::default());
    let otp_errors = create_rw_signal(ValidationErrors::default());
    let panel = create_memo(move |_| wizard.with(|w| w.panel()));

    view! {
        <div class="page muted-bg">
            <Navbar/>
            <div class="auth-layout">
                <AuthIntro/>
                <div>
                    {move || match panel.get() {
                        AuthPanel::Credentials(tab) => view! { <CredentialsTabs ctx=ctx drafts=drafts tab=tab/> }.into_view(),
                        AuthPanel::TwoFactor => {
                            view! {
                                <OtpCard
                                    ctx=ctx
                                    otp=otp
                                    errors=otp_errors
                                    title="Two-Factor Authentication"
                                    description="Enter the verification code sent to your device."
                                    icon="🛡"
                                    blurb="We've sent a 6-digit code to your registered phone number. Please enter it below to verify your identity."
                                    submit_label="Verify"
                                    show_resend=true
                                />
                            }
                                .into_view()
                        }
                        AuthPanel::KycCode => {
                            view! {
                                <OtpCard
                                    ctx=ctx
                                    otp=otp
                                    errors=otp_errors
                                    title="KYC Verification - Step 1"
                                    description="Complete two-factor authentication to proceed with identity verification."
                                    icon="👤"
                                    blurb="As part of our Know Your Customer (KYC) process, we need to verify your identity. We've sent a verification code to your registered phone number."
                                    submit_label="Verify and Continue"
                                    show_resend=false
                                />
                            }
                                .into_view()
                        }
                        AuthPanel::KycUpload => view! { <UploadPromptCard ctx=ctx/> }.into_view(),
                        AuthPanel::KycDone => view! { <VerifiedCard ctx=ctx/> }.into_view(),
                    }}
                </div>
            </div>
            <KycDialog ctx=ctx/>
            <CompletionDrawer ctx=ctx/>
        </div>
    }
}

#[component]
fn AuthIntro() -> impl IntoView {
    let features = [
        ("🛡", "Secure Authentication", "Industry-standard security protocols to protect your account."),
        ("✔", "Two-Factor Authentication", "Extra security layer to ensure only you can access your account."),
        ("👤", "KYC Verification", "Regulatory compliance to ensure a safe trading environment."),
    ];

    view! {
        <div class="auth-intro">
            <h1 style="margin-top: 0">"Welcome to CommodityHub"</h1>
            <p>"Your secure gateway to the global commodities market."</p>
            {features
                .into_iter()
                .map(|(icon, title, text)| {
                    view! {
                        <div class="auth-feature">
                            <div style="font-size: 1.5rem" aria-hidden="true">{icon}</div>
                            <div>
                                <h3 style="margin: 0 0 0.25rem">{title}</h3>
                                <p>{text}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn CredentialsTabs(ctx: AuthContext, drafts: CredentialDrafts, tab: AuthStep) -> impl IntoView {
    let select = move |next: AuthStep| {
        ctx.wizard.update(|w| {
            w.select_tab(next);
        });
    };

    view! {
        <div class="tab-strip two" role="tablist">
            <button
                type="button"
                role="tab"
                class="tab"
                class:active=tab == AuthStep::Login
                on:click=move |_| select(AuthStep::Login)
            >
                "→ Login"
            </button>
            <button
                type="button"
                role="tab"
                class="tab"
                class:active=tab == AuthStep::Signup
                on:click=move |_| select(AuthStep::Signup)
            >
                "+ Sign Up"
            </button>
        </div>
        <div class="tab-panel">
            {match tab {
                AuthStep::Signup => {
                    view! { <SignupCard ctx=ctx form=drafts.signup errors=drafts.signup_errors/> }
                        .into_view()
                }
                _ => view! { <LoginCard ctx=ctx form=drafts.login errors=drafts.login_errors/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn LoginCard(
    ctx: AuthContext,
    form: RwSignal<LoginForm>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let message = move |field: FormField| Signal::derive(move || errors.with(|e| e.first_for(field)));
    let edit = move |apply: fn(&mut LoginForm, String), ev: ev::Event| {
        form.update(|f| apply(f, event_target_value(&ev)));
        revalidate(errors, || form.with_untracked(|f| f.validate()));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        ctx.run(errors, |flow, w| flow.submit_login(w, &submitted));
    };

    view! {
        <Card>
            <CardHeader title="Login to Your Account" description="Enter your credentials to access the platform."/>
            <CardContent>
                <form on:submit=on_submit novalidate=true>
                    <div class="form-field">
                        <label for="login-email">"Email"</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| edit(|f, v| f.email = v, ev)
                        />
                        <FieldMessage message=message(FormField::Email)/>
                    </div>
                    <div class="form-field">
                        <label for="login-password">"Password"</label>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="••••••••"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| edit(|f, v| f.password = v, ev)
                        />
                        <FieldMessage message=message(FormField::Password)/>
                    </div>
                    <div class="form-row">
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.remember_me)
                                on:change=move |ev| form.update(|f| f.remember_me = event_target_checked(&ev))
                            />
                            "Remember me"
                        </label>
                        <button type="button" class="btn-link">"Forgot password?"</button>
                    </div>
                    <button type="submit" class="btn btn-block btn-blue">"Login →"</button>
                </form>
            </CardContent>
        </Card>
    }
}

#[component]
fn SignupCard(
    ctx: AuthContext,
    form: RwSignal<SignupForm>,
    errors: RwSignal<ValidationErrors>,
) -> impl IntoView {
    let message = move |field: FormField| Signal::derive(move || errors.with(|e| e.first_for(field)));
    let edit = move |apply: fn(&mut SignupForm, String), ev: ev::Event| {
        form.update(|f| apply(f, event_target_value(&ev)));
        revalidate(errors, || form.with_untracked(|f| f.validate()));
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = form.get_untracked();
        ctx.run(errors, |flow, w| flow.submit_signup(w, &submitted));
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           kind: &'static str,
                           placeholder: &'static str,
                           field: FormField,
                           read: fn(&SignupForm) -> String,
                           write: fn(&mut SignupForm, String)| {
        view! {
            <div class="form-field">
                <label for=id>{label}</label>
                <input
                    id=id
                    type=kind
                    placeholder=placeholder
                    prop:value=move || form.with(read)
                    on:input=move |ev| edit(write, ev)
                />
                <FieldMessage message=message(field)/>
            </div>
        }
    };

    view! {
        <Card>
            <CardHeader title="Create an Account" description="Join our platform to start trading commodities."/>
            <CardContent>
                <form on:submit=on_submit novalidate=true>
                    {text_field(
                        "signup-name",
                        "Full Name",
                        "text",
                        "John Doe",
                        FormField::FullName,
                        |f| f.full_name.clone(),
                        |f, v| f.full_name = v,
                    )}
                    {text_field(
                        "signup-email",
                        "Email",
                        "email",
                        "you@example.com",
                        FormField::Email,
                        |f| f.email.clone(),
                        |f, v| f.email = v,
                    )}
                    {text_field(
                        "signup-password",
                        "Password",
                        "password",
                        "••••••••",
                        FormField::Password,
                        |f| f.password.clone(),
                        |f, v| f.password = v,
                    )}
                    {text_field(
                        "signup-confirm",
                        "Confirm Password",
                        "password",
                        "••••••••",
                        FormField::ConfirmPassword,
                        |f| f.confirm_password.clone(),
                        |f, v| f.confirm_password = v,
                    )}
                    <div class="form-field">
                        <label class="checkbox-row">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.terms_accepted)
                                on:change=move |ev| {
                                    form.update(|f| f.terms_accepted = event_target_checked(&ev));
                                    revalidate(errors, || form.with_untracked(|f| f.validate()));
                                }
                            />
                            "I agree to the terms of service and privacy policy"
                        </label>
                        <FieldMessage message=message(FormField::TermsAccepted)/>
                    </div>
                    <button type="submit" class="btn btn-block btn-gold">"Create Account →"</button>
                </form>
            </CardContent>
        </Card>
    }
}

/// Six-character code entry used by both 2FA and the first KYC step.
#[component]
fn OtpCard(
    ctx: AuthContext,
    otp: RwSignal<OtpForm>,
    errors: RwSignal<ValidationErrors>,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    blurb: &'static str,
    submit_label: &'static str,
    show_resend: bool,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = otp.get_untracked();
        ctx.run(errors, |flow, w| flow.submit_otp(w, &submitted));
    };

    let slots = (0..OTP_LENGTH)
        .map(|index| {
            let digit = move || otp.with(|f| f.otp.chars().nth(index));
            view! {
                <div class="otp-slot" class:filled=move || digit().is_some()>
                    {move || digit().map(String::from).unwrap_or_default()}
                </div>
            }
        })
        .collect_view();

    view! {
        <Card>
            <CardHeader title=title description=description/>
            <CardContent>
                <form on:submit=on_submit novalidate=true>
                    <div class="step-icon" aria-hidden="true">{icon}</div>
                    <p class="muted" style="text-align: center">{blurb}</p>
                    <input
                        class="otp-input"
                        type="text"
                        inputmode="numeric"
                        autocomplete="one-time-code"
                        aria-label="Verification code"
                        maxlength=OTP_LENGTH
                        prop:value=move || otp.with(|f| f.otp.clone())
                        on:input=move |ev| {
                            otp.update(|f| f.otp = sanitize_otp_input(&event_target_value(&ev)));
                            revalidate(errors, || otp.with_untracked(|f| f.validate()));
                        }
                    />
                    <div class="otp-slots" aria-hidden="true">{slots}</div>
                    <FieldMessage message=Signal::derive(move || errors.with(|e| e.first_for(FormField::Otp)))/>
                    {show_resend
                        .then(|| {
                            view! {
                                <p class="muted" style="text-align: center">
                                    "📞 Didn't receive the code? "
                                    <button type="button" class="btn-link">"Resend"</button>
                                </p>
                            }
                        })}
                    <button type="submit" class="btn btn-block btn-blue">{submit_label} " →"</button>
                </form>
            </CardContent>
        </Card>
    }
}

/// Shown when the upload dialog was cancelled before submitting.
#[component]
fn UploadPromptCard(ctx: AuthContext) -> impl IntoView {
    view! {
        <Card>
            <CardHeader
                title="KYC Verification - Step 2"
                description="Upload your identification documents to complete the verification process."
            />
            <CardContent>
                <p class="muted">"Your code was accepted. One step left: your identity documents."</p>
                <button
                    type="button"
                    class="btn btn-block btn-gold"
                    on:click=move |_| {
                        ctx.wizard.update(|w| {
                            w.open_kyc_dialog();
                        })
                    }
                >
                    "Upload documents"
                </button>
            </CardContent>
        </Card>
    }
}

#[component]
fn VerifiedCard(ctx: AuthContext) -> impl IntoView {
    view! {
        <Card>
            <CardHeader title="Verification Complete" description="Your account has been successfully verified"/>
            <CardContent>
                <button
                    type="button"
                    class="btn btn-block btn-gold"
                    on:click=move |_| ctx.flow.with_value(|flow| flow.go_to_dashboard())
                >
                    "Go to Dashboard"
                </button>
            </CardContent>
        </Card>
    }
}

/// File name of the first picked file, if any.
fn picked_file_name(ev: &ev::Event) -> Option<String> {
    event_target::<HtmlInputElement>(ev).files().and_then(|files| files.get(0)).map(|file| file.name())
}

#[component]
fn KycDialog(ctx: AuthContext) -> impl IntoView {
    let documents = create_rw_signal(KycDocuments::default());
    let document_errors = create_rw_signal(ValidationErrors::default());

    let close = move || ctx.wizard.update(|w| w.close_kyc_dialog());
    let submit = move |_| {
        let picked = documents.get_untracked();
        ctx.run(document_errors, move |flow, w| flow.submit_documents(w, picked));
    };

    let upload_box = move |heading: &'static str,
                           hint: &'static str,
                           read: fn(&KycDocuments) -> Option<String>,
                           write: fn(&mut KycDocuments, Option<String>)| {
        view! {
            <div style="margin-bottom: 1rem">
                <h3 style="font-size: 0.875rem; margin: 0 0 0.5rem">{heading}</h3>
                <label class="upload-box">
                    <span aria-hidden="true">"⬆"</span>
                    <p style="margin: 0.25rem 0"><strong>"Click to upload"</strong> " or drag and drop"</p>
                    <p class="muted" style="margin: 0">
                        {move || documents.with(read).unwrap_or_else(|| hint.to_string())}
                    </p>
                    <input type="file" on:change=move |ev| documents.update(|d| write(d, picked_file_name(&ev)))/>
                </label>
            </div>
        }
    };

    view! {
        <Show when=move || ctx.wizard.with(|w| w.is_kyc_dialog_open())>
            <div class="overlay" on:click=move |_| close()>
                <div class="dialog" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <h2 style="margin-top: 0">"KYC Verification - Step 2"</h2>
                    <p class="muted">
                        "Upload your identification documents to complete the verification process."
                    </p>
                    {upload_box(
                        "Identification Document",
                        "Passport, Driver's License, or National ID Card",
                        |d| d.identity_document.clone(),
                        |d, name| d.identity_document = name,
                    )}
                    {upload_box(
                        "Proof of Address",
                        "Utility bill or bank statement (less than 3 months old)",
                        |d| d.proof_of_address.clone(),
                        |d, name| d.proof_of_address = name,
                    )}
                    <div class="dialog-footer">
                        <button type="button" class="btn btn-outline" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button type="button" class="btn btn-gold" on:click=submit>
                            "Submit Documents →"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn CompletionDrawer(ctx: AuthContext) -> impl IntoView {
    view! {
        <Show when=move || ctx.wizard.with(|w| w.is_completion_open())>
            <div class="drawer" role="dialog">
                <h2 style="margin: 0">"Verification Complete"</h2>
                <p class="muted">"Your account has been successfully verified"</p>
                <div class="step-icon text-commodity-green" aria-hidden="true">"✔"</div>
                <p>
                    "Thank you for completing the KYC verification process. You now have full access to the CommodityHub platform."
                </p>
                <div class="drawer-actions">
                    <button
                        type="button"
                        class="btn btn-gold"
                        on:click=move |_| ctx.flow.with_value(|flow| flow.go_to_dashboard())
                    >
                        "Go to Dashboard"
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline"
                        on:click=move |_| ctx.wizard.update(|w| w.dismiss_completion())
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
