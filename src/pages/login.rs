//! Login page: phone number in, one-time code back, session out.
//!
//! The backend owns OTP generation and verification; this page relays the
//! two steps and installs the returned session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::PageShell;
use crate::net::api::ApiClient;
use crate::net::types::OtpChallenge;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::toast::{ToastLevel, report_error};
use crate::util::validate::is_valid_phone;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Already signed in: straight to the dashboard.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate("/dashboard", NavigateOptions::default());
            }
        });
    }

    let phone = RwSignal::new(String::new());
    let code = RwSignal::new(String::new());
    let challenge = RwSignal::new(None::<OtpChallenge>);
    let field_error = RwSignal::new(None::<String>);

    let send_code = {
        let api = api.clone();
        Callback::new(move |()| {
            let phone_value = phone.get_untracked().trim().to_owned();
            if !is_valid_phone(&phone_value) {
                field_error.set(Some("Enter your 10-digit mobile number.".into()));
                return;
            }
            field_error.set(None);

            #[cfg(feature = "hydrate")]
            {
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    match api.request_otp(&phone_value).await {
                        Ok(otp) => {
                            challenge.set(Some(otp));
                            toast.update(|t| {
                                t.push(ToastLevel::Info, "Code sent. Check your phone.");
                            });
                        }
                        Err(err) => report_error(toast, "Could not send the code", &err),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&api, &toast, phone_value);
            }
        })
    };

    let verify = Callback::new(move |()| {
        let Some(otp) = challenge.get_untracked() else {
            return;
        };
        let phone_value = phone.get_untracked().trim().to_owned();
        let code_value = code.get_untracked().trim().to_owned();
        if code_value.len() != 6 || !code_value.bytes().all(|b| b.is_ascii_digit()) {
            field_error.set(Some("Enter the 6-digit code from the text message.".into()));
            return;
        }
        field_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.verify_otp(&phone_value, &otp.request_id, &code_value).await {
                    Ok(auth) => {
                        session.update(|s| s.sign_in(auth));
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => report_error(toast, "Could not verify the code", &err),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, &navigate, &toast, otp, phone_value, code_value);
        }
    });

    view! {
        <PageShell>
            <div class="login">
                <h1>"Sign in to ChefTable"</h1>
                <Show
                    when=move || challenge.get().is_some()
                    fallback=move || {
                        view! {
                            <label class="field">
                                "Mobile number"
                                <input
                                    type="tel"
                                    inputmode="numeric"
                                    placeholder="10-digit number"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                            </label>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| send_code.run(())
                            >
                                "Send code"
                            </button>
                        }
                    }
                >
                    <label class="field">
                        "One-time code"
                        <input
                            type="text"
                            inputmode="numeric"
                            placeholder="6-digit code"
                            prop:value=move || code.get()
                            on:input=move |ev| code.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="login__actions">
                        <button
                            class="btn"
                            on:click=move |_| {
                                challenge.set(None);
                                code.set(String::new());
                            }
                        >
                            "Use a different number"
                        </button>
                        <button class="btn btn--primary" on:click=move |_| verify.run(())>
                            "Verify and sign in"
                        </button>
                    </div>
                </Show>
                <Show when=move || field_error.get().is_some()>
                    <p class="field__error">{move || field_error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </PageShell>
    }
}
