//! Login Form Component
//!
//! Credential form with field validation, a submit spinner and the generic
//! authentication error banner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::app::DASHBOARD_PATH;
use crate::config;
use crate::services;
use crate::session::use_session;
use crate::validation::{validate_credentials, FieldErrors};

/// One generic message for every failed attempt; the cause goes to the
/// console only.
const MSG_AUTH_FAILED: &str = "Error al iniciar sesión. Verifica tus credenciales.";

#[component]
pub fn LoginForm() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (auth_error, set_auth_error) = signal(None::<&'static str>);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_auth_error.set(None);

        // Validation failures keep the form idle; no request goes out.
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(credentials) => {
                set_field_errors.set(FieldErrors::default());
                credentials
            }
            Err(errors) => {
                set_field_errors.set(errors);
                return;
            }
        };

        set_submitting.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            // Keep the spinner up at least LOGIN_MIN_SPINNER_MS; the timer
            // runs alongside the request.
            let min_spinner = TimeoutFuture::new(config::LOGIN_MIN_SPINNER_MS);
            let result = services::login(&session, &credentials).await;
            min_spinner.await;

            match result {
                Ok(_) => navigate(DASHBOARD_PATH, Default::default()),
                Err(err) => {
                    web_sys::console::error_1(&format!("[Login] {err}").into());
                    // try_* in case the view was torn down mid-flight.
                    let _ = set_auth_error.try_set(Some(MSG_AUTH_FAILED));
                    let _ = set_submitting.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-card">
            <div class="login-header">
                <span class="login-logo">"Be"</span>
                <p class="login-tagline">"¡Empieza a conectar tu comunidad ante buenas acciones!"</p>
            </div>

            <form class="login-form" on:submit=on_submit>
                <div class="form-field">
                    <label for="email">"Correo Electronico"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="Ingresa tu correo electronico"
                        class=move || {
                            if field_errors.get().email.is_some() { "form-input invalid" } else { "form-input" }
                        }
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().email.map(|msg| view! {
                        <p class="field-error">{msg}</p>
                    })}
                </div>

                <div class="form-field">
                    <label for="password">"Contraseña"</label>
                    <input
                        id="password"
                        type="password"
                        placeholder="Ingresa tu contraseña"
                        class=move || {
                            if field_errors.get().password.is_some() { "form-input invalid" } else { "form-input" }
                        }
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    {move || field_errors.get().password.map(|msg| view! {
                        <p class="field-error">{msg}</p>
                    })}
                </div>

                <div class="recover-link">
                    <a href="#">"Recuperar Contraseña"</a>
                </div>

                {move || auth_error.get().map(|msg| view! {
                    <div class="auth-error">
                        <p>{msg}</p>
                    </div>
                })}

                <button type="submit" class="submit-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() {
                        view! {
                            <span class="submit-busy">
                                <span class="spinner"></span>
                                "Ingresando..."
                            </span>
                        }.into_any()
                    } else {
                        view! { <span>"Ingresar"</span> }.into_any()
                    }}
                </button>
            </form>
        </div>
    }
}
