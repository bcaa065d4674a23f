//! Login Page
//!
//! Full-screen shell centering the login card.

use leptos::prelude::*;

use super::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-screen">
            <LoginForm/>
        </div>
    }
}
