//! Be Admin App
//!
//! Route table and the authenticated gate in front of the dashboard.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::{DashboardPage, LoginPage};
use crate::session::{use_session, SessionStore};

/// Public login route.
pub const LOGIN_PATH: &str = "/";
/// Protected dashboard route.
pub const DASHBOARD_PATH: &str = "/dashboard";

#[component]
pub fn App() -> impl IntoView {
    // Session service for every component below, route guard included.
    provide_context(SessionStore::browser());

    view! {
        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=path!("/") view=LoginPage/>
                <Route path=path!("/dashboard") view=GuardedDashboard/>
            </Routes>
        </Router>
    }
}

/// Gate on the stored session, re-checked on every navigation to the
/// dashboard path.
#[component]
fn GuardedDashboard() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=|| view! { <Redirect path=LOGIN_PATH/> }
        >
            <DashboardPage/>
        </Show>
    }
}
