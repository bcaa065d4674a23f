//! Dashboard Page
//!
//! Header, sidebar and the paged actions table with loading/error/empty
//! states. Every page change starts a fresh fetch cycle; a superseded
//! fetch that resolves late is dropped by generation stamping.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::{ActionsTable, Pagination};
use crate::app::LOGIN_PATH;
use crate::models::ActionPage;
use crate::services;
use crate::session::use_session;

const MSG_LOADING: &str = "Cargando datos...";
const MSG_NO_DATA: &str = "No hay datos disponibles";
const MSG_FETCH_FAILED: &str = "Error al cargar los datos. Por favor intenta de nuevo.";

/// Static sidebar entries; only logout below them is wired up.
const NAV_ITEMS: &[&str] = &[
    "Home",
    "Impacto",
    "Comunidad",
    "Sponsors",
    "Marketplace",
    "Bakanes",
    "Contenidos",
    "Categorias de acciones",
];

/// State of one fetch cycle.
#[derive(Clone, PartialEq)]
enum PageState {
    Loading,
    Loaded(ActionPage),
    Errored,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (current_page, set_current_page) = signal(services::DEFAULT_PAGE);
    let (state, set_state) = signal(PageState::Loading);
    let (sidebar_open, set_sidebar_open) = signal(false);

    // Stamp of the latest fetch cycle; a resolving fetch applies its result
    // only while its stamp is still current.
    let generation = StoredValue::new(0u32);

    // Fetch on mount and on every page change.
    Effect::new({
        let session = session.clone();
        move |_| {
            let page = current_page.get();
            let stamp = generation.get_value() + 1;
            generation.set_value(stamp);
            set_state.set(PageState::Loading);

            let session = session.clone();
            spawn_local(async move {
                let result =
                    services::admin_list(&session, page, services::DEFAULT_PAGE_SIZE).await;
                // try_* because the view (and its signals) may be gone by
                // the time a superseded fetch resolves.
                if generation.try_get_value() != Some(stamp) {
                    return;
                }
                match result {
                    Ok(loaded) => {
                        let _ = set_state.try_set(PageState::Loaded(loaded));
                    }
                    Err(err) => {
                        web_sys::console::error_1(&format!("[Dashboard] {err}").into());
                        let _ = set_state.try_set(PageState::Errored);
                    }
                }
            });
        }
    });

    let on_page_change = Callback::new(move |page: u32| set_current_page.set(page));

    let on_logout = {
        let session = session.clone();
        move |_| {
            session.clear();
            navigate(LOGIN_PATH, Default::default());
        }
    };

    view! {
        <div class="dashboard-layout">
            <header class="top-bar">
                <div class="top-bar-left">
                    <button
                        class="menu-btn"
                        on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <span class="top-bar-logo">"Be"</span>
                </div>
                <div class="avatar-badge">"A"</div>
            </header>

            <div class="dashboard-body">
                <Show when=move || sidebar_open.get()>
                    <div class="sidebar-overlay" on:click=move |_| set_sidebar_open.set(false)></div>
                </Show>

                <aside class=move || if sidebar_open.get() { "sidebar open" } else { "sidebar" }>
                    <nav class="sidebar-nav">
                        {NAV_ITEMS.iter().map(|label| view! {
                            <a href="#" class="nav-link">{*label}</a>
                        }).collect_view()}
                    </nav>
                    <div class="sidebar-footer">
                        <button class="logout-btn" on:click=on_logout>
                            "Cerrar Sesión"
                        </button>
                    </div>
                </aside>

                <main class="dashboard-content">
                    <h1>"CATEGORIAS"</h1>

                    {move || match state.get() {
                        PageState::Loading => view! {
                            <div class="table-card">
                                <div class="table-status">{MSG_LOADING}</div>
                            </div>
                        }.into_any(),
                        PageState::Errored => view! {
                            <div class="table-card">
                                <div class="table-status error">{MSG_FETCH_FAILED}</div>
                            </div>
                        }.into_any(),
                        PageState::Loaded(page) if page.items.is_empty() => view! {
                            <div class="table-card">
                                <div class="table-status">{MSG_NO_DATA}</div>
                            </div>
                        }.into_any(),
                        PageState::Loaded(page) => view! {
                            <div class="table-section">
                                <div class="table-card">
                                    <ActionsTable items=page.items.clone()/>
                                </div>
                                <Pagination
                                    current_page=current_page.get()
                                    total_pages=page.total_pages
                                    on_page_change=on_page_change
                                />
                            </div>
                        }.into_any(),
                    }}
                </main>
            </div>
        </div>
    }
}
