//! Pagination Component
//!
//! Numbered page buttons around the current page with previous/next
//! controls. Rendered only when there is more than one page.

use leptos::prelude::*;

use crate::pagination::{page_tokens, PageToken};

#[component]
pub fn Pagination(
    current_page: u32,
    total_pages: u32,
    #[prop(into)] on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show when=move || (total_pages > 1)>
            <div class="pagination">
                <button
                    class="page-nav-btn"
                    aria-label="Previous page"
                    disabled={current_page == 1}
                    on:click=move |_| on_page_change.run(current_page - 1)
                >
                    "‹"
                </button>

                <div class="page-list">
                    {page_tokens(current_page, total_pages).into_iter().map(|token| match token {
                        PageToken::Number(page) => view! {
                            <button
                                class={if page == current_page { "page-btn current" } else { "page-btn" }}
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page}
                            </button>
                        }.into_any(),
                        PageToken::Ellipsis => view! {
                            <span class="page-ellipsis">"..."</span>
                        }.into_any(),
                    }).collect_view()}
                </div>

                <button
                    class="page-nav-btn"
                    aria-label="Next page"
                    disabled={current_page == total_pages}
                    on:click=move |_| on_page_change.run(current_page + 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
