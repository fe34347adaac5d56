use crate::layout::global_context::{AppGlobalContext, Page};
use leptos::prelude::*;

/// Top navigation bar switching between the storefront and the dashboard.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="nav">
            <span class="nav__brand">"Fresh Fish Market"</span>
            <div class="nav__links">
                <button
                    class=move || {
                        if ctx.active_page.get() == Page::Storefront {
                            "btn btn--primary"
                        } else {
                            "btn btn--secondary"
                        }
                    }
                    on:click=move |_| ctx.navigate(Page::Storefront)
                >
                    "Create Order"
                </button>
                <button
                    class=move || {
                        if ctx.active_page.get() == Page::Admin {
                            "btn btn--primary"
                        } else {
                            "btn btn--secondary"
                        }
                    }
                    on:click=move |_| ctx.navigate(Page::Admin)
                >
                    "Admin Dashboard"
                </button>
            </div>
        </nav>
    }
}
