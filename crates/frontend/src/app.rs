use crate::admin::ui::AdminDashboard;
use crate::layout::global_context::{AppGlobalContext, Page};
use crate::layout::navbar::Navbar;
use crate::storefront::CreateOrderPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore the active page from the URL once on startup.
    ctx.init_url_integration();

    view! {
        <Navbar />
        <main class="page">
            {move || match ctx.active_page.get() {
                Page::Storefront => view! { <CreateOrderPage /> }.into_any(),
                Page::Admin => view! { <AdminDashboard /> }.into_any(),
            }}
        </main>
    }
}
