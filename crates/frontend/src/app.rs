use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::navbar::Navbar;
use crate::layout::registry::render_section;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-main">
                {move || render_section(ctx.active.get())}
            </main>
        </div>
    }
}
