use crate::layout::global_context::AppGlobalContext;
use crate::layout::registry::Section;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    let Some(ctx) = use_context::<AppGlobalContext>() else {
        log::error!("AppGlobalContext context not found");
        return view! { <nav class="main-nav-bar"></nav> }.into_any();
    };

    view! {
        <nav class=move || {
            if ctx.left_open.get() { "main-nav-bar" } else { "main-nav-bar main-nav-bar--collapsed" }
        }>
            <button class="button button--icon main-nav-bar__toggle" on:click=move |_| ctx.toggle_left()>
                {icon("menu")}
            </button>
            <ul>
                {Section::ALL.into_iter().map(|section| {
                    view! {
                        <li
                            class=move || {
                                if ctx.active.get() == section { "nav-item nav-item--active" } else { "nav-item" }
                            }
                            on:click=move |_| ctx.activate(section)
                        >
                            {icon(section.icon())}
                            <span>{section.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
    .into_any()
}
