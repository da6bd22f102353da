use crate::domain::a008_creative::api::{delete_creative, fetch_creatives};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a008_creative::Creative;
use leptos::prelude::*;

const SCREEN: &str = "creatives";

/// Креативы показываются карточками; размер страницы кратен числу колонок сетки
#[component]
#[allow(non_snake_case)]
pub fn CreativeList() -> impl IntoView {
    let list = use_list_view::<Creative>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_creatives);

    view! {
        <div class="page">
            <PageHeader title="Creatives" count=list.total_records()>
                {list.refresh_button(fetch_creatives)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Title or category")}
                {list.filter_select("category", "Category")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="creative-grid__sort">
                <span>"Sort:"</span>
                <table class="table__data">
                    <thead>
                        <tr>
                            {list.sort_header("Title", "title")}
                            {list.sort_header("Category", "category")}
                            {list.sort_header("Status", "status")}
                        </tr>
                    </thead>
                </table>
            </div>

            <div class="creative-grid">
                {move || {
                    let query = search.get();
                    let items = page.get().current_page_items;
                    if items.is_empty() && !list.loading.get() {
                        return view! { <div class="creative-grid__empty">"No creatives"</div> }.into_any();
                    }
                    items.into_iter().map(|c| {
                        let alt = c.title.clone().unwrap_or_default();
                        view! {
                            <div class="creative-card">
                                {match c.image_url.filter(|url| !url.trim().is_empty()) {
                                    Some(url) => view! {
                                        <img class="creative-card__image" src=url alt=alt loading="lazy" />
                                    }.into_any(),
                                    None => view! {
                                        <div class="creative-card__placeholder">{icon("image")}</div>
                                    }.into_any(),
                                }}
                                <div class="creative-card__body">
                                    <div class="creative-card__title">{highlight_matches(&or_dash(c.title), &query)}</div>
                                    <div class="creative-card__meta">
                                        {highlight_matches(&or_dash(c.category), &query)}
                                        " · "
                                        {or_dash(c.chapter_name)}
                                    </div>
                                    <div class="creative-card__footer">
                                        <StatusBadge status=c.status />
                                        {list.delete_button(c.id)}
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>

            {list.delete_dialog("title", delete_creative)}
        </div>
    }
}
