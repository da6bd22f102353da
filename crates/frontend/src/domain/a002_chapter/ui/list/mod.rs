use crate::domain::a002_chapter::api::{delete_chapter, fetch_chapters};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a002_chapter::Chapter;
use leptos::prelude::*;

const SCREEN: &str = "chapters";

#[component]
#[allow(non_snake_case)]
pub fn ChapterList() -> impl IntoView {
    let list = use_list_view::<Chapter>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_chapters);

    view! {
        <div class="page">
            <PageHeader title="Chapters" count=list.total_records()>
                {list.refresh_button(fetch_chapters)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Chapter, city or region")}
                {list.filter_select("region", "Region")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("City", "city")}
                            {list.sort_header("Region", "region")}
                            <th class="table__header-cell">"Meeting day"</th>
                            {list.sort_header("Members", "memberCount")}
                            {list.sort_header("Status", "status")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|c| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(c.chapter_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(c.city), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(c.region), &query)}</td>
                                        <td class="table__cell">{or_dash(c.meeting_day)}</td>
                                        <td class="table__cell table__cell--number">{c.member_count}</td>
                                        <td class="table__cell"><StatusBadge status=c.status /></td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(c.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 7)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("chapterName", delete_chapter)}
        </div>
    }
}
