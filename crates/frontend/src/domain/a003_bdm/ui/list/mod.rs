use crate::domain::a003_bdm::api::{delete_bdm, fetch_bdms};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a003_bdm::Bdm;
use leptos::prelude::*;

const SCREEN: &str = "bdm";

/// Встречи один на один (Business Development Meetings)
#[component]
#[allow(non_snake_case)]
pub fn BdmList() -> impl IntoView {
    let list = use_list_view::<Bdm>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_bdms);

    view! {
        <div class="page">
            <PageHeader title="BDM" subtitle="Business development meetings" count=list.total_records()>
                {list.refresh_button(fetch_bdms)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Member, met with or chapter")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("mode", "Mode")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Member", "memberName")}
                            {list.sort_header("Met with", "metWith")}
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("Date", "date")}
                            {list.sort_header("Mode", "mode")}
                            <th class="table__header-cell">"Notes"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|b| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(b.member_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(b.met_with), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(b.chapter_name), &query)}</td>
                                        <td class="table__cell">{format_optional_date(b.date.as_deref())}</td>
                                        <td class="table__cell">{or_dash(b.mode)}</td>
                                        <td class="table__cell table__cell--wrap">{or_dash(b.notes)}</td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(b.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 7)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("memberName", delete_bdm)}
        </div>
    }
}
