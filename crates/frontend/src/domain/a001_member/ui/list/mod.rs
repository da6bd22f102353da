use crate::domain::a001_member::api::{delete_member, fetch_members};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a001_member::Member;
use leptos::prelude::*;

const SCREEN: &str = "members";

#[component]
#[allow(non_snake_case)]
pub fn MemberList() -> impl IntoView {
    let list = use_list_view::<Member>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_members);

    view! {
        <div class="page">
            <PageHeader title="Members" count=list.total_records()>
                {list.refresh_button(fetch_members)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Name, email, mobile or business")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Name", "name")}
                            {list.sort_header("Email", "email")}
                            <th class="table__header-cell">"Mobile"</th>
                            {list.sort_header("Business", "businessName")}
                            {list.sort_header("Category", "businessCategory")}
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("Status", "status")}
                            {list.sort_header("Joined", "joinedOn")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|m| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(m.name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(m.email), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(m.mobile), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(m.business_name), &query)}</td>
                                        <td class="table__cell">{or_dash(m.business_category)}</td>
                                        <td class="table__cell">{or_dash(m.chapter_name)}</td>
                                        <td class="table__cell"><StatusBadge status=m.status /></td>
                                        <td class="table__cell">{format_optional_date(m.joined_on.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(m.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 9)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("name", delete_member)}
        </div>
    }
}
