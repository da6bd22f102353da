use crate::domain::a006_visitor_invite::api::{delete_visitor_invite, fetch_visitor_invites};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a006_visitor_invite::VisitorInvite;
use leptos::prelude::*;

const SCREEN: &str = "visitors";

#[component]
#[allow(non_snake_case)]
pub fn VisitorInviteList() -> impl IntoView {
    let list = use_list_view::<VisitorInvite>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_visitor_invites);

    view! {
        <div class="page">
            <PageHeader title="Visitor Invites" count=list.total_records()>
                {list.refresh_button(fetch_visitor_invites)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Visitor, invited by or business")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Visitor", "visitorName")}
                            {list.sort_header("Invited by", "invitedBy")}
                            {list.sort_header("Business", "businessName")}
                            {list.sort_header("Chapter", "chapterName")}
                            <th class="table__header-cell">"Mobile"</th>
                            {list.sort_header("Status", "status")}
                            {list.sort_header("Visit date", "visitDate")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|v| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(v.visitor_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(v.invited_by), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(v.business_name), &query)}</td>
                                        <td class="table__cell">{or_dash(v.chapter_name)}</td>
                                        <td class="table__cell">{or_dash(v.mobile)}</td>
                                        <td class="table__cell"><StatusBadge status=v.status /></td>
                                        <td class="table__cell">{format_optional_date(v.visit_date.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(v.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 8)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("visitorName", delete_visitor_invite)}
        </div>
    }
}
