use crate::domain::a005_referral::api::{delete_referral, fetch_referrals};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a005_referral::Referral;
use leptos::prelude::*;

const SCREEN: &str = "referrals";

#[component]
#[allow(non_snake_case)]
pub fn ReferralList() -> impl IntoView {
    let list = use_list_view::<Referral>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_referrals);

    view! {
        <div class="page">
            <PageHeader title="Referrals" count=list.total_records()>
                {list.refresh_button(fetch_referrals)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Referral, referred by or referred to")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Referral", "referralName")}
                            {list.sort_header("Referred by", "referredBy")}
                            {list.sort_header("Referred to", "referredTo")}
                            {list.sort_header("Chapter", "chapterName")}
                            <th class="table__header-cell">"Mobile"</th>
                            {list.sort_header("Status", "status")}
                            {list.sort_header("Date", "date")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|r| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(r.referral_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(r.referred_by), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(r.referred_to), &query)}</td>
                                        <td class="table__cell">{or_dash(r.chapter_name)}</td>
                                        <td class="table__cell">{or_dash(r.mobile)}</td>
                                        <td class="table__cell"><StatusBadge status=r.status /></td>
                                        <td class="table__cell">{format_optional_date(r.date.as_deref())}</td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(r.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 8)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("referralName", delete_referral)}
        </div>
    }
}
