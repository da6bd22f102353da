use crate::domain::a007_schedule::api::{delete_schedule, fetch_schedules};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::StatusBadge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a007_schedule::Schedule;
use leptos::prelude::*;

const SCREEN: &str = "schedules";

#[component]
#[allow(non_snake_case)]
pub fn ScheduleList() -> impl IntoView {
    let list = use_list_view::<Schedule>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_schedules);

    view! {
        <div class="page">
            <PageHeader title="Schedules" subtitle="Meetings, trainings and events" count=list.total_records()>
                {list.refresh_button(fetch_schedules)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Title, venue or chapter")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("scheduleType", "Type")}
                {list.filter_select("status", "Status")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Title", "title")}
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("Type", "scheduleType")}
                            {list.sort_header("Date", "date")}
                            <th class="table__header-cell">"Time"</th>
                            {list.sort_header("Venue", "venue")}
                            {list.sort_header("Status", "status")}
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|s| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(s.title), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(s.chapter_name), &query)}</td>
                                        <td class="table__cell">{or_dash(s.schedule_type)}</td>
                                        <td class="table__cell">{format_optional_date(s.date.as_deref())}</td>
                                        <td class="table__cell">{or_dash(s.time)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(s.venue), &query)}</td>
                                        <td class="table__cell"><StatusBadge status=s.status /></td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(s.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 8)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("title", delete_schedule)}
        </div>
    }
}
