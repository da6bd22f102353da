use crate::domain::a009_monthly_reward::api::{delete_monthly_reward, fetch_monthly_rewards};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::TierBadge;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a009_monthly_reward::MonthlyReward;
use contracts::shared::reward_tier::RewardTier;
use leptos::prelude::*;

const SCREEN: &str = "monthly_rewards";

fn tier_options() -> Vec<String> {
    RewardTier::ALL.iter().map(|t| t.label().to_string()).collect()
}

/// Баллы за месяц приходят с сервера; уровень считается из `totalPoints`
#[component]
#[allow(non_snake_case)]
pub fn MonthlyRewardList() -> impl IntoView {
    let list = use_list_view::<MonthlyReward>(SCREEN);
    let page = list.view();
    let search = list.search_text();

    list.load(fetch_monthly_rewards);

    view! {
        <div class="page">
            <PageHeader title="Monthly Rewards" count=list.total_records()>
                {list.refresh_button(fetch_monthly_rewards)}
            </PageHeader>

            <div class="tier-legend">
                {RewardTier::ALL.into_iter().map(|tier| view! {
                    <div class="tier-legend__item">
                        <TierBadge tier=tier />
                        <span class="tier-legend__range">{tier.range_label()}</span>
                    </div>
                }).collect_view()}
            </div>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Member or chapter")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("month", "Month")}
                {list.filter_select_fixed("tier", "Tier", tier_options())}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Member", "memberName")}
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("Month", "month")}
                            {list.sort_header("Meetings", "meetings")}
                            {list.sort_header("BDM", "bdm")}
                            {list.sort_header("Business", "business")}
                            {list.sort_header("Referrals", "referrals")}
                            {list.sort_header("Visitors", "visitors")}
                            {list.sort_header("Socials", "socials")}
                            {list.sort_header("Points", "totalPoints")}
                            <th class="table__header-cell">"Tier"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|r| {
                                let tier = r.tier();
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(r.member_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(r.chapter_name), &query)}</td>
                                        <td class="table__cell">{or_dash(r.month)}</td>
                                        <td class="table__cell table__cell--number">{r.meetings}</td>
                                        <td class="table__cell table__cell--number">{r.bdm}</td>
                                        <td class="table__cell table__cell--number">{r.business}</td>
                                        <td class="table__cell table__cell--number">{r.referrals}</td>
                                        <td class="table__cell table__cell--number">{r.visitors}</td>
                                        <td class="table__cell table__cell--number">{r.socials}</td>
                                        <td class="table__cell table__cell--number"><strong>{r.total_points}</strong></td>
                                        <td class="table__cell"><TierBadge tier=tier /></td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(r.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 12)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("memberName", delete_monthly_reward)}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_options_highest_first() {
        assert_eq!(tier_options(), vec!["Diamond", "Gold", "Silver", "Bronze"]);
    }
}
