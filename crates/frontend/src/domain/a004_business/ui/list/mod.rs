use crate::domain::a004_business::api::{delete_business, fetch_business};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_optional_date;
use crate::shared::list_utils::{highlight_matches, or_dash};
use crate::shared::list_view::use_list_view;
use contracts::domain::a004_business::{BusinessDirection, BusinessRecord};
use leptos::prelude::*;

/// Сумма с разделителем тысяч и двумя знаками после запятой
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

fn business_type_variant(business_type: &str) -> &'static str {
    match business_type.trim().to_lowercase().as_str() {
        "new" => "primary",
        "repeat" => "success",
        _ => "neutral",
    }
}

/// Переданный и полученный бизнес: одна форма, направление задает API и подписи
#[component]
#[allow(non_snake_case)]
pub fn BusinessList(direction: BusinessDirection) -> impl IntoView {
    let list = use_list_view::<BusinessRecord>(direction.screen_key());
    let page = list.view();
    let search = list.search_text();
    let fetch = move || fetch_business(direction);

    list.load(fetch);

    view! {
        <div class="page">
            <PageHeader title=direction.title() count=list.total_records()>
                {list.refresh_button(fetch)}
            </PageHeader>

            {list.error_alert()}

            <FilterPanel
                is_expanded=list.filters_expanded
                active_filters_count=list.active_filters_count()
                on_clear=Callback::new(move |_: ()| list.clear_filters())
                pagination_controls=list.pagination_controls(page)
            >
                {list.search_input("Member, counterpart or chapter")}
                {list.filter_select("chapterName", "Chapter")}
                {list.filter_select("businessType", "Type")}
                {list.filter_tags()}
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {list.sort_header("Member", "memberName")}
                            {list.sort_header(direction.counterpart_label(), "counterpartName")}
                            {list.sort_header("Chapter", "chapterName")}
                            {list.sort_header("Amount", "amount")}
                            {list.sort_header("Type", "businessType")}
                            {list.sort_header("Date", "date")}
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let query = search.get();
                            page.get().current_page_items.into_iter().map(|b| {
                                let business_type = or_dash(b.business_type);
                                let type_variant = business_type_variant(&business_type);
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&or_dash(b.member_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(b.counterpart_name), &query)}</td>
                                        <td class="table__cell">{highlight_matches(&or_dash(b.chapter_name), &query)}</td>
                                        <td class="table__cell table__cell--number">{format_amount(b.amount)}</td>
                                        <td class="table__cell">
                                            <Badge variant=type_variant>{business_type}</Badge>
                                        </td>
                                        <td class="table__cell">{format_optional_date(b.date.as_deref())}</td>
                                        <td class="table__cell table__cell--wrap">{or_dash(b.description)}</td>
                                        <td class="table__cell table__cell--actions">{list.delete_button(b.id)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                        {list.empty_row(page, 8)}
                    </tbody>
                </table>
            </div>

            {list.delete_dialog("memberName", move |id| delete_business(direction, id))}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(999.5), "999.50");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-2500.0), "-2,500.00");
    }

    #[test]
    fn test_business_type_variant() {
        assert_eq!(business_type_variant("New"), "primary");
        assert_eq!(business_type_variant("repeat"), "success");
        assert_eq!(business_type_variant("-"), "neutral");
    }
}
