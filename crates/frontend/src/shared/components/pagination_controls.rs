use crate::shared::icons::icon;
use contracts::shared::list_view::config::DEFAULT_PAGE_SIZE_OPTIONS;
use leptos::prelude::*;

/// Текст "11-20 of 25" для пагинатора
pub fn range_label(first: usize, last: usize, total: usize) -> String {
    if total == 0 {
        "0 of 0".to_string()
    } else {
        format!("{}-{} of {}", first, last, total)
    }
}

/// PaginationControls component - reusable pagination controls
///
/// Страницы нумеруются с 1; при пустом результате page_count равен 0.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    page_count: Signal<usize>,

    /// Total count of matched items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Номера первой и последней записи на странице
    #[prop(into)]
    item_range: Signal<(usize, usize)>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Callback when page size changes
    on_page_size_change: Callback<usize>,

    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= page_count.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_start
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_start
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || {
                    let (first, last) = item_range.get();
                    format!(
                        "{} / {} ({})",
                        current_page.get(),
                        page_count.get().max(1),
                        range_label(first, last, total_count.get())
                    )
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < page_count.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_end
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = page_count.get();
                    if total > 0 {
                        on_page_change.run(total);
                    }
                }
                disabled=at_end
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(val) = event_target_value(&ev).parse() {
                        on_page_size_change.run(val);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_label() {
        assert_eq!(range_label(11, 20, 25), "11-20 of 25");
        assert_eq!(range_label(0, 0, 0), "0 of 0");
    }
}
