use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Задержка перед применением поискового запроса
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Пустое значение ячейки отображается как "-"
pub fn or_dash(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "-".to_string(),
    }
}

/// Байтовые диапазоны совпадений запроса в тексте (без учета регистра).
/// Если нижний регистр меняет длину строки, подсветка не выполняется
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }
    let text_lower = text.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&query_lower) {
        let start = last_pos + pos;
        let end = start + query_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, query: &str) -> AnyView {
    let ranges = match_ranges(text, query);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! {
            <mark class="search-highlight">{text[start..end].to_string()}</mark>
        }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Компонент поиска с debounce и кнопкой очистки
#[component]
pub fn SearchInput(
    /// Примененное значение поиска
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения поиска
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // каждое изменение получает номер; применяется только последнее
    let generation = StoredValue::new(0u64);

    // внешний сброс фильтров очищает поле
    Effect::new(move |_| {
        if value.get().is_empty() {
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if generation.get_value() == current {
                on_change.run(new_value);
            }
        });
    };

    let clear_search = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            {icon("search")}
            <input
                type="text"
                class=move || {
                    if value.get().trim().is_empty() { "search-input__field" } else { "search-input__field search-input__field--active" }
                }
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_search title="Clear">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(Some("Pune".to_string())), "Pune");
        assert_eq!(or_dash(Some(" ".to_string())), "-");
        assert_eq!(or_dash(None), "-");
    }

    #[test]
    fn test_match_ranges_case_insensitive() {
        assert_eq!(match_ranges("Chapter A chapter", "CHAPTER"), vec![(0, 7), (10, 17)]);
        assert_eq!(match_ranges("Alice", "  li "), vec![(1, 3)]);
    }

    #[test]
    fn test_match_ranges_empty_query_or_no_match() {
        assert!(match_ranges("Alice", "").is_empty());
        assert!(match_ranges("Alice", "   ").is_empty());
        assert!(match_ranges("Alice", "bob").is_empty());
    }

    #[test]
    fn test_match_ranges_non_ascii() {
        assert_eq!(match_ranges("Иван Петров", "петр"), vec![(9, 17)]);
    }
}
