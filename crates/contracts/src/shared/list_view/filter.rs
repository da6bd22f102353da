//! Отбор записей по строке поиска и фильтрам точного совпадения

use super::config::{ListConfig, DEFAULT_PAGE_SIZE};
use super::record::ListRecord;
use std::collections::BTreeMap;

/// Состояние поиска, фильтров и пагинации одной списочной формы
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub search_text: String,
    /// Поле -> выбранное значение (значение "Все" хранится как есть и не фильтрует)
    pub exact_filters: BTreeMap<String, String>,
    /// Номер страницы, начиная с 1
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search_text: String::new(),
            exact_filters: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Строка поиска в нижнем регистре; `None` если поиск не задан
    pub fn normalized_query(&self) -> Option<String> {
        let query = self.search_text.trim();
        if query.is_empty() {
            None
        } else {
            Some(query.to_lowercase())
        }
    }
}

/// Хотя бы одно из полей поиска содержит `query` (ожидается уже в нижнем регистре)
pub fn matches_search<R: ListRecord>(record: &R, query: &str, search_fields: &[String]) -> bool {
    search_fields.iter().any(|field| {
        record
            .field_value(field)
            .map(|value| value.to_lowercase().contains(query))
            .unwrap_or(false)
    })
}

/// Фильтр активен, если выбранное значение не является значением "Все"
pub fn is_filter_active(config: &ListConfig, field: &str, value: &str) -> bool {
    !config.is_match_all(field, value)
}

/// Запись удовлетворяет всем активным критериям одновременно.
///
/// Пустая строка поиска не ограничивает выборку. Фильтры точного
/// совпадения сравнивают строки с учетом регистра.
pub fn matches<R: ListRecord>(record: &R, state: &FilterState, config: &ListConfig) -> bool {
    if let Some(query) = state.normalized_query() {
        if !matches_search(record, &query, &config.search_fields) {
            return false;
        }
    }

    state
        .exact_filters
        .iter()
        .filter(|(field, value)| is_filter_active(config, field, value))
        .all(|(field, value)| record.field_value(field).as_deref() == Some(value.as_str()))
}

/// Количество активных критериев (для бейджа на панели фильтров)
pub fn active_filters_count(state: &FilterState, config: &ListConfig) -> usize {
    let search = usize::from(state.normalized_query().is_some());
    let exact = state
        .exact_filters
        .iter()
        .filter(|(field, value)| is_filter_active(config, field, value))
        .count();
    search + exact
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn config() -> ListConfig {
        ListConfig::new(&["name", "businessName"])
            .with_exact_filter("chapterName")
            .with_exact_filter("status")
    }

    fn john() -> Value {
        json!({
            "_id": "1",
            "name": "John Doe",
            "businessName": "Doe Interiors",
            "chapterName": "Chapter A",
            "status": "active"
        })
    }

    fn state_with_search(text: &str) -> FilterState {
        FilterState {
            search_text: text.to_string(),
            ..FilterState::default()
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let cfg = config();
        for text in ["john", "JOHN", "Doe", "interiors"] {
            assert!(matches(&john(), &state_with_search(text), &cfg), "{}", text);
        }
        assert!(!matches(&john(), &state_with_search("smith"), &cfg));
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let cfg = config();
        assert!(matches(&john(), &state_with_search(""), &cfg));
        assert!(matches(&john(), &state_with_search("   "), &cfg));
        assert!(matches(&json!({}), &state_with_search("  "), &cfg));
    }

    #[test]
    fn test_search_ignores_missing_fields() {
        let cfg = config();
        let partial = json!({ "_id": "2", "name": null, "businessName": "Acme Supplies" });
        assert!(matches(&partial, &state_with_search("acme"), &cfg));

        let empty = json!({ "_id": "3", "chapterName": "Chapter A" });
        assert!(!matches(&empty, &state_with_search("chapter"), &cfg));
    }

    #[test]
    fn test_search_does_not_look_at_unconfigured_fields() {
        let cfg = config();
        // chapterName is not a search field
        assert!(!matches(&john(), &state_with_search("chapter a"), &cfg));
    }

    #[test]
    fn test_exact_filters_are_case_sensitive() {
        let cfg = config();
        let mut state = FilterState::default();
        state.exact_filters.insert("chapterName".into(), "Chapter A".into());
        assert!(matches(&john(), &state, &cfg));

        state.exact_filters.insert("chapterName".into(), "chapter a".into());
        assert!(!matches(&john(), &state, &cfg));
    }

    #[test]
    fn test_sentinel_and_empty_values_do_not_filter() {
        let cfg = config();
        let mut state = FilterState::default();
        state.exact_filters.insert("chapterName".into(), "all".into());
        state.exact_filters.insert("status".into(), String::new());
        assert!(matches(&json!({ "_id": "9" }), &state, &cfg));
        assert_eq!(active_filters_count(&state, &cfg), 0);
    }

    #[test]
    fn test_exact_filter_on_missing_field_fails() {
        let cfg = config();
        let mut state = FilterState::default();
        state.exact_filters.insert("status".into(), "active".into());
        assert!(!matches(&json!({ "_id": "9", "name": "John" }), &state, &cfg));
    }

    #[test]
    fn test_all_criteria_must_hold() {
        let cfg = config();
        let mut state = state_with_search("john");
        state.exact_filters.insert("status".into(), "active".into());
        assert!(matches(&john(), &state, &cfg));

        state.exact_filters.insert("chapterName".into(), "Chapter B".into());
        assert!(!matches(&john(), &state, &cfg));
        assert_eq!(active_filters_count(&state, &cfg), 3);
    }
}
