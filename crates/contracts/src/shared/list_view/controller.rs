//! ListViewState: состояние одной списочной формы
//!
//! Владеет загруженными записями, состоянием фильтров и сортировкой.
//! Каждая операция, которая может сократить выборку, сбрасывает страницу на 1;
//! номер страницы вне диапазона ограничивается при построении проекции.

use super::config::ListConfig;
use super::filter::{self, FilterState};
use super::paginator::{paginate, ViewResult};
use super::record::ListRecord;
use super::sort::{sort_records, SortState};
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct ListViewState<R> {
    records: Vec<R>,
    filter: FilterState,
    sort: Option<SortState>,
    config: ListConfig,
}

impl<R: ListRecord> ListViewState<R> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            records: Vec::new(),
            filter: FilterState::new(config.default_page_size),
            sort: None,
            config,
        }
    }

    pub fn with_records(config: ListConfig, records: Vec<R>) -> Self {
        let mut state = Self::new(config);
        state.records = records;
        state
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Заменяет записи после загрузки с сервера
    pub fn set_records(&mut self, records: Vec<R>) {
        log::debug!("list loaded: {} records", records.len());
        self.records = records;
        self.filter.page = 1;
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        self.filter.page = 1;
    }

    pub fn set_exact_filter(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.filter.exact_filters.insert(field.into(), value.into());
        self.filter.page = 1;
    }

    /// Текущее значение фильтра поля или его значение "Все"
    pub fn exact_filter_value(&self, field: &str) -> String {
        self.filter
            .exact_filters
            .get(field)
            .cloned()
            .unwrap_or_else(|| self.config.sentinel_for(field).to_string())
    }

    pub fn clear_filters(&mut self) {
        self.filter.search_text.clear();
        self.filter.exact_filters.clear();
        self.filter.page = 1;
    }

    /// Номер страницы не проверяется здесь: он ограничивается в `current_view`
    pub fn set_page(&mut self, page: usize) {
        self.filter.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if page_size == 0 {
            log::warn!("page size 0 requested, using 1");
        }
        self.filter.page_size = page_size.max(1);
        self.filter.page = 1;
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = Some(SortState::toggled(self.sort.as_ref(), field));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Удаляет запись после подтвержденного сервером удаления
    pub fn remove_record(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != id);
        let removed = self.records.len() != before;
        if !removed {
            log::warn!("remove_record: no record with id {}", id);
        }
        removed
    }

    pub fn active_filters_count(&self) -> usize {
        filter::active_filters_count(&self.filter, &self.config)
    }

    /// Уникальные непустые значения поля по всем записям, для выпадающих списков
    pub fn distinct_values(&self, field: &str) -> Vec<String> {
        let values: BTreeSet<String> = self
            .records
            .iter()
            .filter_map(|r| r.field_value(field))
            .filter(|v| !v.trim().is_empty())
            .collect();
        values.into_iter().collect()
    }

    /// Отфильтрованные и отсортированные записи (без пагинации)
    pub fn filtered(&self) -> Vec<&R> {
        let mut items: Vec<&R> = self
            .records
            .iter()
            .filter(|r| filter::matches(*r, &self.filter, &self.config))
            .collect();
        if let Some(sort) = &self.sort {
            sort_records(&mut items, sort);
        }
        items
    }
}

impl<R: ListRecord + Clone> ListViewState<R> {
    /// Проекция текущего состояния; повторный вызов без изменений дает тот же результат
    pub fn current_view(&self) -> ViewResult<R> {
        let filtered = self.filtered();
        paginate(&filtered, self.filter.page, self.filter.page_size).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn chapter_records(total: usize, chapter_a: usize) -> Vec<Value> {
        (0..total)
            .map(|i| {
                let chapter = if i < chapter_a { "Chapter A" } else { "Chapter B" };
                json!({
                    "_id": format!("m{}", i),
                    "name": format!("Member {}", i),
                    "chapterName": chapter,
                    "status": if i % 2 == 0 { "active" } else { "inactive" },
                })
            })
            .collect()
    }

    fn config() -> ListConfig {
        ListConfig::new(&["name", "chapterName"])
            .with_exact_filter("chapterName")
            .with_exact_filter("status")
    }

    #[test]
    fn test_search_resets_page_and_narrows() {
        let mut state = ListViewState::with_records(config(), chapter_records(25, 4));
        assert_eq!(state.current_view().page_count, 3);

        state.set_page(3);
        assert_eq!(state.current_view().current_page, 3);

        state.set_search_text("chapter a");
        let view = state.current_view();
        assert_eq!(view.total_matched, 4);
        assert_eq!(view.page_count, 1);
        assert_eq!(view.current_page, 1);
        assert_eq!(state.filter_state().page, 1);
    }

    #[test]
    fn test_distinct_values_sorted_without_blanks() {
        let mut records = chapter_records(6, 2);
        records.push(json!({ "_id": "x", "chapterName": "  " }));
        let state = ListViewState::with_records(config(), records);
        assert_eq!(
            state.distinct_values("chapterName"),
            vec!["Chapter A".to_string(), "Chapter B".to_string()]
        );
        assert!(state.distinct_values("missing").is_empty());
    }

    #[test]
    fn test_stale_page_is_clamped() {
        let mut state = ListViewState::with_records(config(), chapter_records(5, 0));
        state.set_page(99);
        assert_eq!(state.filter_state().page, 99);
        assert_eq!(state.current_view().current_page, 1);
    }

    #[test]
    fn test_every_filter_mutation_resets_page() {
        let mut state = ListViewState::with_records(config(), chapter_records(40, 10));

        state.set_page(3);
        state.set_exact_filter("status", "active");
        assert_eq!(state.filter_state().page, 1);

        state.set_page(2);
        state.set_page_size(25);
        assert_eq!(state.filter_state().page, 1);

        state.set_page(2);
        state.clear_filters();
        assert_eq!(state.filter_state().page, 1);

        state.set_page(2);
        state.set_records(chapter_records(40, 10));
        assert_eq!(state.filter_state().page, 1);
    }

    #[test]
    fn test_additional_filter_never_grows_result() {
        let mut state = ListViewState::with_records(config(), chapter_records(30, 12));
        let all = state.current_view().total_matched;
        state.set_exact_filter("chapterName", "Chapter A");
        let by_chapter = state.current_view().total_matched;
        state.set_exact_filter("status", "active");
        let by_both = state.current_view().total_matched;

        assert_eq!(all, 30);
        assert_eq!(by_chapter, 12);
        assert_eq!(by_both, 6);
        assert_eq!(state.active_filters_count(), 2);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut state = ListViewState::with_records(config(), chapter_records(25, 4));
        state.set_exact_filter("status", "inactive");
        state.toggle_sort("name");
        assert_eq!(state.current_view(), state.current_view());
    }

    #[test]
    fn test_sort_keeps_filtered_set() {
        let mut state = ListViewState::with_records(config(), chapter_records(12, 3));
        state.set_page_size(5);
        state.toggle_sort("chapterName");
        state.toggle_sort("chapterName");
        let view = state.current_view();
        assert_eq!(view.total_matched, 12);
        assert_eq!(view.current_page_items[0]["chapterName"], "Chapter B");

        state.clear_sort();
        let view = state.current_view();
        assert_eq!(view.current_page_items[0].record_id(), "m0");
    }

    #[test]
    fn test_remove_record() {
        let mut state = ListViewState::with_records(config(), chapter_records(3, 1));
        assert!(state.remove_record("m1"));
        assert!(!state.remove_record("m1"));
        let ids: Vec<String> = state.records().iter().map(|r| r.record_id()).collect();
        assert_eq!(ids, vec!["m0", "m2"]);
    }

    #[test]
    fn test_exact_filter_value_defaults_to_sentinel() {
        let mut state: ListViewState<Value> = ListViewState::new(config());
        assert_eq!(state.exact_filter_value("status"), "all");
        state.set_exact_filter("status", "active");
        assert_eq!(state.exact_filter_value("status"), "active");
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut state = ListViewState::with_records(config(), chapter_records(3, 0));
        state.set_page_size(0);
        assert_eq!(state.filter_state().page_size, 1);
        assert_eq!(state.current_view().page_count, 3);
    }
}
