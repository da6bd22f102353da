//! Реактивная обертка над `ListViewState` и `DeleteFlow` для списочных форм
//!
//! Вся логика фильтрации, пагинации и удаления живет в `contracts`;
//! здесь только сигналы, загрузка и вызовы API.

use crate::shared::storage;
use contracts::shared::list_view::{list_config, DeleteFlow, ListRecord, ListViewState, ViewResult};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;

/// Если сервер не ответил на удаление за это время, удаление считается неуспешным
pub const DELETE_TIMEOUT_MS: u32 = 15_000;

pub struct ListViewHandle<R: Send + Sync + 'static> {
    pub screen: &'static str,
    pub state: RwSignal<ListViewState<R>>,
    pub delete_flow: RwSignal<DeleteFlow>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub filters_expanded: RwSignal<bool>,
}

impl<R: Send + Sync + 'static> Clone for ListViewHandle<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListViewHandle<R> {}

/// Создает состояние списка с настройками экрана и сохраненным размером страницы
pub fn use_list_view<R>(screen: &'static str) -> ListViewHandle<R>
where
    R: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    let mut config = list_config(screen);
    if let Some(page_size) = storage::load_page_size(screen) {
        config.default_page_size = page_size;
    }
    ListViewHandle {
        screen,
        state: RwSignal::new(ListViewState::new(config)),
        delete_flow: RwSignal::new(DeleteFlow::new()),
        loading: RwSignal::new(false),
        error: RwSignal::new(None),
        filters_expanded: RwSignal::new(true),
    }
}

impl<R> ListViewHandle<R>
where
    R: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    /// Текущая страница; пересчитывается только при изменении состояния
    pub fn view(self) -> Memo<ViewResult<R>> {
        Memo::new(move |_| self.state.with(|s| s.current_view()))
    }

    pub fn search_text(self) -> Signal<String> {
        Signal::derive(move || self.state.with(|s| s.filter_state().search_text.clone()))
    }

    pub fn active_filters_count(self) -> Signal<usize> {
        Signal::derive(move || self.state.with(|s| s.active_filters_count()))
    }

    pub fn total_records(self) -> Signal<usize> {
        Signal::derive(move || self.state.with(|s| s.records().len()))
    }

    pub fn exact_filter_value(self, field: &'static str) -> Signal<String> {
        Signal::derive(move || self.state.with(|s| s.exact_filter_value(field)))
    }

    pub fn distinct_values(self, field: &'static str) -> Signal<Vec<String>> {
        Signal::derive(move || self.state.with(|s| s.distinct_values(field)))
    }

    /// Загружает записи; ошибка загрузки оставляет прежние записи на месте
    pub fn load<F, Fut>(self, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<R>, String>> + 'static,
    {
        self.loading.set(true);
        self.error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch().await {
                Ok(items) => {
                    log::debug!("{}: loaded {} records", self.screen, items.len());
                    self.state.update(|s| s.set_records(items));
                }
                Err(e) => {
                    log::error!("{}: failed to load: {}", self.screen, e);
                    self.error.set(Some(e));
                }
            }
            self.loading.set(false);
        });
    }

    pub fn set_search_text(self, text: String) {
        self.state.update(|s| s.set_search_text(text));
    }

    pub fn set_exact_filter(self, field: &'static str, value: String) {
        self.state.update(|s| s.set_exact_filter(field, value));
    }

    /// Возвращает фильтр поля к значению "Все"
    pub fn reset_exact_filter(self, field: String) {
        self.state.update(|s| {
            let all_value = s.config().sentinel_for(&field).to_string();
            s.set_exact_filter(field, all_value);
        });
    }

    pub fn clear_filters(self) {
        self.state.update(|s| s.clear_filters());
    }

    pub fn go_to_page(self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn change_page_size(self, page_size: usize) {
        self.state.update(|s| s.set_page_size(page_size));
        storage::save_page_size(self.screen, page_size.max(1));
    }

    pub fn toggle_sort(self, field: &'static str) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn request_delete(self, id: String) {
        let mut result = Ok(());
        self.delete_flow.update(|flow| result = flow.request_delete(id));
        if let Err(e) = result {
            log::warn!("{}: {}", self.screen, e);
        }
    }

    pub fn cancel_delete(self) {
        self.delete_flow.update(|flow| {
            flow.cancel();
        });
    }

    /// Подтверждает удаление: запрос к серверу, затем удаление записи из списка
    /// только при успешном ответе
    pub fn confirm_delete<F, Fut>(self, delete: F)
    where
        F: FnOnce(String) -> Fut + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let mut started = None;
        self.delete_flow
            .update(|flow| started = Some(flow.begin_commit().map(|id| (id, flow.attempt()))));
        let (id, attempt) = match started {
            Some(Ok(started)) => started,
            Some(Err(e)) => {
                log::warn!("{}: {}", self.screen, e);
                return;
            }
            None => return,
        };
        self.error.set(None);

        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(DELETE_TIMEOUT_MS).await;
            self.fail_delete(attempt, "Delete request timed out".to_string());
        });

        wasm_bindgen_futures::spawn_local(async move {
            match delete(id.clone()).await {
                Ok(()) => self.finish_delete(attempt, &id),
                Err(reason) => self.fail_delete(attempt, reason),
            }
        });
    }

    fn finish_delete(self, attempt: u64, id: &str) {
        let mut completed = None;
        self.delete_flow
            .update(|flow| completed = flow.complete_attempt(attempt));
        match completed {
            Some(id) => {
                log::info!("{}: deleted {}", self.screen, id);
                self.state.update(|s| {
                    s.remove_record(&id);
                });
            }
            None => log::warn!("{}: late delete response for {}, reload to refresh", self.screen, id),
        }
    }

    fn fail_delete(self, attempt: u64, reason: String) {
        let mut failure = None;
        self.delete_flow
            .update(|flow| failure = flow.fail_attempt(attempt, reason));
        if let Some(e) = failure {
            log::error!("{}: {}", self.screen, e);
            self.error.set(Some(e.to_string()));
        }
    }
}
