//! Готовые части списочной формы поверх `ListViewHandle`:
//! поиск, фильтры, пагинатор, заголовки сортировки, удаление и ошибки

use crate::shared::components::confirm_delete::ConfirmDeleteDialog;
use crate::shared::components::filter_panel::{FilterSelect, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::list_view::ListViewHandle;
use contracts::shared::list_view::filter::is_filter_active;
use contracts::shared::list_view::sort::sort_indicator;
use contracts::shared::list_view::{ListRecord, ViewResult};
use leptos::prelude::*;
use std::future::Future;

impl<R> ListViewHandle<R>
where
    R: ListRecord + Clone + PartialEq + Send + Sync + 'static,
{
    pub fn pagination_controls(self, view: Memo<ViewResult<R>>) -> AnyView {
        let options = self
            .state
            .with_untracked(|s| s.config().page_size_options.clone());
        view! {
            <PaginationControls
                current_page=Signal::derive(move || view.with(|v| v.current_page))
                page_count=Signal::derive(move || view.with(|v| v.page_count))
                total_count=Signal::derive(move || view.with(|v| v.total_matched))
                item_range=Signal::derive(move || {
                    view.with(|v| (v.first_item_number(), v.last_item_number()))
                })
                page_size=Signal::derive(move || view.with(|v| v.page_size))
                on_page_change=Callback::new(move |page: usize| self.go_to_page(page))
                on_page_size_change=Callback::new(move |size: usize| self.change_page_size(size))
                page_size_options=options
            />
        }
        .into_any()
    }

    pub fn search_input(self, placeholder: &'static str) -> AnyView {
        view! {
            <SearchInput
                value=self.search_text()
                on_change=Callback::new(move |text: String| self.set_search_text(text))
                placeholder=placeholder
            />
        }
        .into_any()
    }

    /// Фильтр по значениям, найденным в загруженных записях
    pub fn filter_select(self, field: &'static str, label: &'static str) -> AnyView {
        self.filter_select_with(field, label, self.distinct_values(field))
    }

    /// Фильтр с заранее известным набором значений
    pub fn filter_select_fixed(
        self,
        field: &'static str,
        label: &'static str,
        options: Vec<String>,
    ) -> AnyView {
        self.filter_select_with(field, label, Signal::derive(move || options.clone()))
    }

    fn filter_select_with(
        self,
        field: &'static str,
        label: &'static str,
        options: Signal<Vec<String>>,
    ) -> AnyView {
        let all_value = self
            .state
            .with_untracked(|s| s.config().sentinel_for(field).to_string());
        view! {
            <FilterSelect
                label=label
                all_value=all_value
                options=options
                value=self.exact_filter_value(field)
                on_change=Callback::new(move |value: String| self.set_exact_filter(field, value))
            />
        }
        .into_any()
    }

    /// Чипы активных критериев; крестик снимает один критерий
    pub fn filter_tags(self) -> AnyView {
        view! {
            <div class="filter-tags">
                {move || {
                    let (query, filters) = self.state.with(|s| {
                        let config = s.config();
                        let filters: Vec<(String, String)> = s
                            .filter_state()
                            .exact_filters
                            .iter()
                            .filter(|(field, value)| is_filter_active(config, field, value))
                            .map(|(field, value)| (field.clone(), value.clone()))
                            .collect();
                        (s.filter_state().normalized_query(), filters)
                    });
                    let search_tag = query.map(|q| view! {
                        <FilterTag
                            label=format!("Search: {}", q)
                            on_remove=Callback::new(move |_: ()| self.set_search_text(String::new()))
                        />
                    });
                    let field_tags = filters.into_iter().map(|(field, value)| {
                        let label = format!("{}: {}", field, value);
                        view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_: ()| self.reset_exact_filter(field.clone()))
                            />
                        }
                    }).collect_view();
                    view! { {search_tag} {field_tags} }
                }}
            </div>
        }
        .into_any()
    }

    pub fn sort_header(self, label: &'static str, field: &'static str) -> AnyView {
        view! {
            <th
                class="table__header-cell table__header-cell--sortable"
                on:click=move |_| self.toggle_sort(field)
            >
                {label}
                <span class="sort-indicator">
                    {move || self.state.with(|s| sort_indicator(s.sort_state(), field))}
                </span>
            </th>
        }
        .into_any()
    }

    pub fn refresh_button<F, Fut>(self, fetch: F) -> AnyView
    where
        F: Fn() -> Fut + Copy + Send + Sync + 'static,
        Fut: Future<Output = Result<Vec<R>, String>> + 'static,
    {
        view! {
            <button
                class="button button--secondary"
                on:click=move |_| self.load(fetch)
                disabled=move || self.loading.get()
            >
                {icon("refresh")}
                {move || if self.loading.get() { "Loading..." } else { "Refresh" }}
            </button>
        }
        .into_any()
    }

    pub fn error_alert(self) -> AnyView {
        view! {
            {move || self.error.get().map(|message| view! {
                <div class="alert alert--error">
                    {icon("alert")}
                    <span>{message}</span>
                    <button class="button button--icon" on:click=move |_| self.error.set(None)>
                        {icon("x")}
                    </button>
                </div>
            })}
        }
        .into_any()
    }

    /// Кнопка удаления в строке; недоступна пока идет другое удаление
    pub fn delete_button(self, id: String) -> AnyView {
        view! {
            <button
                class="button button--icon button--danger"
                title="Delete"
                on:click=move |_| self.request_delete(id.clone())
                disabled=move || !self.delete_flow.with(|f| f.is_idle())
            >
                {icon("trash")}
            </button>
        }
        .into_any()
    }

    /// Диалог подтверждения; `title_field` задает поле с названием записи
    pub fn delete_dialog<F, Fut>(self, title_field: &'static str, delete: F) -> AnyView
    where
        F: Fn(String) -> Fut + Copy + Send + Sync + 'static,
        Fut: Future<Output = Result<(), String>> + 'static,
    {
        let target_label = Signal::derive(move || {
            let id = self.delete_flow.with(|f| f.target_id().map(str::to_string))?;
            self.state.with(|s| {
                s.records()
                    .iter()
                    .find(|r| r.record_id() == id)
                    .and_then(|r| r.field_value(title_field))
            })
        });
        view! {
            <ConfirmDeleteDialog
                flow=self.delete_flow
                target_label=target_label
                on_cancel=Callback::new(move |_: ()| self.cancel_delete())
                on_confirm=Callback::new(move |_: ()| self.confirm_delete(delete))
            />
        }
        .into_any()
    }

    /// Строка-заглушка для пустой страницы
    pub fn empty_row(self, view: Memo<ViewResult<R>>, colspan: u32) -> AnyView {
        view! {
            {move || {
                let empty = view.with(|v| v.current_page_items.is_empty());
                (empty && !self.loading.get()).then(|| {
                    let message = if self.state.with(|s| s.records().is_empty()) {
                        "No records"
                    } else {
                        "No records match the filters"
                    };
                    view! {
                        <tr>
                            <td class="table__empty" colspan=colspan.to_string()>{message}</td>
                        </tr>
                    }
                })
            }}
        }
        .into_any()
    }
}
