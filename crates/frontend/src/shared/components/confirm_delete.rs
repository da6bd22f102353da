use crate::shared::icons::icon;
use contracts::shared::list_view::DeleteFlow;
use leptos::ev;
use leptos::prelude::*;

/// Диалог подтверждения удаления. Виден пока `DeleteFlow` не в Idle;
/// во время запроса кнопки заблокированы, отмена невозможна
#[component]
pub fn ConfirmDeleteDialog(
    flow: RwSignal<DeleteFlow>,
    /// Название удаляемой записи для текста диалога
    #[prop(into)]
    target_label: Signal<Option<String>>,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    // Handle Escape key
    let handle = window_event_listener(ev::keydown, move |event: ev::KeyboardEvent| {
        if event.key() == "Escape" && flow.with_untracked(|f| !f.is_idle()) {
            on_cancel.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let is_committing = move || flow.with(|f| f.is_committing());

    move || {
        if flow.with(|f| f.is_idle()) {
            return view! { <></> }.into_any();
        }
        let label = target_label
            .get()
            .unwrap_or_else(|| flow.with(|f| f.target_id().unwrap_or_default().to_string()));

        view! {
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal modal--confirm" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                    <div class="modal-header">
                        <h2 class="modal-title">"Delete record"</h2>
                        <div class="modal-header-actions">
                            <button
                                class="button button--icon modal__close"
                                on:click=move |_| on_cancel.run(())
                                disabled=is_committing
                            >
                                {icon("x")}
                            </button>
                        </div>
                    </div>
                    <div class="modal-body">
                        <p>"Delete " <strong>{label}</strong> "? This cannot be undone."</p>
                        <div class="modal-footer">
                            <button
                                class="button button--secondary"
                                on:click=move |_| on_cancel.run(())
                                disabled=is_committing
                            >
                                "Cancel"
                            </button>
                            <button
                                class="button button--danger"
                                on:click=move |_| on_confirm.run(())
                                disabled=is_committing
                            >
                                {move || if is_committing() { "Deleting..." } else { "Delete" }}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
