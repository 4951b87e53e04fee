use blogdesk_shared::{
    forms::{CategoryForm, Field, FieldErrors},
    text::format_date_time,
    Category,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        field::{input_class, FieldError},
        filter_bar::FilterBar,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{ConfirmModal, Modal},
        pagination::Pagination,
    },
    config::ADMIN_CATEGORIES,
    context::use_notifier,
    hooks::use_list_query,
    i18n::{
        current::{categories as t, common},
        fill_one,
    },
};

/// Add/edit dialog state. `editing` is `None` when adding.
#[derive(Clone, PartialEq, Default)]
struct Editor {
    editing: Option<Category>,
    form: CategoryForm,
}

#[function_component(AdminCategoriesPage)]
pub fn admin_categories_page() -> Html {
    let list = use_list_query(ADMIN_CATEGORIES, |query, config| async move {
        api::fetch_categories(&query, &config).await
    });
    let notifier = use_notifier();

    let editor = use_state(|| None::<Editor>);
    let errors = use_state(FieldErrors::default);
    let saving = use_state(|| false);
    let pending_delete = use_state(|| None::<Category>);
    let deleting = use_state(|| false);

    let open_add = {
        let editor = editor.clone();
        let errors = errors.clone();
        Callback::from(move |_| {
            errors.set(FieldErrors::default());
            editor.set(Some(Editor::default()));
        })
    };

    let open_edit = {
        let editor = editor.clone();
        let errors = errors.clone();
        Callback::from(move |category: Category| {
            errors.set(FieldErrors::default());
            editor.set(Some(Editor {
                form: CategoryForm {
                    name: category.name.clone(),
                },
                editing: Some(category),
            }));
        })
    };

    let close_editor = {
        let editor = editor.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if !*saving {
                editor.set(None);
            }
        })
    };

    let on_name = {
        let editor = editor.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            let (Some(input), Some(current)) =
                (event.target_dyn_into::<HtmlInputElement>(), (*editor).clone())
            else {
                return;
            };
            editor.set(Some(Editor {
                form: CategoryForm {
                    name: input.value(),
                },
                ..current
            }));
            errors.set(errors.without(Field::Name));
        })
    };

    let on_save = {
        let editor = editor.clone();
        let errors = errors.clone();
        let saving = saving.clone();
        let reload = list.reload.clone();
        let notifier = notifier.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(current) = (*editor).clone() else {
                return;
            };
            if *saving {
                return;
            }
            let payload = match current.form.validate() {
                Ok(payload) => payload,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                },
            };
            saving.set(true);

            let editor = editor.clone();
            let saving = saving.clone();
            let reload = reload.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (result, done) = match current.editing.as_ref() {
                    Some(category) => (api::update_category(&category.id, &payload).await, t::UPDATED),
                    None => (api::create_category(&payload).await, t::CREATED),
                };
                saving.set(false);
                match result {
                    Ok(()) => {
                        notifier.success(done);
                        editor.set(None);
                        reload.emit(());
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("failed to save category: {}", err).into());
                        notifier.error(err.user_message());
                    },
                }
            });
        })
    };

    let ask_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |category: Category| pending_delete.set(Some(category)))
    };
    let cancel_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };
    let confirm_delete = {
        let pending_delete = pending_delete.clone();
        let deleting = deleting.clone();
        let reload = list.reload.clone();
        Callback::from(move |_| {
            let Some(category) = (*pending_delete).clone() else {
                return;
            };
            deleting.set(true);
            let pending_delete = pending_delete.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_category(&category.id).await {
                    Ok(()) => {
                        notifier.success(t::DELETED);
                        reload.emit(());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to delete category {}: {}", category.id, err).into(),
                        );
                        notifier.error(err.user_message());
                    },
                }
                deleting.set(false);
                pending_delete.set(None);
            });
        })
    };

    let rows = if list.loading {
        html! {
            <tr>
                <td colspan="3">
                    <LoadingSpinner size={SpinnerSize::Medium} label={AttrValue::from(t::LOADING)} />
                </td>
            </tr>
        }
    } else if list.items.is_empty() {
        html! {
            <tr>
                <td colspan="3" class="py-10 text-center text-sm text-[var(--text-muted)]">{ t::EMPTY }</td>
            </tr>
        }
    } else {
        list.items
            .iter()
            .map(|category| {
                let on_edit = {
                    let open_edit = open_edit.clone();
                    let category = category.clone();
                    Callback::from(move |_| open_edit.emit(category.clone()))
                };
                let on_delete = {
                    let ask_delete = ask_delete.clone();
                    let category = category.clone();
                    Callback::from(move |_| ask_delete.emit(category.clone()))
                };
                html! {
                    <tr key={category.id.clone()} class="border-t border-[var(--border)]">
                        <td class="px-4 py-3 text-center text-[var(--text)]">{ category.name.clone() }</td>
                        <td class="px-4 py-3 text-center text-[var(--text-muted)]">{ format_date_time(&category.created_at) }</td>
                        <td class="px-4 py-3">
                            <div class="flex items-center justify-center gap-3 text-sm">
                                <button type="button" class="text-blue-600 underline" onclick={on_edit}>{ common::EDIT }</button>
                                <button type="button" class="text-red-600 underline" onclick={on_delete}>{ common::DELETE }</button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let editor_view = (*editor).clone().map(|current| {
        let (title, submit_label) = if current.editing.is_some() {
            (t::EDIT_TITLE, common::SAVE)
        } else {
            (t::ADD_TITLE, t::ADD_SUBMIT)
        };
        let close = close_editor.clone();
        html! {
            <Modal open=true {title} on_close={close_editor.clone()}>
                <form class="space-y-4" onsubmit={on_save.clone()} novalidate=true>
                    <div>
                        <label for="category-name" class="mb-1 block text-sm font-medium text-[var(--text)]">{ t::NAME_LABEL }</label>
                        <input
                            id="category-name"
                            type="text"
                            class={input_class(errors.contains(Field::Name))}
                            placeholder={t::NAME_PLACEHOLDER}
                            value={current.form.name.clone()}
                            oninput={on_name.clone()}
                        />
                        <FieldError errors={(*errors).clone()} field={Field::Name} />
                    </div>
                    <div class="flex justify-end gap-3">
                        <button
                            type="button"
                            class="rounded-md border border-[var(--border)] px-4 py-2 text-sm text-[var(--text)] hover:bg-[var(--surface-alt)]"
                            onclick={Callback::from(move |_| close.emit(()))}
                            disabled={*saving}
                        >
                            { common::CANCEL }
                        </button>
                        <button
                            type="submit"
                            class="rounded-md bg-[var(--primary)] px-4 py-2 text-sm font-medium text-white hover:opacity-90 disabled:opacity-60"
                            disabled={*saving}
                        >
                            { submit_label }
                        </button>
                    </div>
                </form>
            </Modal>
        }
    });

    let delete_message = pending_delete
        .as_ref()
        .map(|category| fill_one(t::DELETE_BODY_TEMPLATE, &category.name))
        .unwrap_or_default();

    html! {
        <section class="overflow-hidden rounded-xl border border-[var(--border)] bg-[var(--surface)]">
            <div class="border-b border-[var(--border)] px-6 py-4 text-sm font-medium text-[var(--text)]">
                { fill_one(t::TOTAL_TEMPLATE, list.total) }
            </div>
            <div class="flex flex-wrap items-center justify-between gap-3 border-b border-[var(--border)] px-6 py-4">
                <FilterBar
                    class={classes!("max-w-sm", "flex-1")}
                    search={list.search_input.clone()}
                    placeholder={t::SEARCH_PLACEHOLDER}
                    on_search={list.on_search.clone()}
                />
                <button
                    type="button"
                    class="rounded-md bg-[var(--primary)] px-4 py-2 text-sm font-medium text-white hover:opacity-90"
                    onclick={open_add}
                >
                    { t::ADD }
                </button>
            </div>
            {
                match list.error.clone() {
                    Some(message) => html! {
                        <div class="px-6 pt-4">
                            <ErrorBanner {message} on_retry={Some(list.reload.clone())} />
                        </div>
                    },
                    None => Html::default(),
                }
            }
            <div class="overflow-x-auto">
                <table class="w-full text-sm">
                    <thead class="bg-[var(--surface-alt)] text-[var(--text)]">
                        <tr>
                            <th class="px-4 py-3 text-center font-medium">{ t::COL_CATEGORY }</th>
                            <th class="px-4 py-3 text-center font-medium">{ t::COL_CREATED }</th>
                            <th class="px-4 py-3 text-center font-medium">{ t::COL_ACTION }</th>
                        </tr>
                    </thead>
                    <tbody>{ rows }</tbody>
                </table>
            </div>
            <div class="border-t border-[var(--border)] px-6 py-4">
                <Pagination
                    current_page={list.page}
                    total_pages={list.total_pages}
                    on_page_change={list.on_page.clone()}
                />
            </div>
            { for editor_view }
            <ConfirmModal
                open={pending_delete.is_some()}
                title={t::DELETE_TITLE}
                message={delete_message}
                confirm_label={common::DELETE}
                busy={*deleting}
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
        </section>
    }
}
