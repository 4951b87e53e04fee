use blogdesk_shared::{
    draft::Draft,
    error::SubmitError,
    forms::{ArticleForm, Field, FieldErrors},
    submit::{submit_article, validate_submission, SubmitMode, ThumbnailEdit},
};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::{self, HttpGateway},
    browser,
    components::{
        error_banner::ErrorBanner,
        field::{input_class, FieldError},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    config::REDIRECT_DELAY_MS,
    context::{use_notifier, DraftAction, DraftContext, Notifier},
    hooks::use_category_options,
    i18n::{
        current::{article_form as t, common, filter_bar},
        fill_one,
    },
    router::Route,
    utils::word_count,
};

pub(crate) fn saved_message(mode: &SubmitMode) -> &'static str {
    if mode.is_create() {
        t::CREATED
    } else {
        t::UPDATED
    }
}

/// Log and toast a failed save. Validation failures come back so the caller
/// can show them next to the fields.
pub(crate) fn report_submit_error(
    notifier: &Notifier,
    mode: &SubmitMode,
    err: SubmitError,
) -> Option<FieldErrors> {
    web_sys::console::error_1(&format!("article submit failed: {}", err).into());
    match err {
        SubmitError::Validation(errors) => Some(errors),
        SubmitError::Upload(_) => {
            notifier.error(t::UPLOAD_FAILED);
            None
        },
        SubmitError::Save(api_err) => {
            let fallback = if mode.is_create() { t::CREATE_FAILED } else { t::UPDATE_FAILED };
            notifier.error(api_err.server_message().unwrap_or(fallback).to_string());
            None
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct ArticleFormPageProps {
    /// Article being edited; `None` creates a new one.
    #[prop_or_default]
    pub id: Option<String>,
}

#[function_component(ArticleFormPage)]
pub fn article_form_page(props: &ArticleFormPageProps) -> Html {
    let navigator = use_navigator();
    let notifier = use_notifier();
    let drafts = use_context::<DraftContext>();
    let categories = use_category_options();

    let initial_mode = match props.id.clone() {
        Some(id) => SubmitMode::Edit {
            id,
            current_image_url: String::new(),
        },
        None => SubmitMode::Create,
    };

    let mode = use_state(|| initial_mode.clone());
    let form = use_state(ArticleForm::default);
    let thumbnail = use_state(|| ThumbnailEdit::<web_sys::File>::Keep);
    let preview_url = use_state(String::new);
    let errors = use_state(FieldErrors::default);
    let loading = use_state(|| !initial_mode.is_create());
    let load_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let file_input = use_node_ref();

    // A draft staged for this article wins over the server copy, so coming
    // back from the preview keeps the unsaved edits.
    {
        let mode = mode.clone();
        let form = form.clone();
        let thumbnail = thumbnail.clone();
        let preview_url = preview_url.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let staged: Option<Draft<web_sys::File>> = drafts
            .as_ref()
            .and_then(|ctx| ctx.slot.get().cloned())
            .filter(|draft| draft.belongs_to(&initial_mode));
        use_effect_with(initial_mode, move |initial_mode| {
            if let Some(draft) = staged {
                mode.set(draft.mode.clone());
                form.set(draft.form.clone());
                thumbnail.set(draft.thumbnail.clone());
                preview_url.set(draft.preview_image_url.clone());
                loading.set(false);
            } else if let SubmitMode::Edit {
                id, ..
            } = initial_mode.clone()
            {
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    match api::fetch_article(&id).await {
                        Ok(article) => {
                            form.set(ArticleForm::from_article(&article));
                            preview_url.set(article.image_url.clone());
                            mode.set(SubmitMode::Edit {
                                id,
                                current_image_url: article.image_url,
                            });
                            load_error.set(None);
                        },
                        Err(err) => {
                            web_sys::console::error_1(
                                &format!("failed to load article {}: {}", id, err).into(),
                            );
                            load_error.set(Some(t::LOAD_FAILED.to_string()));
                        },
                    }
                    loading.set(false);
                });
            } else {
                mode.set(SubmitMode::Create);
                form.set(ArticleForm::default());
                thumbnail.set(ThumbnailEdit::Keep);
                preview_url.set(String::new());
                loading.set(false);
            }
            || ()
        });
    }

    let draft_image_url = drafts
        .as_ref()
        .and_then(|ctx| ctx.slot.get().map(|d| d.preview_image_url.clone()))
        .unwrap_or_default();

    let replace_preview = {
        let preview_url = preview_url.clone();
        move |next: String| {
            if *preview_url != draft_image_url {
                browser::revoke_object_url(&preview_url);
            }
            preview_url.set(next);
        }
    };

    let on_file = {
        let thumbnail = thumbnail.clone();
        let errors = errors.clone();
        let replace_preview = replace_preview.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            replace_preview(browser::object_url(&file));
            thumbnail.set(ThumbnailEdit::Replace(file));
            errors.set(errors.without(Field::Image));
            // Allow picking the same file again after a removal.
            input.set_value("");
        })
    };

    let pick_file = {
        let file_input = file_input.clone();
        Callback::from(move |_| {
            if let Some(input) = file_input.cast::<HtmlInputElement>() {
                input.click();
            }
        })
    };

    let remove_file = {
        let thumbnail = thumbnail.clone();
        Callback::from(move |_| {
            replace_preview(String::new());
            thumbnail.set(ThumbnailEdit::Clear);
        })
    };

    let on_title = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(ArticleForm {
                    title: input.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Title));
            }
        })
    };

    let on_category = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                form.set(ArticleForm {
                    category_id: select.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::CategoryId));
            }
        })
    };

    let on_content = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                form.set(ArticleForm {
                    content: area.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Content));
            }
        })
    };

    let on_cancel = {
        let drafts = drafts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            if let Some(drafts) = drafts.as_ref() {
                drafts.dispatch(DraftAction::Clear);
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminArticles);
            }
        })
    };

    let on_preview = {
        let mode = mode.clone();
        let form = form.clone();
        let thumbnail = thumbnail.clone();
        let preview_url = preview_url.clone();
        let errors = errors.clone();
        let drafts = drafts.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let field_errors = validate_submission(&*mode, &*form, &*thumbnail);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            if let Some(drafts) = drafts.as_ref() {
                drafts.dispatch(DraftAction::Stage(Draft {
                    mode: (*mode).clone(),
                    form: (*form).clone(),
                    thumbnail: (*thumbnail).clone(),
                    preview_image_url: (*preview_url).clone(),
                    created_at: browser::now_iso(),
                }));
            }
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::AdminDraftPreview);
            }
        })
    };

    let onsubmit = {
        let mode = mode.clone();
        let form = form.clone();
        let thumbnail = thumbnail.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let field_errors = validate_submission(&*mode, &*form, &*thumbnail);
            if !field_errors.is_empty() {
                errors.set(field_errors);
                return;
            }
            errors.set(FieldErrors::default());
            submitting.set(true);

            let mode = (*mode).clone();
            let form = (*form).clone();
            let thumbnail = (*thumbnail).clone();
            let errors = errors.clone();
            let submitting = submitting.clone();
            let notifier = notifier.clone();
            let drafts = drafts.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit_article(&HttpGateway, &mode, &form, &thumbnail).await {
                    Ok(_) => {
                        notifier.success(saved_message(&mode));
                        if let Some(drafts) = drafts.as_ref() {
                            drafts.dispatch(DraftAction::Clear);
                        }
                        let pending = Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::AdminArticles);
                            }
                        });
                        *redirect.borrow_mut() = Some(pending);
                    },
                    Err(err) => {
                        submitting.set(false);
                        if let Some(field_errors) = report_submit_error(&notifier, &mode, err) {
                            errors.set(field_errors);
                        }
                    },
                }
            });
        })
    };

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} /> };
    }
    if let Some(message) = (*load_error).clone() {
        return html! { <ErrorBanner {message} /> };
    }

    let heading = if mode.is_create() { t::CREATE_TITLE } else { t::EDIT_TITLE };
    let has_image = !preview_url.is_empty();
    let label_class = "mb-1 block text-sm font-medium text-[var(--text)]";

    html! {
        <form class="space-y-6 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6" {onsubmit} novalidate=true>
            <div class="flex items-center gap-3">
                <Link<Route> to={Route::AdminArticles} classes={classes!("text-[var(--text-muted)]", "hover:text-[var(--text)]")}>
                    <i class="fas fa-arrow-left" aria-hidden="true"></i>
                    <span class="sr-only">{ common::BACK }</span>
                </Link<Route>>
                <h2 class="text-lg font-semibold text-[var(--text)]">{ heading }</h2>
            </div>

            <div>
                <span class={label_class}>{ t::THUMBNAIL }</span>
                <input
                    ref={file_input}
                    type="file"
                    accept="image/jpeg,image/png"
                    class="hidden"
                    onchange={on_file}
                />
                {
                    if has_image {
                        html! {
                            <div class="w-56 rounded-lg border border-[var(--border)] p-3">
                                <img src={(*preview_url).clone()} alt={t::THUMBNAIL} class="h-32 w-full rounded-md object-cover" />
                                <div class="mt-2 flex justify-center gap-4 text-sm">
                                    <button type="button" class="text-blue-600 underline" onclick={pick_file}>{ t::CHANGE_FILE }</button>
                                    <button type="button" class="text-red-600 underline" onclick={remove_file}>{ t::REMOVE_FILE }</button>
                                </div>
                            </div>
                        }
                    } else {
                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "flex", "h-40", "w-56", "flex-col", "items-center", "justify-center", "gap-1",
                                    "rounded-lg", "border", "border-dashed", "text-sm", "text-[var(--text-muted)]",
                                    if errors.contains(Field::Image) { "border-red-500" } else { "border-[var(--border)]" }
                                )}
                                onclick={pick_file}
                            >
                                <i class="far fa-image text-xl" aria-hidden="true"></i>
                                <span class="underline">{ t::PICK_FILE }</span>
                                <span class="text-xs">{ t::FILE_HINT }</span>
                            </button>
                        }
                    }
                }
                <FieldError errors={(*errors).clone()} field={Field::Image} />
            </div>

            <div>
                <label for="title" class={label_class}>{ t::TITLE_LABEL }</label>
                <input
                    id="title"
                    type="text"
                    class={input_class(errors.contains(Field::Title))}
                    placeholder={t::TITLE_PLACEHOLDER}
                    value={form.title.clone()}
                    oninput={on_title}
                />
                <FieldError errors={(*errors).clone()} field={Field::Title} />
            </div>

            <div>
                <label for="category" class={label_class}>{ t::CATEGORY_LABEL }</label>
                <select id="category" class={input_class(errors.contains(Field::CategoryId))} onchange={on_category}>
                    <option value="" selected={form.category_id.is_empty()} disabled=true>
                        { filter_bar::SELECT_CATEGORY }
                    </option>
                    { for categories.items.iter().map(|category| html! {
                        <option
                            key={category.id.clone()}
                            value={category.id.clone()}
                            selected={category.id == form.category_id}
                        >
                            { category.name.clone() }
                        </option>
                    }) }
                </select>
                {
                    match categories.error.clone() {
                        Some(_) => html! { <p class="mt-1 text-xs text-red-600">{ t::CATEGORIES_FAILED }</p> },
                        None => html! { <p class="mt-1 text-xs text-[var(--text-muted)]">{ t::CATEGORY_HINT }</p> },
                    }
                }
                <FieldError errors={(*errors).clone()} field={Field::CategoryId} />
            </div>

            <div>
                <label for="content" class={label_class}>{ t::CONTENT_LABEL }</label>
                <textarea
                    id="content"
                    rows="14"
                    class={classes!(input_class(errors.contains(Field::Content)), "font-mono")}
                    placeholder={t::CONTENT_PLACEHOLDER}
                    value={form.content.clone()}
                    oninput={on_content}
                />
                <div class="mt-1 flex justify-between">
                    <FieldError errors={(*errors).clone()} field={Field::Content} />
                    <span class="ml-auto text-xs text-[var(--text-muted)]">
                        { fill_one(t::WORD_COUNT_TEMPLATE, word_count(&form.content)) }
                    </span>
                </div>
            </div>

            <div class="flex justify-end gap-3">
                <button
                    type="button"
                    class="rounded-md border border-[var(--border)] px-4 py-2 text-sm text-[var(--text)] hover:bg-[var(--surface-alt)]"
                    onclick={on_cancel}
                    disabled={*submitting}
                >
                    { common::CANCEL }
                </button>
                <button
                    type="button"
                    class="rounded-md bg-slate-200 px-4 py-2 text-sm text-slate-900 hover:bg-slate-300"
                    onclick={on_preview}
                    disabled={*submitting}
                >
                    { t::PREVIEW }
                </button>
                <button
                    type="submit"
                    class="rounded-md bg-[var(--primary)] px-4 py-2 text-sm font-medium text-white hover:opacity-90 disabled:opacity-60"
                    disabled={*submitting}
                >
                    { if *submitting { t::UPLOADING } else { t::UPLOAD } }
                </button>
            </div>
        </form>
    }
}
