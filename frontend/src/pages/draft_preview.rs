use blogdesk_shared::{draft::DraftExit, submit::submit_article, Article, Author, CategoryRef};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api::HttpGateway,
    components::article_view::{ArticleBody, ArticleView},
    config::REDIRECT_DELAY_MS,
    context::{use_notifier, ArticleDraft, DraftAction, DraftContext},
    hooks::{use_category_options, use_profile, use_related},
    i18n::current::{common, preview as t},
    pages::article_form::{report_submit_error, saved_message},
    router::Route,
};

/// The draft as an article, so it can go through the same rendering and
/// related-article lookup as a saved one.
fn draft_article(draft: &ArticleDraft, category_name: Option<String>, author: Option<String>) -> Article {
    let category_id = Some(draft.form.category_id.clone()).filter(|id| !id.trim().is_empty());
    Article {
        id: String::new(),
        title: draft.form.title.clone(),
        content: draft.form.content.clone(),
        image_url: draft.preview_image_url.clone(),
        created_at: draft.created_at.clone(),
        category: category_name.map(|name| CategoryRef {
            id: category_id.clone(),
            name,
        }),
        category_id,
        user: author.map(|username| Author {
            username,
        }),
    }
}

#[function_component(DraftPreviewPage)]
pub fn draft_preview_page() -> Html {
    let drafts = use_context::<DraftContext>();
    let navigator = use_navigator();
    let notifier = use_notifier();
    let categories = use_category_options();
    let profile = use_profile();
    let publishing = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);
    let exit = use_mut_ref(DraftExit::default);

    // The draft is dropped on the way out rather than at publish time, so the
    // page doesn't flip to its empty state during the redirect delay. Only
    // "Back to edit" hands it on to the form.
    {
        let drafts = drafts.clone();
        let exit = exit.clone();
        use_effect_with((), move |_| {
            move || {
                if exit.borrow().clears_draft() {
                    if let Some(drafts) = drafts.as_ref() {
                        drafts.dispatch(DraftAction::Clear);
                    }
                }
            }
        });
    }

    let draft = drafts.as_ref().and_then(|ctx| ctx.slot.get().cloned());
    let article = draft.as_ref().map(|draft| {
        let category_name = categories
            .items
            .iter()
            .find(|c| c.id == draft.form.category_id)
            .map(|c| c.name.clone());
        draft_article(draft, category_name, profile.as_ref().map(|p| p.username.clone()))
    });
    // Keyed on the draft alone so late category or profile loads don't
    // refetch.
    let related = use_related(draft.as_ref().map(|draft| draft_article(draft, None, None)));

    let (Some(draft), Some(article)) = (draft, article) else {
        return html! {
            <div class="rounded-xl border border-[var(--border)] bg-[var(--surface)] px-6 py-16 text-center">
                <p class="mb-6 text-[var(--text-muted)]">{ t::NO_DRAFT }</p>
                <Link<Route> to={Route::AdminArticles} classes={classes!("text-[var(--primary)]", "underline")}>
                    { t::BACK_TO_LIST }
                </Link<Route>>
            </div>
        };
    };

    let edit_route = Route::recognize(&draft.edit_path()).unwrap_or(Route::AdminArticles);

    let back_to_edit = {
        let navigator = navigator.clone();
        let exit = exit.clone();
        Callback::from(move |_| {
            *exit.borrow_mut() = DraftExit::BackToEdit;
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&edit_route);
            }
        })
    };

    let cancel = {
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

    let publish = {
        let publishing = publishing.clone();
        let draft = draft.clone();
        Callback::from(move |_| {
            if *publishing {
                return;
            }
            publishing.set(true);
            let draft = draft.clone();
            let publishing = publishing.clone();
            let notifier = notifier.clone();
            let exit = exit.clone();
            let navigator = navigator.clone();
            let redirect = redirect.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result =
                    submit_article(&HttpGateway, &draft.mode, &draft.form, &draft.thumbnail).await;
                match result {
                    Ok(_) => {
                        notifier.success(saved_message(&draft.mode));
                        *exit.borrow_mut() = DraftExit::Published;
                        let pending = Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::AdminArticles);
                            }
                        });
                        *redirect.borrow_mut() = Some(pending);
                    },
                    Err(err) => {
                        publishing.set(false);
                        if report_submit_error(&notifier, &draft.mode, err).is_some() {
                            notifier.error(t::INVALID_DRAFT);
                        }
                    },
                }
            });
        })
    };

    let link_for = Callback::from(|id: String| Route::AdminArticlePreview {
        id,
    });

    html! {
        <div class="space-y-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <span class="rounded-full bg-amber-100 px-3 py-1 text-xs font-medium text-amber-900">
                    { t::DRAFT_BANNER }
                </span>
                <div class="flex gap-3">
                    <button
                        type="button"
                        class="rounded-md border border-[var(--border)] px-4 py-2 text-sm text-[var(--text)] hover:bg-[var(--surface-alt)]"
                        onclick={cancel}
                        disabled={*publishing}
                    >
                        { common::CANCEL }
                    </button>
                    <button
                        type="button"
                        class="rounded-md bg-slate-200 px-4 py-2 text-sm text-slate-900 hover:bg-slate-300"
                        onclick={back_to_edit}
                        disabled={*publishing}
                    >
                        { t::BACK_TO_EDIT }
                    </button>
                    <button
                        type="button"
                        class="rounded-md bg-[var(--primary)] px-4 py-2 text-sm font-medium text-white hover:opacity-90 disabled:opacity-60"
                        onclick={publish}
                        disabled={*publishing}
                    >
                        { if *publishing { t::PUBLISHING } else { t::PUBLISH } }
                    </button>
                </div>
            </div>
            <ArticleBody article={ArticleView::from(&article)} {related} {link_for} />
        </div>
    }
}
