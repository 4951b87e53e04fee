use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_view::{ArticleBody, ArticleView},
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_article, use_related, ArticleState},
    i18n::current::{common, preview as t},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct AdminArticlePreviewProps {
    pub id: String,
}

/// Read-only view of a published article as readers see it.
#[function_component(AdminArticlePreviewPage)]
pub fn admin_article_preview_page(props: &AdminArticlePreviewProps) -> Html {
    let state = use_article(props.id.clone());
    let loaded = match &state {
        ArticleState::Loaded(article) => Some((**article).clone()),
        _ => None,
    };
    let related = use_related(loaded);
    let link_for = Callback::from(|id: String| Route::AdminArticlePreview {
        id,
    });

    let toolbar = html! {
        <div class="flex items-center justify-between">
            <Link<Route> to={Route::AdminArticles} classes={classes!("text-sm", "text-[var(--text-muted)]", "hover:text-[var(--text)]")}>
                <i class="fas fa-arrow-left mr-2" aria-hidden="true"></i>
                { t::BACK_TO_LIST }
            </Link<Route>>
            <Link<Route>
                to={Route::AdminArticleEdit { id: props.id.clone() }}
                classes={classes!("rounded-md", "bg-[var(--primary)]", "px-4", "py-2", "text-sm", "text-white")}
            >
                { common::EDIT }
            </Link<Route>>
        </div>
    };

    let body = match state {
        ArticleState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} />
        },
        ArticleState::NotFound => html! {
            <p class="py-16 text-center text-[var(--text-muted)]">{ t::NOT_FOUND }</p>
        },
        ArticleState::Failed(message) => html! { <ErrorBanner {message} /> },
        ArticleState::Loaded(article) => html! {
            <ArticleBody article={ArticleView::from(&*article)} {related} {link_for} />
        },
    };

    html! {
        <div class="space-y-4 rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6">
            { toolbar }
            { body }
        </div>
    }
}
