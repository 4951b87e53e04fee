use blogdesk_shared::favorites::FavoriteItem;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        article_view::{ArticleBody, ArticleView},
        error_banner::ErrorBanner,
        favorite_button::FavoriteButton,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::{use_article, use_related, ArticleState},
    i18n::current::preview as t,
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub id: String,
}

/// Reader view of one article with its favorite toggle and related reads.
#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let state = use_article(props.id.clone());
    let loaded = match &state {
        ArticleState::Loaded(article) => Some((**article).clone()),
        _ => None,
    };
    let related = use_related(loaded);
    let link_for = Callback::from(|id: String| Route::UserArticleDetail {
        id,
    });

    match state {
        ArticleState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} />
        },
        ArticleState::NotFound => html! {
            <div class="mx-auto max-w-xl px-4 py-24 text-center">
                <p class="mb-6 text-lg text-[var(--text)]">{ t::NOT_FOUND }</p>
                <Link<Route> to={Route::UserArticles} classes={classes!("text-[var(--primary)]", "underline")}>
                    { t::BACK_TO_LIST }
                </Link<Route>>
            </div>
        },
        ArticleState::Failed(message) => html! {
            <div class="mx-auto max-w-xl px-4 py-16">
                <ErrorBanner {message} />
            </div>
        },
        ArticleState::Loaded(article) => {
            let actions = html! { <FavoriteButton item={FavoriteItem::from(&*article)} /> };
            html! {
                <ArticleBody
                    article={ArticleView::from(&*article)}
                    {related}
                    {link_for}
                    {actions}
                />
            }
        },
    }
}
