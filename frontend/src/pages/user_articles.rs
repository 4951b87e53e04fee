use blogdesk_shared::favorites::FavoriteItem;
use yew::prelude::*;

use crate::{
    api,
    components::{
        article_card::ArticleCard,
        error_banner::ErrorBanner,
        filter_bar::FilterBar,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::{PageSizeSelect, Pagination},
    },
    config::USER_ARTICLES,
    hooks::{use_category_options, use_list_query},
    i18n::{current::user_articles as t, fill_two},
};

/// Reader home: searchable, filterable article grid.
#[function_component(UserArticlesPage)]
pub fn user_articles_page() -> Html {
    let list = use_list_query(USER_ARTICLES, |query, config| async move {
        api::fetch_articles(&query, &config).await
    });
    let categories = use_category_options();

    let grid = if list.loading {
        html! { <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::from(t::LOADING)} /> }
    } else if let Some(message) = list.error.clone() {
        html! { <ErrorBanner {message} on_retry={Some(list.reload.clone())} /> }
    } else if list.items.is_empty() {
        html! { <p class="py-16 text-center text-[var(--text-muted)]">{ t::EMPTY }</p> }
    } else {
        html! {
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                { for list.items.iter().map(|article| html! {
                    <ArticleCard key={article.id.clone()} item={FavoriteItem::from(article)} />
                }) }
            </div>
        }
    };

    html! {
        <>
            <section class="bg-blue-600/90 px-4 py-16 text-center text-white">
                <p class="mb-3 text-sm font-semibold">{ t::HERO_KICKER }</p>
                <h1 class="mx-auto mb-10 max-w-2xl text-3xl font-medium sm:text-4xl">{ t::HERO_TITLE }</h1>
                <div class="mx-auto max-w-2xl rounded-xl bg-blue-500 p-2">
                    <FilterBar
                        search={list.search_input.clone()}
                        placeholder={t::SEARCH_PLACEHOLDER}
                        on_search={list.on_search.clone()}
                        categories={Some(categories.items.clone())}
                        category={list.query.category.clone()}
                        on_category={list.on_category.clone()}
                    />
                </div>
            </section>
            <section class="mx-auto max-w-6xl px-4 py-10">
                <div class="mb-6 flex flex-wrap items-center justify-between gap-3 text-sm text-[var(--text-muted)]">
                    <span>{ fill_two(t::SHOWING_TEMPLATE, list.items.len(), list.total) }</span>
                    <PageSizeSelect
                        value={list.page_size}
                        options={USER_ARTICLES.page_size_options}
                        on_change={list.on_page_size.clone()}
                    />
                </div>
                { grid }
                <div class="mt-10">
                    <Pagination
                        current_page={list.page}
                        total_pages={list.total_pages}
                        on_page_change={list.on_page.clone()}
                    />
                </div>
            </section>
        </>
    }
}
