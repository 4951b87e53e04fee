use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{article_card::ArticleCard, modal::ConfirmModal},
    context::{use_notifier, FavoritesAction, FavoritesContext},
    i18n::{
        current::{favorites as t, preview, user_articles},
        fill_one,
    },
    router::Route,
};

/// Articles favorited on this device.
#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let favorites = use_context::<FavoritesContext>();
    let notifier = use_notifier();
    let confirm_clear = use_state(|| false);

    let items = favorites
        .as_ref()
        .map(|ctx| ctx.store.items().cloned().collect::<Vec<_>>())
        .unwrap_or_default();

    let ask_clear = {
        let confirm_clear = confirm_clear.clone();
        Callback::from(move |_| confirm_clear.set(true))
    };
    let cancel_clear = {
        let confirm_clear = confirm_clear.clone();
        Callback::from(move |_| confirm_clear.set(false))
    };
    let clear_all = {
        let favorites = favorites.clone();
        let confirm_clear = confirm_clear.clone();
        Callback::from(move |_| {
            if let Some(favorites) = favorites.as_ref() {
                favorites.dispatch(FavoritesAction::Clear);
            }
            confirm_clear.set(false);
        })
    };

    let body = if items.is_empty() {
        html! {
            <div class="py-16 text-center">
                <p class="mb-6 text-[var(--text-muted)]">{ t::EMPTY }</p>
                <Link<Route> to={Route::UserArticles} classes={classes!("text-[var(--primary)]", "underline")}>
                    { preview::BACK_TO_LIST }
                </Link<Route>>
            </div>
        }
    } else {
        html! {
            <div class="grid gap-8 sm:grid-cols-2 lg:grid-cols-3">
                { for items.iter().map(|item| {
                    let on_remove = {
                        let favorites = favorites.clone();
                        let notifier = notifier.clone();
                        let id = item.id.clone();
                        Callback::from(move |_| {
                            if let Some(favorites) = favorites.as_ref() {
                                favorites.dispatch(FavoritesAction::Remove(id.clone()));
                                notifier.success(user_articles::FAVORITE_REMOVED);
                            }
                        })
                    };
                    html! {
                        <div key={item.id.clone()} class="flex flex-col gap-2">
                            <ArticleCard item={item.clone()} />
                            <button
                                type="button"
                                class="self-end text-sm text-red-600 underline"
                                onclick={on_remove}
                            >
                                { t::REMOVE }
                            </button>
                        </div>
                    }
                }) }
            </div>
        }
    };

    html! {
        <section class="mx-auto max-w-6xl px-4 py-10">
            <div class="mb-8 flex flex-wrap items-center justify-between gap-3">
                <div>
                    <h1 class="text-2xl font-semibold text-[var(--text)]">{ t::TITLE }</h1>
                    <p class="text-sm text-[var(--text-muted)]">{ fill_one(t::COUNT_TEMPLATE, items.len()) }</p>
                </div>
                if !items.is_empty() {
                    <button
                        type="button"
                        class="rounded-md border border-red-300 px-4 py-2 text-sm text-red-600 hover:bg-red-50"
                        onclick={ask_clear}
                    >
                        { t::CLEAR_ALL }
                    </button>
                }
            </div>
            { body }
            <ConfirmModal
                open={*confirm_clear}
                title={t::CLEAR_TITLE}
                message={t::CLEAR_BODY}
                confirm_label={t::CLEAR_ALL}
                on_confirm={clear_all}
                on_cancel={cancel_clear}
            />
        </section>
    }
}
