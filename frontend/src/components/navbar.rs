use blogdesk_shared::text::initial;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{modal::ConfirmModal, theme_toggle::ThemeToggle},
    context::FavoritesContext,
    hooks::{use_logout, use_profile},
    i18n::current::{common, nav as t},
    router::Route,
};

/// Top bar of the reader pages: brand, favorites, theme and the account menu.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let profile = use_profile();
    let favorites = use_context::<FavoritesContext>();
    let logout = use_logout();
    let menu_open = use_state(|| false);
    let confirm_open = use_state(|| false);

    let favorite_count = favorites.as_ref().map(|ctx| ctx.store.len()).unwrap_or(0);
    let username = profile.map(|p| p.username).unwrap_or_default();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let ask_logout = {
        let menu_open = menu_open.clone();
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| {
            menu_open.set(false);
            confirm_open.set(true);
        })
    };
    let cancel_logout = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| confirm_open.set(false))
    };
    let confirm_logout = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| {
            confirm_open.set(false);
            logout.emit(());
        })
    };

    let menu_item = "flex items-center gap-2 px-4 py-2 text-sm text-[var(--text)] hover:bg-[var(--surface-alt)]";

    html! {
        <header class="sticky top-0 z-30 border-b border-[var(--border)] bg-[var(--surface)]">
            <div class="mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
                <Link<Route> to={Route::UserArticles} classes={classes!("text-lg", "font-bold", "text-[var(--primary)]")}>
                    { common::BRAND_NAME }
                </Link<Route>>
                <div class="flex items-center gap-3">
                    <Link<Route>
                        to={Route::UserFavorites}
                        classes={classes!("relative", "inline-flex", "h-10", "w-10", "items-center", "justify-center", "rounded-full", "hover:bg-[var(--surface-alt)]")}
                    >
                        <i class="far fa-heart text-[var(--text)]" aria-hidden="true"></i>
                        <span class="sr-only">{ t::MY_FAVORITES }</span>
                        {
                            if favorite_count > 0 {
                                html! {
                                    <span class="absolute -right-0.5 -top-0.5 min-w-[1.25rem] rounded-full bg-red-500 px-1 text-center text-[0.65rem] font-semibold leading-5 text-white">
                                        { favorite_count }
                                    </span>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </Link<Route>>
                    <ThemeToggle />
                    <div class="relative">
                        <button
                            type="button"
                            class="flex items-center gap-2 rounded-full px-1 py-1 hover:bg-[var(--surface-alt)]"
                            aria-label={t::ACCOUNT_MENU_ARIA}
                            aria-expanded={(*menu_open).to_string()}
                            onclick={toggle_menu}
                        >
                            <span class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-blue-200 font-semibold text-blue-900">
                                { initial(&username) }
                            </span>
                            <span class="hidden text-sm font-medium text-[var(--text)] sm:inline">{ username.clone() }</span>
                        </button>
                        {
                            if *menu_open {
                                html! {
                                    <div
                                        class="absolute right-0 mt-2 w-48 overflow-hidden rounded-lg border border-[var(--border)] bg-[var(--surface)] shadow-lg"
                                        onclick={close_menu}
                                    >
                                        <Link<Route> to={Route::UserProfile} classes={classes!(menu_item)}>
                                            <i class="far fa-user" aria-hidden="true"></i>
                                            { t::MY_ACCOUNT }
                                        </Link<Route>>
                                        <Link<Route> to={Route::UserFavorites} classes={classes!(menu_item)}>
                                            <i class="far fa-heart" aria-hidden="true"></i>
                                            { t::MY_FAVORITES }
                                        </Link<Route>>
                                        <button type="button" class={classes!(menu_item, "w-full", "text-red-600")} onclick={ask_logout}>
                                            <i class="fas fa-right-from-bracket" aria-hidden="true"></i>
                                            { t::LOGOUT }
                                        </button>
                                    </div>
                                }
                            } else {
                                Html::default()
                            }
                        }
                    </div>
                </div>
            </div>
            <ConfirmModal
                open={*confirm_open}
                title={t::LOGOUT_CONFIRM_TITLE}
                message={t::LOGOUT_CONFIRM_BODY}
                confirm_label={t::LOGOUT_CONFIRM}
                danger={false}
                on_confirm={confirm_logout}
                on_cancel={cancel_logout}
            />
        </header>
    }
}
