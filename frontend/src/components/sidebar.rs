use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::modal::ConfirmModal,
    hooks::use_logout,
    i18n::current::{common, nav as t},
    router::Route,
};

fn nav_item_class(active: bool) -> Classes {
    classes!(
        "flex",
        "items-center",
        "gap-3",
        "rounded-md",
        "px-4",
        "py-2.5",
        "text-sm",
        "font-medium",
        "transition-colors",
        if active { "bg-blue-500 text-white" } else { "text-blue-50 hover:bg-blue-500/60" }
    )
}

/// Admin navigation. Article sub-pages keep the Articles entry highlighted.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let route = use_route::<Route>();
    let logout = use_logout();
    let confirm_open = use_state(|| false);

    let articles_active = matches!(
        route,
        Some(
            Route::AdminArticles
                | Route::AdminArticleAdd
                | Route::AdminArticleEdit { .. }
                | Route::AdminArticlePreview { .. }
                | Route::AdminDraftPreview
        )
    );
    let categories_active = matches!(route, Some(Route::AdminCategories));

    let ask_logout = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| confirm_open.set(true))
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

    html! {
        <aside class="flex w-64 shrink-0 flex-col bg-blue-600 px-4 py-6 text-white dark:bg-blue-950" aria-label={t::SIDEBAR_ARIA}>
            <Link<Route> to={Route::AdminArticles} classes={classes!("mb-8", "px-4", "text-xl", "font-bold")}>
                { common::BRAND_NAME }
            </Link<Route>>
            <nav class="flex flex-1 flex-col gap-1">
                <Link<Route> to={Route::AdminArticles} classes={nav_item_class(articles_active)}>
                    <i class="far fa-newspaper w-4" aria-hidden="true"></i>
                    { t::ARTICLES }
                </Link<Route>>
                <Link<Route> to={Route::AdminCategories} classes={nav_item_class(categories_active)}>
                    <i class="fas fa-tag w-4" aria-hidden="true"></i>
                    { t::CATEGORY }
                </Link<Route>>
                <button type="button" class={classes!(nav_item_class(false), "text-left")} onclick={ask_logout}>
                    <i class="fas fa-right-from-bracket w-4" aria-hidden="true"></i>
                    { t::LOGOUT }
                </button>
            </nav>
            <ConfirmModal
                open={*confirm_open}
                title={t::LOGOUT_CONFIRM_TITLE}
                message={t::LOGOUT_CONFIRM_BODY}
                confirm_label={t::LOGOUT_CONFIRM}
                danger={false}
                on_confirm={confirm_logout}
                on_cancel={cancel_logout}
            />
        </aside>
    }
}
