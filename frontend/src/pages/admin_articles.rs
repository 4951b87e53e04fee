use blogdesk_shared::{
    text::{format_date_time, truncate_chars},
    Article,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        filter_bar::FilterBar,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::ConfirmModal,
        pagination::Pagination,
    },
    config::{ADMIN_ARTICLES, TABLE_TITLE_CHARS},
    context::use_notifier,
    hooks::{use_category_options, use_list_query},
    i18n::{
        current::{admin_articles as t, common},
        fill_one,
    },
    router::Route,
    utils::image_src,
};

#[function_component(AdminArticlesPage)]
pub fn admin_articles_page() -> Html {
    let list = use_list_query(ADMIN_ARTICLES, |query, config| async move {
        api::fetch_articles(&query, &config).await
    });
    let categories = use_category_options();
    let notifier = use_notifier();
    let pending_delete = use_state(|| None::<Article>);
    let deleting = use_state(|| false);

    let ask_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |article: Article| pending_delete.set(Some(article)))
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
            let Some(article) = (*pending_delete).clone() else {
                return;
            };
            deleting.set(true);
            let pending_delete = pending_delete.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_article(&article.id).await {
                    Ok(()) => {
                        notifier.success(t::DELETED);
                        reload.emit(());
                    },
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("failed to delete article {}: {}", article.id, err).into(),
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
                <td colspan="5">
                    <LoadingSpinner size={SpinnerSize::Medium} label={AttrValue::from(t::LOADING)} />
                </td>
            </tr>
        }
    } else if list.items.is_empty() {
        html! {
            <tr>
                <td colspan="5" class="py-10 text-center text-sm text-[var(--text-muted)]">{ t::EMPTY }</td>
            </tr>
        }
    } else {
        list.items
            .iter()
            .map(|article| {
                let on_delete = {
                    let ask_delete = ask_delete.clone();
                    let article = article.clone();
                    Callback::from(move |_| ask_delete.emit(article.clone()))
                };
                html! {
                    <tr key={article.id.clone()} class="border-t border-[var(--border)]">
                        <td class="px-4 py-3">
                            <img
                                src={image_src(&article.image_url)}
                                alt={article.title.clone()}
                                class="h-14 w-14 rounded-md object-cover"
                                loading="lazy"
                            />
                        </td>
                        <td class="px-4 py-3 text-[var(--text)]" title={article.title.clone()}>
                            { truncate_chars(&article.title, TABLE_TITLE_CHARS) }
                        </td>
                        <td class="px-4 py-3 text-[var(--text-muted)]">
                            { article.category_name().unwrap_or(common::UNKNOWN_CATEGORY).to_string() }
                        </td>
                        <td class="px-4 py-3 text-[var(--text-muted)]">
                            { format_date_time(&article.created_at) }
                        </td>
                        <td class="px-4 py-3">
                            <div class="flex items-center justify-center gap-3 text-sm">
                                <Link<Route>
                                    to={Route::AdminArticlePreview { id: article.id.clone() }}
                                    classes={classes!("text-blue-600", "underline")}
                                >
                                    { common::PREVIEW }
                                </Link<Route>>
                                <Link<Route>
                                    to={Route::AdminArticleEdit { id: article.id.clone() }}
                                    classes={classes!("text-blue-600", "underline")}
                                >
                                    { common::EDIT }
                                </Link<Route>>
                                <button type="button" class="text-red-600 underline" onclick={on_delete}>
                                    { common::DELETE }
                                </button>
                            </div>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    let delete_message = pending_delete
        .as_ref()
        .map(|article| fill_one(t::DELETE_BODY_TEMPLATE, &article.title))
        .unwrap_or_default();

    html! {
        <section class="overflow-hidden rounded-xl border border-[var(--border)] bg-[var(--surface)]">
            <div class="border-b border-[var(--border)] px-6 py-4 text-sm font-medium text-[var(--text)]">
                { fill_one(t::TOTAL_TEMPLATE, list.total) }
            </div>
            <div class="flex flex-wrap items-center justify-between gap-3 border-b border-[var(--border)] px-6 py-4">
                <FilterBar
                    class={classes!("flex-1")}
                    search={list.search_input.clone()}
                    placeholder={t::SEARCH_PLACEHOLDER}
                    on_search={list.on_search.clone()}
                    categories={Some(categories.items.clone())}
                    category={list.query.category.clone()}
                    on_category={list.on_category.clone()}
                />
                <Link<Route>
                    to={Route::AdminArticleAdd}
                    classes={classes!("rounded-md", "bg-[var(--primary)]", "px-4", "py-2", "text-sm", "font-medium", "text-white", "hover:opacity-90")}
                >
                    { t::ADD }
                </Link<Route>>
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
                <table class="w-full text-left text-sm">
                    <thead class="bg-[var(--surface-alt)] text-[var(--text)]">
                        <tr>
                            <th class="px-4 py-3 font-medium">{ t::COL_THUMBNAIL }</th>
                            <th class="px-4 py-3 font-medium">{ t::COL_TITLE }</th>
                            <th class="px-4 py-3 font-medium">{ t::COL_CATEGORY }</th>
                            <th class="px-4 py-3 font-medium">{ t::COL_CREATED }</th>
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
