use blogdesk_shared::{
    favorites::FavoriteItem,
    text::{excerpt, format_date, truncate_chars},
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::favorite_button::FavoriteButton,
    config::{BADGE_CHARS, CARD_EXCERPT_CHARS, CARD_TITLE_CHARS},
    i18n::current::common,
    router::Route,
    utils::image_src,
};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    /// Card fields; the same snapshot is stored when the heart is clicked.
    pub item: FavoriteItem,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let item = &props.item;
    let detail_route = Route::UserArticleDetail {
        id: item.id.clone(),
    };
    let badge = if item.category.trim().is_empty() {
        common::UNKNOWN_CATEGORY.to_string()
    } else {
        truncate_chars(&item.category, BADGE_CHARS)
    };

    html! {
        <article class="flex flex-col overflow-hidden rounded-xl border border-[var(--border)] bg-[var(--surface)] shadow-sm transition-shadow hover:shadow-md">
            <Link<Route> to={detail_route.clone()} classes={classes!("block", "aspect-[16/10]", "overflow-hidden")}>
                <img
                    src={image_src(&item.image_url)}
                    alt={item.title.clone()}
                    loading="lazy"
                    class="h-full w-full object-cover"
                />
            </Link<Route>>
            <div class="flex flex-1 flex-col gap-2 p-4">
                <div class="flex items-center justify-between text-xs text-[var(--text-muted)]">
                    <time datetime={item.created_at.clone()}>{ format_date(&item.created_at) }</time>
                    <FavoriteButton item={item.clone()} />
                </div>
                <h3 class="text-lg font-semibold text-[var(--text)]" title={item.title.clone()}>
                    <Link<Route> to={detail_route} classes={classes!("hover:text-[var(--primary)]")}>
                        { truncate_chars(&item.title, CARD_TITLE_CHARS) }
                    </Link<Route>>
                </h3>
                <p class="flex-1 text-sm text-[var(--text-muted)]">
                    { excerpt(&item.content, CARD_EXCERPT_CHARS) }
                </p>
                <span class="w-fit rounded-full bg-blue-100 px-3 py-1 text-xs font-medium text-blue-800 dark:bg-blue-900 dark:text-blue-100">
                    { badge }
                </span>
            </div>
        </article>
    }
}
