use std::rc::Rc;

use blogdesk_shared::{
    text::{excerpt, format_date, truncate_chars},
    Article,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
    },
    config::{BADGE_CHARS, CARD_EXCERPT_CHARS, CARD_TITLE_CHARS},
    i18n::{
        current::{common, preview as t},
        fill_two,
    },
    router::Route,
    utils::image_src,
};

/// Fields of a rendered article, from the server or an unsaved draft.
#[derive(Clone, PartialEq)]
pub struct ArticleView {
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub created_at: String,
    pub category: Option<String>,
    pub author: Option<String>,
}

impl From<&Article> for ArticleView {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            image_url: article.image_url.clone(),
            created_at: article.created_at.clone(),
            category: article.category_name().map(str::to_string),
            author: article.author_name().map(str::to_string),
        }
    }
}

/// Related articles: still loading, loaded, or unavailable.
#[derive(Clone, PartialEq)]
pub enum Related {
    Loading,
    Loaded(Rc<Vec<Article>>),
    Failed,
}

#[derive(Properties, PartialEq)]
pub struct ArticleBodyProps {
    pub article: ArticleView,
    pub related: Related,
    /// Where a related card leads.
    pub link_for: Callback<String, Route>,
    /// Controls rendered beside the date line.
    #[prop_or_default]
    pub actions: Html,
}

#[function_component(ArticleBody)]
pub fn article_body(props: &ArticleBodyProps) -> Html {
    let article = &props.article;
    let byline = fill_two(
        common::BY_TEMPLATE,
        format_date(&article.created_at),
        article.author.as_deref().unwrap_or(common::UNKNOWN_AUTHOR),
    );

    let related = match &props.related {
        Related::Loading => html! { <LoadingSpinner size={SpinnerSize::Small} /> },
        Related::Failed => html! { <p class="text-sm text-[var(--text-muted)]">{ t::NO_OTHER }</p> },
        Related::Loaded(items) if items.is_empty() => {
            html! { <p class="text-sm text-[var(--text-muted)]">{ t::NO_OTHER }</p> }
        },
        Related::Loaded(items) => html! {
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                { for items.iter().map(|other| {
                    let to = props.link_for.emit(other.id.clone());
                    let badge = other
                        .category_name()
                        .map(|name| truncate_chars(name, BADGE_CHARS))
                        .unwrap_or_else(|| common::UNKNOWN_CATEGORY.to_string());
                    html! {
                        <Link<Route> {to} classes={classes!("group", "flex", "flex-col", "gap-2")}>
                            <img
                                src={image_src(&other.image_url)}
                                alt={other.title.clone()}
                                loading="lazy"
                                class="aspect-[16/10] w-full rounded-lg object-cover"
                            />
                            <span class="text-xs text-[var(--text-muted)]">{ format_date(&other.created_at) }</span>
                            <span class="font-semibold text-[var(--text)] group-hover:text-[var(--primary)]">
                                { truncate_chars(&other.title, CARD_TITLE_CHARS) }
                            </span>
                            <span class="text-sm text-[var(--text-muted)]">{ excerpt(&other.content, CARD_EXCERPT_CHARS) }</span>
                            <span class="w-fit rounded-full bg-blue-100 px-3 py-1 text-xs text-blue-800">{ badge }</span>
                        </Link<Route>>
                    }
                }) }
            </div>
        },
    };

    html! {
        <article class="mx-auto max-w-4xl px-4 py-10">
            <div class="mb-4 flex items-center justify-center gap-3 text-sm text-[var(--text-muted)]">
                <span>{ byline }</span>
                { props.actions.clone() }
            </div>
            <h1 class="mb-3 text-center text-3xl font-semibold text-[var(--text)]">{ article.title.clone() }</h1>
            <p class="mb-8 text-center">
                <span class="rounded-full bg-blue-100 px-3 py-1 text-xs font-medium text-blue-800">
                    { article.category.clone().unwrap_or_else(|| common::UNKNOWN_CATEGORY.to_string()) }
                </span>
            </p>
            {
                if article.image_url.trim().is_empty() {
                    Html::default()
                } else {
                    html! {
                        <img
                            src={image_src(&article.image_url)}
                            alt={article.title.clone()}
                            class="mb-8 max-h-[28rem] w-full rounded-xl object-cover"
                        />
                    }
                }
            }
            <RawHtml
                html={AttrValue::from(article.content.clone())}
                class={classes!("article-content", "prose", "max-w-none", "text-[var(--text)]")}
            />
            <section class="mt-16">
                <h2 class="mb-6 text-xl font-semibold text-[var(--text)]">{ t::OTHER_ARTICLES }</h2>
                { related }
            </section>
        </article>
    }
}
