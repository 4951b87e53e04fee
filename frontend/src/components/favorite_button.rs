use blogdesk_shared::favorites::FavoriteItem;
use yew::prelude::*;

use crate::{
    context::{use_notifier, FavoritesAction, FavoritesContext},
    i18n::current::user_articles as t,
};

#[derive(Properties, PartialEq)]
pub struct FavoriteButtonProps {
    pub item: FavoriteItem,
    #[prop_or_default]
    pub class: Classes,
}

/// Heart toggle backed by the favorites context.
#[function_component(FavoriteButton)]
pub fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let favorites = use_context::<FavoritesContext>();
    let notifier = use_notifier();
    let favorited = favorites
        .as_ref()
        .map(|ctx| ctx.store.is_favorited(&props.item.id))
        .unwrap_or(false);

    let onclick = {
        let favorites = favorites.clone();
        let item = props.item.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            event.stop_propagation();
            let Some(favorites) = favorites.as_ref() else {
                return;
            };
            favorites.dispatch(FavoritesAction::Toggle(item.clone()));
            if favorited {
                notifier.success(t::FAVORITE_REMOVED);
            } else {
                notifier.success(t::FAVORITE_ADDED);
            }
        })
    };

    let label = if favorited { t::FAVORITE_REMOVE } else { t::FAVORITE_ADD };

    html! {
        <button
            type="button"
            class={classes!(
                "inline-flex",
                "h-8",
                "w-8",
                "items-center",
                "justify-center",
                "rounded-full",
                "hover:bg-[var(--surface-alt)]",
                props.class.clone()
            )}
            aria-label={label}
            title={label}
            aria-pressed={favorited.to_string()}
            {onclick}
        >
            <i
                class={classes!(
                    if favorited { "fas text-red-500" } else { "far text-[var(--text-muted)]" },
                    "fa-heart"
                )}
                aria-hidden="true"
            ></i>
        </button>
    }
}
