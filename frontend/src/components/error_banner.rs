use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    /// Shows a retry button when set.
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Inline error for failed loads. Stays until the message clears or the
/// user dismisses it.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let dismiss = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    let retry = props.on_retry.clone().map(|on_retry| {
        let onclick = Callback::from(move |_| on_retry.emit(()));
        html! {
            <button
                type="button"
                class="mt-2 text-sm font-semibold underline underline-offset-2"
                {onclick}
            >
                { t::RETRY }
            </button>
        }
    });

    html! {
        <div
            class={classes!(
                "error-banner",
                "flex",
                "items-start",
                "gap-3",
                "rounded-lg",
                "border",
                "border-red-200",
                "bg-red-50",
                "px-5",
                "py-4",
                "text-sm",
                "text-red-800",
                "dark:border-red-900",
                "dark:bg-red-950",
                "dark:text-red-200"
            )}
            role="alert"
            aria-live="assertive"
        >
            <i class="fas fa-triangle-exclamation mt-0.5" aria-hidden="true"></i>
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ t::TITLE }</p>
                <p>{ props.message.clone() }</p>
                { for retry }
            </div>
            <button
                type="button"
                class="inline-flex h-7 w-7 items-center justify-center rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}
