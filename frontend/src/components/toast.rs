use yew::prelude::*;
use yew_hooks::use_timeout;

use crate::{
    config::TOAST_DISMISS_MS,
    context::{Toast, ToastAction, ToastContext, ToastKind},
    i18n::current::toast as t,
};

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    toast: Toast,
    on_dismiss: Callback<u64>,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let id = props.toast.id;

    let _auto_dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        use_timeout(move || on_dismiss.emit(id), TOAST_DISMISS_MS)
    };

    let dismiss = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    let (tone, icon) = match props.toast.kind {
        ToastKind::Success => ("border-green-300 bg-green-50 text-green-800 dark:bg-green-950 dark:text-green-200", "fa-circle-check"),
        ToastKind::Error => ("border-red-300 bg-red-50 text-red-800 dark:bg-red-950 dark:text-red-200", "fa-circle-exclamation"),
    };

    html! {
        <div
            class={classes!(
                "pointer-events-auto",
                "flex",
                "w-80",
                "items-start",
                "gap-3",
                "rounded-lg",
                "border",
                "px-4",
                "py-3",
                "text-sm",
                "shadow-lg",
                tone
            )}
            role="status"
        >
            <i class={classes!("fas", icon, "mt-0.5")} aria-hidden="true"></i>
            <p class="flex-1">{ props.toast.message.clone() }</p>
            <button
                type="button"
                class="leading-none opacity-70 hover:opacity-100"
                aria-label={t::CLOSE_ARIA}
                onclick={dismiss}
            >
                {"×"}
            </button>
        </div>
    }
}

/// Renders queued toasts in the top-right corner; each one dismisses itself.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let Some(toasts) = use_context::<ToastContext>() else {
        return Html::default();
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u64| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <div
            class="pointer-events-none fixed right-4 top-4 z-[60] flex flex-col gap-2"
            aria-live="polite"
            aria-label={t::REGION_ARIA}
        >
            { for toasts.toasts.iter().map(|toast| html! {
                <ToastItem key={toast.id} toast={toast.clone()} on_dismiss={on_dismiss.clone()} />
            }) }
        </div>
    }
}
