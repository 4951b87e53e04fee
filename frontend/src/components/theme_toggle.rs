use yew::prelude::*;

use crate::{
    context::{ThemeAction, ThemeContext},
    i18n::current::theme_toggle as t,
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let theme = use_context::<ThemeContext>();
    let dark = theme.as_ref().map(|ctx| ctx.dark).unwrap_or(false);

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_| {
            if let Some(theme) = theme.as_ref() {
                theme.dispatch(ThemeAction::Toggle);
            }
        })
    };

    let label = if dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };

    let icon_class = if dark { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "inline-flex",
        "h-10",
        "w-10",
        "items-center",
        "justify-center",
        "rounded-full",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={dark.to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "transition-all",
                    "duration-100",
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
