use yew::prelude::*;

use crate::i18n::current::loading_spinner as t;

#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 56,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Text shown next to the spinner.
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or(false)]
    pub fullscreen: bool,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    let spinner = html! {
        <div
            class={classes!("flex", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "w-[var(--spinner-size)]",
                    "h-[var(--spinner-size)]",
                    "rounded-full",
                    "border-[3px]",
                    "border-[var(--border)]",
                    "border-t-[var(--primary)]",
                    "animate-spin"
                )}
            />
            {
                match props.label.clone() {
                    Some(label) => html! { <span class="text-sm text-[var(--text-muted)]">{ label }</span> },
                    None => html! { <span class="sr-only">{ t::SR_LABEL }</span> },
                }
            }
        </div>
    };

    if props.fullscreen {
        html! {
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/30 dark:bg-black/60">
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
