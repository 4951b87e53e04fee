use yew::prelude::*;

use crate::i18n::current::{common, modal as t};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or pressing
/// Escape closes it.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let close_button = close_backdrop.clone();
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.emit(());
            }
        })
    };

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/40 p-4"
            onclick={close_backdrop}
            onkeydown={on_keydown}
        >
            <div
                class="w-full max-w-md rounded-xl border border-[var(--border)] bg-[var(--surface)] p-6 shadow-xl"
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={stop}
            >
                <div class="mb-4 flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-[var(--text)]">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="inline-flex h-8 w-8 items-center justify-center rounded-full text-[var(--text-muted)] hover:bg-[var(--surface-alt)]"
                        aria-label={t::CLOSE_ARIA}
                        onclick={close_button}
                    >
                        {"×"}
                    </button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub message: AttrValue,
    pub confirm_label: AttrValue,
    #[prop_or(true)]
    pub danger: bool,
    #[prop_or(false)]
    pub busy: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Yes/no dialog used before destructive actions and logout.
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let confirm_class = classes!(
        "rounded-md",
        "px-4",
        "py-2",
        "text-sm",
        "font-medium",
        "text-white",
        "disabled:opacity-60",
        if props.danger { "bg-red-600 hover:bg-red-700" } else { "bg-[var(--primary)] hover:opacity-90" }
    );

    html! {
        <Modal open={props.open} title={props.title.clone()} on_close={props.on_cancel.clone()}>
            <p class="text-sm text-[var(--text-muted)]">{ props.message.clone() }</p>
            <div class="mt-6 flex justify-end gap-3">
                <button
                    type="button"
                    class="rounded-md border border-[var(--border)] px-4 py-2 text-sm text-[var(--text)] hover:bg-[var(--surface-alt)]"
                    onclick={on_cancel}
                    disabled={props.busy}
                >
                    { common::CANCEL }
                </button>
                <button type="button" class={confirm_class} onclick={on_confirm} disabled={props.busy}>
                    { props.confirm_label.clone() }
                </button>
            </div>
        </Modal>
    }
}
