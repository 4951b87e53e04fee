use blogdesk_shared::pagination::{visible_slots, PageSlot};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::i18n::{current::pagination as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let slots = visible_slots(current_page, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_disabled = current_page <= 1;
    let next_disabled = current_page >= total_pages;

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let base_btn_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-3",
        "rounded-md",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "text-[var(--text)]",
        "text-sm",
        "font-medium",
        "transition-colors",
        "duration-150",
        "hover:border-[var(--primary)]",
        "hover:text-[var(--primary)]",
        "disabled:opacity-50",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class="flex flex-wrap items-center justify-center gap-2" aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={classes!(base_btn_classes.clone(), "gap-1")}
                disabled={prev_disabled}
                onclick={prev_onclick}
                aria-label={t::ARIA_PREV}
            >
                <i class="fas fa-chevron-left text-xs" aria-hidden="true"></i>
                { t::PREV }
            </button>
            { for slots.into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let active = page == current_page;
                    let page_classes = classes!(
                        base_btn_classes.clone(),
                        active.then_some("bg-[var(--primary)] text-white border-transparent pointer-events-none")
                    );
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={active.then_some(AttrValue::from("page"))}
                            disabled={active}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}-{current_page}")}
                        class="px-2 select-none text-[var(--text-muted)]"
                        aria-hidden="true"
                    >
                        {"..."}
                    </span>
                },
            }) }
            <button
                type="button"
                class={classes!(base_btn_classes, "gap-1")}
                disabled={next_disabled}
                onclick={next_onclick}
                aria-label={t::ARIA_NEXT}
            >
                { t::NEXT }
                <i class="fas fa-chevron-right text-xs" aria-hidden="true"></i>
            </button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct PageSizeSelectProps {
    pub value: usize,
    pub options: &'static [usize],
    pub on_change: Callback<usize>,
}

/// Size selector. A current size missing from `options` is listed too so
/// the control always reflects the URL.
#[function_component(PageSizeSelect)]
pub fn page_size_select(props: &PageSizeSelectProps) -> Html {
    if props.options.is_empty() {
        return Html::default();
    }

    let mut sizes = props.options.to_vec();
    if !sizes.contains(&props.value) {
        sizes.push(props.value);
        sizes.sort_unstable();
    }

    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let size = event
                .target_dyn_into::<HtmlSelectElement>()
                .and_then(|select| select.value().parse::<usize>().ok());
            if let Some(size) = size {
                on_change.emit(size);
            }
        })
    };

    html! {
        <label class="inline-flex items-center gap-2 text-sm text-[var(--text-muted)]">
            { t::PAGE_SIZE_LABEL }
            <select
                class="h-9 rounded-md border border-[var(--border)] bg-[var(--surface)] px-2 text-[var(--text)]"
                {onchange}
            >
                { for sizes.into_iter().map(|size| html! {
                    <option
                        key={size.to_string()}
                        value={size.to_string()}
                        selected={size == props.value}
                    >
                        { size }
                    </option>
                }) }
            </select>
        </label>
    }
}
