use std::rc::Rc;

use blogdesk_shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::i18n::current::filter_bar as t;

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub search: String,
    pub placeholder: AttrValue,
    pub on_search: Callback<String>,
    /// Category filter is hidden when `None`.
    #[prop_or_default]
    pub categories: Option<Rc<Vec<Category>>>,
    #[prop_or_default]
    pub category: Option<String>,
    #[prop_or_default]
    pub on_category: Callback<Option<String>>,
    #[prop_or_default]
    pub class: Classes,
}

/// Category dropdown plus search box. Keystrokes go straight to `on_search`;
/// debouncing happens in the list hook.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_input = {
        let on_search = props.on_search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                on_search.emit(input.value());
            }
        })
    };

    let clear = {
        let on_search = props.on_search.clone();
        Callback::from(move |_| on_search.emit(String::new()))
    };

    let category_select = props.categories.as_ref().map(|categories| {
        let onchange = {
            let on_category = props.on_category.clone();
            Callback::from(move |event: Event| {
                if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                    let value = select.value();
                    on_category.emit((!value.is_empty()).then_some(value));
                }
            })
        };
        let selected = props.category.clone().unwrap_or_default();

        html! {
            <select
                class="h-10 min-w-[10rem] rounded-md border border-[var(--border)] bg-[var(--surface)] px-3 text-sm text-[var(--text)]"
                aria-label={t::SELECT_CATEGORY}
                {onchange}
            >
                <option value="" selected={selected.is_empty()}>{ t::ALL_CATEGORIES }</option>
                { for categories.iter().map(|category| html! {
                    <option
                        key={category.id.clone()}
                        value={category.id.clone()}
                        selected={category.id == selected}
                    >
                        { category.name.clone() }
                    </option>
                }) }
            </select>
        }
    });

    html! {
        <div class={classes!("flex", "flex-wrap", "items-center", "gap-3", props.class.clone())}>
            { for category_select }
            <div class="relative min-w-[14rem] flex-1">
                <i class="fas fa-magnifying-glass pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-sm text-[var(--text-muted)]" aria-hidden="true"></i>
                <input
                    type="search"
                    class="h-10 w-full rounded-md border border-[var(--border)] bg-[var(--surface)] pl-9 pr-9 text-sm text-[var(--text)] focus:border-[var(--primary)] focus:outline-none"
                    placeholder={props.placeholder.clone()}
                    value={props.search.clone()}
                    oninput={on_input}
                />
                {
                    if props.search.is_empty() {
                        Html::default()
                    } else {
                        html! {
                            <button
                                type="button"
                                class="absolute right-2 top-1/2 -translate-y-1/2 px-1 text-[var(--text-muted)] hover:text-[var(--text)]"
                                aria-label={t::CLEAR_SEARCH_ARIA}
                                onclick={clear}
                            >
                                {"×"}
                            </button>
                        }
                    }
                }
            </div>
        </div>
    }
}
