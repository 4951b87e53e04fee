use yew::prelude::*;

use crate::i18n::current::{common, footer as t};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="mt-auto bg-blue-600/90 py-8 text-white dark:bg-blue-950">
            <div class="mx-auto flex max-w-6xl flex-col items-center justify-center gap-2 px-4 text-sm sm:flex-row sm:gap-4">
                <span class="font-semibold">{ common::BRAND_NAME }</span>
                <span>{ t::COPYRIGHT }</span>
            </div>
        </footer>
    }
}
