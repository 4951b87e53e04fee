use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-4 px-4 text-center">
            <h2 class="text-2xl font-semibold text-[var(--text)]">{ t::TITLE }</h2>
            <p class="text-[var(--text-muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Root} classes={classes!("text-[var(--primary)]", "underline")}>
                { t::HOME }
            </Link<Route>>
        </main>
    }
}
