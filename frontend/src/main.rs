//! Blog admin and reader single-page app.

mod api;
mod browser;
mod components;
mod config;
mod context;
/// Data-loading hooks shared by pages.
pub mod hooks;
mod i18n;
mod pages;
mod router;
mod utils;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <context::AppStateProvider>
            <router::AppRouter />
        </context::AppStateProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
