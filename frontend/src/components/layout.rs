use blogdesk_shared::text::initial;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{footer::Footer, navbar::Navbar, sidebar::Sidebar, theme_toggle::ThemeToggle},
    hooks::{use_profile, use_scroll_to_top},
    i18n::current::common,
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    use_scroll_to_top();
    let username = use_profile().map(|p| p.username).unwrap_or_default();

    html! {
        <div class="flex min-h-screen bg-[var(--bg)]">
            <Sidebar />
            <div class="flex min-w-0 flex-1 flex-col">
                <header class="flex h-16 items-center justify-between border-b border-[var(--border)] bg-[var(--surface)] px-6">
                    <h1 class="text-xl font-semibold text-[var(--text)]">{ props.title.clone() }</h1>
                    <div class="flex items-center gap-3">
                        <ThemeToggle />
                        <Link<Route> to={Route::AdminProfile} classes={classes!("flex", "items-center", "gap-2")}>
                            <span class="inline-flex h-9 w-9 items-center justify-center rounded-full bg-blue-200 font-semibold text-blue-900">
                                { initial(&username) }
                            </span>
                            <span class="hidden text-sm font-medium text-[var(--text)] underline sm:inline">{ username.clone() }</span>
                        </Link<Route>>
                    </div>
                </header>
                <main class="flex-1 p-6">
                    { props.children.clone() }
                </main>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct UserLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(UserLayout)]
pub fn user_layout(props: &UserLayoutProps) -> Html {
    use_scroll_to_top();

    html! {
        <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
            <Navbar />
            <main class="flex-1">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthLayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Centered card used by the login and register screens.
#[function_component(AuthLayout)]
pub fn auth_layout(props: &AuthLayoutProps) -> Html {
    html! {
        <div class="flex min-h-screen items-center justify-center bg-[var(--bg)] px-4">
            <div class="absolute right-4 top-4">
                <ThemeToggle />
            </div>
            <div class="w-full max-w-sm rounded-xl border border-[var(--border)] bg-[var(--surface)] p-8 shadow-sm">
                <p class="text-center text-2xl font-bold text-[var(--primary)]">{ common::BRAND_NAME }</p>
                <p class="mb-6 text-center text-xs text-[var(--text-muted)]">{ common::TAGLINE }</p>
                { props.children.clone() }
            </div>
        </div>
    }
}
