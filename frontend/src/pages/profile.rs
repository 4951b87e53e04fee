use blogdesk_shared::{text, Profile};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::current::{common, profile as t},
    router::Route,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ProfileProps {
    /// Where the back button leads; the role's home.
    pub back: Route,
}

#[derive(Clone, PartialEq)]
enum ProfileState {
    Loading,
    Loaded(Profile),
    Failed(String),
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfileProps) -> Html {
    let state = use_state(|| ProfileState::Loading);
    let reload_key = use_state(|| 0_u32);

    {
        let state = state.clone();
        use_effect_with(*reload_key, move |_| {
            state.set(ProfileState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_profile().await {
                    Ok(profile) => state.set(ProfileState::Loaded(profile)),
                    Err(err) => {
                        web_sys::console::error_1(&format!("failed to load profile: {}", err).into());
                        state.set(ProfileState::Failed(t::LOAD_FAILED.to_string()));
                    },
                }
            });
            || ()
        });
    }

    let back_label = if props.back == Route::AdminArticles {
        t::BACK_ADMIN
    } else {
        t::BACK_USER
    };

    let body = match (*state).clone() {
        ProfileState::Loading => html! {
            <LoadingSpinner size={SpinnerSize::Medium} label={AttrValue::from(common::LOADING)} />
        },
        ProfileState::Failed(message) => {
            let retry = {
                let reload_key = reload_key.clone();
                Callback::from(move |_| reload_key.set(reload_key.wrapping_add(1)))
            };
            html! { <ErrorBanner {message} on_retry={Some(retry)} /> }
        },
        ProfileState::Loaded(profile) => {
            let initial = text::initial(&profile.username);
            html! {
                <>
                    <div class="mx-auto mb-6 flex h-16 w-16 items-center justify-center rounded-full bg-blue-100 text-2xl font-semibold text-blue-900">
                        { initial }
                    </div>
                    <dl class="space-y-3 text-sm">
                        { row(t::USERNAME, profile.username.clone()) }
                        { row(t::PASSWORD, t::PASSWORD_MASK.to_string()) }
                        { row(t::ROLE, profile.role.clone()) }
                    </dl>
                </>
            }
        },
    };

    html! {
        <div class="mx-auto w-full max-w-md rounded-xl border border-[var(--border)] bg-[var(--surface)] px-6 py-8">
            <h1 class="mb-6 text-center text-xl font-semibold text-[var(--text)]">{ t::TITLE }</h1>
            { body }
            <Link<Route>
                to={props.back.clone()}
                classes={classes!("mt-8", "block", "rounded-md", "bg-[var(--primary)]", "py-2", "text-center", "text-sm", "font-medium", "text-white", "hover:opacity-90")}
            >
                { back_label }
            </Link<Route>>
        </div>
    }
}

fn row(label: &'static str, value: String) -> Html {
    html! {
        <div class="grid grid-cols-[6rem_1rem_1fr] rounded-md bg-[var(--surface-alt)] px-4 py-2">
            <dt class="font-medium text-[var(--text)]">{ label }</dt>
            <span class="text-[var(--text-muted)]">{ ":" }</span>
            <dd class="text-center text-[var(--text)]">{ value }</dd>
        </div>
    }
}
