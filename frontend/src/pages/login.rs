use blogdesk_shared::{
    forms::{Field, FieldErrors, LoginForm},
    guard::Destination,
    session::SESSION_DAYS,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api, browser,
    components::{
        field::{input_class, FieldError},
        layout::AuthLayout,
    },
    context::{sign_in, use_notifier, SessionContext},
    i18n::current::login as t,
    router::Route,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session_ctx = use_context::<SessionContext>();
    let navigator = use_navigator();
    let notifier = use_notifier();

    let form = use_state(LoginForm::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let show_password = use_state(|| false);
    let failure = use_state(|| None::<String>);

    let on_username = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(LoginForm {
                    username: input.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Username));
            }
        })
    };

    let on_password = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(LoginForm {
                    password: input.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Password));
            }
        })
    };

    let toggle_password = {
        let show_password = show_password.clone();
        Callback::from(move |_| show_password.set(!*show_password))
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let failure = failure.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            let request = match form.validate() {
                Ok(request) => request,
                Err(field_errors) => {
                    errors.set(field_errors);
                    return;
                },
            };
            errors.set(FieldErrors::default());
            failure.set(None);
            submitting.set(true);

            let session_ctx = session_ctx.clone();
            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            let failure = failure.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&request).await {
                    Ok(session) => {
                        let home = session
                            .role()
                            .map(|role| Route::from(Destination::home_for(role)))
                            .unwrap_or(Route::Root);
                        match session_ctx.as_ref() {
                            Some(ctx) => sign_in(ctx, session),
                            None => browser::store_session(&session, SESSION_DAYS),
                        }
                        submitting.set(false);
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&home);
                        }
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("login failed: {}", err).into());
                        submitting.set(false);
                        failure.set(Some(t::FAILED.to_string()));
                        notifier.error(t::FAILED);
                    },
                }
            });
        })
    };

    html! {
        <AuthLayout>
            <form class="space-y-5" {onsubmit} novalidate=true>
                <h1 class="sr-only">{ t::TITLE }</h1>
                {
                    match (*failure).clone() {
                        Some(message) => html! {
                            <p class="rounded-md bg-red-50 px-3 py-2 text-sm text-red-700 dark:bg-red-950 dark:text-red-200" role="alert">
                                { message }
                            </p>
                        },
                        None => Html::default(),
                    }
                }
                <div>
                    <label for="username" class="mb-1 block text-sm font-medium text-[var(--text)]">{ t::USERNAME }</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        class={input_class(errors.contains(Field::Username))}
                        placeholder={t::USERNAME_PLACEHOLDER}
                        value={form.username.clone()}
                        oninput={on_username}
                    />
                    <FieldError errors={(*errors).clone()} field={Field::Username} />
                </div>
                <div>
                    <label for="password" class="mb-1 block text-sm font-medium text-[var(--text)]">{ t::PASSWORD }</label>
                    <div class="relative">
                        <input
                            id="password"
                            type={if *show_password { "text" } else { "password" }}
                            autocomplete="current-password"
                            class={classes!(input_class(errors.contains(Field::Password)), "pr-10")}
                            placeholder={t::PASSWORD_PLACEHOLDER}
                            value={form.password.clone()}
                            oninput={on_password}
                        />
                        <button
                            type="button"
                            class="absolute right-2 top-1/2 -translate-y-1/2 px-1 text-[var(--text-muted)]"
                            aria-label={if *show_password { t::HIDE_PASSWORD } else { t::SHOW_PASSWORD }}
                            onclick={toggle_password}
                        >
                            <i class={classes!("far", if *show_password { "fa-eye-slash" } else { "fa-eye" })} aria-hidden="true"></i>
                        </button>
                    </div>
                    <FieldError errors={(*errors).clone()} field={Field::Password} />
                </div>
                <button
                    type="submit"
                    class="w-full rounded-md bg-[var(--primary)] py-2.5 text-sm font-semibold text-white hover:opacity-90 disabled:opacity-60"
                    disabled={*submitting}
                >
                    { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                </button>
                <p class="text-center text-sm text-[var(--text-muted)]">
                    { t::NO_ACCOUNT }{" "}
                    <Link<Route> to={Route::Register} classes={classes!("font-medium", "text-[var(--primary)]", "underline")}>
                        { t::REGISTER_LINK }
                    </Link<Route>>
                </p>
            </form>
        </AuthLayout>
    }
}
