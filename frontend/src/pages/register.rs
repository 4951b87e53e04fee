use blogdesk_shared::{
    forms::{Field, FieldErrors, RegisterForm},
    session::Role,
};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        field::{input_class, FieldError},
        layout::AuthLayout,
    },
    config::REDIRECT_DELAY_MS,
    context::use_notifier,
    i18n::current::{login as login_text, register as t},
    router::Route,
};

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let navigator = use_navigator();
    let notifier = use_notifier();

    let form = use_state(RegisterForm::default);
    let errors = use_state(FieldErrors::default);
    let submitting = use_state(|| false);
    let redirect = use_mut_ref(|| None::<Timeout>);

    let on_username = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                form.set(RegisterForm {
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
                form.set(RegisterForm {
                    password: input.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Password));
            }
        })
    };

    let on_role = {
        let form = form.clone();
        let errors = errors.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                form.set(RegisterForm {
                    role: select.value(),
                    ..(*form).clone()
                });
                errors.set(errors.without(Field::Role));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
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
            submitting.set(true);

            let navigator = navigator.clone();
            let notifier = notifier.clone();
            let submitting = submitting.clone();
            let redirect = redirect.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::register(&request).await {
                    Ok(()) => {
                        notifier.success(t::SUCCESS);
                        let pending = Timeout::new(REDIRECT_DELAY_MS, move || {
                            if let Some(navigator) = navigator.as_ref() {
                                navigator.push(&Route::Login);
                            }
                        });
                        *redirect.borrow_mut() = Some(pending);
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("register failed: {}", err).into());
                        submitting.set(false);
                        notifier.error(err.server_message().unwrap_or(t::FAILED).to_string());
                    },
                }
            });
        })
    };

    let selected_role = form.role.clone();

    html! {
        <AuthLayout>
            <form class="space-y-5" {onsubmit} novalidate=true>
                <h1 class="sr-only">{ t::TITLE }</h1>
                <div>
                    <label for="username" class="mb-1 block text-sm font-medium text-[var(--text)]">{ login_text::USERNAME }</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        class={input_class(errors.contains(Field::Username))}
                        placeholder={login_text::USERNAME_PLACEHOLDER}
                        value={form.username.clone()}
                        oninput={on_username}
                    />
                    <FieldError errors={(*errors).clone()} field={Field::Username} />
                </div>
                <div>
                    <label for="password" class="mb-1 block text-sm font-medium text-[var(--text)]">{ login_text::PASSWORD }</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="new-password"
                        class={input_class(errors.contains(Field::Password))}
                        placeholder={login_text::PASSWORD_PLACEHOLDER}
                        value={form.password.clone()}
                        oninput={on_password}
                    />
                    <FieldError errors={(*errors).clone()} field={Field::Password} />
                </div>
                <div>
                    <label for="role" class="mb-1 block text-sm font-medium text-[var(--text)]">{ t::ROLE }</label>
                    <select id="role" class={input_class(errors.contains(Field::Role))} onchange={on_role}>
                        <option value="" selected={selected_role.is_empty()} disabled=true>{ t::SELECT_ROLE }</option>
                        { for [Role::User, Role::Admin].into_iter().map(|role| html! {
                            <option value={role.as_str()} selected={selected_role == role.as_str()}>
                                { role.as_str() }
                            </option>
                        }) }
                    </select>
                    <FieldError errors={(*errors).clone()} field={Field::Role} />
                </div>
                <button
                    type="submit"
                    class="w-full rounded-md bg-[var(--primary)] py-2.5 text-sm font-semibold text-white hover:opacity-90 disabled:opacity-60"
                    disabled={*submitting}
                >
                    { if *submitting { t::SUBMITTING } else { t::SUBMIT } }
                </button>
                <p class="text-center text-sm text-[var(--text-muted)]">
                    { t::HAVE_ACCOUNT }{" "}
                    <Link<Route> to={Route::Login} classes={classes!("font-medium", "text-[var(--primary)]", "underline")}>
                        { t::LOGIN_LINK }
                    </Link<Route>>
                </p>
            </form>
        </AuthLayout>
    }
}
