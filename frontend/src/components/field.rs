use blogdesk_shared::forms::{Field, FieldErrors};
use yew::prelude::*;

/// Input styling, red when the field failed validation.
pub fn input_class(invalid: bool) -> Classes {
    classes!(
        "w-full",
        "rounded-md",
        "border",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm",
        "text-[var(--text)]",
        "focus:outline-none",
        if invalid {
            "border-red-500 focus:border-red-500"
        } else {
            "border-[var(--border)] focus:border-[var(--primary)]"
        }
    )
}

#[derive(Properties, PartialEq)]
pub struct FieldErrorProps {
    pub errors: FieldErrors,
    pub field: Field,
}

#[function_component(FieldError)]
pub fn field_error(props: &FieldErrorProps) -> Html {
    match props.errors.get(props.field) {
        Some(message) => html! {
            <p class="mt-1 text-xs text-red-600" id={format!("{}-error", props.field.as_str())}>
                { message.to_string() }
            </p>
        },
        None => Html::default(),
    }
}
