use leptos::prelude::*;

/// Inline validation message under a form field; renders nothing while `None`
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|m| view! { <div class="form__error">{m}</div> })
    }
}
