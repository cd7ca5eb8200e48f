use leptos::prelude::*;

/// Native date picker bound to a yyyy-mm-dd string signal
/// Browser automatically displays dates in locale format (dd.mm.yyyy for RU locale)
#[component]
pub fn DateInput(
    value: RwSignal<String>,
    /// Earliest selectable date, yyyy-mm-dd
    #[prop(optional, into)]
    min: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    #[prop(optional)] id: Option<&'static str>,
) -> impl IntoView {
    view! {
        <input
            type="date"
            class="date-input"
            id=id
            min=min
            prop:value=move || value.get()
            prop:disabled=move || disabled.get()
            on:input=move |ev| value.set(event_target_value(&ev))
        />
    }
}
