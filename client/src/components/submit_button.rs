//! Submit control: disabled with a spinner while a request is in flight.

#[cfg(test)]
#[path = "submit_button_test.rs"]
mod submit_button_test;

use leptos::prelude::*;
use registration::RegistrationForm;

pub(crate) const IDLE_LABEL: &str = "Fazer Cadastro";
pub(crate) const BUSY_LABEL: &str = "Enviando...";

pub(crate) fn label(busy: bool) -> &'static str {
    if busy { BUSY_LABEL } else { IDLE_LABEL }
}

#[component]
pub fn SubmitButton() -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationForm>>();
    let busy = move || form.with(RegistrationForm::is_busy);

    view! {
        <button class="submit" type="submit" disabled=busy>
            <Show
                when=busy
                fallback=|| view! { <span class="submit__icon submit__icon--send"></span> }
            >
                <span class="submit__spinner"></span>
            </Show>
            <span>{move || label(busy())}</span>
        </button>
    }
}
