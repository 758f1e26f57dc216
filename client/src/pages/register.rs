//! Registration page: header, status banner, the form and its submit flow.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use registration::{Field, RegistrationForm, RegistrationRecord, SubmitError};

use crate::components::church_checkbox::ChurchCheckbox;
use crate::components::status_banner::StatusBanner;
use crate::components::submit_button::SubmitButton;
use crate::components::text_field::TextField;

/// Move the form into `Submitting` and return the snapshot to send.
///
/// Returns `None` when the form refused (already busy, or invalid); the
/// reason is logged.
pub(crate) fn start_submission(form: RwSignal<RegistrationForm>) -> Option<RegistrationRecord> {
    match form.try_update(RegistrationForm::begin_submit)? {
        Ok(snapshot) => Some(snapshot),
        Err(e) => {
            leptos::logging::warn!("submission not started: {e}");
            None
        }
    }
}

/// Apply a finished request to the form, logging failures.
pub(crate) fn finish_submission(form: RwSignal<RegistrationForm>, outcome: &Result<(), SubmitError>) {
    if let Err(e) = outcome {
        leptos::logging::error!("registration submit failed: {e}");
    }
    form.update(|f| f.settle(outcome));
}

#[cfg(feature = "hydrate")]
fn dispatch(form: RwSignal<RegistrationForm>, snapshot: RegistrationRecord) {
    leptos::task::spawn_local(async move {
        let outcome = registration::deliver(&crate::net::webhook::BrowserWebhook, &snapshot).await;
        finish_submission(form, &outcome);
    });
}

#[cfg(not(feature = "hydrate"))]
fn dispatch(form: RwSignal<RegistrationForm>, _snapshot: RegistrationRecord) {
    finish_submission(form, &Err(SubmitError::Transport("not available on server".to_owned())));
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationForm>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(snapshot) = start_submission(form) {
            dispatch(form, snapshot);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <header class="register-header">
                    <p class="register-header__brand">"Igreja Família"</p>
                    <p class="register-header__title">"Cadastro Boas Vindas"</p>
                </header>

                <StatusBanner/>

                <form class="register-form" on:submit=on_submit>
                    <div class="field">
                        <label class="field__label">
                            <span class="field__icon field__icon--user"></span>
                            "Nome Completo"
                        </label>
                        <TextField field=Field::Name/>
                    </div>

                    <div class="field">
                        <label class="field__label">
                            <span class="field__icon field__icon--phone"></span>
                            "Celular"
                        </label>
                        <TextField field=Field::Phone/>
                    </div>

                    <fieldset class="address">
                        <h3 class="field__label">
                            <span class="field__icon field__icon--pin"></span>
                            "Endereço"
                        </h3>
                        <div class="address__row address__row--street">
                            <TextField field=Field::Street/>
                            <TextField field=Field::HouseNumber/>
                        </div>
                        <TextField field=Field::Neighborhood/>
                        <TextField field=Field::PostalCode/>
                        <div class="address__row">
                            <TextField field=Field::City/>
                            <TextField field=Field::State/>
                        </div>
                    </fieldset>

                    <div class="field">
                        <label class="field__label">
                            <span class="field__icon field__icon--calendar"></span>
                            "Data de Nascimento"
                        </label>
                        <TextField field=Field::BirthDate/>
                    </div>

                    <ChurchCheckbox/>
                    <SubmitButton/>
                </form>

                <footer class="register-footer">
                    <p>"Seus dados são tratados com total segurança e privacidade"</p>
                </footer>
            </div>
        </div>
    }
}
