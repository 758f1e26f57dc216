//! One required text input bound to a record field.

#[cfg(test)]
#[path = "text_field_test.rs"]
mod text_field_test;

use leptos::prelude::*;
use registration::{Field, RegistrationForm, validate::BIRTH_DATE_MAX_LEN};

/// Native `pattern` for the birth-date input.
pub const BIRTH_DATE_PATTERN: &str = r"\d{2}/\d{2}/\d{4}";

/// `pattern` attribute for `field`, if it has one.
pub(crate) fn pattern_for(field: Field) -> Option<&'static str> {
    (field == Field::BirthDate).then_some(BIRTH_DATE_PATTERN)
}

/// `maxlength` attribute for `field`, if it has one.
pub(crate) fn max_len_for(field: Field) -> Option<usize> {
    (field == Field::BirthDate).then_some(BIRTH_DATE_MAX_LEN)
}

/// Input for `field`. The value shown is always the stored (masked) value,
/// so a rejected keystroke is overwritten on the next render.
#[component]
pub fn TextField(field: Field) -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationForm>>();

    view! {
        <input
            class="field__input"
            type=field.input_kind().as_str()
            name=field.key()
            placeholder=field.placeholder()
            pattern=pattern_for(field)
            maxlength=max_len_for(field).map(|n| n.to_string())
            required=true
            prop:value=move || form.with(|f| f.record().get(field).to_owned())
            on:input=move |ev| {
                let raw = event_target_value(&ev);
                form.update(|f| {
                    f.update(field.key(), &raw, false);
                });
            }
        />
    }
}
