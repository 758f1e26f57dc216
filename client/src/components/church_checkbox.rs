//! "Do you attend an evangelical church?" checkbox.

#[cfg(test)]
#[path = "church_checkbox_test.rs"]
mod church_checkbox_test;

use leptos::prelude::*;
use registration::{ATTENDS_CHURCH_KEY, RegistrationForm};

#[component]
pub fn ChurchCheckbox() -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationForm>>();

    view! {
        <div class="church">
            <label class="church__label">
                <input
                    class="church__box"
                    type="checkbox"
                    name=ATTENDS_CHURCH_KEY
                    prop:checked=move || form.with(|f| f.record().attends_church)
                    on:change=move |ev| {
                        let checked = event_target_checked(&ev);
                        form.update(|f| {
                            f.update(ATTENDS_CHURCH_KEY, "", checked);
                        });
                    }
                />
                <span class="church__text">"Você frequenta uma Igreja Evangélica?"</span>
            </label>
        </div>
    }
}
