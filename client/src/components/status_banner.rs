//! Success/failure banner above the form.

#[cfg(test)]
#[path = "status_banner_test.rs"]
mod status_banner_test;

use leptos::prelude::*;
use registration::{RegistrationForm, SubmitStatus};

/// CSS class for the banner in `status`, or `None` when nothing is shown.
pub(crate) fn banner_class(status: SubmitStatus) -> Option<&'static str> {
    match status {
        SubmitStatus::Success => Some("banner banner--success"),
        SubmitStatus::Failure => Some("banner banner--failure"),
        SubmitStatus::Idle | SubmitStatus::Submitting => None,
    }
}

#[component]
pub fn StatusBanner() -> impl IntoView {
    let form = expect_context::<RwSignal<RegistrationForm>>();

    let class = move || form.with(|f| banner_class(f.status()).unwrap_or_default());
    let message = move || form.with(|f| f.message().unwrap_or_default());

    view! {
        <Show when=move || form.with(|f| f.message().is_some())>
            <div class=class role="status">{message}</div>
        </Show>
    }
}
