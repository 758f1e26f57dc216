//! Root application component and SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use registration::RegistrationForm;

use crate::pages::register::RegisterPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the form state as context. There is a single page, so no router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let form = RwSignal::new(RegistrationForm::new());
    provide_context(form);

    view! {
        <Stylesheet id="leptos" href="/pkg/boas-vindas.css"/>
        <Title text="Cadastro Boas Vindas"/>

        <RegisterPage/>
    }
}
