use super::*;

#[test]
fn label_toggles_with_busy_flag() {
    assert_eq!(label(false), "Fazer Cadastro");
    assert_eq!(label(true), "Enviando...");
}

#[test]
fn busy_only_while_submitting() {
    let mut form = RegistrationForm::new();
    for field in registration::Field::ALL {
        form.set_text(field, "29021996");
    }
    assert_eq!(label(form.is_busy()), IDLE_LABEL);

    form.begin_submit().unwrap();
    assert_eq!(label(form.is_busy()), BUSY_LABEL);

    form.settle(&Err(registration::SubmitError::Transport("offline".to_owned())));
    assert_eq!(label(form.is_busy()), IDLE_LABEL);
}

#[cfg(feature = "ssr")]
#[test]
fn rendered_button_is_disabled_only_while_busy() {
    let owner = Owner::new();
    owner.set();
    let form = RwSignal::new(RegistrationForm::new());
    form.update(|f| {
        for field in registration::Field::ALL {
            f.set_text(field, "29021996");
        }
        f.begin_submit().unwrap();
    });
    provide_context(form);

    let busy_html = view! { <SubmitButton/> }.to_html();
    assert!(busy_html.contains("disabled"), "{busy_html}");
    assert!(busy_html.contains(BUSY_LABEL));

    form.update(|f| f.settle(&Ok(())));
    let idle_html = view! { <SubmitButton/> }.to_html();
    assert!(!idle_html.contains("disabled"), "{idle_html}");
    assert!(idle_html.contains(IDLE_LABEL));
}
