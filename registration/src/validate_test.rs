use super::*;

fn complete() -> RegistrationRecord {
    RegistrationRecord {
        name: "João".to_owned(),
        phone: "11999999999".to_owned(),
        street: "Av. Brasil".to_owned(),
        house_number: "100".to_owned(),
        neighborhood: "Jardim".to_owned(),
        city: "Santos".to_owned(),
        postal_code: "11000000".to_owned(),
        state: "SP".to_owned(),
        birth_date: "31/12/2000".to_owned(),
        attends_church: false,
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn complete_record_passes() {
    assert_eq!(validate(&complete()), Ok(()));
}

#[test]
fn each_empty_field_is_reported() {
    for field in Field::ALL {
        let mut record = complete();
        record.set(field, String::new());
        assert_eq!(validate(&record), Err(ValidationError::Missing(field)));
    }
}

#[test]
fn first_missing_field_in_render_order_wins() {
    let mut record = complete();
    record.city.clear();
    record.name.clear();
    assert_eq!(validate(&record), Err(ValidationError::Missing(Field::Name)));
}

#[test]
fn whitespace_counts_as_present() {
    let mut record = complete();
    record.neighborhood = "  ".to_owned();
    assert_eq!(validate(&record), Ok(()));
}

#[test]
fn unchecked_checkbox_is_not_required() {
    let record = complete();
    assert!(!record.attends_church);
    assert!(validate(&record).is_ok());
}

// =============================================================
// Birth-date pattern
// =============================================================

#[test]
fn partial_birth_date_is_rejected() {
    let mut record = complete();
    record.birth_date = "01/02/19".to_owned();
    assert_eq!(
        validate(&record),
        Err(ValidationError::BirthDatePattern("01/02/19".to_owned()))
    );
}

#[test]
fn full_birth_date_pattern() {
    assert!(is_full_birth_date("01/02/1990"));
    assert!(!is_full_birth_date("01-02-1990"));
    assert!(!is_full_birth_date("1/02/1990"));
    assert!(!is_full_birth_date("01/02/19901"));
    assert!(!is_full_birth_date("ab/cd/efgh"));
    assert!(!is_full_birth_date(""));
}

#[test]
fn pattern_does_not_check_calendar_validity() {
    // The native pattern is purely lexical.
    assert!(is_full_birth_date("99/99/0000"));
}

#[test]
fn error_messages_name_the_wire_key() {
    assert_eq!(
        ValidationError::Missing(Field::PostalCode).to_string(),
        "required field `postalCode` is empty"
    );
}
