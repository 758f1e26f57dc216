//! The registration record and per-field metadata.
//!
//! DESIGN
//! ======
//! `RegistrationRecord` is the exact JSON body posted to the webhook, so its
//! serde attributes are the wire schema. `Field` names the nine text inputs
//! and carries what the renderer and validator both need to know about them.

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

use serde::{Deserialize, Serialize};

/// One visitor's registration, held in memory for the page session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub house_number: String,
    pub neighborhood: String,
    pub city: String,
    pub postal_code: String,
    pub state: String,
    pub birth_date: String,
    pub attends_church: bool,
}

impl RegistrationRecord {
    /// Borrow the current value of a text field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Street => &self.street,
            Field::HouseNumber => &self.house_number,
            Field::Neighborhood => &self.neighborhood,
            Field::City => &self.city,
            Field::PostalCode => &self.postal_code,
            Field::State => &self.state,
            Field::BirthDate => &self.birth_date,
        }
    }

    /// Overwrite a text field. No masking happens here; see
    /// [`crate::RegistrationForm::set_text`] for the input path.
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Street => &mut self.street,
            Field::HouseNumber => &mut self.house_number,
            Field::Neighborhood => &mut self.neighborhood,
            Field::City => &mut self.city,
            Field::PostalCode => &mut self.postal_code,
            Field::State => &mut self.state,
            Field::BirthDate => &mut self.birth_date,
        };
        *slot = value;
    }
}

/// HTML `type` attribute of a rendered input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Number,
}

impl InputKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Tel => "tel",
            Self::Number => "number",
        }
    }
}

/// The text-valued fields of [`RegistrationRecord`].
///
/// The church-attendance checkbox is not a `Field`: it is a boolean and is
/// never required.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Street,
    HouseNumber,
    Neighborhood,
    City,
    PostalCode,
    State,
    BirthDate,
}

/// Wire key of the checkbox, used by DOM change dispatch.
pub const ATTENDS_CHURCH_KEY: &str = "attendsChurch";

impl Field {
    /// All fields in render order.
    pub const ALL: [Self; 9] = [
        Self::Name,
        Self::Phone,
        Self::Street,
        Self::HouseNumber,
        Self::Neighborhood,
        Self::PostalCode,
        Self::City,
        Self::State,
        Self::BirthDate,
    ];

    /// JSON key, also used as the input's `name` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Street => "street",
            Self::HouseNumber => "houseNumber",
            Self::Neighborhood => "neighborhood",
            Self::City => "city",
            Self::PostalCode => "postalCode",
            Self::State => "state",
            Self::BirthDate => "birthDate",
        }
    }

    /// Reverse of [`Field::key`].
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    #[must_use]
    pub fn input_kind(self) -> InputKind {
        match self {
            Self::Phone => InputKind::Tel,
            Self::HouseNumber | Self::PostalCode => InputKind::Number,
            _ => InputKind::Text,
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Digite seu nome completo",
            Self::Phone => "(11) 99999-9999",
            Self::Street => "Rua",
            Self::HouseNumber => "Nº",
            Self::Neighborhood => "Bairro",
            Self::City => "Cidade",
            Self::PostalCode => "CEP",
            Self::State => "Estado",
            Self::BirthDate => "dd/mm/aaaa",
        }
    }
}
