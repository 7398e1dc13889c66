use common::types::ValidationMessages;
use models::client::ClientFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::{self, Integer, Text};

/// Body of create/update requests. Every field is optional at the type level
/// so that missing values surface as `required` violations, and text fields
/// accept any JSON so that wrong types surface as `string` violations.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientInput {
    pub name: Option<Text>,
    pub email: Option<Text>,
    pub phone: Option<Text>,
    pub address: Option<Text>,
}

/// Declarative rules over the string view of a [`ClientInput`].
#[derive(Validate)]
struct ClientRules {
    #[validate(required, length(max = 255))]
    name: Option<String>,
    #[validate(required, email, length(max = 255))]
    email: Option<String>,
    #[validate(length(max = 10))]
    phone: Option<String>,
    #[validate(length(max = 100))]
    address: Option<String>,
}

impl ClientInput {
    /// Rule declaration order, used to order reported fields.
    pub const FIELDS: &'static [&'static str] = &["name", "email", "phone", "address"];

    pub fn normalized(self) -> Self {
        Self {
            name: validation::normalize_text(self.name),
            email: validation::normalize_text(self.email),
            phone: validation::normalize_text(self.phone),
            address: validation::normalize_text(self.address),
        }
    }

    /// Email as a string, when it is one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_ref().and_then(Text::as_str)
    }

    /// Declarative rules only; `unique` needs the store and is checked by the manager.
    pub fn check(&self) -> ValidationMessages {
        let rules = ClientRules {
            name: validation::text_value(&self.name),
            email: validation::text_value(&self.email),
            phone: validation::text_value(&self.phone),
            address: validation::text_value(&self.address),
        };
        let mut messages = match rules.validate() {
            Ok(()) => ValidationMessages::new(),
            Err(e) => validation::collect(&e, Self::FIELDS),
        };
        validation::reject_non_text(&mut messages, "name", self.name.as_ref());
        validation::reject_non_text(&mut messages, "email", self.email.as_ref());
        validation::reject_non_text(&mut messages, "phone", self.phone.as_ref());
        validation::reject_non_text(&mut messages, "address", self.address.as_ref());
        validation::ordered(messages, Self::FIELDS)
    }

    pub(crate) fn into_fields(self) -> Result<ClientFields, ServiceError> {
        let name = self.name.and_then(Text::into_string);
        let email = self.email.and_then(Text::into_string);
        let mut missing = ValidationMessages::new();
        if name.is_none() { validation::push(&mut missing, "name", "required"); }
        if email.is_none() { validation::push(&mut missing, "email", "required"); }
        match (name, email) {
            (Some(name), Some(email)) => Ok(ClientFields {
                name,
                email,
                phone: self.phone.and_then(Text::into_string),
                address: self.address.and_then(Text::into_string),
            }),
            _ => Err(ServiceError::Validation(missing)),
        }
    }
}

/// Body of attach/detach requests.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AssociationInput {
    pub client_id: Option<Integer>,
    pub service_id: Option<Integer>,
}

impl AssociationInput {
    pub fn new(client_id: i32, service_id: i32) -> Self {
        Self {
            client_id: Some(Integer::from(i64::from(client_id))),
            service_id: Some(Integer::from(i64::from(service_id))),
        }
    }

    /// Both ids, when both are present and well formed.
    pub fn ids(&self) -> Option<(i32, i32)> {
        let client_id = self.client_id.as_ref().and_then(Integer::as_i32)?;
        let service_id = self.service_id.as_ref().and_then(Integer::as_i32)?;
        Some((client_id, service_id))
    }
}
