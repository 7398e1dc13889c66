use common::types::ValidationMessages;
use models::service::ServiceFields;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::ServiceError;
use crate::validation::{self, validate_integer, Integer, Text};

/// Body of create/update requests for a service.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ServiceInput {
    pub name: Option<Text>,
    pub description: Option<Text>,
    pub price: Option<Integer>,
}

#[derive(Validate)]
struct ServiceRules {
    #[validate(required, length(max = 150))]
    name: Option<String>,
    #[validate(required, custom(function = "validate_integer"))]
    price: Option<Integer>,
}

impl ServiceInput {
    pub const FIELDS: &'static [&'static str] = &["name", "description", "price"];

    pub fn normalized(self) -> Self {
        Self {
            name: validation::normalize_text(self.name),
            description: validation::normalize_text(self.description),
            price: validation::normalize_integer(self.price),
        }
    }

    pub fn check(&self) -> ValidationMessages {
        let rules = ServiceRules { name: validation::text_value(&self.name), price: self.price };
        let mut messages = match rules.validate() {
            Ok(()) => ValidationMessages::new(),
            Err(e) => validation::collect(&e, Self::FIELDS),
        };
        validation::reject_non_text(&mut messages, "name", self.name.as_ref());
        validation::reject_non_text(&mut messages, "description", self.description.as_ref());
        validation::ordered(messages, Self::FIELDS)
    }

    pub(crate) fn into_fields(self) -> Result<ServiceFields, ServiceError> {
        let name = self.name.and_then(Text::into_string);
        let price = self.price.as_ref().and_then(Integer::as_i32);
        match (name, price) {
            (Some(name), Some(price)) => Ok(ServiceFields {
                name,
                description: self.description.and_then(Text::into_string),
                price,
            }),
            (name, price) => {
                let mut missing = ValidationMessages::new();
                if name.is_none() { validation::push(&mut missing, "name", "required"); }
                if price.is_none() { validation::push(&mut missing, "price", "integer"); }
                Err(ServiceError::Validation(missing))
            }
        }
    }
}
