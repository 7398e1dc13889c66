//! Service layer providing the client and service managers on top of models.
//! - Separates business rules (validation, existence checks) from data access.
//! - Each manager receives its repository at construction.
//! - Errors are explicit `ServiceError` values; nothing here panics on bad input.

pub mod errors;
pub mod validation;
pub mod clients;
pub mod services;
#[cfg(test)]
pub mod test_support;
