//! Client Manager: CRUD over clients plus attach/detach of services.

pub mod domain;
pub mod repository;
pub mod manager;

pub use domain::{AssociationInput, ClientInput};
pub use manager::ClientManager;
pub use repository::{ClientRepository, SeaOrmClientRepository};
