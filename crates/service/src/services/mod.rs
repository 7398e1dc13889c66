mod domain;
mod manager;
mod repository;

pub use domain::ServiceInput;
pub use manager::ServiceManager;
pub use repository::{SeaOrmServiceRepository, ServiceRepository};
