use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::clients::{ClientManager, SeaOrmClientRepository};
use service::services::{SeaOrmServiceRepository, ServiceManager};

/// Shared handler state: one manager per resource, both over the same pool.
#[derive(Clone)]
pub struct AppState {
    pub clients: Arc<ClientManager<SeaOrmClientRepository>>,
    pub services: Arc<ServiceManager<SeaOrmServiceRepository>>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let clients = ClientManager::new(Arc::new(SeaOrmClientRepository { db: db.clone() }));
        let services = ServiceManager::new(Arc::new(SeaOrmServiceRepository { db }));
        Self { clients: Arc::new(clients), services: Arc::new(services) }
    }
}
