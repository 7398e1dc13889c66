#![cfg(test)]
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::clients::{ClientManager, SeaOrmClientRepository};
use crate::services::{SeaOrmServiceRepository, ServiceManager};

/// Fresh migrated in-memory database per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = models::db::connect_memory().await?;
    Ok(db)
}

pub fn managers(db: &DatabaseConnection) -> (ClientManager<SeaOrmClientRepository>, ServiceManager<SeaOrmServiceRepository>) {
    let clients = ClientManager::new(Arc::new(SeaOrmClientRepository { db: db.clone() }));
    let services = ServiceManager::new(Arc::new(SeaOrmServiceRepository { db: db.clone() }));
    (clients, services)
}
