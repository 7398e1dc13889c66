use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::client::{self, ClientFields, ClientWithServices};
use models::{client_service, service};

use crate::errors::ServiceError;

/// Persistence operations the client manager relies on.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ClientWithServices>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<client::Model>, ServiceError>;
    async fn get_with_services(&self, id: i32) -> Result<Option<ClientWithServices>, ServiceError>;
    async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, ServiceError>;
    async fn create(&self, fields: ClientFields) -> Result<client::Model, ServiceError>;
    async fn update(&self, existing: client::Model, fields: ClientFields) -> Result<client::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
    async fn service_exists(&self, id: i32) -> Result<bool, ServiceError>;
    async fn attach(&self, client_id: i32, service_id: i32) -> Result<bool, ServiceError>;
    async fn detach(&self, client_id: i32, service_id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn list(&self) -> Result<Vec<ClientWithServices>, ServiceError> {
        Ok(client::all_with_services(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<client::Model>, ServiceError> {
        Ok(client::find(&self.db, id).await?)
    }

    async fn get_with_services(&self, id: i32) -> Result<Option<ClientWithServices>, ServiceError> {
        Ok(client::find_with_services(&self.db, id).await?)
    }

    async fn email_taken(&self, email: &str, except_id: Option<i32>) -> Result<bool, ServiceError> {
        Ok(client::email_taken(&self.db, email, except_id).await?)
    }

    async fn create(&self, fields: ClientFields) -> Result<client::Model, ServiceError> {
        Ok(client::create(&self.db, fields).await?)
    }

    async fn update(&self, existing: client::Model, fields: ClientFields) -> Result<client::Model, ServiceError> {
        Ok(client::update(&self.db, existing, fields).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(client::hard_delete(&self.db, id).await?)
    }

    async fn service_exists(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(service::find(&self.db, id).await?.is_some())
    }

    async fn attach(&self, client_id: i32, service_id: i32) -> Result<bool, ServiceError> {
        Ok(client_service::attach(&self.db, client_id, service_id).await?)
    }

    async fn detach(&self, client_id: i32, service_id: i32) -> Result<bool, ServiceError> {
        Ok(client_service::detach(&self.db, client_id, service_id).await?)
    }
}
