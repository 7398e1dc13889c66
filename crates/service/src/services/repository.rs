use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use models::service::{self, ServiceFields};

use crate::errors::ServiceError;

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<service::Model>, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<service::Model>, ServiceError>;
    async fn create(&self, fields: ServiceFields) -> Result<service::Model, ServiceError>;
    async fn update(&self, existing: service::Model, fields: ServiceFields) -> Result<service::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

pub struct SeaOrmServiceRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ServiceRepository for SeaOrmServiceRepository {
    async fn list(&self) -> Result<Vec<service::Model>, ServiceError> {
        Ok(service::list(&self.db).await?)
    }

    async fn get(&self, id: i32) -> Result<Option<service::Model>, ServiceError> {
        Ok(service::find(&self.db, id).await?)
    }

    async fn create(&self, fields: ServiceFields) -> Result<service::Model, ServiceError> {
        Ok(service::create(&self.db, fields).await?)
    }

    async fn update(&self, existing: service::Model, fields: ServiceFields) -> Result<service::Model, ServiceError> {
        Ok(service::update(&self.db, existing, fields).await?)
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(service::hard_delete(&self.db, id).await?)
    }
}
