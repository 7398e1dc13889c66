use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::service;

use super::domain::ServiceInput;
use super::repository::ServiceRepository;
use crate::errors::ServiceError;

/// CRUD over services.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use service::services::{SeaOrmServiceRepository, ServiceInput, ServiceManager};
/// # use service::validation::Integer;
/// # tokio_test::block_on(async {
/// let db = models::db::connect_memory().await.unwrap();
/// let services = ServiceManager::new(Arc::new(SeaOrmServiceRepository { db }));
/// let input = ServiceInput { name: Some("Haircut".into()), description: None, price: Some(Integer::Valid(20)) };
/// let haircut = services.create(input).await.unwrap();
/// assert_eq!(haircut.price, 20);
/// # });
/// ```
pub struct ServiceManager<R: ServiceRepository> {
    repo: Arc<R>,
}

impl<R: ServiceRepository> ServiceManager<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<service::Model>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ServiceInput) -> Result<service::Model, ServiceError> {
        let input = validated(input)?;
        let created = self.repo.create(input.into_fields()?).await?;
        info!(id = created.id, name = %created.name, "service_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<service::Model, ServiceError> {
        self.find(id).await
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ServiceInput) -> Result<service::Model, ServiceError> {
        let existing = self.find(id).await?;
        let input = validated(input)?;
        let updated = self.repo.update(existing, input.into_fields()?).await?;
        info!(id = updated.id, "service_updated");
        Ok(updated)
    }

    /// Hard delete. Join rows go with it through the cascading foreign key.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<service::Model, ServiceError> {
        let existing = self.find(id).await?;
        if !self.repo.delete(existing.id).await? {
            return Err(ServiceError::invalid_id("service"));
        }
        info!(id = existing.id, "service_deleted");
        Ok(existing)
    }

    async fn find(&self, id: i32) -> Result<service::Model, ServiceError> {
        match self.repo.get(id).await? {
            Some(found) => Ok(found),
            None => {
                warn!(id, "service_not_found");
                Err(ServiceError::invalid_id("service"))
            }
        }
    }
}

fn validated(input: ServiceInput) -> Result<ServiceInput, ServiceError> {
    let input = input.normalized();
    let messages = input.check();
    if !messages.is_empty() {
        return Err(ServiceError::Validation(messages));
    }
    Ok(input)
}
