use std::sync::Arc;

use tracing::{info, instrument, warn};

use models::client::{self, ClientWithServices};
use models::errors::ModelError;

use super::domain::{AssociationInput, ClientInput};
use super::repository::ClientRepository;
use crate::errors::ServiceError;
use crate::validation;

const ASSOCIATION_ENTITY: &str = "client or service";

/// Application service encapsulating client business rules.
/// Existence checks always run before validation, and validation before any write.
pub struct ClientManager<R: ClientRepository> {
    repo: Arc<R>,
}

impl<R: ClientRepository> ClientManager<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Every client with its services. An empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<ClientWithServices>, ServiceError> {
        self.repo.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: ClientInput) -> Result<client::Model, ServiceError> {
        let input = self.validated(input, None).await?;
        let created = self.repo.create(input.into_fields()?).await.map_err(duplicate_email)?;
        info!(id = created.id, email = %created.email, "client_created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<ClientWithServices, ServiceError> {
        self.repo.get_with_services(id).await?.ok_or_else(|| ServiceError::invalid_id("client"))
    }

    /// Overwrite all mutable fields. The email uniqueness rule ignores the client's own row.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ClientInput) -> Result<client::Model, ServiceError> {
        let existing = self.find(id).await?;
        let input = self.validated(input, Some(existing.id)).await?;
        let updated = self.repo.update(existing, input.into_fields()?).await.map_err(duplicate_email)?;
        info!(id = updated.id, "client_updated");
        Ok(updated)
    }

    /// Hard delete; returns the row as it was before removal.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<client::Model, ServiceError> {
        let existing = self.find(id).await?;
        if !self.repo.delete(existing.id).await? {
            // removed concurrently between lookup and delete
            return Err(ServiceError::invalid_id("client"));
        }
        info!(id = existing.id, "client_deleted");
        Ok(existing)
    }

    /// Associate a service with a client. Attaching an existing pair is a no-op.
    #[instrument(skip(self, input))]
    pub async fn attach(&self, input: AssociationInput) -> Result<ClientWithServices, ServiceError> {
        let (client_id, service_id) = self.resolve_pair(&input).await?;
        let added = self.repo.attach(client_id, service_id).await?;
        info!(client_id, service_id, added, "service_attached");
        self.get_pair_client(client_id).await
    }

    /// Remove an association; absent pairs are not an error.
    #[instrument(skip(self, input))]
    pub async fn detach(&self, input: AssociationInput) -> Result<ClientWithServices, ServiceError> {
        let (client_id, service_id) = self.resolve_pair(&input).await?;
        let removed = self.repo.detach(client_id, service_id).await?;
        info!(client_id, service_id, removed, "service_detached");
        self.get_pair_client(client_id).await
    }

    async fn find(&self, id: i32) -> Result<client::Model, ServiceError> {
        match self.repo.get(id).await? {
            Some(found) => Ok(found),
            None => {
                warn!(id, "client_not_found");
                Err(ServiceError::invalid_id("client"))
            }
        }
    }

    async fn validated(&self, input: ClientInput, except_id: Option<i32>) -> Result<ClientInput, ServiceError> {
        let input = input.normalized();
        let mut messages = input.check();
        if let Some(email) = input.email() {
            if self.repo.email_taken(email, except_id).await? {
                validation::push(&mut messages, "email", "unique");
            }
        }
        let messages = validation::ordered(messages, ClientInput::FIELDS);
        if !messages.is_empty() {
            return Err(ServiceError::Validation(messages));
        }
        Ok(input)
    }

    async fn resolve_pair(&self, input: &AssociationInput) -> Result<(i32, i32), ServiceError> {
        let Some((client_id, service_id)) = input.ids() else {
            return Err(ServiceError::invalid_id(ASSOCIATION_ENTITY));
        };
        let client_found = self.repo.get(client_id).await?.is_some();
        let service_found = self.repo.service_exists(service_id).await?;
        if !(client_found && service_found) {
            warn!(client_id, service_id, client_found, service_found, "association_target_missing");
            return Err(ServiceError::invalid_id(ASSOCIATION_ENTITY));
        }
        Ok((client_id, service_id))
    }

    async fn get_pair_client(&self, client_id: i32) -> Result<ClientWithServices, ServiceError> {
        self.repo
            .get_with_services(client_id)
            .await?
            .ok_or_else(|| ServiceError::invalid_id(ASSOCIATION_ENTITY))
    }
}

/// A write that lost the race against another insert of the same email still
/// reports `email.unique`; `clients.email` is the only unique column besides the id.
fn duplicate_email(e: ServiceError) -> ServiceError {
    match e {
        ServiceError::Model(ModelError::UniqueViolation(detail)) => {
            warn!(%detail, "client_email_conflict_on_write");
            let mut messages = common::types::ValidationMessages::new();
            validation::push(&mut messages, "email", "unique");
            ServiceError::Validation(messages)
        }
        other => other,
    }
}
