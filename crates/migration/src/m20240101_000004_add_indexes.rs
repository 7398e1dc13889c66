use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ClientService: reverse lookup by service_id (the PK already covers client_id first)
        manager
            .create_index(
                Index::create()
                    .name("idx_client_service_service")
                    .table(ClientService::Table)
                    .col(ClientService::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Services: listing/search by name
        manager
            .create_index(
                Index::create()
                    .name("idx_services_name")
                    .table(Services::Table)
                    .col(Services::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_name").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_client_service_service").table(ClientService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ClientService { Table, ServiceId }

#[derive(DeriveIden)]
enum Services { Table, Name }
