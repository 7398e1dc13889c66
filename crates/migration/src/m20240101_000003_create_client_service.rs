//! Create `client_service` join table.
//!
//! Composite primary key on (client_id, service_id); rows go away with
//! either endpoint.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientService::Table)
                    .if_not_exists()
                    .col(integer(ClientService::ClientId))
                    .col(integer(ClientService::ServiceId))
                    .col(timestamp_with_time_zone(ClientService::CreatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_client_service")
                            .col(ClientService::ClientId)
                            .col(ClientService::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_service_client")
                            .from(ClientService::Table, ClientService::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_service_service")
                            .from(ClientService::Table, ClientService::ServiceId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ClientService::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ClientService { Table, ClientId, ServiceId, CreatedAt }

#[derive(DeriveIden)]
enum Clients { Table, Id }

#[derive(DeriveIden)]
enum Services { Table, Id }
