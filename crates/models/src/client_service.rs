//! `client_service` join rows. Identity is the (client_id, service_id) pair.
use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{client, errors, service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "client_service")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub client_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Client,
    Service,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Client => Entity::belongs_to(client::Entity)
                .from(Column::ClientId)
                .to(client::Column::Id)
                .into(),
            Relation::Service => Entity::belongs_to(service::Entity)
                .from(Column::ServiceId)
                .to(service::Column::Id)
                .into(),
        }
    }
}

impl Related<client::Entity> for Entity {
    fn to() -> RelationDef { Relation::Client.def() }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { Relation::Service.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert the pair unless it already exists. Returns whether a row was added.
pub async fn attach(db: &DatabaseConnection, client_id: i32, service_id: i32) -> Result<bool, errors::ModelError> {
    let am = ActiveModel {
        client_id: Set(client_id),
        service_id: Set(service_id),
        created_at: Set(Utc::now().into()),
    };
    // the composite primary key rejects the second insert of a pair
    match Entity::insert(am).exec_without_returning(db).await.map_err(errors::ModelError::db) {
        Ok(_) => Ok(true),
        Err(errors::ModelError::UniqueViolation(_)) => Ok(false),
        Err(e) => Err(e),
    }
}

/// Remove the pair if present. Returns whether a row was removed.
pub async fn detach(db: &DatabaseConnection, client_id: i32, service_id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id((client_id, service_id)).exec(db).await.map_err(errors::ModelError::db)?;
    Ok(res.rows_affected > 0)
}
