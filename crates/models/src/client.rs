use sea_orm::{entity::prelude::*, DatabaseConnection, QueryOrder, Set};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{client_service, errors, service};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ClientService,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::ClientService => Entity::has_many(client_service::Entity).into(),
        }
    }
}

impl Related<client_service::Entity> for Entity {
    fn to() -> RelationDef { Relation::ClientService.def() }
}

impl Related<service::Entity> for Entity {
    fn to() -> RelationDef { client_service::Relation::Service.def() }

    fn via() -> Option<RelationDef> { Some(client_service::Relation::Client.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

/// Already-validated column values for insert/update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A client together with its eager-loaded services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientWithServices {
    #[serde(flatten)]
    pub client: Model,
    pub services: Vec<service::Model>,
}

pub async fn create(db: &DatabaseConnection, fields: ClientFields) -> Result<Model, errors::ModelError> {
    let now = Utc::now().into();
    let am = ActiveModel {
        name: Set(fields.name),
        email: Set(fields.email),
        phone: Set(fields.phone),
        address: Set(fields.address),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    am.insert(db).await.map_err(errors::ModelError::db)
}

/// Overwrite every mutable column of `existing`.
pub async fn update(db: &DatabaseConnection, existing: Model, fields: ClientFields) -> Result<Model, errors::ModelError> {
    let mut am: ActiveModel = existing.into();
    am.name = Set(fields.name);
    am.email = Set(fields.email);
    am.phone = Set(fields.phone);
    am.address = Set(fields.address);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(errors::ModelError::db)
}

pub async fn find(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Entity::find_by_id(id).one(db).await.map_err(errors::ModelError::db)
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(errors::ModelError::db)?;
    Ok(res.rows_affected > 0)
}

/// Exact (case-sensitive) email match, optionally ignoring one row.
pub async fn email_taken(db: &DatabaseConnection, email: &str, except_id: Option<i32>) -> Result<bool, errors::ModelError> {
    let mut finder = Entity::find().filter(Column::Email.eq(email));
    if let Some(id) = except_id { finder = finder.filter(Column::Id.ne(id)); }
    let found = finder.one(db).await.map_err(errors::ModelError::db)?;
    Ok(found.is_some())
}

pub async fn services_of(db: &DatabaseConnection, client: &Model) -> Result<Vec<service::Model>, errors::ModelError> {
    client
        .find_related(service::Entity)
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(errors::ModelError::db)
}

pub async fn find_with_services(db: &DatabaseConnection, id: i32) -> Result<Option<ClientWithServices>, errors::ModelError> {
    let Some(client) = find(db, id).await? else { return Ok(None); };
    let services = services_of(db, &client).await?;
    Ok(Some(ClientWithServices { client, services }))
}

pub async fn all_with_services(db: &DatabaseConnection) -> Result<Vec<ClientWithServices>, errors::ModelError> {
    let rows = Entity::find()
        .find_with_related(service::Entity)
        .order_by_asc(Column::Id)
        .order_by_asc(service::Column::Id)
        .all(db)
        .await
        .map_err(errors::ModelError::db)?;
    Ok(rows.into_iter().map(|(client, services)| ClientWithServices { client, services }).collect())
}
