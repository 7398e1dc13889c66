use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// `{status, message, data?, validation?}`
#[derive(ToSchema)]
pub struct EnvelopeDoc {
    #[schema(example = "success")]
    pub status: String,
    #[schema(example = "Correct request")]
    pub message: String,
    #[schema(value_type = Object)]
    pub data: Option<String>,
    #[schema(value_type = Object)]
    pub validation: Option<String>,
}

#[derive(ToSchema)]
pub struct ClientInputDoc {
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@x.com")]
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(ToSchema)]
pub struct ServiceInputDoc {
    #[schema(example = "Haircut")]
    pub name: String,
    pub description: Option<String>,
    #[schema(example = 20)]
    pub price: i32,
}

#[derive(ToSchema)]
pub struct AssociationInputDoc {
    pub client_id: i32,
    pub service_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::list,
        crate::routes::clients::create,
        crate::routes::clients::show,
        crate::routes::clients::update,
        crate::routes::clients::destroy,
        crate::routes::clients::attach,
        crate::routes::clients::detach,
        crate::routes::services::list,
        crate::routes::services::create,
        crate::routes::services::show,
        crate::routes::services::update,
        crate::routes::services::destroy,
    ),
    components(
        schemas(
            HealthResponse,
            EnvelopeDoc,
            ClientInputDoc,
            ServiceInputDoc,
            AssociationInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "services")
    )
)]
pub struct ApiDoc;
