use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Notify API",
        version = "0.1.0",
        description = "Alert management with MQTT notification publishing"
    ),
    nest(
        (path = "/notify/v1", api = domain_alerts::ApiDoc)
    )
)]
pub struct ApiDoc;
