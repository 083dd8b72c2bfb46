use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the service.
///
/// The domain crates each document their own endpoints; this nests them under
/// the prefixes the router mounts them at.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "jackfolio-db",
        description = "Esports portfolio backend: events, teams, viewers and client comments"
    ),
    nest(
        (path = "/events", api = domain_events::handlers::ApiDoc),
        (path = "/clients", api = domain_clients::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
