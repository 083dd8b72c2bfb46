use axum::Router;

pub mod health;

use domain_clients::{ClientService, PgClientCommentRepository};
use domain_events::{EventService, PgEventsRepository};

/// Creates the service routes.
///
/// The `/events` and `/clients` prefixes are part of the external contract
/// consumed by the other portfolio services, so the domain routers mount at
/// the root rather than behind an `/api` prefix.
///
/// Takes a reference to AppState and initializes the services; the returned
/// router is stateless (each sub-router carries its own state).
pub fn routes(state: &crate::state::AppState) -> Router {
    let events = EventService::new(PgEventsRepository::new(state.db.clone()));
    let clients = ClientService::new(PgClientCommentRepository::new(state.db.clone()));

    Router::new()
        .nest("/events", domain_events::handlers::router(events))
        .nest("/clients", domain_clients::handlers::router(clients))
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app
/// router from `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
