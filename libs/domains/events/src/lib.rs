//! Events Domain
//!
//! Domain implementation for esports events, the teams competing in them,
//! and the viewers who watched them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Save-intent resolution, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, transport models
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_events::{
//!     handlers,
//!     repository::InMemoryEventsRepository,
//!     service::EventService,
//! };
//!
//! // Create repository and service
//! let repository = InMemoryEventsRepository::new();
//! let service = EventService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{EventError, EventResult};
pub use models::{Event, IsViewerQuery, SaveFlags, SaveIntent, Team, Viewer};
pub use postgres::PgEventsRepository;
pub use repository::{EventsRepository, InMemoryEventsRepository};
pub use service::EventService;
