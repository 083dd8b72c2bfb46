//! Clients Domain
//!
//! Comments left by portfolio clients, with a reply-status flag. The same
//! handler/service/repository/entity layering as the events domain, at a
//! smaller scale.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_clients::{
//!     handlers,
//!     repository::InMemoryClientCommentRepository,
//!     service::ClientService,
//! };
//!
//! let repository = InMemoryClientCommentRepository::new();
//! let service = ClientService::new(repository);
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
pub use error::{ClientError, ClientResult};
pub use models::ClientComment;
pub use postgres::PgClientCommentRepository;
pub use repository::{ClientCommentRepository, InMemoryClientCommentRepository};
pub use service::ClientService;
