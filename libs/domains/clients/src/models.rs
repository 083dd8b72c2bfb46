use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Client comment transport model.
///
/// The same shape serves requests and responses. A request without an `id`
/// creates a new comment; with an `id` it updates the existing one. The `id`
/// is always populated on responses as a proper field, never smuggled through
/// the message channel. `message` reports the request outcome and is never
/// stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ClientComment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
    /// Whether the comment has been replied to
    #[serde(default)]
    pub replied: bool,
    /// Outcome of the request; overwritten on every response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
