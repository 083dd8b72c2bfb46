use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::error::EventError;

/// Names may contain letters, digits, spaces, hyphens and underscores
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]*$").unwrap());

fn validate_name(name: &str) -> Result<(), validator::ValidationError> {
    if !NAME_PATTERN.is_match(name) {
        return Err(validator::ValidationError::new("invalid_name"));
    }
    Ok(())
}

/// Event transport model.
///
/// The same shape is used for requests and responses. `message` reports the
/// outcome of the request; it is set on every response and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Event {
    /// Database identifier; absent until first saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Unique event name
    #[validate(length(min = 1, max = 100), custom(function = "validate_name"))]
    pub name: String,
    /// Game title the event is played in
    #[validate(length(min = 1, max = 100))]
    pub game: String,
    #[serde(default)]
    pub description: String,
    /// When the event takes place
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    /// Outcome of the request; overwritten on every response
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Team transport model; same request/response and `message` pattern as
/// [`Event`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Team {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    /// Unique team name
    #[validate(length(min = 1, max = 100), custom(function = "validate_name"))]
    pub name: String,
    /// Game title the team competes in
    #[validate(length(min = 1, max = 100))]
    pub game: String,
    #[validate(email)]
    pub captain_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A record that an email address viewed an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Viewer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[validate(email)]
    pub email: String,
    pub event_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The `isCreate`/`isUpdate` flag pair accepted by the save endpoints.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SaveFlags {
    pub is_create: bool,
    pub is_update: bool,
}

/// Resolved save intent. Exactly one of the two flags must be set;
/// contradictory flags are a domain error, with no precedence between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    Create,
    Update,
}

impl TryFrom<SaveFlags> for SaveIntent {
    type Error = EventError;

    fn try_from(flags: SaveFlags) -> Result<Self, Self::Error> {
        match (flags.is_create, flags.is_update) {
            (true, false) => Ok(SaveIntent::Create),
            (false, true) => Ok(SaveIntent::Update),
            _ => Err(EventError::InvalidIntent),
        }
    }
}

/// Query parameters for the viewer existence check.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct IsViewerQuery {
    pub email: String,
    pub event_id: i32,
}
