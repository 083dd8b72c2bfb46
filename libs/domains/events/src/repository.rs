use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::TryIntoModel;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::{EventError, EventResult};
use crate::models::{Event, Team, Viewer};

/// Repository trait for the events domain.
///
/// Events and teams are looked up by their natural key (the unique name);
/// viewers by the `(email, event_id)` pair.
#[async_trait]
pub trait EventsRepository: Send + Sync {
    /// Insert a new event
    async fn create_event(&self, event: Event) -> EventResult<Event>;

    /// Update the event with the given name; error if it does not exist
    async fn update_event(&self, event: Event) -> EventResult<Event>;

    /// Get an event by name
    async fn get_event(&self, name: &str) -> EventResult<Option<Event>>;

    /// Check whether an event name is taken
    async fn event_exists(&self, name: &str) -> EventResult<bool>;

    /// Insert a new team
    async fn create_team(&self, team: Team) -> EventResult<Team>;

    /// Update the team with the given name; error if it does not exist
    async fn update_team(&self, team: Team) -> EventResult<Team>;

    /// Get a team by name
    async fn get_team(&self, name: &str) -> EventResult<Option<Team>>;

    /// Check whether a team name is taken
    async fn team_exists(&self, name: &str) -> EventResult<bool>;

    /// Record that an email address viewed an event
    async fn save_viewer(&self, viewer: Viewer) -> EventResult<Viewer>;

    /// Check whether an email address already viewed an event
    async fn is_viewer(&self, email: &str, event_id: i32) -> EventResult<bool>;
}

/// In-memory implementation of EventsRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryEventsRepository {
    events: Arc<RwLock<HashMap<i32, Event>>>,
    teams: Arc<RwLock<HashMap<i32, Team>>>,
    viewers: Arc<RwLock<HashMap<i32, Viewer>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryEventsRepository {
    pub fn new() -> Self {
        Self {
            events: Arc::new(RwLock::new(HashMap::new())),
            teams: Arc::new(RwLock::new(HashMap::new())),
            viewers: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }

    fn allocate_id(&self) -> i32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

// Rows are stored through the same entity conversions the PostgreSQL
// implementation uses, so a half-built ActiveModel surfaces as a Mapping
// error here too instead of diverging between backends.
#[async_trait]
impl EventsRepository for InMemoryEventsRepository {
    async fn create_event(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        let name_taken = events
            .values()
            .any(|e| e.name.eq_ignore_ascii_case(&event.name));
        if name_taken {
            return Err(EventError::AlreadyExists(event.name));
        }

        let id = self.allocate_id();
        let mut active: entity::event::ActiveModel = event.into();
        active.id = Set(id);
        let model = active
            .try_into_model()
            .map_err(|e| EventError::Mapping(e.to_string()))?;

        let stored: Event = model.into();
        events.insert(id, stored.clone());

        tracing::info!(event_id = id, "Created event");
        Ok(stored)
    }

    async fn update_event(&self, event: Event) -> EventResult<Event> {
        let mut events = self.events.write().await;

        let id = events
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(&event.name))
            .and_then(|e| e.id)
            .ok_or_else(|| EventError::NotFound(event.name.clone()))?;

        let mut active: entity::event::ActiveModel = event.into();
        active.id = Set(id);
        let model = active
            .try_into_model()
            .map_err(|e| EventError::Mapping(e.to_string()))?;

        let stored: Event = model.into();
        events.insert(id, stored.clone());

        tracing::info!(event_id = id, "Updated event");
        Ok(stored)
    }

    async fn get_event(&self, name: &str) -> EventResult<Option<Event>> {
        let events = self.events.read().await;
        Ok(events
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn event_exists(&self, name: &str) -> EventResult<bool> {
        let events = self.events.read().await;
        Ok(events.values().any(|e| e.name.eq_ignore_ascii_case(name)))
    }

    async fn create_team(&self, team: Team) -> EventResult<Team> {
        let mut teams = self.teams.write().await;

        let name_taken = teams
            .values()
            .any(|t| t.name.eq_ignore_ascii_case(&team.name));
        if name_taken {
            return Err(EventError::AlreadyExists(team.name));
        }

        let id = self.allocate_id();
        let mut active: entity::team::ActiveModel = team.into();
        active.id = Set(id);
        let model = active
            .try_into_model()
            .map_err(|e| EventError::Mapping(e.to_string()))?;

        let stored: Team = model.into();
        teams.insert(id, stored.clone());

        tracing::info!(team_id = id, "Created team");
        Ok(stored)
    }

    async fn update_team(&self, team: Team) -> EventResult<Team> {
        let mut teams = self.teams.write().await;

        let id = teams
            .values()
            .find(|t| t.name.eq_ignore_ascii_case(&team.name))
            .and_then(|t| t.id)
            .ok_or_else(|| EventError::NotFound(team.name.clone()))?;

        let mut active: entity::team::ActiveModel = team.into();
        active.id = Set(id);
        let model = active
            .try_into_model()
            .map_err(|e| EventError::Mapping(e.to_string()))?;

        let stored: Team = model.into();
        teams.insert(id, stored.clone());

        tracing::info!(team_id = id, "Updated team");
        Ok(stored)
    }

    async fn get_team(&self, name: &str) -> EventResult<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams
            .values()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn team_exists(&self, name: &str) -> EventResult<bool> {
        let teams = self.teams.read().await;
        Ok(teams.values().any(|t| t.name.eq_ignore_ascii_case(name)))
    }

    async fn save_viewer(&self, viewer: Viewer) -> EventResult<Viewer> {
        let mut viewers = self.viewers.write().await;

        let id = self.allocate_id();
        let mut active: entity::viewer::ActiveModel = viewer.into();
        active.id = Set(id);
        let model = active
            .try_into_model()
            .map_err(|e| EventError::Mapping(e.to_string()))?;

        let stored: Viewer = model.into();
        viewers.insert(id, stored.clone());

        tracing::info!(viewer_id = id, "Saved viewer");
        Ok(stored)
    }

    async fn is_viewer(&self, email: &str, event_id: i32) -> EventResult<bool> {
        let viewers = self.viewers.read().await;
        Ok(viewers
            .values()
            .any(|v| v.event_id == event_id && v.email.eq_ignore_ascii_case(email)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(name: &str) -> Event {
        Event {
            id: None,
            name: name.to_string(),
            game: "Valorant".to_string(),
            description: "Season opener".to_string(),
            date: None,
            message: None,
        }
    }

    fn sample_team(name: &str) -> Team {
        Team {
            id: None,
            name: name.to_string(),
            game: "Valorant".to_string(),
            captain_email: "captain@example.com".to_string(),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get_event() {
        let repo = InMemoryEventsRepository::new();

        let created = repo.create_event(sample_event("Launch2024")).await.unwrap();
        assert!(created.id.is_some());
        assert!(created.message.is_none());

        let fetched = repo.get_event("Launch2024").await.unwrap();
        assert_eq!(fetched.unwrap().id, created.id);

        // Lookup is case-insensitive on the natural key
        assert!(repo.get_event("launch2024").await.unwrap().is_some());
        assert!(repo.get_event("Other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_event_name_error() {
        let repo = InMemoryEventsRepository::new();

        repo.create_event(sample_event("Launch2024")).await.unwrap();
        let result = repo.create_event(sample_event("Launch2024")).await;
        assert!(matches!(result, Err(EventError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_update_missing_event_error() {
        let repo = InMemoryEventsRepository::new();

        let result = repo.update_event(sample_event("Ghost")).await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_event_keeps_id() {
        let repo = InMemoryEventsRepository::new();

        let created = repo.create_event(sample_event("Launch2024")).await.unwrap();

        let mut changed = sample_event("Launch2024");
        changed.description = "Rescheduled".to_string();
        let updated = repo.update_event(changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.description, "Rescheduled");
    }

    #[tokio::test]
    async fn test_team_roundtrip() {
        let repo = InMemoryEventsRepository::new();

        repo.create_team(sample_team("Sentinels")).await.unwrap();
        let fetched = repo.get_team("Sentinels").await.unwrap().unwrap();
        assert_eq!(fetched.captain_email, "captain@example.com");
        assert!(repo.team_exists("sentinels").await.unwrap());
    }

    #[tokio::test]
    async fn test_viewer_flow() {
        let repo = InMemoryEventsRepository::new();

        assert!(!repo.is_viewer("x@example.com", 7).await.unwrap());

        let viewer = Viewer {
            id: None,
            email: "x@example.com".to_string(),
            event_id: 7,
            message: None,
        };
        repo.save_viewer(viewer).await.unwrap();

        assert!(repo.is_viewer("x@example.com", 7).await.unwrap());
        assert!(repo.is_viewer("X@EXAMPLE.COM", 7).await.unwrap());
        assert!(!repo.is_viewer("x@example.com", 8).await.unwrap());
    }
}
