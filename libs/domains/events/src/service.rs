use std::sync::Arc;
use validator::Validate;

use crate::error::{EventError, EventResult};
use crate::models::{Event, SaveFlags, SaveIntent, Team, Viewer};
use crate::repository::EventsRepository;

/// Service layer for the events domain.
///
/// Resolves the save intent from the `isCreate`/`isUpdate` flag pair and
/// decides the insert-vs-update branch before touching the repository.
#[derive(Clone)]
pub struct EventService<R: EventsRepository> {
    repository: Arc<R>,
}

impl<R: EventsRepository> EventService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create or update an event depending on the flag pair
    pub async fn save_or_update_event(&self, event: Event, flags: SaveFlags) -> EventResult<Event> {
        event
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        match SaveIntent::try_from(flags)? {
            SaveIntent::Create => {
                if self.repository.event_exists(&event.name).await? {
                    return Err(EventError::AlreadyExists(event.name));
                }
                self.repository.create_event(event).await
            }
            SaveIntent::Update => self.repository.update_event(event).await,
        }
    }

    /// Get an event by its unique name
    pub async fn get_event(&self, name: &str) -> EventResult<Event> {
        self.repository
            .get_event(name)
            .await?
            .ok_or_else(|| EventError::NotFound(name.to_string()))
    }

    /// Create or update a team depending on the flag pair
    pub async fn save_or_update_team(&self, team: Team, flags: SaveFlags) -> EventResult<Team> {
        team.validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        match SaveIntent::try_from(flags)? {
            SaveIntent::Create => {
                if self.repository.team_exists(&team.name).await? {
                    return Err(EventError::AlreadyExists(team.name));
                }
                self.repository.create_team(team).await
            }
            SaveIntent::Update => self.repository.update_team(team).await,
        }
    }

    /// Get a team by its unique name
    pub async fn get_team(&self, name: &str) -> EventResult<Team> {
        self.repository
            .get_team(name)
            .await?
            .ok_or_else(|| EventError::NotFound(name.to_string()))
    }

    /// Record that an email address viewed an event.
    ///
    /// Saving the same pairing twice is a no-op rather than a constraint
    /// violation.
    pub async fn save_viewer(&self, viewer: Viewer) -> EventResult<Viewer> {
        viewer
            .validate()
            .map_err(|e| EventError::Validation(e.to_string()))?;

        if self
            .repository
            .is_viewer(&viewer.email, viewer.event_id)
            .await?
        {
            return Ok(viewer);
        }

        self.repository.save_viewer(viewer).await
    }

    /// Check whether an email address already viewed an event
    pub async fn is_viewer(&self, email: &str, event_id: i32) -> EventResult<bool> {
        self.repository.is_viewer(email, event_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEventsRepository;

    fn service() -> EventService<InMemoryEventsRepository> {
        EventService::new(InMemoryEventsRepository::new())
    }

    fn sample_event() -> Event {
        Event {
            id: None,
            name: "Launch2024".to_string(),
            game: "Valorant".to_string(),
            description: String::new(),
            date: None,
            message: None,
        }
    }

    fn create_flags() -> SaveFlags {
        SaveFlags {
            is_create: true,
            is_update: false,
        }
    }

    fn update_flags() -> SaveFlags {
        SaveFlags {
            is_create: false,
            is_update: true,
        }
    }

    #[tokio::test]
    async fn test_save_event_create_then_get() {
        let service = service();

        let saved = service
            .save_or_update_event(sample_event(), create_flags())
            .await
            .unwrap();
        assert!(saved.id.is_some());

        let fetched = service.get_event("Launch2024").await.unwrap();
        assert_eq!(fetched.id, saved.id);
    }

    #[tokio::test]
    async fn test_save_event_create_twice_is_rejected() {
        let service = service();

        service
            .save_or_update_event(sample_event(), create_flags())
            .await
            .unwrap();
        let result = service
            .save_or_update_event(sample_event(), create_flags())
            .await;
        assert!(matches!(result, Err(EventError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_save_event_update_requires_existing() {
        let service = service();

        let result = service
            .save_or_update_event(sample_event(), update_flags())
            .await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_event_contradictory_flags() {
        let service = service();

        for (is_create, is_update) in [(true, true), (false, false)] {
            let result = service
                .save_or_update_event(
                    sample_event(),
                    SaveFlags {
                        is_create,
                        is_update,
                    },
                )
                .await;
            assert!(matches!(result, Err(EventError::InvalidIntent)));
        }
    }

    #[tokio::test]
    async fn test_save_event_rejects_invalid_input() {
        let service = service();

        let mut event = sample_event();
        event.name = String::new();
        let result = service.save_or_update_event(event, create_flags()).await;
        assert!(matches!(result, Err(EventError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_missing_event_is_not_found() {
        let service = service();

        let result = service.get_event("Ghost").await;
        assert!(matches!(result, Err(EventError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_save_viewer_is_idempotent() {
        let service = service();

        let viewer = Viewer {
            id: None,
            email: "x@example.com".to_string(),
            event_id: 7,
            message: None,
        };

        let first = service.save_viewer(viewer.clone()).await.unwrap();
        assert!(first.id.is_some());

        // Second save of the same pairing leaves the record untouched
        let second = service.save_viewer(viewer).await.unwrap();
        assert!(second.id.is_none());
        assert!(service.is_viewer("x@example.com", 7).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_viewer_unknown_pairing_is_false() {
        let service = service();

        assert!(!service.is_viewer("x@example.com", 7).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_team_update_changes_fields() {
        let service = service();

        let team = Team {
            id: None,
            name: "Sentinels".to_string(),
            game: "Valorant".to_string(),
            captain_email: "captain@example.com".to_string(),
            message: None,
        };

        service
            .save_or_update_team(team.clone(), create_flags())
            .await
            .unwrap();

        let mut changed = team;
        changed.captain_email = "new-captain@example.com".to_string();
        let updated = service
            .save_or_update_team(changed, update_flags())
            .await
            .unwrap();

        assert_eq!(updated.captain_email, "new-captain@example.com");
        assert_eq!(
            service.get_team("Sentinels").await.unwrap().captain_email,
            "new-captain@example.com"
        );
    }
}
