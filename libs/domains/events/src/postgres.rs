use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{EventError, EventResult},
    models::{Event, Team, Viewer},
    repository::EventsRepository,
};

/// PostgreSQL implementation of EventsRepository using SeaORM
pub struct PgEventsRepository {
    events: BaseRepository<entity::event::Entity>,
    teams: BaseRepository<entity::team::Entity>,
    viewers: BaseRepository<entity::viewer::Entity>,
}

impl PgEventsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            events: BaseRepository::new(db.clone()),
            teams: BaseRepository::new(db.clone()),
            viewers: BaseRepository::new(db),
        }
    }
}

// Unique-constraint races on the name column surface as AlreadyExists even
// when the pre-insert existence check passed.
fn map_insert_err(e: DbErr, name: &str) -> EventError {
    let text = e.to_string();
    if text.contains("duplicate key") || text.contains("unique constraint") {
        EventError::AlreadyExists(name.to_string())
    } else {
        EventError::Database(e.to_string())
    }
}

fn db_err(e: DbErr) -> EventError {
    EventError::Database(e.to_string())
}

#[async_trait]
impl EventsRepository for PgEventsRepository {
    async fn create_event(&self, event: Event) -> EventResult<Event> {
        let name = event.name.clone();
        let active: entity::event::ActiveModel = event.into();

        let model = self
            .events
            .insert(active)
            .await
            .map_err(|e| map_insert_err(e, &name))?;

        tracing::info!(event_id = model.id, "Created event");
        Ok(model.into())
    }

    async fn update_event(&self, event: Event) -> EventResult<Event> {
        let existing = entity::event::Entity::find()
            .filter(entity::event::Column::Name.eq(&event.name))
            .one(self.events.db())
            .await
            .map_err(db_err)?
            .ok_or_else(|| EventError::NotFound(event.name.clone()))?;

        let mut active: entity::event::ActiveModel = event.into();
        active.id = Set(existing.id);

        let model = self.events.update(active).await.map_err(db_err)?;

        tracing::info!(event_id = model.id, "Updated event");
        Ok(model.into())
    }

    async fn get_event(&self, name: &str) -> EventResult<Option<Event>> {
        let model = entity::event::Entity::find()
            .filter(entity::event::Column::Name.eq(name))
            .one(self.events.db())
            .await
            .map_err(db_err)?;

        Ok(model.map(Into::into))
    }

    async fn event_exists(&self, name: &str) -> EventResult<bool> {
        let found = entity::event::Entity::find()
            .filter(entity::event::Column::Name.eq(name))
            .one(self.events.db())
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn create_team(&self, team: Team) -> EventResult<Team> {
        let name = team.name.clone();
        let active: entity::team::ActiveModel = team.into();

        let model = self
            .teams
            .insert(active)
            .await
            .map_err(|e| map_insert_err(e, &name))?;

        tracing::info!(team_id = model.id, "Created team");
        Ok(model.into())
    }

    async fn update_team(&self, team: Team) -> EventResult<Team> {
        let existing = entity::team::Entity::find()
            .filter(entity::team::Column::Name.eq(&team.name))
            .one(self.teams.db())
            .await
            .map_err(db_err)?
            .ok_or_else(|| EventError::NotFound(team.name.clone()))?;

        let mut active: entity::team::ActiveModel = team.into();
        active.id = Set(existing.id);

        let model = self.teams.update(active).await.map_err(db_err)?;

        tracing::info!(team_id = model.id, "Updated team");
        Ok(model.into())
    }

    async fn get_team(&self, name: &str) -> EventResult<Option<Team>> {
        let model = entity::team::Entity::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.teams.db())
            .await
            .map_err(db_err)?;

        Ok(model.map(Into::into))
    }

    async fn team_exists(&self, name: &str) -> EventResult<bool> {
        let found = entity::team::Entity::find()
            .filter(entity::team::Column::Name.eq(name))
            .one(self.teams.db())
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }

    async fn save_viewer(&self, viewer: Viewer) -> EventResult<Viewer> {
        let email = viewer.email.clone();
        let active: entity::viewer::ActiveModel = viewer.into();

        let model = self
            .viewers
            .insert(active)
            .await
            .map_err(|e| map_insert_err(e, &email))?;

        tracing::info!(viewer_id = model.id, "Saved viewer");
        Ok(model.into())
    }

    async fn is_viewer(&self, email: &str, event_id: i32) -> EventResult<bool> {
        let found = entity::viewer::Entity::find()
            .filter(entity::viewer::Column::Email.eq(email))
            .filter(entity::viewer::Column::EventId.eq(event_id))
            .one(self.viewers.db())
            .await
            .map_err(db_err)?;

        Ok(found.is_some())
    }
}
