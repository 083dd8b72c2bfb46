use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::ActiveValue::Set;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ClientError, ClientResult},
    models::ClientComment,
    repository::ClientCommentRepository,
};

/// PostgreSQL implementation of ClientCommentRepository using SeaORM
pub struct PgClientCommentRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgClientCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

fn db_err(e: DbErr) -> ClientError {
    ClientError::Database(e.to_string())
}

#[async_trait]
impl ClientCommentRepository for PgClientCommentRepository {
    async fn insert_comment(&self, comment: ClientComment) -> ClientResult<ClientComment> {
        let active: entity::ActiveModel = comment.into();

        let model = self.base.insert(active).await.map_err(db_err)?;

        tracing::info!(comment_id = model.id, "Created client comment");
        Ok(model.into())
    }

    async fn update_comment(&self, comment: ClientComment) -> ClientResult<ClientComment> {
        let id = comment.id.ok_or_else(|| {
            ClientError::Mapping("comment id is required for an update".to_string())
        })?;

        self.base
            .find_by_id(id)
            .await
            .map_err(db_err)?
            .ok_or(ClientError::NotFound(id))?;

        let mut active: entity::ActiveModel = comment.into();
        active.id = Set(id);

        let model = self.base.update(active).await.map_err(db_err)?;

        tracing::info!(comment_id = id, "Updated client comment");
        Ok(model.into())
    }

    async fn get_comments(&self) -> ClientResult<Vec<ClientComment>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
