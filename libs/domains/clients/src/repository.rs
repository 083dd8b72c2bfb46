use async_trait::async_trait;
use sea_orm::ActiveValue::Set;
use sea_orm::TryIntoModel;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::entity;
use crate::error::{ClientError, ClientResult};
use crate::models::ClientComment;

/// Repository trait for client comments
#[async_trait]
pub trait ClientCommentRepository: Send + Sync {
    /// Insert a new comment and return it with its assigned id
    async fn insert_comment(&self, comment: ClientComment) -> ClientResult<ClientComment>;

    /// Update the comment with the id carried by the model
    async fn update_comment(&self, comment: ClientComment) -> ClientResult<ClientComment>;

    /// List all comments, oldest first
    async fn get_comments(&self) -> ClientResult<Vec<ClientComment>>;
}

/// Finalize a row under construction into a stored model.
///
/// Any field still NotSet (e.g. a missing id) is a mapping failure, reported
/// as an error rather than a panic.
pub(crate) fn into_stored(active: entity::ActiveModel) -> ClientResult<entity::Model> {
    active
        .try_into_model()
        .map_err(|e| ClientError::Mapping(e.to_string()))
}

/// In-memory implementation of ClientCommentRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryClientCommentRepository {
    comments: Arc<RwLock<HashMap<i32, ClientComment>>>,
    next_id: Arc<AtomicI32>,
}

impl InMemoryClientCommentRepository {
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI32::new(1)),
        }
    }
}

#[async_trait]
impl ClientCommentRepository for InMemoryClientCommentRepository {
    async fn insert_comment(&self, comment: ClientComment) -> ClientResult<ClientComment> {
        let mut comments = self.comments.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut active: entity::ActiveModel = comment.into();
        active.id = Set(id);
        let model = into_stored(active)?;

        let stored: ClientComment = model.into();
        comments.insert(id, stored.clone());

        tracing::info!(comment_id = id, "Created client comment");
        Ok(stored)
    }

    async fn update_comment(&self, comment: ClientComment) -> ClientResult<ClientComment> {
        let mut comments = self.comments.write().await;

        let id = comment.id.ok_or_else(|| {
            ClientError::Mapping("comment id is required for an update".to_string())
        })?;
        if !comments.contains_key(&id) {
            return Err(ClientError::NotFound(id));
        }

        let model = into_stored(comment.into())?;
        let stored: ClientComment = model.into();
        comments.insert(id, stored.clone());

        tracing::info!(comment_id = id, "Updated client comment");
        Ok(stored)
    }

    async fn get_comments(&self) -> ClientResult<Vec<ClientComment>> {
        let comments = self.comments.read().await;

        let mut result: Vec<ClientComment> = comments.values().cloned().collect();
        result.sort_by_key(|c| c.id);
        Ok(result)
    }
}
