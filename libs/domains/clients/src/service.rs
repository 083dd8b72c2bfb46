use std::sync::Arc;
use validator::Validate;

use crate::error::{ClientError, ClientResult};
use crate::models::ClientComment;
use crate::repository::ClientCommentRepository;

/// Service layer for client comments.
///
/// A comment arriving without an id is created; one carrying an id updates
/// the stored comment (typically flipping the reply flag).
#[derive(Clone)]
pub struct ClientService<R: ClientCommentRepository> {
    repository: Arc<R>,
}

impl<R: ClientCommentRepository> ClientService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create or update a comment depending on id presence
    pub async fn save_comment(&self, comment: ClientComment) -> ClientResult<ClientComment> {
        comment
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;

        match comment.id {
            Some(_) => self.repository.update_comment(comment).await,
            None => self.repository.insert_comment(comment).await,
        }
    }

    /// List all comments, oldest first
    pub async fn get_comments(&self) -> ClientResult<Vec<ClientComment>> {
        self.repository.get_comments().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryClientCommentRepository;

    fn service() -> ClientService<InMemoryClientCommentRepository> {
        ClientService::new(InMemoryClientCommentRepository::new())
    }

    fn sample() -> ClientComment {
        ClientComment {
            id: None,
            email: "client@example.com".to_string(),
            comment: "Great work".to_string(),
            replied: false,
            message: None,
        }
    }

    #[tokio::test]
    async fn test_save_without_id_creates() {
        let service = service();

        let saved = service.save_comment(sample()).await.unwrap();
        assert_eq!(saved.id, Some(1));
        assert_eq!(service.get_comments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_id_updates() {
        let service = service();

        let mut saved = service.save_comment(sample()).await.unwrap();
        saved.replied = true;
        let updated = service.save_comment(saved).await.unwrap();

        assert!(updated.replied);
        assert_eq!(service.get_comments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let service = service();

        let mut comment = sample();
        comment.id = Some(77);
        let result = service.save_comment(comment).await;
        assert!(matches!(result, Err(ClientError::NotFound(77))));
    }

    #[tokio::test]
    async fn test_save_rejects_invalid_email() {
        let service = service();

        let mut comment = sample();
        comment.email = "nope".to_string();
        let result = service.save_comment(comment).await;
        assert!(matches!(result, Err(ClientError::Validation(_))));
    }
}
