use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::debug;

use models::content;

use crate::errors::ServiceError;

/// Field set accepted by content create and update; updates overwrite
/// title, body and author_id unconditionally.
#[derive(Debug, Clone)]
pub struct ContentFields {
    pub title: String,
    pub body: String,
    pub author_id: i32,
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<content::Model>, ServiceError>;
    async fn create(&self, fields: ContentFields) -> Result<content::Model, ServiceError>;
    async fn update(&self, id: i32, fields: ContentFields) -> Result<Option<content::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<content::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmContentRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl ContentRepository for SeaOrmContentRepository {
    async fn get(&self, id: i32) -> Result<Option<content::Model>, ServiceError> {
        content::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, fields: ContentFields) -> Result<content::Model, ServiceError> {
        // The author reference is taken as-is; an absent author is not checked.
        let am = content::ActiveModel {
            title: Set(fields.title),
            body: Set(fields.body),
            author_id: Set(fields.author_id),
            ..Default::default()
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(id = created.id, author_id = created.author_id, "inserted content");
        Ok(created)
    }

    async fn update(&self, id: i32, fields: ContentFields) -> Result<Option<content::Model>, ServiceError> {
        let found = match content::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        {
            Some(m) => m,
            None => return Ok(None),
        };
        let mut am: content::ActiveModel = found.into();
        am.title = Set(fields.title);
        am.body = Set(fields.body);
        am.author_id = Set(fields.author_id);
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<content::Model>, ServiceError> {
        let found = match content::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        {
            Some(m) => m,
            None => return Ok(None),
        };
        found
            .clone()
            .delete(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(found))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_db;

    fn article() -> ContentFields {
        ContentFields {
            title: "First post".into(),
            body: "Hello, world.".into(),
            author_id: 1,
        }
    }

    #[tokio::test]
    async fn content_crud_round_trip() -> anyhow::Result<()> {
        let repo = SeaOrmContentRepository { db: test_db().await? };

        let created = repo.create(article()).await?;
        assert!(created.id >= 1);
        assert_eq!(created.title, "First post");
        assert_eq!(created.author_id, 1);

        let found = repo.get(created.id).await?.expect("content exists");
        assert_eq!(found, created);

        let updated = repo
            .update(
                created.id,
                ContentFields {
                    title: "Edited".into(),
                    body: "Rewritten.".into(),
                    author_id: 2,
                },
            )
            .await?
            .expect("content exists");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Edited");
        assert_eq!(updated.author_id, 2);

        let deleted = repo.delete(created.id).await?.expect("content exists");
        assert_eq!(deleted.id, created.id);
        assert!(repo.get(created.id).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn absent_content_is_none_not_error() -> anyhow::Result<()> {
        let repo = SeaOrmContentRepository { db: test_db().await? };
        assert!(repo.get(9999).await?.is_none());
        assert!(repo.update(9999, article()).await?.is_none());
        assert!(repo.delete(9999).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn create_accepts_absent_author() -> anyhow::Result<()> {
        let repo = SeaOrmContentRepository { db: test_db().await? };
        let created = repo
            .create(ContentFields { title: "Orphan".into(), body: "No author row.".into(), author_id: 4242 })
            .await?;
        assert_eq!(created.author_id, 4242);
        Ok(())
    }
}
