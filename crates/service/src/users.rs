use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, Set};
use tracing::debug;

use models::user;

use crate::errors::ServiceError;

/// Field set accepted by user create and update.
/// Updates overwrite every field unconditionally; there is no merge.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
    async fn create(&self, fields: UserFields) -> Result<user::Model, ServiceError>;
    async fn update(&self, id: i32, fields: UserFields) -> Result<Option<user::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn create(&self, fields: UserFields) -> Result<user::Model, ServiceError> {
        // TODO: hash the password (argon2) instead of persisting it verbatim.
        let am = user::ActiveModel {
            username: Set(fields.username),
            email: Set(fields.email),
            hashed_password: Set(fields.password),
            ..Default::default()
        };
        let created = am.insert(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        debug!(id = created.id, "inserted user");
        Ok(created)
    }

    async fn update(&self, id: i32, fields: UserFields) -> Result<Option<user::Model>, ServiceError> {
        let found = match user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?
        {
            Some(m) => m,
            None => return Ok(None),
        };
        let mut am: user::ActiveModel = found.into();
        am.username = Set(fields.username);
        am.email = Set(fields.email);
        am.hashed_password = Set(fields.password);
        let updated = am.update(&self.db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        let found = match user::Entity::find_by_id(id)
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
