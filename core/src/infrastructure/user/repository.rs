use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user::{entities::User, ports::UserRepository, value_objects::CreateUserRequest},
    },
    entity::users::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, CoreError> {
        let user = User::new(request);

        let active_model = ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            email: Set(user.email.clone()),
            hashed_password: Set(user.hashed_password.clone()),
            created_at: Set(user.created_at.fixed_offset()),
            updated_at: Set(user.updated_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create user: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(User::from(created))
    }

    async fn get_by_email(&self, email: String) -> Result<Option<User>, CoreError> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map(|model| model.map(User::from))
            .map_err(|e| {
                error!("Failed to fetch user by email: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, CoreError> {
        Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map(|model| model.map(User::from))
            .map_err(|e| {
                error!("Failed to fetch user by id: {}", e);
                CoreError::InternalServerError
            })
    }
}
