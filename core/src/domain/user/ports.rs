use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::CreateUserRequest},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_id(&self, id: Uuid) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;
}
