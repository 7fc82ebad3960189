use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::entities::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Identity {
    User(User),
}

impl Identity {
    pub fn user_id(&self) -> Uuid {
        match self {
            Identity::User(user) => user.id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}
