use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 255, message = "first_name must not be empty"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "last_name must not be empty"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(email: &str, password: &str) -> RegisterUserRequest {
        RegisterUserRequest {
            first_name: "Alice".to_string(),
            last_name: "Johnson".to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_registration_passes() {
        assert!(register_request("alice@example.com", "password123")
            .validate()
            .is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        assert!(register_request("not-an-email", "password123")
            .validate()
            .is_err());
    }

    #[test]
    fn short_password_is_rejected() {
        assert!(register_request("alice@example.com", "short")
            .validate()
            .is_err());
    }

    #[test]
    fn login_requires_a_password() {
        let request = LoginRequest {
            email: "alice@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
