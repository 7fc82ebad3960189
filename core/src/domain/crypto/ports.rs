use crate::domain::common::entities::app_errors::CoreError;

#[cfg_attr(test, mockall::automock)]
pub trait HasherRepository: Send + Sync {
    fn hash_password(&self, password: &str) -> Result<String, CoreError>;

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}
