use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by an access token. `sub` is the user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}
