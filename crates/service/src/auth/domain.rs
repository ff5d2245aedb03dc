use serde::{Deserialize, Serialize};

/// Subject placed in every admin token.
pub const ADMIN_SUBJECT: &str = "admin";

/// Login input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    pub password: String,
}

/// JWT claims carried by admin tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Login result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedToken {
    pub token: String,
    /// Seconds until the token expires.
    pub expires_in: u64,
}
