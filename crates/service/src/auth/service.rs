use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation};
use rand::rngs::OsRng;
use tracing::{info, instrument, warn};

use super::domain::{Claims, IssuedToken, LoginInput, ADMIN_SUBJECT};
use super::errors::AuthError;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub admin_password: String,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
}

/// Issues and checks admin tokens, independent of the web framework.
pub struct AdminAuth {
    password_hash: String,
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_ttl_secs: u64,
}

impl AdminAuth {
    /// Hash the configured password; the plain text is not retained.
    pub fn new(cfg: AuthConfig) -> Result<Self, AuthError> {
        if cfg.admin_password.is_empty() {
            return Err(AuthError::Validation("admin password is empty".into()));
        }
        if cfg.jwt_secret.is_empty() {
            return Err(AuthError::Validation("jwt secret is empty".into()));
        }
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(cfg.admin_password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();
        Ok(Self {
            password_hash,
            encoding: EncodingKey::from_secret(cfg.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
            token_ttl_secs: cfg.token_ttl_secs,
        })
    }

    /// Verify the admin password and issue a token.
    #[instrument(skip_all)]
    pub fn login(&self, input: LoginInput) -> Result<IssuedToken, AuthError> {
        let parsed = PasswordHash::new(&self.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            warn!("admin login rejected");
            return Err(AuthError::Unauthorized);
        }
        let issued = self.issue()?;
        info!(expires_in = issued.expires_in, "admin login");
        Ok(issued)
    }

    /// Sign a fresh HS256 token for the admin subject.
    pub fn issue(&self) -> Result<IssuedToken, AuthError> {
        let iat = Utc::now().timestamp();
        let ttl = i64::try_from(self.token_ttl_secs).unwrap_or(i64::MAX);
        let claims = Claims { sub: ADMIN_SUBJECT.into(), iat, exp: iat.saturating_add(ttl) };
        let token = encode(&JwtHeader::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(IssuedToken { token, expires_in: self.token_ttl_secs })
    }

    /// Check signature, expiry and subject.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::MissingToken);
        }
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        let data = decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|e| AuthError::TokenError(e.to_string()))?;
        if data.claims.sub != ADMIN_SUBJECT {
            return Err(AuthError::Unauthorized);
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AdminAuth {
        AdminAuth::new(AuthConfig {
            admin_password: "Passw0rd!".into(),
            jwt_secret: "test-secret".into(),
            token_ttl_secs: 3600,
        })
        .expect("auth init")
    }

    #[test]
    fn login_issues_verifiable_token() {
        let a = auth();
        let issued = a.login(LoginInput { password: "Passw0rd!".into() }).unwrap();
        assert_eq!(issued.expires_in, 3600);
        let claims = a.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, ADMIN_SUBJECT);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_password_rejected() {
        let a = auth();
        assert!(matches!(a.login(LoginInput { password: "nope".into() }), Err(AuthError::Unauthorized)));
    }

    #[test]
    fn expired_token_rejected() {
        let a = auth();
        let past = Utc::now().timestamp() - 120;
        let claims = Claims { sub: ADMIN_SUBJECT.into(), iat: past - 60, exp: past };
        let token = encode(&JwtHeader::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap();
        assert!(matches!(a.verify(&token), Err(AuthError::TokenError(_))));
    }

    #[test]
    fn foreign_signature_and_subject_rejected() {
        let a = auth();
        let exp = Utc::now().timestamp() + 600;
        let forged = encode(
            &JwtHeader::default(),
            &Claims { sub: ADMIN_SUBJECT.into(), iat: 0, exp },
            &EncodingKey::from_secret(b"other-secret"),
        )
        .unwrap();
        assert!(matches!(a.verify(&forged), Err(AuthError::TokenError(_))));

        let visitor = encode(
            &JwtHeader::default(),
            &Claims { sub: "visitor".into(), iat: 0, exp },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();
        assert!(matches!(a.verify(&visitor), Err(AuthError::Unauthorized)));
        assert!(matches!(a.verify(""), Err(AuthError::MissingToken)));
    }

    #[test]
    fn empty_config_rejected() {
        let res = AdminAuth::new(AuthConfig { admin_password: String::new(), jwt_secret: "s".into(), token_ttl_secs: 1 });
        assert!(matches!(res, Err(AuthError::Validation(_))));
    }
}
