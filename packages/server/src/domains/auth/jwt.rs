use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domains::users::models::Role;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (user id as string)
    pub user_id: Uuid, // User UUID
    pub role: Role,    // Account role
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create new JWT service with signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a new JWT token for a user
    ///
    /// Token expires after 7 days
    pub fn create_token(&self, user_id: Uuid, role: Role) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode a JWT token
    ///
    /// Returns claims if token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_verify_token() {
        let service = JwtService::new("test_secret_key");
        let user_id = Uuid::new_v4();

        let token = service.create_token(user_id, Role::Provider).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, Role::Provider);
    }

    #[test]
    fn test_invalid_token() {
        let service = JwtService::new("test_secret_key");
        let result = service.verify_token("invalid_token");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let service1 = JwtService::new("secret1");
        let service2 = JwtService::new("secret2");

        let user_id = Uuid::new_v4();
        let token = service1.create_token(user_id, Role::Customer).unwrap();

        // Token created with secret1 should not verify with secret2
        let result = service2.verify_token(&token);
        assert!(result.is_err());
    }

    #[test]
    fn test_token_expires_in_seven_days() {
        let service = JwtService::new("test_secret_key");
        let user_id = Uuid::new_v4();

        let token = service.create_token(user_id, Role::Customer).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = chrono::Utc::now().timestamp();
        let expires_in = claims.exp - now;
        assert!(expires_in > 6 * 24 * 3600); // At least 6 days
        assert!(expires_in <= 7 * 24 * 3600); // At most 7 days
    }
}
