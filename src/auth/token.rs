use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
///
/// Unknown claims in an incoming token (issuer, audience, custom fields) are
/// ignored during decoding.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token, the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Generates a JWT for a given user ID, signed with the configured secret.
///
/// The token is set to expire in 24 hours. The secret comes from
/// `AuthenticationSettings`; it is passed explicitly rather than read from
/// the environment.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(24))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a JWT string against the configured secret and decodes its claims.
///
/// Signature and expiration are validated. Issuer and audience are explicitly
/// not: a token signed with the right key is accepted no matter who issued it
/// or for whom.
///
/// Returns `AppError::Unauthorized` if the token is malformed, its signature
/// is invalid, or it has expired.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::default();
    validation.validate_aud = false;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation_and_verification() {
        let user_id = 1;
        let token = generate_token(user_id, "test_secret").unwrap();
        let claims = verify_token(&token, "test_secret").unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret("test_secret".as_bytes()),
        )
        .unwrap();

        match verify_token(&expired_token, "test_secret") {
            Err(AppError::Unauthorized(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature"),
                    "unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_token_signed_with_different_key_is_rejected() {
        let token = generate_token(3, "one_secret").unwrap();

        match verify_token(&token, "a_completely_different_secret") {
            Err(AppError::Unauthorized(msg)) => {
                // jsonwebtoken reports InvalidSignature when the key does not
                // match, or InvalidToken for a generally malformed JWT.
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "unexpected error message for bad signature: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_issuer_and_audience_claims_are_ignored() {
        // A token carrying iss/aud claims must still verify as long as the
        // signature matches.
        #[derive(Serialize)]
        struct ForeignClaims {
            sub: i32,
            exp: usize,
            iss: String,
            aud: String,
        }

        let expiration = chrono::Utc::now()
            .checked_add_signed(chrono::Duration::hours(1))
            .expect("valid timestamp")
            .timestamp() as usize;

        let foreign = ForeignClaims {
            sub: 4,
            exp: expiration,
            iss: "some-other-issuer".to_string(),
            aud: "some-other-audience".to_string(),
        };
        let token = encode(
            &Header::default(),
            &foreign,
            &EncodingKey::from_secret("test_secret".as_bytes()),
        )
        .unwrap();

        let claims = verify_token(&token, "test_secret").unwrap();
        assert_eq!(claims.sub, 4);
    }
}
