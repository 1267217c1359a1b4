use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Access token plus its companion refresh token
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// HS256 access token signer/verifier and refresh token generator
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_ttl: Duration,
}

impl TokenService {
    pub fn with_hs256(secret: &[u8], access_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            access_ttl,
        }
    }

    /// Clock skew tolerance in seconds applied to `exp`
    pub fn with_leeway(mut self, leeway_secs: u64) -> Self {
        self.validation.leeway = leeway_secs;
        self
    }

    pub fn access_ttl(&self) -> Duration {
        self.access_ttl
    }

    #[track_caller]
    pub fn sign(&self, claims: &Claims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Sign a fresh access token for `user_id`, valid from now
    #[track_caller]
    pub fn issue_access_token(&self, user_id: Uuid) -> AuthErrorResult<String> {
        self.sign(&Claims::new(user_id, Utc::now(), self.access_ttl))
    }

    /// Opaque, random refresh token
    pub fn issue_refresh_token(&self) -> String {
        Uuid::new_v4().to_string()
    }

    #[track_caller]
    pub fn issue_pair(&self, user_id: Uuid) -> AuthErrorResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access_token(user_id)?,
            refresh_token: self.issue_refresh_token(),
        })
    }

    /// Check signature and expiry. Expiry is reported as `TokenExpired`.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        self.decode_with(token, &self.validation)
    }

    /// Check the signature only, accepting tokens past their expiry.
    #[track_caller]
    pub fn verify_signature(&self, token: &str) -> AuthErrorResult<Claims> {
        let mut validation = self.validation.clone();
        validation.validate_exp = false;
        self.decode_with(token, &validation)
    }

    #[track_caller]
    fn decode_with(&self, token: &str, validation: &Validation) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, validation).map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired {
                    location: ErrorLocation::from(Location::caller()),
                },
                _ => AuthError::JwtDecode {
                    source: e,
                    location: ErrorLocation::from(Location::caller()),
                },
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
