use serde::Deserialize;

/// Body of the validate and rotate endpoints
#[derive(Deserialize)]
pub struct AccessTokenRequest {
    pub access_token: String,
}
