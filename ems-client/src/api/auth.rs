//! Auth endpoints (unauthenticated)

use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

use super::ResourceClient;
use crate::error::ClientResult;

impl ResourceClient {
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        self.http().post_unauth("/auth/login", credentials).await
    }

    pub async fn register(&self, user_data: &RegisterRequest) -> ClientResult<RegisterResponse> {
        self.http().post_unauth("/auth/register", user_data).await
    }
}
