//! Wire DTOs for the auth service (GoTrue-style endpoints).

use chartdesk_core::auth::{AuthSession, UserIdentity};
use serde::Deserialize;

/// The user object embedded in auth responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDto {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

impl From<UserDto> for UserIdentity {
    fn from(dto: UserDto) -> Self {
        UserIdentity {
            id: dto.id,
            email: dto.email.unwrap_or_default(),
        }
    }
}

/// Response of the password-grant token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponseDto {
    pub access_token: String,
    pub user: UserDto,
}

impl From<TokenResponseDto> for AuthSession {
    fn from(dto: TokenResponseDto) -> Self {
        AuthSession {
            user: dto.user.into(),
            access_token: dto.access_token,
        }
    }
}
