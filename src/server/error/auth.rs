use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Which kind of account a session or lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User,
    Shop,
    DeliveryMan,
}

impl std::fmt::Display for Principal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::User => "User",
            Self::Shop => "Shop",
            Self::DeliveryMan => "Delivery man",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    /// No principal of the requested kind is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("{0} not found in session")]
    NotInSession(Principal),

    /// The session references an account that no longer exists.
    ///
    /// Results in a 404 Not Found response.
    #[error("{0} {1} from session not found in database")]
    NotInDatabase(Principal, i32),

    /// The authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The message is logged only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Unknown email, wrong password or deactivated account.
    ///
    /// Results in a 401 Unauthorized response that does not reveal which.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// - `NotInSession` / `InvalidCredentials` → 401 Unauthorized
/// - `NotInDatabase` → 404 Not Found
/// - `AccessDenied` → 403 Forbidden
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotInSession(principal) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: format!("{} not logged in", principal),
                }),
            )
                .into_response(),
            Self::NotInDatabase(principal, _) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: format!("{} not found", principal),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
