use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    api::AppState,
    error::AppError,
    services::{Session, SessionId, SESSION_HEADER},
};

/// Extractor for the signed-in session named by the `x-session-id` header.
/// Rejects with 401 when the header is missing or the session is unknown.
pub struct CurrentSession(pub Session);

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Not signed in".to_string()))?;

        let id: SessionId = header.parse()?;
        let session = state.sessions.get(id).await?;
        Ok(CurrentSession(session))
    }
}
