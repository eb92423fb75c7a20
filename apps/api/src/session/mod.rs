//! Per-session "current analysis" storage.
//!
//! Each session holds at most one `AnalysisResult`, replaced wholesale by every
//! new analysis (last write wins). Handlers receive the session id explicitly
//! and load or store the record through an `AnalysisStore`.

pub mod store;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderValue},
};
use uuid::Uuid;

pub use store::{AnalysisStore, MemoryAnalysisStore, RedisAnalysisStore};

pub const SESSION_HEADER: &str = "x-session-id";
pub const SESSION_COOKIE: &str = "skillmap_session";

/// Session id from the `x-session-id` header or the `skillmap_session` cookie.
/// `None` when the client sent neither, or sent something that isn't a UUID.
#[derive(Debug, Clone, Copy)]
pub struct MaybeSession(pub Option<Uuid>);

impl MaybeSession {
    /// Existing session id, or a freshly minted one.
    pub fn or_new(self) -> Uuid {
        self.0.unwrap_or_else(Uuid::new_v4)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeSession
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let from_header = parts
            .headers
            .get(SESSION_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| Uuid::parse_str(v.trim()).ok());

        let session = from_header.or_else(|| {
            parts
                .headers
                .get_all(header::COOKIE)
                .iter()
                .filter_map(|v| v.to_str().ok())
                .find_map(session_from_cookie_header)
        });

        Ok(MaybeSession(session))
    }
}

fn session_from_cookie_header(cookies: &str) -> Option<Uuid> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE)
            .then(|| Uuid::parse_str(value.trim()).ok())
            .flatten()
    })
}

/// `Set-Cookie` value binding the client to `session_id`.
pub fn session_cookie(session_id: Uuid, max_age_secs: u64) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={session_id}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}"
    ))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> MaybeSession {
        let (mut parts, _) = request.into_parts();
        MaybeSession::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_session_from_header() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header(SESSION_HEADER, id.to_string())
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.0, Some(id));
    }

    #[tokio::test]
    async fn test_session_from_cookie() {
        let id = Uuid::new_v4();
        let request = Request::builder()
            .header(header::COOKIE, format!("theme=dark; {SESSION_COOKIE}={id}; other=1"))
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.0, Some(id));
    }

    #[tokio::test]
    async fn test_invalid_or_missing_session_is_none() {
        let request = Request::builder()
            .header(SESSION_HEADER, "not-a-uuid")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.0, None);

        let request = Request::builder().body(()).unwrap();
        assert_eq!(extract(request).await.0, None);
    }

    #[test]
    fn test_session_cookie_round_trips_through_parser() {
        let id = Uuid::new_v4();
        let cookie = session_cookie(id, 60).unwrap();
        let cookie = cookie.to_str().unwrap();
        assert!(cookie.contains("HttpOnly"));
        assert_eq!(session_from_cookie_header(cookie), Some(id));
    }
}
