//! Session cookie presence check.
//!
//! Only the presence of a cookie named [`SESSION_COOKIE`] is checked; the
//! session itself is never looked up.

use axum::extract::FromRequestParts;
use axum::http::header::COOKIE;
use axum::http::request::Parts;

use crate::handler::{Error, ErrorKind};

/// Tracing target for session checks.
const TRACING_TARGET: &str = "keyrace_server::extract::session";

/// Name of the cookie that marks an authenticated request.
pub const SESSION_COOKIE: &str = "session";

/// Returns `true` if the raw `Cookie` header carries a cookie named `session`.
///
/// Pairs are separated by `"; "` and names end at the first `=`.
pub fn has_session_cookie(header: &str) -> bool {
    header
        .split("; ")
        .filter_map(|pair| pair.split('=').next())
        .any(|name| name == SESSION_COOKIE)
}

/// Extractor that only succeeds when the request carries a session cookie.
///
/// Rejects with `401 missing_session` when there is no `Cookie` header at all
/// and with `401 unauthorized` when none of the cookies is the session.
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionCookie;

impl<S> FromRequestParts<S> for SessionCookie
where
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(COOKIE) else {
            tracing::debug!(target: TRACING_TARGET, "request has no cookie header");
            return Err(ErrorKind::MissingSession.into_error());
        };

        let Ok(header) = header.to_str() else {
            tracing::debug!(target: TRACING_TARGET, "cookie header is not valid text");
            return Err(ErrorKind::Unauthorized.with_context("Malformed cookie header"));
        };

        if !has_session_cookie(header) {
            tracing::debug!(target: TRACING_TARGET, "cookie header has no session");
            return Err(ErrorKind::Unauthorized.into_error());
        }

        Ok(Self)
    }
}

impl aide::OperationInput for SessionCookie {}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, Request};

    use super::*;

    async fn extract(cookie: Option<&'static str>) -> Result<SessionCookie, Error<'static>> {
        let mut request = Request::builder().uri("/");
        if let Some(cookie) = cookie {
            request = request.header(COOKIE, HeaderValue::from_static(cookie));
        }

        let (mut parts, ()) = request.body(()).expect("valid request").into_parts();
        SessionCookie::from_request_parts(&mut parts, &()).await
    }

    #[test]
    fn session_cookie_detection() {
        assert!(has_session_cookie("session=abc"));
        assert!(has_session_cookie("theme=dark; session=abc; lang=en"));
        assert!(has_session_cookie("session"));
        assert!(!has_session_cookie(""));
        assert!(!has_session_cookie("theme=dark"));
        assert!(!has_session_cookie("sessions=abc"));
        assert!(!has_session_cookie("theme=session"));
    }

    #[test]
    fn pairs_must_be_separated_by_semicolon_space() {
        assert!(!has_session_cookie("theme=dark;session=abc"));
    }

    #[tokio::test]
    async fn missing_header_is_missing_session() {
        let error = extract(None).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingSession);
    }

    #[tokio::test]
    async fn foreign_cookies_are_unauthorized() {
        let error = extract(Some("theme=dark")).await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Unauthorized);
    }

    #[tokio::test]
    async fn session_cookie_is_accepted() {
        assert!(extract(Some("theme=dark; session=abc")).await.is_ok());
    }
}
