use crate::state::{AppState, SessionContext};
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub user_id: Option<i32>,
    pub username: Option<String>,
    pub exp: usize,
}

impl Claims {
    pub fn into_session_context(self) -> SessionContext {
        SessionContext {
            session_key: format!("user:{}", self.sub),
            user_id: self.user_id,
            username: self.username,
        }
    }
}

fn bearer_claims(headers: &HeaderMap, secret: &[u8]) -> Option<Claims> {
    let auth = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = auth.strip_prefix("Bearer ")?;
    match decode::<Claims>(token, &DecodingKey::from_secret(secret), &Validation::default()) {
        Ok(data) => Some(data.claims),
        Err(e) => {
            tracing::debug!("Ignoring invalid bearer token: {}", e);
            None
        }
    }
}

/// Resolves the caller's session: a valid bearer token when `JWT_SECRET` is
/// configured, else the `x-session-id` header, else the shared anonymous
/// session. Never rejects a request.
///
/// Token subjects and header ids live in separate key spaces (`user:` and
/// `device:`), so a header can never name an authenticated session.
pub fn resolve_session(headers: &HeaderMap, jwt_secret: Option<&[u8]>) -> SessionContext {
    if let Some(claims) = jwt_secret.and_then(|secret| bearer_claims(headers, secret)) {
        return claims.into_session_context();
    }

    headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(|id| SessionContext {
            session_key: format!("device:{}", id),
            ..SessionContext::default()
        })
        .unwrap_or_else(SessionContext::anonymous)
}

pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = resolve_session(request.headers(), state.config.jwt_secret.as_deref());
    request.extensions_mut().insert(session);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-secret";

    fn token_for(sub: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            user_id: Some(7),
            username: Some("Nitin".to_string()),
            exp: 4_102_444_800, // 2100-01-01
        };
        encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap()
    }

    #[test]
    fn test_bearer_token_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token_for("user-7"))).unwrap(),
        );
        headers.insert(SESSION_HEADER, HeaderValue::from_static("device-1"));

        let session = resolve_session(&headers, Some(SECRET));
        assert_eq!(session.session_key, "user:user-7");
        assert_eq!(session.username.as_deref(), Some("Nitin"));
    }

    #[test]
    fn test_token_ignored_without_secret() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token_for("user-7"))).unwrap(),
        );
        headers.insert(SESSION_HEADER, HeaderValue::from_static("device-1"));

        let session = resolve_session(&headers, None);
        assert_eq!(session.session_key, "device:device-1");
        assert!(session.user_id.is_none());
    }

    #[test]
    fn test_header_cannot_name_a_token_subject() {
        let mut authed = HeaderMap::new();
        authed.insert(
            header::AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", token_for("user-7"))).unwrap(),
        );
        let mut spoofed = HeaderMap::new();
        spoofed.insert(SESSION_HEADER, HeaderValue::from_static("user-7"));

        let real = resolve_session(&authed, Some(SECRET));
        let fake = resolve_session(&spoofed, Some(SECRET));
        assert_ne!(real.session_key, fake.session_key);

        spoofed.insert(SESSION_HEADER, HeaderValue::from_static("user:user-7"));
        let fake = resolve_session(&spoofed, Some(SECRET));
        assert_ne!(real.session_key, fake.session_key);
    }

    #[test]
    fn test_bad_token_falls_back_to_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer nope"));
        let session = resolve_session(&headers, Some(SECRET));
        assert_eq!(session.session_key, "anonymous");
    }
}
