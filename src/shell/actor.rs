use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode, request::Parts};

use crate::shared::core::primitives::RequestContext;

/// Header carrying the authenticated person, set by the gateway in front of the service.
pub const PERSON_ID_HEADER: &str = "x-person-id";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor(pub String);

impl Actor {
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        headers
            .get(PERSON_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| Actor(value.to_string()))
    }

    pub fn context(&self) -> RequestContext {
        RequestContext::now(self.0.clone())
    }
}

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Actor::from_headers(&parts.headers).ok_or(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod actor_tests {
    use super::*;
    use axum::http::HeaderValue;
    use rstest::rstest;

    #[rstest]
    #[case(Some("person-A"), Some("person-A"))]
    #[case(Some("  person-A "), Some("person-A"))]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn it_should_read_the_person_header(
        #[case] header: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let mut headers = HeaderMap::new();
        if let Some(value) = header {
            headers.insert(PERSON_ID_HEADER, HeaderValue::from_str(value).unwrap());
        }
        assert_eq!(
            Actor::from_headers(&headers),
            expected.map(|id| Actor(id.to_string()))
        );
    }

    #[rstest]
    fn it_should_build_a_request_context_for_the_actor() {
        let context = Actor("person-A".into()).context();
        assert_eq!(context.person_id, "person-A");
    }
}
