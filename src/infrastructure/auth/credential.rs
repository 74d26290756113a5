use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use std::convert::Infallible;

const BEARER_PREFIX: &str = "Bearer ";

/// Opaque access token taken from the `Authorization` header.
///
/// Never rejects: a missing or unreadable header yields an empty token,
/// which resolves to no user and is reported as not found downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential(pub String);

impl Credential {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let token = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(|v| strip_scheme(v).trim())
            .unwrap_or_default();
        Self(token.to_string())
    }

    pub fn token(&self) -> &str {
        &self.0
    }
}

/// Drop a leading `Bearer ` in any letter case.
fn strip_scheme(value: &str) -> &str {
    match value.get(..BEARER_PREFIX.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER_PREFIX) => &value[BEARER_PREFIX.len()..],
        _ => value,
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Credential
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
