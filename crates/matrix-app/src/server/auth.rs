//! Caller credential extraction
//!
//! The token is not verified here. Authentication belongs to the service
//! that issued it; this server only requires one to be present so it can be
//! forwarded to the stats service on the caller's behalf.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::Error;

/// Opaque bearer token taken from the `Authorization` header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerCredential(pub String);

impl BearerCredential {
    /// Parse `Bearer <token>`; anything else yields `None`
    pub fn parse(header: &str) -> Option<Self> {
        let mut parts = header.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some("Bearer"), Some(token), None) if !token.is_empty() => {
                Some(Self(token.to_string()))
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BearerCredential
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| Error::Unauthorized("access token required".into()))?
            .to_str()
            .map_err(|_| Error::Unauthorized("Authorization header is not valid text".into()))?;

        Self::parse(header).ok_or_else(|| {
            Error::Unauthorized("invalid token format, expected: Bearer <token>".into())
        })
    }
}
