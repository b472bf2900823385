use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::{error::AppError, state::AppState};

pub const ANONYMOUS_USER: &str = "anonymousUser";

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// The principal that audit columns and audit events are attributed to.
#[derive(Debug, Clone)]
pub struct Auditor {
    login: String,
}

impl Auditor {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(ANONYMOUS_USER)
    }

    pub fn login(&self) -> &str {
        &self.login
    }
}

impl FromRequestParts<AppState> for Auditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
            return Ok(Auditor::anonymous());
        };

        let auth_str = auth_header.to_str().map_err(|_| AppError::Unauthorized)?;

        let Some(token) = auth_str.strip_prefix("Bearer ").map(str::trim) else {
            return Err(AppError::Unauthorized);
        };

        let Some(secret) = state.config.jwt_secret.as_deref() else {
            tracing::warn!("bearer token presented but JWT_SECRET is not set");
            return Err(AppError::Unauthorized);
        };

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "rejected bearer token");
            AppError::Unauthorized
        })?;

        Ok(Auditor::new(decoded.claims.sub))
    }
}
