use std::net::SocketAddr;

use axum::http::HeaderName;
use serde::Deserialize;
use gatekeep_core::error::{GatekeepError, Result};

use crate::authz::extract::DEFAULT_SUBJECT_HEADER;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatekeepConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    pub authz: AuthzSection,
}

impl GatekeepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(GatekeepError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.authz.validate()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|_| {
            GatekeepError::BadRequest(format!(
                "gateway.listen must be a valid socket address: {}",
                self.listen
            ))
        })
    }
}

fn default_listen() -> String {
    "0.0.0.0:8081".into()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthzSection {
    /// Casbin model definition (`.conf`).
    pub model: String,

    /// Casbin CSV rule set.
    pub policy: String,

    #[serde(default = "default_subject_header")]
    pub subject_header: String,
}

impl AuthzSection {
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(GatekeepError::BadRequest("authz.model must not be empty".into()));
        }
        if self.policy.trim().is_empty() {
            return Err(GatekeepError::BadRequest("authz.policy must not be empty".into()));
        }
        self.subject_header_name()?;
        Ok(())
    }

    pub fn subject_header_name(&self) -> Result<HeaderName> {
        HeaderName::from_bytes(self.subject_header.as_bytes()).map_err(|_| {
            GatekeepError::BadRequest(format!(
                "authz.subject_header is not a valid header name: {}",
                self.subject_header
            ))
        })
    }
}

fn default_subject_header() -> String {
    DEFAULT_SUBJECT_HEADER.into()
}
