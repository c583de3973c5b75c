//! Shared application state for the gateway.
//!
//! Startup errors (unreadable model/policy, bad header name) are returned as
//! `Result` so `main` can report them instead of panicking.

use std::sync::Arc;

use axum::http::HeaderName;
use gatekeep_core::error::Result;

use crate::authz::{Authorizer, AuthzLayer};
use crate::config::GatekeepConfig;
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    authorizer: Arc<Authorizer>,
    metrics: Arc<GatewayMetrics>,
}

struct AppStateInner {
    cfg: GatekeepConfig,
    subject_header: HeaderName,
}

impl AppState {
    /// Build application state: load the Casbin model/policy named by `cfg.authz`.
    pub async fn new(cfg: GatekeepConfig) -> Result<Self> {
        let metrics = Arc::new(GatewayMetrics::default());
        let subject_header = cfg.authz.subject_header_name()?;
        let authorizer = Authorizer::builder_from_files(&cfg.authz.model, &cfg.authz.policy)
            .await?
            .subject_header(subject_header)
            .metrics(Arc::clone(&metrics))
            .build();

        tracing::info!(
            model = %cfg.authz.model,
            policy = %cfg.authz.policy,
            subject_header = %cfg.authz.subject_header,
            "authorizer ready"
        );

        Self::with_authorizer(cfg, authorizer, metrics)
    }

    /// Use an authorizer built elsewhere (custom engine or options).
    pub fn with_authorizer(
        cfg: GatekeepConfig,
        authorizer: Authorizer,
        metrics: Arc<GatewayMetrics>,
    ) -> Result<Self> {
        let subject_header = cfg.authz.subject_header_name()?;
        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, subject_header }),
            authorizer: Arc::new(authorizer),
            metrics,
        })
    }

    pub fn cfg(&self) -> &GatekeepConfig {
        &self.inner.cfg
    }

    /// Identity header, parsed once from `authz.subject_header`.
    pub fn subject_header(&self) -> &HeaderName {
        &self.inner.subject_header
    }

    pub fn authorizer(&self) -> Arc<Authorizer> {
        Arc::clone(&self.authorizer)
    }

    pub fn authz_layer(&self) -> AuthzLayer {
        AuthzLayer::new(self.authorizer())
    }

    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }
}
