//! Decision mediator: the only place where authorization is decided.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::HeaderName;
use axum::response::Response;

use gatekeep_core::{AuthzRequest, CasbinEnforcer, Decision, EnforcerRef, Result};

use super::extract::{self, Extractor, DEFAULT_SUBJECT_HEADER};
use super::layer::{AuthzLayer, AuthzService};
use super::respond::{self, RejectHandler};
use crate::obs::GatewayMetrics;

/// Immutable authorization config + engine handle.
/// Build once, then share via Arc across all requests.
pub struct Authorizer {
    enforcer: EnforcerRef,
    subject: Extractor,
    object: Extractor,
    action: Extractor,
    reject: RejectHandler,
    metrics: Option<Arc<GatewayMetrics>>,
}

impl Authorizer {
    /// All defaults.
    pub fn new(enforcer: EnforcerRef) -> Self {
        Self::builder(enforcer).build()
    }

    pub fn builder(enforcer: EnforcerRef) -> AuthorizerBuilder {
        AuthorizerBuilder::new(enforcer)
    }

    /// Load a Casbin model + CSV rule set, with default configuration.
    pub async fn from_files(model: impl AsRef<Path>, policy: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::builder_from_files(model, policy).await?.build())
    }

    /// Load a Casbin model + CSV rule set and return a builder for further options.
    /// No builder is produced when either source fails to load.
    pub async fn builder_from_files(
        model: impl AsRef<Path>,
        policy: impl AsRef<Path>,
    ) -> Result<AuthorizerBuilder> {
        let engine = CasbinEnforcer::from_files(model, policy).await?;
        Ok(AuthorizerBuilder::new(Arc::new(engine)))
    }

    /// Shared engine handle (never mutated here).
    pub fn enforcer(&self) -> EnforcerRef {
        Arc::clone(&self.enforcer)
    }

    /// Run the three extractors.
    pub fn triple(&self, req: &Request) -> AuthzRequest {
        AuthzRequest::new((self.subject)(req), (self.object)(req), (self.action)(req))
    }

    /// Query the engine exactly once for an already-derived triple.
    pub fn check(&self, triple: &AuthzRequest) -> Decision {
        let started = Instant::now();
        let decision = Decision::from_enforce(self.enforcer.enforce(triple));

        if let Some(m) = &self.metrics {
            m.authz_decisions.inc(&[("decision", decision.label())]);
            m.authz_query_duration.observe(&[], started.elapsed());
        }

        let (sub, obj, act) = (triple.subject(), triple.object(), triple.action());
        let label = decision.label();
        match &decision {
            Decision::Allowed => tracing::debug!(
                subject = %sub,
                object = %obj,
                action = %act,
                decision = label,
                "authz allowed"
            ),
            Decision::Denied => tracing::info!(
                subject = %sub,
                object = %obj,
                action = %act,
                decision = label,
                "authz denied"
            ),
            Decision::EngineError(e) => tracing::error!(
                subject = %sub,
                object = %obj,
                action = %act,
                decision = label,
                code = e.code().as_str(),
                error = %e,
                "authz engine error (fail closed)"
            ),
        }
        decision
    }

    /// Extract, then query.
    pub fn decide(&self, req: &Request) -> Decision {
        let triple = self.triple(req);
        self.check(&triple)
    }

    /// Response for a non-allowed decision; `None` when the request may proceed.
    pub fn refusal(&self, decision: &Decision, req: &Request) -> Option<Response> {
        match decision {
            Decision::Allowed => None,
            Decision::Denied => Some((self.reject)(req)),
            Decision::EngineError(_) => Some(respond::authorization_error()),
        }
    }

    pub fn layer(self) -> AuthzLayer {
        AuthzLayer::new(Arc::new(self))
    }

    /// Wrap a single service (the "next handler").
    pub fn wrap<S>(self, next: S) -> AuthzService<S> {
        AuthzService::new(next, Arc::new(self))
    }
}

/// Construction-time options. Each slot is independent of the others.
pub struct AuthorizerBuilder {
    enforcer: EnforcerRef,
    subject: Option<Extractor>,
    subject_header: HeaderName,
    object: Option<Extractor>,
    action: Option<Extractor>,
    reject: Option<RejectHandler>,
    metrics: Option<Arc<GatewayMetrics>>,
}

impl AuthorizerBuilder {
    pub fn new(enforcer: EnforcerRef) -> Self {
        Self {
            enforcer,
            subject: None,
            subject_header: HeaderName::from_static(DEFAULT_SUBJECT_HEADER),
            object: None,
            action: None,
            reject: None,
            metrics: None,
        }
    }

    pub fn subject_extractor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Request) -> String + Send + Sync + 'static,
    {
        self.subject = Some(Arc::new(f));
        self
    }

    /// Identity header for the default subject extractor.
    /// Ignored once a custom subject extractor is set.
    pub fn subject_header(mut self, name: HeaderName) -> Self {
        self.subject_header = name;
        self
    }

    pub fn object_extractor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Request) -> String + Send + Sync + 'static,
    {
        self.object = Some(Arc::new(f));
        self
    }

    pub fn action_extractor<F>(mut self, f: F) -> Self
    where
        F: Fn(&Request) -> String + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(f));
        self
    }

    pub fn reject_handler<F>(mut self, f: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        self.reject = Some(Arc::new(f));
        self
    }

    pub fn metrics(mut self, metrics: Arc<GatewayMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn build(self) -> Authorizer {
        let subject: Extractor = match self.subject {
            Some(f) => f,
            None => extract::subject_from_header(self.subject_header),
        };
        let object: Extractor = match self.object {
            Some(f) => f,
            None => Arc::new(extract::object_from_path),
        };
        let action: Extractor = match self.action {
            Some(f) => f,
            None => Arc::new(extract::action_from_method),
        };
        let reject: RejectHandler = match self.reject {
            Some(f) => f,
            None => Arc::new(respond::forbidden),
        };

        Authorizer {
            enforcer: self.enforcer,
            subject,
            object,
            action,
            reject,
            metrics: self.metrics,
        }
    }
}
