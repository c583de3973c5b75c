//! Tower middleware wiring for `Authorizer`.

use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::response::Response;
use futures_util::future::{self, Either, Ready};
use tower::{Layer, Service};

use gatekeep_core::EnforcerRef;

use super::mediator::Authorizer;

/// Build a ready-to-use layer from an engine handle that is managed elsewhere.
pub fn authz_layer(enforcer: EnforcerRef) -> AuthzLayer {
    Authorizer::new(enforcer).layer()
}

#[derive(Clone)]
pub struct AuthzLayer {
    authorizer: Arc<Authorizer>,
}

impl AuthzLayer {
    pub fn new(authorizer: Arc<Authorizer>) -> Self {
        Self { authorizer }
    }
}

impl<S> Layer<S> for AuthzLayer {
    type Service = AuthzService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthzService::new(inner, Arc::clone(&self.authorizer))
    }
}

/// Service guarding `inner`. Exactly one of {inner, reject handler, error
/// response} produces the response for each request.
#[derive(Clone)]
pub struct AuthzService<S> {
    inner: S,
    authorizer: Arc<Authorizer>,
}

impl<S> AuthzService<S> {
    pub fn new(inner: S, authorizer: Arc<Authorizer>) -> Self {
        Self { inner, authorizer }
    }
}

impl<S> Service<Request> for AuthzService<S>
where
    S: Service<Request, Response = Response>,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Either<S::Future, Ready<Result<Response, S::Error>>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let decision = self.authorizer.decide(&req);
        match self.authorizer.refusal(&decision, &req) {
            None => Either::Left(self.inner.call(req)),
            Some(resp) => Either::Right(future::ready(Ok(resp))),
        }
    }
}
