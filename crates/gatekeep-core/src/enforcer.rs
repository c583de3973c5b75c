//! Policy engine seam.

use std::sync::Arc;

use crate::error::Result;
use crate::request::AuthzRequest;

/// A policy-decision engine.
///
/// Queried through `&self` from many requests at once; implementations own
/// whatever internal synchronization they need.
pub trait Enforcer: Send + Sync {
    /// `Ok(true)` permits, `Ok(false)` denies, `Err` means no decision could be made.
    fn enforce(&self, req: &AuthzRequest) -> Result<bool>;
}

/// Shared engine handle.
pub type EnforcerRef = Arc<dyn Enforcer>;

impl<F> Enforcer for F
where
    F: Fn(&AuthzRequest) -> Result<bool> + Send + Sync,
{
    fn enforce(&self, req: &AuthzRequest) -> Result<bool> {
        self(req)
    }
}
