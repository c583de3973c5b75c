//! Three-way decision outcome.

use crate::error::{GatekeepError, Result};

/// Outcome of a single engine query.
///
/// `Denied` means the policy said no; `EngineError` means the engine could not
/// decide at all. Callers must never treat the two the same way.
#[derive(Debug)]
pub enum Decision {
    Allowed,
    Denied,
    EngineError(GatekeepError),
}

impl Decision {
    /// Interpret an engine result. An error wins over any boolean.
    pub fn from_enforce(res: Result<bool>) -> Self {
        match res {
            Ok(true) => Decision::Allowed,
            Ok(false) => Decision::Denied,
            Err(e) => Decision::EngineError(e),
        }
    }

    /// Stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Allowed => "allowed",
            Decision::Denied => "denied",
            Decision::EngineError(_) => "error",
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allowed)
    }
}
