//! Casbin-backed `Enforcer`.
//!
//! Loads a Casbin model (`.conf`) and a CSV rule file once at startup. Every
//! query afterwards is a read-only `CoreApi::enforce` call.

use std::path::Path;

use casbin::{CoreApi, DefaultModel, FileAdapter, MgmtApi};

use crate::enforcer::Enforcer;
use crate::error::{GatekeepError, Result};
use crate::request::AuthzRequest;

/// Casbin enforcer behind the `Enforcer` seam.
/// Construct once at startup, then share via Arc.
pub struct CasbinEnforcer {
    inner: casbin::Enforcer,
}

fn ensure_file(path: &Path, what: &str) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(m) if m.is_file() => Ok(()),
        Ok(_) => Err(GatekeepError::Load(format!("{what} {} is not a file", path.display()))),
        Err(e) => Err(GatekeepError::Load(format!("read {what} {} failed: {e}", path.display()))),
    }
}

impl CasbinEnforcer {
    /// Wrap an enforcer built elsewhere (custom adapter, in-memory model, ...).
    pub fn new(inner: casbin::Enforcer) -> Self {
        Self { inner }
    }

    /// Load model definition and rule set from files.
    pub async fn from_files(
        model_path: impl AsRef<Path>,
        policy_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let model_path = model_path.as_ref();
        let policy_path = policy_path.as_ref();
        ensure_file(model_path, "model")?;
        ensure_file(policy_path, "policy")?;

        let model = DefaultModel::from_file(model_path).await.map_err(|e| {
            GatekeepError::InvalidModel(format!("{}: {e}", model_path.display()))
        })?;
        let adapter = FileAdapter::new(policy_path.to_path_buf());
        let inner = casbin::Enforcer::new(model, adapter).await.map_err(|e| {
            GatekeepError::InvalidPolicy(format!("{}: {e}", policy_path.display()))
        })?;

        tracing::debug!(
            model = %model_path.display(),
            policy = %policy_path.display(),
            rules = inner.get_policy().len(),
            groupings = inner.get_grouping_policy().len(),
            "casbin enforcer loaded"
        );
        Ok(Self::new(inner))
    }

    pub fn inner(&self) -> &casbin::Enforcer {
        &self.inner
    }

    pub fn rule_count(&self) -> usize {
        self.inner.get_policy().len()
    }
}

impl Enforcer for CasbinEnforcer {
    fn enforce(&self, req: &AuthzRequest) -> Result<bool> {
        CoreApi::enforce(&self.inner, (req.subject(), req.object(), req.action()))
            .map_err(|e| GatekeepError::Evaluation(e.to_string()))
    }
}
