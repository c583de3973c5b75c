//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;

use gatekeep_core::error::{GatekeepError, Result};

pub use schema::{AuthzSection, GatekeepConfig, GatewaySection};

pub fn load_from_file(path: &str) -> Result<GatekeepConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| GatekeepError::Load(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatekeepConfig> {
    let cfg: GatekeepConfig = serde_yaml::from_str(s)
        .map_err(|e| GatekeepError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
