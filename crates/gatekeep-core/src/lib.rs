//! gatekeep core: transport-agnostic authorization primitives.
//!
//! This crate defines the request triple, the three-way decision outcome, the
//! `Enforcer` seam every policy engine plugs into, and a Casbin-backed
//! implementation of it. It carries no HTTP dependencies so it can be reused
//! outside the gateway.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. All fallible paths
//! surface as `GatekeepError`/`Result` so a bad rule file or a faulty query
//! never takes the process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod decision;
pub mod enforcer;
pub mod engine;
pub mod error;
pub mod request;

pub use decision::Decision;
pub use enforcer::{Enforcer, EnforcerRef};
pub use engine::CasbinEnforcer;
/// Shared result type.
pub use error::{ErrorCode, GatekeepError, Result};
pub use request::AuthzRequest;
