//! gatekeep gateway library entry.
//!
//! This crate wires the authorization layer (extractors, decision mediator,
//! response policy), configuration, metrics and demo routes into an axum
//! stack. It is consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod authz;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod services;
