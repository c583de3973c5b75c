//! Top-level facade crate for gatekeep.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use gatekeep_core::*;
}

pub mod gateway {
    pub use gatekeep_gateway::*;
}
