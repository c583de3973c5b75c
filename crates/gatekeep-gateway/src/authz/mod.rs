//! Request authorization layer.
//!
//! Derives a `(subject, object, action)` triple from each request, asks the
//! configured `Enforcer`, and either forwards the request or answers it:
//! - allowed -> next service, untouched
//! - denied  -> configurable reject handler (default 403 "Forbidden")
//! - engine error -> fixed 500 "Authorization error" (fail closed)

pub mod extract;
pub mod layer;
pub mod mediator;
pub mod respond;

pub use extract::Extractor;
pub use layer::{authz_layer, AuthzLayer, AuthzService};
pub use mediator::{Authorizer, AuthorizerBuilder};
pub use respond::RejectHandler;
