//! Authorization request triple.

use std::fmt;

/// `(subject, object, action)` derived fresh for every inbound request.
///
/// Fields are private so a triple cannot be altered once it has been built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AuthzRequest {
    subject: String,
    object: String,
    action: String,
}

impl AuthzRequest {
    pub fn new(
        subject: impl Into<String>,
        object: impl Into<String>,
        action: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            object: object.into(),
            action: action.into(),
        }
    }

    /// Identity making the request. May be empty.
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Resource being accessed.
    pub fn object(&self) -> &str {
        &self.object
    }

    /// Operation being performed.
    pub fn action(&self) -> &str {
        &self.action
    }
}

impl fmt::Display for AuthzRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.object, self.action)
    }
}
