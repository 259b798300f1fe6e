//! src/domain/email.rs
use serde::{Deserialize, Serialize};
use validator::validate_email;

/// Subscriptions are for personal inboxes only; addresses on the
/// institutional domain are rejected.
const INSTITUTIONAL_SUFFIX: &str = "@columbia.edu";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Empty email")]
    Empty,
    #[error("{0}")]
    Invalid(String),
    #[error("Please use your personal email")]
    Institutional,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Email(String);

impl Email {
    /// The stored key is the lowercased address, so `A@x.com` and `a@x.com`
    /// address the same record.
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::Empty);
        }

        let s = s.to_lowercase();

        if !validate_email(&s) {
            return Err(Error::Invalid(format!("Invalid email: {}", s)));
        }

        if s.ends_with(INSTITUTIONAL_SUFFIX) {
            return Err(Error::Institutional);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
