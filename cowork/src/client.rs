//! Client records.
//!
//! Clients are registered once and never mutated or deleted; every
//! reservation references the client it was booked for.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A system-assigned client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    /// Wraps a raw database id.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the underlying id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered client.
///
/// # Examples
///
/// ```
/// use cowork::{Client, ClientId};
///
/// let client = Client::new(ClientId::new(1), "Ada", "Lovelace").unwrap();
/// assert_eq!(client.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    first_name: String,
    last_name: String,
}

impl Client {
    /// Creates a client record.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either name component is empty
    /// after trimming whitespace.
    pub fn new(
        id: ClientId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Result<Self, Error> {
        let first_name = non_empty("first_name", first_name.into())?;
        let last_name = non_empty("last_name", last_name.into())?;
        Ok(Self {
            id,
            first_name,
            last_name,
        })
    }

    /// Returns the client id.
    #[must_use]
    pub const fn id(&self) -> ClientId {
        self.id
    }

    /// Returns the client's first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the client's last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns "first last" for display and reports.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub(crate) fn non_empty(field: &str, value: String) -> Result<String, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field: field.to_string(),
            message: "must be non-empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = Client::new(ClientId::new(7), "Grace", "Hopper").unwrap();
        assert_eq!(client.id().value(), 7);
        assert_eq!(client.first_name(), "Grace");
        assert_eq!(client.last_name(), "Hopper");
        assert_eq!(client.full_name(), "Grace Hopper");
    }

    #[test]
    fn test_names_are_trimmed() {
        let client = Client::new(ClientId::new(1), "  Ada ", " Lovelace ").unwrap();
        assert_eq!(client.full_name(), "Ada Lovelace");
    }

    #[test]
    fn test_empty_names_rejected() {
        assert!(Client::new(ClientId::new(1), "", "Lovelace").is_err());
        assert!(Client::new(ClientId::new(1), "Ada", "   ").is_err());
    }
}
