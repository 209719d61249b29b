//! Security principal collection and its reserved session key.
//!
//! Sessions written by Shiro-based stacks park the authenticated subject's
//! principals under one well-known attribute name. The flat decode path
//! must hand that value back as a structured collection, not as a spray of
//! flattened sub-keys, so the type lives here with the key it travels under.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Attribute name under which a session stores its principal collection.
pub const PRINCIPALS_SESSION_KEY: &str =
    "org.apache.shiro.subject.support.DefaultSubjectContext_PRINCIPALS_SESSION_KEY";

/// A set of security identity principals, grouped by the realm that
/// asserted them.
///
/// Realm order and principal order within a realm are both preserved; the
/// primary principal is defined as the first principal of the first realm.
/// Extra fields in a stored payload (e.g. a cached display string written
/// by another stack) are ignored on bind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrincipalCollection {
    #[serde(rename = "realmPrincipals", default)]
    realm_principals: IndexMap<String, Vec<String>>,
}

impl PrincipalCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a principal asserted by `realm`, appending to the realm's list.
    pub fn add(&mut self, principal: impl Into<String>, realm: impl Into<String>) {
        self.realm_principals
            .entry(realm.into())
            .or_default()
            .push(principal.into());
    }

    /// The first principal of the first realm, if any.
    pub fn primary_principal(&self) -> Option<&str> {
        self.realm_principals
            .values()
            .flatten()
            .next()
            .map(String::as_str)
    }

    /// Principals asserted by one realm, empty if the realm is unknown.
    pub fn from_realm(&self, realm: &str) -> &[String] {
        self.realm_principals
            .get(realm)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn realm_names(&self) -> impl Iterator<Item = &str> {
        self.realm_principals.keys().map(String::as_str)
    }

    /// All principals in realm order, then list order within each realm.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.realm_principals
            .values()
            .flatten()
            .map(String::as_str)
    }

    /// Total number of principals across all realms.
    pub fn len(&self) -> usize {
        self.realm_principals.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.realm_principals.values().all(Vec::is_empty)
    }
}
