//! Namespaced resource keys.
//!
//! Resource keys are stable `namespace:path` identifiers naming blocks in
//! descriptor documents (e.g. `minecraft:iron_ore`). They are validated and
//! ordered so document output stays deterministic across runs.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Namespace assumed when a key omits an explicit one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Error returned when parsing an invalid [`ResourceKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ResourceKeyError(String);

/// A namespaced key of the form `namespace:path`.
///
/// Ordering is lexical by `(namespace, path)` and is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey {
    namespace: String,
    path: String,
}

impl ResourceKey {
    /// Parse a resource key.
    ///
    /// Accepts either:
    /// - `namespace:path`
    /// - `path` (uses [`DEFAULT_NAMESPACE`])
    pub fn parse(input: &str) -> Result<Self, ResourceKeyError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ResourceKeyError("resource key cannot be empty".into()));
        }

        let (namespace, path) = match input.split_once(':') {
            Some((ns, p)) => (ns, p),
            None => (DEFAULT_NAMESPACE, input),
        };

        validate("namespace", namespace)?;
        validate("path", path)?;

        Ok(Self {
            namespace: namespace.to_string(),
            path: path.to_string(),
        })
    }

    /// Resource key namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Resource key path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

fn validate(part: &str, value: &str) -> Result<(), ResourceKeyError> {
    if value.is_empty() {
        return Err(ResourceKeyError(format!(
            "resource key {part} cannot be empty"
        )));
    }
    if !value
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'))
    {
        return Err(ResourceKeyError(format!(
            "resource key {part} '{value}' has invalid characters (allowed: a-z0-9_./-)"
        )));
    }
    Ok(())
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl FromStr for ResourceKey {
    type Err = ResourceKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Documents carry keys in the plain string form.
impl Serialize for ResourceKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
