//! Collection behaviour policies
//!
//! A few container behaviours have more than one defensible answer. Each is
//! a policy carried by the container, with the historical behaviour as the
//! default. Policies can be written as TOML:
//!
//! ```toml
//! # "partial" (default) keeps items appended before a failure, "atomic" keeps none
//! add_all = "partial"
//! # "contiguous_prefix" (default) stops at the first gap, "positional" ignores gaps
//! zip = "contiguous_prefix"
//! # "inherit" (default) copies the source constraint, "factory" re-infers it
//! chunk_constraint = "inherit"
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// How bulk appends (`add_all`, the append phase of `chain`) react to a bad item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddAllMode {
    /// Items before the failing one stay appended
    #[default]
    Partial,
    /// Every item is validated before anything is appended
    Atomic,
}

/// How `zip` walks the two sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZipMode {
    /// Probe positions 0, 1, 2, ... and stop at the first gap on either side
    #[default]
    ContiguousPrefix,
    /// Pair the n-th occupied element of each side, ignoring raw positions
    Positional,
}

/// Which constraint the containers produced by `chunk` carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkConstraint {
    /// Each chunk gets the source container's constraint
    #[default]
    Inherit,
    /// Each chunk is built by the container kind's bulk factory
    Factory,
}

/// Behaviour policies of a container
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionPolicy {
    /// Bulk append failure behaviour
    #[serde(default)]
    pub add_all: AddAllMode,
    /// Zip traversal
    #[serde(default)]
    pub zip: ZipMode,
    /// Chunk constraint source
    #[serde(default)]
    pub chunk_constraint: ChunkConstraint,
}

impl CollectionPolicy {
    /// Builder: set the bulk append mode
    pub fn with_add_all(mut self, mode: AddAllMode) -> Self {
        self.add_all = mode;
        self
    }

    /// Builder: set the zip traversal
    pub fn with_zip(mut self, mode: ZipMode) -> Self {
        self.zip = mode;
        self
    }

    /// Builder: set the chunk constraint source
    pub fn with_chunk_constraint(mut self, mode: ChunkConstraint) -> Self {
        self.chunk_constraint = mode;
        self
    }

    /// Returns the default policy as commented TOML.
    pub fn default_toml() -> &'static str {
        r#"# Collection policy
#
# Bulk append on a bad item: "partial" (default) or "atomic"
#   "partial" = items before the failing one stay appended
#   "atomic"  = nothing is appended unless every item passes
add_all = "partial"

# Zip traversal: "contiguous_prefix" (default) or "positional"
#   "contiguous_prefix" = stop at the first position missing on either side
#   "positional"        = pair occupied elements in order, ignoring gaps
zip = "contiguous_prefix"

# Chunk constraint: "inherit" (default) or "factory"
#   "inherit" = every chunk carries the source constraint
#   "factory" = chunks are built by the container kind's bulk factory
chunk_constraint = "inherit"
"#
    }

    /// Parse a policy from TOML text. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` for malformed TOML, unknown keys or unknown values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let policy: CollectionPolicy = toml::from_str(content)?;
        Ok(policy)
    }

    /// Serialize this policy to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize policy: {}", e)))
    }
}
