//! Shared type definitions for the entrygen crate
//!
//! This module contains common types used across multiple components of the
//! synthesizer, ensuring consistency and avoiding circular dependencies.

use std::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

/// Type alias for FxHasher-based IndexMap
///
/// Insertion order is load-bearing throughout the crate: import declarations
/// must appear in first-reference order and serialized route keys must keep
/// a stable order.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Type alias for FxHasher-based IndexSet
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

/// How a module reference is bound in generated source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStyle {
    /// `import x from 'path'`
    Static,
    /// `const x=()=>import('path')` — deferred to a dynamically-loaded chunk
    DynamicChunk,
}

impl ImportStyle {
    /// Component references follow the code-splitting flag; route-collection
    /// bundles are always static.
    pub fn from_code_splitting(code_splitting: bool) -> Self {
        if code_splitting {
            Self::DynamicChunk
        } else {
            Self::Static
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_style_follows_code_splitting() {
        assert_eq!(
            ImportStyle::from_code_splitting(true),
            ImportStyle::DynamicChunk
        );
        assert_eq!(ImportStyle::from_code_splitting(false), ImportStyle::Static);
    }
}
