//! Deterministic hash-based type identity.
//!
//! [`TypeHash`] identifies a type by an XXHash64 of its fully qualified name,
//! so two descriptors produced independently by the host for the same type
//! compare equal without a shared registry.
//!
//! # Examples
//!
//! ```
//! use avoid_boxing_core::TypeHash;
//!
//! let int_hash = TypeHash::from_name("System.Int32");
//! let same_hash = TypeHash::from_name("System.Int32");
//! assert_eq!(int_hash, same_hash);
//! assert_ne!(int_hash, TypeHash::from_name("System.Object"));
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain marker mixed into every type hash.
const TYPE_DOMAIN: u64 = 0x2fac10b63a6cc57c;

/// A 64-bit hash that uniquely identifies a type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Hash used for unresolved or error types.
    pub const ERROR: TypeHash = TypeHash(0);

    /// Create a type hash from a fully qualified name.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(TYPE_DOMAIN ^ xxh64(name.as_bytes(), 0))
    }

    /// Whether this is the error hash.
    #[inline]
    pub fn is_error(self) -> bool {
        self == Self::ERROR
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(
            TypeHash::from_name("System.Int32"),
            TypeHash::from_name("System.Int32")
        );
    }

    #[test]
    fn different_names_differ() {
        assert_ne!(
            TypeHash::from_name("System.Int32"),
            TypeHash::from_name("System.Int64")
        );
    }

    #[test]
    fn named_types_are_not_error() {
        assert!(!TypeHash::from_name("System.Object").is_error());
        assert!(TypeHash::ERROR.is_error());
    }
}
