//! Resolved type information supplied by the host.

use std::fmt;

use bitflags::bitflags;

use crate::TypeHash;

bitflags! {
    /// Classification flags the host attaches to a resolved type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u8 {
        /// Value semantics (structs, enums, primitives).
        const VALUE = 1 << 0;
        /// Reference semantics (classes, interfaces, delegates, arrays).
        const REFERENCE = 1 << 1;
        /// `Nullable<T>` / `T?` over a value type.
        const NULLABLE = 1 << 2;
        /// The host could not resolve this type.
        const ERROR = 1 << 3;
    }
}

/// A resolved type as seen by the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub hash: TypeHash,
    /// Fully qualified name, e.g. `System.Int32`.
    pub qualified_name: String,
    pub flags: TypeFlags,
}

impl TypeDescriptor {
    /// Create a descriptor, deriving the hash from the qualified name.
    pub fn new(qualified_name: impl Into<String>, flags: TypeFlags) -> Self {
        let qualified_name = qualified_name.into();
        Self {
            hash: TypeHash::from_name(&qualified_name),
            qualified_name,
            flags,
        }
    }

    /// A value type such as `System.Int32`.
    pub fn value(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeFlags::VALUE)
    }

    /// A reference type such as `System.Object`.
    pub fn reference(qualified_name: impl Into<String>) -> Self {
        Self::new(qualified_name, TypeFlags::REFERENCE)
    }

    /// An unresolved type. Never value-kind nor reference-kind.
    pub fn error(name: impl Into<String>) -> Self {
        Self {
            hash: TypeHash::ERROR,
            qualified_name: name.into(),
            flags: TypeFlags::ERROR,
        }
    }

    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TypeFlags::VALUE) && !self.is_error()
    }

    pub fn is_reference_type(&self) -> bool {
        self.flags.contains(TypeFlags::REFERENCE) && !self.is_error()
    }

    pub fn is_error(&self) -> bool {
        self.flags.contains(TypeFlags::ERROR)
    }

    /// Namespace portion of the qualified name, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.qualified_name.rsplit_once('.').map(|(ns, _)| ns)
    }

    /// Name without its namespace.
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit_once('.')
            .map_or(self.qualified_name.as_str(), |(_, name)| name)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_and_reference_kinds() {
        let int = TypeDescriptor::value("System.Int32");
        assert!(int.is_value_type());
        assert!(!int.is_reference_type());

        let object = TypeDescriptor::reference("System.Object");
        assert!(object.is_reference_type());
        assert!(!object.is_value_type());
    }

    #[test]
    fn error_type_is_neither_kind() {
        let mut broken = TypeDescriptor::error("Missing");
        assert!(!broken.is_value_type());
        assert!(!broken.is_reference_type());

        // Even if a confused host also set VALUE
        broken.flags |= TypeFlags::VALUE;
        assert!(!broken.is_value_type());
    }

    #[test]
    fn name_parts() {
        let ty = TypeDescriptor::value("System.Collections.Generic.KeyValuePair");
        assert_eq!(ty.namespace(), Some("System.Collections.Generic"));
        assert_eq!(ty.simple_name(), "KeyValuePair");

        let global = TypeDescriptor::value("Point");
        assert_eq!(global.namespace(), None);
        assert_eq!(global.simple_name(), "Point");
    }
}
