//! Identifier management using string interning for efficient string storage and comparison
//!
//! This module provides the [`Id`] type with an efficient string-interner based approach.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of string identifiers
/// through string interning. Node identifiers are derived from labels and
/// cluster identifiers are path-qualified via [`Id::create_nested`].
///
/// # Examples
///
/// ```
/// use topograph_core::identifier::Id;
///
/// // Create identifiers from names
/// let gateway_id = Id::new("Internet Gateway");
/// let vpc_id = Id::new("VPC");
///
/// // Create nested identifiers for cluster paths
/// let nested_id = vpc_id.create_nested(Id::new("Public Subnet"));
/// assert_eq!(nested_id, "VPC::Public Subnet");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph_core::identifier::Id;
    ///
    /// let subnet_id = Id::new("Public Subnet");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates a nested ID by combining parent ID and child ID with '::' separator.
    ///
    /// Used for path-qualified cluster identifiers so that two clusters with
    /// the same name under different parents stay distinct.
    ///
    /// # Examples
    ///
    /// ```
    /// use topograph_core::identifier::Id;
    ///
    /// let parent = Id::new("VPC");
    /// let child = Id::new("Public Subnet");
    /// let nested = parent.create_nested(child);
    /// assert_eq!(nested, "VPC::Public Subnet");
    /// ```
    pub fn create_nested(&self, child_id: Id) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let parent_str = interner
            .resolve(self.0)
            .expect("Parent ID should exist in interner");
        let child_str = interner
            .resolve(child_id.0)
            .expect("Child ID should exist in interner");
        let nested_name = format!("{}::{}", parent_str, child_str);
        let symbol = interner.get_or_intern(&nested_name);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("Route Table");
        let id2 = Id::new("Route Table");
        let id3 = Id::new("Network ACL");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "Route Table");
    }

    #[test]
    fn test_create_nested() {
        let parent = Id::new("VPC");
        let child1 = Id::new("Public Subnet");
        let child2 = Id::new("Private Subnet");

        let nested1 = parent.create_nested(child1);
        let nested2 = parent.create_nested(child2);

        assert_ne!(nested1, nested2);
        assert_eq!(nested1, "VPC::Public Subnet");
        assert_eq!(nested2, "VPC::Private Subnet");
    }

    #[test]
    fn test_deep_nesting() {
        let root = Id::new("region");
        let vpc = Id::new("vpc");
        let subnet = Id::new("subnet");

        let level1 = root.create_nested(vpc);
        let level2 = level1.create_nested(subnet);

        assert_eq!(level2, "region::vpc::subnet");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{}", id), "display_test");
    }

    #[test]
    fn test_from_trait() {
        let id1: Id = "EC2 Instance".into();
        let id2 = Id::new("EC2 Instance");

        assert_eq!(id1, id2);
        assert_eq!(id1, "EC2 Instance");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_copy_trait() {
        let id1 = Id::new("copy_test");
        let id2 = id1;
        let id3 = id1;

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1, "copy_test");
    }
}
