//! Small value types shared by the builders.

use std::fmt;

use serde::{Serialize, Serializer};

/// Semantic version triple, serialized as `[major, minor, patch]`.
///
/// Components are unsigned, so negative versions are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Version(pub u32, pub u32, pub u32);

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.0, self.1, self.2)
    }
}

/// Namespaced identifier, serialized as `"namespace:path"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    namespace: String,
    path: String,
}

impl Identifier {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// An item reference with a count and data value, as recipes expect it:
/// `{"item": "namespace:path", "count": n, "data": n}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStack {
    #[serde(rename = "item")]
    id: Identifier,
    count: u32,
    data: i32,
}

impl ItemStack {
    /// A single item with a data value of 0.
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            count: 1,
            data: 0,
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn data(mut self, data: i32) -> Self {
        self.data = data;
        self
    }
}
