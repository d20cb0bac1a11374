use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// DependencyGraph aggregate: package name -> ordered dependency names
///
/// Nodes keep the order in which they were first inserted. A dependency
/// name does not have to be a node itself; looking it up yields an empty
/// list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    order: Vec<String>,
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a node. A replaced node keeps its position.
    pub fn insert(&mut self, package: impl Into<String>, dependencies: Vec<String>) {
        let package = package.into();
        if !self.edges.contains_key(&package) {
            self.order.push(package.clone());
        }
        self.edges.insert(package, dependencies);
    }

    /// Dependencies of `package`; empty for names that are not nodes
    pub fn dependencies_of(&self, package: &str) -> &[String] {
        self.edges.get(package).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package)
    }

    /// Nodes and their dependencies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.order
            .iter()
            .map(move |name| (name.as_str(), self.dependencies_of(name)))
    }

    pub fn packages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl Serialize for DependencyGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, dependencies) in self.iter() {
            map.serialize_entry(name, dependencies)?;
        }
        map.end()
    }
}
