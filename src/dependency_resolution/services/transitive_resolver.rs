use crate::dependency_resolution::domain::DependencyGraph;
use std::collections::HashSet;

/// TransitiveResolver - every package reachable from a start package
///
/// This is a pure algorithm with no I/O operations.
pub struct TransitiveResolver;

impl TransitiveResolver {
    /// Resolves transitive dependencies of `package`
    ///
    /// Depth-first traversal over an explicit stack. Dependencies are pushed
    /// in listed order and popped LIFO, so siblings are visited in reverse:
    /// `a -> [b, c]` yields `[c, b]`. The start package is never part of
    /// the result, and an unknown start package yields an empty result.
    pub fn resolve(graph: &DependencyGraph, package: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![package];
        let mut discovered = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            discovered.push(current.to_string());

            stack.extend(
                graph
                    .dependencies_of(current)
                    .iter()
                    .map(String::as_str)
                    .filter(|dep| !visited.contains(dep)),
            );
        }

        discovered.retain(|name| name != package);
        discovered
    }
}
