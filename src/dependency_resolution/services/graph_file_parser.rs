use super::PackageFilter;
use crate::dependency_resolution::domain::DependencyGraph;

/// GraphFileParser - reads a hand-written dependency graph
///
/// One node per line, `name: dep dep ...`. Blank lines, `#` comments and
/// lines without a colon are skipped. Lets the traversal be exercised on
/// small graphs without an APKINDEX.
pub struct GraphFileParser;

impl GraphFileParser {
    pub fn parse(text: &str, filter: &PackageFilter) -> DependencyGraph {
        let mut graph = DependencyGraph::new();

        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, deps)) = line.split_once(':') else {
                continue;
            };

            let name = name.trim();
            if filter.excludes(name) {
                continue;
            }
            let dependencies = deps
                .split_whitespace()
                .filter(|dep| filter.keeps(dep))
                .map(str::to_string)
                .collect();
            graph.insert(name, dependencies);
        }

        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPH: &str = "\
# sample graph
A: B C

B: C D
C:
not a node line
D: A
";

    #[test]
    fn test_parse_graph_file() {
        let graph = GraphFileParser::parse(GRAPH, &PackageFilter::none());

        assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.dependencies_of("A"), &["B".to_string(), "C".to_string()]);
        assert!(graph.dependencies_of("C").is_empty());
    }

    #[test]
    fn test_filter_applies_to_nodes_and_edges() {
        let graph = GraphFileParser::parse(GRAPH, &PackageFilter::new("C"));

        assert!(!graph.contains("C"));
        assert_eq!(graph.dependencies_of("A"), &["B".to_string()]);
        assert_eq!(graph.dependencies_of("B"), &["D".to_string()]);
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let graph = GraphFileParser::parse("x: y z\n", &PackageFilter::none());
        assert_eq!(graph.dependencies_of("x").len(), 2);
    }
}
