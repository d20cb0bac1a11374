use crate::dependency_resolution::domain::DependencyGraph;
use std::collections::HashSet;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// Marker appended to a node whose subtree was already printed above
const REPEAT_MARKER: &str = " (*)";

/// A node waiting to be printed
struct Frame<'a> {
    name: &'a str,
    prefix: String,
    is_last: bool,
}

/// Renders the dependency tree below `root` as ASCII art
///
/// Each package with dependencies is expanded once. Later occurrences get a
/// `(*)` marker instead of being expanded again, which also cuts cycles.
/// Uses an explicit stack so deep chains cannot overflow the call stack.
pub fn render_tree(graph: &DependencyGraph, root: &str) -> String {
    let mut output = String::new();
    output.push_str(root);
    output.push('\n');

    let mut expanded: HashSet<&str> = HashSet::new();
    expanded.insert(root);

    let mut stack = Vec::new();
    push_children(&mut stack, graph.dependencies_of(root), "");

    while let Some(frame) = stack.pop() {
        output.push_str(&frame.prefix);
        output.push_str(if frame.is_last { LAST_BRANCH } else { BRANCH });
        output.push_str(frame.name);

        let children = graph.dependencies_of(frame.name);
        if !children.is_empty() && !expanded.insert(frame.name) {
            output.push_str(REPEAT_MARKER);
            output.push('\n');
            continue;
        }
        output.push('\n');

        let child_prefix = format!(
            "{}{}",
            frame.prefix,
            if frame.is_last { SPACE } else { VERTICAL }
        );
        push_children(&mut stack, children, &child_prefix);
    }

    output
}

/// Pushes in reverse so the first dependency is popped, and printed, first
fn push_children<'a>(stack: &mut Vec<Frame<'a>>, children: &'a [String], prefix: &str) {
    for (index, child) in children.iter().enumerate().rev() {
        stack.push(Frame {
            name: child,
            prefix: prefix.to_string(),
            is_last: index + 1 == children.len(),
        });
    }
}
