use super::tree_renderer::render_tree;
use crate::application::dto::ResolveResponse;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TextFormatter adapter for the human-readable report
///
/// Sections: direct dependencies, dependency graph, transitive
/// dependencies, and optionally an ASCII tree.
pub struct TextFormatter {
    ascii_tree: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self { ascii_tree: false }
    }

    /// Appends a dependency tree rooted at the requested package
    pub fn with_ascii_tree(mut self, ascii_tree: bool) -> Self {
        self.ascii_tree = ascii_tree;
        self
    }

    fn render_direct(&self, output: &mut String, response: &ResolveResponse) {
        output.push_str("=== Direct dependencies ===\n");
        if response.direct_dependencies.is_empty() {
            output.push_str(&format!(
                "Package '{}' has no direct dependencies.\n",
                response.package
            ));
        } else {
            output.push_str(&format!("Direct dependencies of '{}':\n", response.package));
            render_list(output, &response.direct_dependencies);
        }
    }

    fn render_graph(&self, output: &mut String, response: &ResolveResponse) {
        output.push_str("\n=== Dependency graph ===\n");
        for (package, dependencies) in response.graph.iter() {
            if dependencies.is_empty() {
                output.push_str(&format!("{}: (no dependencies)\n", package));
            } else {
                output.push_str(&format!("{}: {}\n", package, dependencies.join(", ")));
            }
        }
    }

    fn render_transitive(&self, output: &mut String, response: &ResolveResponse) {
        output.push_str(&format!(
            "\nTransitive dependencies of '{}':\n",
            response.package
        ));
        if response.transitive_dependencies.is_empty() {
            output.push_str(" (no transitive dependencies)\n");
        } else {
            render_list(output, &response.transitive_dependencies);
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, response: &ResolveResponse) -> Result<String> {
        let mut output = String::new();

        self.render_direct(&mut output, response);
        self.render_graph(&mut output, response);
        self.render_transitive(&mut output, response);

        if self.ascii_tree {
            output.push_str("\n=== Dependency tree ===\n");
            output.push_str(&render_tree(&response.graph, &response.package));
        }

        Ok(output)
    }
}

fn render_list(output: &mut String, names: &[String]) {
    for name in names {
        output.push_str(&format!(" - {}\n", name));
    }
}
