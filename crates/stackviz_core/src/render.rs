//! Plain-text rendering of a dependency graph.

use std::collections::BTreeMap;
use std::fmt;

use crate::graph::DependencyGraph;
use crate::model::{kind_leaf, ResourceMap};

/// Number of resources per kind, ordered by kind name.
pub fn kind_counts(resources: &ResourceMap) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for resource in resources.values() {
        *counts.entry(resource.kind.clone()).or_insert(0) += 1;
    }
    counts
}

/// Human-readable diagram of a graph's edges followed by a kind summary.
pub struct Report<'g> {
    graph: &'g DependencyGraph,
    show_summary: bool,
}

impl<'g> Report<'g> {
    pub fn new(graph: &'g DependencyGraph) -> Self {
        Self {
            graph,
            show_summary: true,
        }
    }

    pub fn with_summary(mut self, show_summary: bool) -> Self {
        self.show_summary = show_summary;
        self
    }

    /// Edge lines without headers.
    pub fn edge_lines(&self) -> Vec<String> {
        let resources = self.graph.resources();

        self.graph
            .edges()
            .iter()
            .filter_map(|edge| {
                let source = resources.get(&edge.source_id)?;
                let target = resources.get(&edge.target_id)?;
                Some(format!(
                    "{} ({}) --[{}]--> {} ({})",
                    kind_leaf(&source.kind),
                    source.id,
                    edge.label(),
                    kind_leaf(&target.kind),
                    target.id
                ))
            })
            .collect()
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Service Interactions:")?;
        writeln!(f, "====================")?;
        for line in self.edge_lines() {
            writeln!(f, "{}", line)?;
        }

        if self.show_summary {
            writeln!(f)?;
            writeln!(f, "Services Summary:")?;
            writeln!(f, "================")?;
            for (kind, count) in kind_counts(self.graph.resources()) {
                writeln!(f, "{}: {}", kind, count)?;
            }
        }

        Ok(())
    }
}
