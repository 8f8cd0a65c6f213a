//! The extraction pipeline: resources, references, edges.

use std::path::Path;

use tracing::info;

use crate::config::{GraphConfig, Ownership};
use crate::dedup::dedup_edges;
use crate::error::GraphResult;
use crate::loader::load_template;
use crate::model::{Edge, Reference, ResourceMap};
use crate::ownership::{BlockIndex, OwnerResolver, ProximityResolver};
use crate::references::extract_references;
use crate::resources::extract_resources;

/// Declared resources and the deduplicated edges between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyGraph {
    resources: ResourceMap,
    edges: Vec<Edge>,
}

impl DependencyGraph {
    /// Build the graph from raw template text.
    pub fn build(text: &str, config: &GraphConfig) -> GraphResult<Self> {
        let resources = extract_resources(text)?;
        let references = resolve_references(text, &resources, config.ownership)?;
        let edges = dedup_edges(references);

        info!(
            "Extracted {} edges between {} resources",
            edges.len(),
            resources.len()
        );
        Ok(Self { resources, edges })
    }

    /// Load a template from disk and build its graph.
    pub fn from_file(path: impl AsRef<Path>, config: &GraphConfig) -> GraphResult<Self> {
        let text = load_template(path)?;
        Self::build(&text, config)
    }

    pub fn resources(&self) -> &ResourceMap {
        &self.resources
    }

    /// Edges in first-seen order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

fn resolve_references(
    text: &str,
    resources: &ResourceMap,
    ownership: Ownership,
) -> GraphResult<Vec<Reference>> {
    let owners: Box<dyn OwnerResolver + '_> = match ownership {
        Ownership::Proximity => Box::new(ProximityResolver::new(text)),
        Ownership::Block => Box::new(BlockIndex::build(text)?),
    };
    Ok(extract_references(text, resources, &*owners))
}
