//! # stackviz_core
//!
//! Resource dependency graph extraction for infrastructure templates.
//!
//! The template is treated as flat text. Declared resources are read from the
//! top-level `Resources:` section, `!Ref` and `!GetAtt` occurrences are
//! attributed to the resource that owns them, and the result is rendered as a
//! line-per-edge diagram followed by a per-kind summary.
//!
//! ## Example
//!
//! ```rust
//! use stackviz_core::{DependencyGraph, GraphConfig, Report};
//!
//! let template = "\
//! Resources:
//!   BucketA:
//!     Type: AWS::S3::Bucket
//!   TableB:
//!     Type: AWS::DynamoDB::Table
//!     Properties:
//!       BucketRef: !Ref BucketA
//! ";
//!
//! let graph = DependencyGraph::build(template, &GraphConfig::default()).unwrap();
//! let report = Report::new(&graph).to_string();
//! assert!(report.contains("Table (TableB) --[Simple]--> Bucket (BucketA)"));
//! ```

pub mod config;
pub mod dedup;
pub mod error;
pub mod graph;
pub mod loader;
pub mod model;
pub mod ownership;
pub mod references;
pub mod render;
pub mod resources;

pub use config::{GraphConfig, Ownership};
pub use dedup::dedup_edges;
pub use error::{GraphError, GraphResult};
pub use graph::DependencyGraph;
pub use loader::{load_template, DEFAULT_TEMPLATE};
pub use model::{kind_leaf, Edge, Reference, ReferenceForm, Resource, ResourceMap};
pub use ownership::{BlockIndex, OwnerResolver, ProximityResolver, ResourceBlock};
pub use references::extract_references;
pub use render::{kind_counts, Report};
pub use resources::{extract_resources, resource_section};
