//! Data model shared by every extraction stage.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

/// Declared resources keyed by their logical identifier.
pub type ResourceMap = HashMap<String, Resource>;

/// A named, typed resource declared in a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    /// Logical identifier, unique within the template.
    pub id: String,
    /// Namespaced type name, e.g. `AWS::S3::Bucket`.
    pub kind: String,
}

impl Resource {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
        }
    }
}

/// Last `::` segment of a namespaced kind.
pub fn kind_leaf(kind: &str) -> &str {
    kind.rsplit("::").next().unwrap_or(kind)
}

/// How one resource points at another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceForm {
    /// `!Ref Target`
    Simple,
    /// `!GetAtt Target.Attribute`
    Attribute(String),
}

impl ReferenceForm {
    pub fn attribute_name(&self) -> Option<&str> {
        match self {
            ReferenceForm::Simple => None,
            ReferenceForm::Attribute(name) => Some(name),
        }
    }
}

impl fmt::Display for ReferenceForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceForm::Simple => write!(f, "Simple"),
            ReferenceForm::Attribute(name) => write!(f, "Attribute.{}", name),
        }
    }
}

/// One textual reference occurrence between two declared resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub source_id: String,
    pub target_id: String,
    pub form: ReferenceForm,
}

impl Reference {
    pub fn new(
        source_id: impl Into<String>,
        target_id: impl Into<String>,
        form: ReferenceForm,
    ) -> Self {
        Self {
            source_id: source_id.into(),
            target_id: target_id.into(),
            form,
        }
    }

    /// Label shown between the arrow brackets.
    pub fn label(&self) -> String {
        self.form.to_string()
    }
}

/// The representative reference for a unique `(source, target)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge(Reference);

impl Edge {
    pub(crate) fn from_reference(reference: Reference) -> Self {
        Self(reference)
    }

    pub fn reference(&self) -> &Reference {
        &self.0
    }
}

impl Deref for Edge {
    type Target = Reference;

    fn deref(&self) -> &Reference {
        &self.0
    }
}
