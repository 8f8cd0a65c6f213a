//! Reference extraction.
//!
//! Two independent scans run over the whole document: `!Ref Target` and
//! `!GetAtt Target.Attribute`. Each occurrence is kept only when its target
//! and its owner are both declared resources and differ from each other.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::model::{Reference, ReferenceForm, ResourceMap};
use crate::ownership::OwnerResolver;

static SIMPLE_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!Ref\s+(\w+)").expect("simple reference pattern is valid"));

static ATTRIBUTE_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"!GetAtt\s+(\w+)\.(\w+)").expect("attribute reference pattern is valid")
});

/// Extract references between declared resources.
///
/// Results from the simple scan come first, then the attribute scan, each in
/// document order.
pub fn extract_references(
    text: &str,
    resources: &ResourceMap,
    owners: &dyn OwnerResolver,
) -> Vec<Reference> {
    let simple = scan(text, &SIMPLE_REFERENCE, resources, owners, |_| ReferenceForm::Simple);
    let attribute = scan(text, &ATTRIBUTE_REFERENCE, resources, owners, |caps| {
        ReferenceForm::Attribute(caps[2].to_string())
    });

    let references: Vec<Reference> = simple.chain(attribute).collect();
    debug!("Resolved {} reference occurrences", references.len());
    references
}

fn scan<'a>(
    text: &'a str,
    pattern: &'a Regex,
    resources: &'a ResourceMap,
    owners: &'a dyn OwnerResolver,
    form: impl Fn(&Captures<'a>) -> ReferenceForm + 'a,
) -> impl Iterator<Item = Reference> + 'a {
    pattern.captures_iter(text).filter_map(move |caps| {
        let occurrence = caps.get(0)?;
        let target = caps.get(1)?.as_str();

        if !resources.contains_key(target) {
            debug!("Skipping reference to undeclared {} at {}", target, occurrence.start());
            return None;
        }

        let Some(source) = owners.owner_at(occurrence.start()) else {
            debug!("Skipping orphan reference to {} at {}", target, occurrence.start());
            return None;
        };

        if source == target || !resources.contains_key(source) {
            debug!("Skipping reference to {} owned by {}", target, source);
            return None;
        }

        Some(Reference::new(source, target, form(&caps)))
    })
}
