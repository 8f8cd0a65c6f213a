//! Collapsing of repeated references into edges.

use std::collections::HashSet;

use crate::model::{Edge, Reference};

/// Keep the first reference seen for each `(source, target)` pair.
///
/// Differences in form between duplicates are not reconciled.
pub fn dedup_edges(references: impl IntoIterator<Item = Reference>) -> Vec<Edge> {
    let mut seen = HashSet::new();

    references
        .into_iter()
        .filter(|reference| seen.insert((reference.source_id.clone(), reference.target_id.clone())))
        .map(Edge::from_reference)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ReferenceForm;

    fn simple(source: &str, target: &str) -> Reference {
        Reference::new(source, target, ReferenceForm::Simple)
    }

    fn attribute(source: &str, target: &str, name: &str) -> Reference {
        Reference::new(source, target, ReferenceForm::Attribute(name.to_string()))
    }

    #[test]
    fn test_duplicate_pairs_collapse() {
        let edges = dedup_edges(vec![simple("TableB", "BucketA"), simple("TableB", "BucketA")]);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].source_id, "TableB");
        assert_eq!(edges[0].target_id, "BucketA");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let edges = dedup_edges(vec![
            attribute("FnC", "BucketA", "Arn"),
            simple("FnC", "BucketA"),
        ]);
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].form, ReferenceForm::Attribute("Arn".into()));
    }

    #[test]
    fn test_direction_matters() {
        let edges = dedup_edges(vec![simple("A", "B"), simple("B", "A")]);
        assert_eq!(edges.len(), 2);
    }

    #[test]
    fn test_order_is_first_seen() {
        let edges = dedup_edges(vec![
            simple("C", "A"),
            simple("B", "A"),
            simple("C", "A"),
            simple("A", "B"),
        ]);
        let pairs: Vec<_> = edges
            .iter()
            .map(|e| (e.source_id.as_str(), e.target_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("C", "A"), ("B", "A"), ("A", "B")]);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let once = dedup_edges(vec![
            simple("C", "A"),
            attribute("C", "A", "Arn"),
            simple("B", "A"),
        ]);
        let twice = dedup_edges(once.iter().map(|e| e.reference().clone()));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedup_edges(Vec::new()).is_empty());
    }
}
