//! Resource declaration extraction.
//!
//! The template is scanned as flat text. The resource section runs from the
//! first top-level `Resources:` line to the next top-level `Outputs:` line,
//! or to the end of the document when there is none.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{GraphError, GraphResult};
use crate::model::{Resource, ResourceMap};

pub const RESOURCES_MARKER: &str = "Resources";

static RESOURCES_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Resources:").expect("resources marker pattern is valid"));

static OUTPUTS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^Outputs:").expect("outputs marker pattern is valid"));

// `  LogicalId:` followed (blank lines aside) by a deeper `Type: Kind` line.
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^  (\w+):[ \t]*\r?\n(?:[ \t]*\r?\n)*[ ]{3,}Type:[ \t]+([\w:]+)")
        .expect("declaration pattern is valid")
});

/// Byte range of the resource section body, after the `Resources:` marker.
pub fn resource_section(text: &str) -> GraphResult<Range<usize>> {
    let start = RESOURCES_SECTION
        .find(text)
        .map(|m| m.end())
        .ok_or_else(|| GraphError::MissingSection(RESOURCES_MARKER.to_string()))?;

    let end = OUTPUTS_SECTION
        .find(&text[start..])
        .map_or(text.len(), |m| start + m.start());

    Ok(start..end)
}

/// Extract every declared resource from the resource section.
///
/// A later declaration with an identifier already seen replaces the earlier one.
pub fn extract_resources(text: &str) -> GraphResult<ResourceMap> {
    let section = &text[resource_section(text)?];
    let mut resources = ResourceMap::new();

    for caps in DECLARATION.captures_iter(section) {
        let resource = Resource::new(&caps[1], &caps[2]);
        debug!("Declared resource {} ({})", resource.id, resource.kind);

        if let Some(previous) = resources.insert(resource.id.clone(), resource) {
            warn!(
                "Resource {} declared more than once, keeping the later declaration over {}",
                previous.id, previous.kind
            );
        }
    }

    info!("Found {} resources", resources.len());
    Ok(resources)
}
