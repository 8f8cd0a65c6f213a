//! Inference of the resource that owns a reference occurrence.
//!
//! Two strategies are available. [`ProximityResolver`] picks the nearest
//! preceding two-space-indented key line anywhere in the document.
//! [`BlockIndex`] assigns each key in the resource section a byte range and
//! answers with the range containing the offset.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::GraphResult;
use crate::resources::resource_section;

static KEY_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^  (\w+):").expect("key line pattern is valid"));

// A `  Key:` line, or any line starting in column 0 other than a comment.
static BLOCK_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:  (\w+):|[^\s#])").expect("block boundary pattern is valid")
});

/// Resolves the owning resource identifier for a byte offset.
pub trait OwnerResolver {
    fn owner_at(&self, offset: usize) -> Option<&str>;
}

#[derive(Debug, Clone)]
struct KeyLine<'t> {
    id: &'t str,
    span: Range<usize>,
}

fn key_lines(text: &str) -> impl Iterator<Item = KeyLine<'_>> {
    KEY_LINE.captures_iter(text).filter_map(|caps| {
        let line = caps.get(0)?;
        let id = caps.get(1)?;
        Some(KeyLine {
            id: id.as_str(),
            span: line.range(),
        })
    })
}

/// Nearest preceding `  Key:` line.
#[derive(Debug, Clone)]
pub struct ProximityResolver<'t> {
    keys: Vec<KeyLine<'t>>,
}

impl<'t> ProximityResolver<'t> {
    pub fn new(text: &'t str) -> Self {
        Self {
            keys: key_lines(text).collect(),
        }
    }
}

impl OwnerResolver for ProximityResolver<'_> {
    fn owner_at(&self, offset: usize) -> Option<&str> {
        // The key line must lie entirely before the occurrence.
        let count = self.keys.partition_point(|key| key.span.end <= offset);
        count.checked_sub(1).map(|idx| self.keys[idx].id)
    }
}

/// A declared key and the text it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceBlock<'t> {
    pub id: &'t str,
    pub range: Range<usize>,
}

/// Range-containment index over the resource section.
#[derive(Debug, Clone)]
pub struct BlockIndex<'t> {
    blocks: Vec<ResourceBlock<'t>>,
}

impl<'t> BlockIndex<'t> {
    /// Build the index from the resource section of `text`.
    pub fn build(text: &'t str) -> GraphResult<Self> {
        let section = resource_section(text)?;
        let body = &text[section.clone()];

        // Each block ends at the next key line or top-level line.
        let boundaries: Vec<(usize, Option<&'t str>)> = BLOCK_BOUNDARY
            .captures_iter(body)
            .filter_map(|caps| {
                let line = caps.get(0)?;
                Some((section.start + line.start(), caps.get(1).map(|id| id.as_str())))
            })
            .collect();

        let mut blocks = Vec::new();
        for (idx, (start, id)) in boundaries.iter().enumerate() {
            let Some(id) = *id else { continue };
            let end = boundaries.get(idx + 1).map_or(section.end, |next| next.0);
            blocks.push(ResourceBlock {
                id,
                range: *start..end,
            });
        }

        Ok(Self { blocks })
    }

    pub fn blocks(&self) -> &[ResourceBlock<'t>] {
        &self.blocks
    }
}

impl OwnerResolver for BlockIndex<'_> {
    fn owner_at(&self, offset: usize) -> Option<&str> {
        let count = self.blocks.partition_point(|block| block.range.start <= offset);
        let block = self.blocks.get(count.checked_sub(1)?)?;
        block.range.contains(&offset).then_some(block.id)
    }
}
