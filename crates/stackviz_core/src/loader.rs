//! Template loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, GraphResult};

/// Default template file name used when no path is given.
pub const DEFAULT_TEMPLATE: &str = "template-simplified.yaml";

/// Read a template file as raw text, without any structural parsing.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
pub fn load_template(path: impl AsRef<Path>) -> GraphResult<String> {
    let path = path.as_ref();
    debug!("Reading template from {:?}", path);

    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => GraphError::TemplateNotFound(path.to_path_buf()),
        _ => GraphError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
