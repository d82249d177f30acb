//! Reading `<offset x=".." y=".."/>` elements out of an alignment document.

use std::fs;
use std::path::Path;

use roxmltree::{Document, Node};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CompareError, Result};

/// Position of one image in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Extracts every `offset` element of `xml`, in document order.
///
/// Elements can sit at any depth; everything else in the document is ignored.
///
/// # Errors
///
/// Fails on malformed XML, or on an offset whose `x` or `y` attribute is
/// missing or not a number.
pub fn parse_offsets(xml: &str) -> Result<Vec<Offset>> {
    let doc = Document::parse(xml)?;
    doc.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "offset")
        .enumerate()
        .map(|(index, node)| {
            Ok(Offset {
                x: coordinate(node, index, "x")?,
                y: coordinate(node, index, "y")?,
            })
        })
        .collect()
}

/// Reads `path` and extracts its offsets.
///
/// # Errors
///
/// Returns `CompareError::Io` if the file cannot be read, otherwise the
/// errors of [`parse_offsets`].
pub fn load_offsets(path: &Path) -> Result<Vec<Offset>> {
    let xml = fs::read_to_string(path).map_err(|source| CompareError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let offsets = parse_offsets(&xml)?;
    debug!(path = %path.display(), count = offsets.len(), "loaded offsets");
    Ok(offsets)
}

fn coordinate(node: Node<'_, '_>, index: usize, attribute: &'static str) -> Result<f64> {
    let value = node
        .attribute(attribute)
        .ok_or(CompareError::MissingAttribute { index, attribute })?;
    value
        .trim()
        .parse()
        .map_err(|_| CompareError::InvalidNumber {
            index,
            attribute,
            value: value.to_string(),
        })
}
