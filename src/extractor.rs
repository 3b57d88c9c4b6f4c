//! # Record Extractor
//!
//! Parses the decrypted eKYC XML record and pulls out the identity
//! attributes the matcher needs. Schema revisions of the offline export have
//! moved the same semantic field around, so each attribute carries an ordered
//! list of candidate tag paths; the first path whose element resolves to
//! non-empty text wins. A path `A/B` matches the first `B` element in
//! document order whose parent is `A`, anywhere in the tree.
//!
//! Absence of an attribute is a valid outcome, not an error; extraction only
//! fails on structurally invalid input.

use crate::error::EkycError;
use roxmltree::{Document, Node};
use serde::Serialize;

/// Candidate tag paths for the holder's full name, by schema vintage.
const NAME_PATHS: &[&str] = &["Poi/Name", "Name", "Poi"];

/// Candidate tag paths for the masked identifier.
const MASKED_ID_PATHS: &[&str] = &["MaskedAadhaar", "MaskedUid", "MaskedAadhaarNumber"];

/// Identity attributes extracted from one record.
///
/// Each field is either `None` or a non-empty, whitespace-trimmed string —
/// never `""`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExtractedAttributes {
    /// Holder's full name as printed in the record.
    pub name: Option<String>,
    /// Masked identifier, e.g. `"XXXX-XXXX-1234"`.
    pub masked_id: Option<String>,
}

/// Parse record bytes and extract identity attributes.
///
/// # Errors
///
/// [`EkycError::MalformedRecord`] when the bytes are not valid UTF-8 or not
/// well-formed XML. Missing attributes are reported as `None`, not errors.
pub fn extract(record_bytes: &[u8]) -> Result<ExtractedAttributes, EkycError> {
    let text = std::str::from_utf8(record_bytes)
        .map_err(|_| EkycError::MalformedRecord("record is not valid UTF-8".into()))?;
    let doc = Document::parse(text)
        .map_err(|_| EkycError::MalformedRecord("record is not well-formed XML".into()))?;

    Ok(ExtractedAttributes {
        name: find_text(&doc, NAME_PATHS),
        masked_id: find_text(&doc, MASKED_ID_PATHS),
    })
}

/// First path (in candidate order) whose first matching element has
/// non-empty trimmed text.
///
/// Note the asymmetry: per path only the *first* matching element is
/// consulted; an empty element falls through to the next path, not to the
/// next element with the same tag.
fn find_text(doc: &Document, paths: &[&str]) -> Option<String> {
    paths.iter().find_map(|path| resolve_path(doc, path))
}

fn resolve_path(doc: &Document, path: &str) -> Option<String> {
    let mut segments: Vec<&str> = path.split('/').collect();
    let leaf = segments.pop()?;

    doc.root()
        .descendants()
        .find(|n| n.is_element() && n.has_tag_name(leaf) && parents_match(*n, &segments))
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Whether `node`'s chain of immediate parents matches `segments` innermost
/// to outermost.
fn parents_match(node: Node, segments: &[&str]) -> bool {
    let mut current = node;
    for segment in segments.iter().rev() {
        match current.parent() {
            Some(parent) if parent.is_element() && parent.has_tag_name(*segment) => {
                current = parent;
            }
            _ => return false,
        }
    }
    true
}
