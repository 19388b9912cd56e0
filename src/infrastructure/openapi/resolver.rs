//! Internal `$ref` pointer resolution.
//!
//! Pointers look like `#/components/parameters/Limit`. After the leading `#/`
//! each `/`-separated segment is used literally as a mapping key. A miss is
//! reported as [`Resolution::Unresolved`] so callers can skip the one element
//! that referenced it and carry on.

use serde_yaml::Value;

use super::document::{Document, kind_name};

/// Outcome of resolving a pointer
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution<'a> {
    Resolved(&'a Value),
    Unresolved(String),
}

impl<'a> Resolution<'a> {
    pub fn ok(self) -> Option<&'a Value> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved(_) => None,
        }
    }
}

/// Walk `document` along the segments of `pointer`
pub fn resolve<'a>(document: &'a Document, pointer: &str) -> Resolution<'a> {
    let Some(path) = pointer.strip_prefix("#/") else {
        return Resolution::Unresolved(format!(
            "'{pointer}' is not an internal reference (expected '#/...')"
        ));
    };

    let mut segments = path.split('/');
    // split always yields at least one segment
    let first = segments.next().unwrap_or_default();
    let Some(mut current) = document.get(first) else {
        return Resolution::Unresolved(format!("segment '{first}' not found"));
    };

    for segment in segments {
        let Some(mapping) = current.as_mapping() else {
            return Resolution::Unresolved(format!(
                "cannot look up '{segment}' inside a {}",
                kind_name(current)
            ));
        };
        match mapping.get(segment) {
            Some(next) => current = next,
            None => return Resolution::Unresolved(format!("segment '{segment}' not found")),
        }
    }

    Resolution::Resolved(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> Document {
        r#"
components:
  parameters:
    IdRequired:
      name: id
      in: path
      required: true
      schema:
        type: integer
  schemas:
    Names:
      - first
      - second
"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_resolves_component_parameter() {
        let doc = doc();
        let resolved = resolve(&doc, "#/components/parameters/IdRequired")
            .ok()
            .expect("pointer should resolve");
        assert_eq!(resolved.get("name").and_then(Value::as_str), Some("id"));
    }

    #[test]
    fn test_missing_segment_is_unresolved() {
        let doc = doc();
        match resolve(&doc, "#/components/parameters/Missing") {
            Resolution::Unresolved(reason) => assert!(reason.contains("Missing")),
            other => panic!("expected unresolved, got {other:?}"),
        }
        assert!(matches!(
            resolve(&doc, "#/nothing/here"),
            Resolution::Unresolved(_)
        ));
    }

    #[test]
    fn test_indexing_into_non_mapping_is_unresolved() {
        let doc = doc();
        assert!(matches!(
            resolve(&doc, "#/components/schemas/Names/0"),
            Resolution::Unresolved(_)
        ));
    }

    #[test]
    fn test_external_reference_is_unresolved() {
        let doc = doc();
        assert!(matches!(
            resolve(&doc, "other.yaml#/components/parameters/IdRequired"),
            Resolution::Unresolved(_)
        ));
    }

    #[test]
    fn test_document_resolve_delegates() {
        let doc = doc();
        assert!(doc.resolve("#/components/parameters/IdRequired").ok().is_some());
    }
}
