//! Shorthand coordinate parsing.
//!
//! A shorthand packs a coordinate into one colon-separated string. The segment
//! count picks the layout:
//!
//! | segments | layout |
//! |---|---|
//! | 2 | `groupId:artifactId` |
//! | 3 | `groupId:artifactId:version` |
//! | 4 | `groupId:artifactId:scope:version` or `groupId:artifactId:version:type` |
//! | 5 | `groupId:artifactId:scope:version:type` |
//! | 6 | `groupId:artifactId:scope:version:type:classifier` |
//!
//! The two 4-segment layouts are told apart by the third segment: if it is one
//! of the [`SCOPES`] it is a scope, otherwise it is a version and the fourth
//! segment is a type.

use crate::error::CoordinateError;
use pom_model::Coordinate;

/// The dependency scopes Maven recognizes.
pub const SCOPES: [&str; 6] = ["compile", "provided", "runtime", "test", "system", "import"];

/// Whether `value` is one of the recognized [`SCOPES`].
pub fn is_scope(value: &str) -> bool {
    SCOPES.contains(&value)
}

/// Parse a shorthand coordinate.
///
/// Segments are trimmed. An empty optional segment (`g:a::jar`) counts as
/// absent; an empty group or artifact is an error.
///
/// ```rust
/// use pom_reader::parse_coordinate;
///
/// let c = parse_coordinate("org.junit.jupiter:junit-jupiter:test:5.9.3").unwrap();
/// assert_eq!(c.scope.as_deref(), Some("test"));
/// assert_eq!(c.version.as_deref(), Some("5.9.3"));
/// ```
pub fn parse_coordinate(shorthand: &str) -> Result<Coordinate, CoordinateError> {
    let segments: Vec<&str> = shorthand.split(':').map(str::trim).collect();

    let (scope, version, artifact_type, classifier) = match segments.as_slice() {
        [_, _] => (None, None, None, None),
        [_, _, version] => (None, present(version), None, None),
        [_, _, scope, version] if is_scope(scope) => (present(scope), present(version), None, None),
        [_, _, version, artifact_type] => (None, present(version), present(artifact_type), None),
        [_, _, scope, version, artifact_type] => (
            present(scope),
            present(version),
            present(artifact_type),
            None,
        ),
        [_, _, scope, version, artifact_type, classifier] => (
            present(scope),
            present(version),
            present(artifact_type),
            present(classifier),
        ),
        _ => {
            return Err(CoordinateError::SegmentCount {
                value: shorthand.to_string(),
                count: segments.len(),
            });
        }
    };

    let group_id = segments[0];
    let artifact_id = segments[1];
    if group_id.is_empty() {
        return Err(CoordinateError::EmptySegment {
            value: shorthand.to_string(),
            field: "groupId",
        });
    }
    if artifact_id.is_empty() {
        return Err(CoordinateError::EmptySegment {
            value: shorthand.to_string(),
            field: "artifactId",
        });
    }

    Ok(Coordinate {
        group_id: Some(group_id.to_string()),
        artifact_id: artifact_id.to_string(),
        version,
        scope,
        artifact_type,
        classifier,
    })
}

fn present(segment: &str) -> Option<String> {
    (!segment.is_empty()).then(|| segment.to_string())
}
