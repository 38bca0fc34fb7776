use tracing::debug;

use crate::error::{ParseError, ParseErrorKind};
use crate::types::Model;

/// Parse a YAML (or JSON) project descriptor into an unvalidated [`Model`].
///
/// Performs deserialization and type mapping only; no rule is applied.
/// Scalars keep their source text, so `version: 1.10` reads as `"1.10"` and
/// `optional: true` as `"true"`. Keys the model does not know are ignored.
pub fn parse(input: &str) -> Result<Model, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
        });
    }

    serde_saphyr::from_str(input).map_err(|e| {
        let message = e.to_string();
        debug!(error = %message, "descriptor is not a well-formed project model");
        ParseError {
            kind: classify_saphyr_error(&message),
            message,
        }
    })
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("invalid type") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        let err = parse("  \n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::Syntax);
    }

    #[test]
    fn rejects_non_mapping_root() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TypeMismatch);
    }

    #[test]
    fn numeric_versions_keep_their_text() {
        let model = parse(
            "version: 1.10\ndependencies:\n  - groupId: g\n    artifactId: a\n    version: 2.50\n",
        )
        .unwrap();
        assert_eq!(model.version.as_deref(), Some("1.10"));
        assert_eq!(model.dependencies[0].version.as_deref(), Some("2.50"));
    }

    #[test]
    fn reads_scalars_as_text() {
        let model = parse(
            "modelVersion: 4.0.0\nversion: 1.0\ndependencies:\n  - groupId: g\n    artifactId: a\n    optional: true\n",
        )
        .unwrap();
        assert_eq!(model.version.as_deref(), Some("1.0"));
        assert_eq!(model.dependencies[0].optional.as_deref(), Some("true"));
    }

    #[test]
    fn ignores_unknown_keys() {
        let model = parse("artifactId: a\nurl: https://example.org\n").unwrap();
        assert_eq!(model.artifact_id.as_deref(), Some("a"));
    }

    #[test]
    fn null_stays_absent() {
        let model = parse("groupId: ~\nartifactId: a\n").unwrap();
        assert_eq!(model.group_id, None);
    }
}
