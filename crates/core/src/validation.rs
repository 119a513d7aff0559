//! Local input validation
//!
//! Purely syntactic checks applied before any descriptor is built. Failures
//! here are the recoverable, caller-facing class: they are routed to the
//! local call adapter and never reach the transport. The enum-contract
//! assertion is the one deliberate exception (see [`require_wire_value`]).

use reelgrid_domain::{ErrorCode, ReelgridError, Result, WireValue};

/// Validate a resource URI candidate.
///
/// Rejects missing, empty, whitespace-only and `..`-containing values; any
/// other value is returned unchanged. The check does not resolve or
/// normalize the URI.
///
/// # Errors
/// Returns `ReelgridError::InvalidInput` with a code describing the rejection.
pub fn validate_uri(candidate: Option<&str>) -> Result<String> {
    let uri = candidate
        .ok_or_else(|| ReelgridError::invalid_input(ErrorCode::MissingUri, "uri is required"))?;
    if uri.trim().is_empty() {
        return Err(ReelgridError::invalid_input(
            ErrorCode::EmptyUri,
            "uri must not be empty or whitespace",
        ));
    }
    if uri.contains("..") {
        return Err(ReelgridError::invalid_input(
            ErrorCode::MalformedUri,
            format!("uri must not contain '..': {uri}"),
        ));
    }
    Ok(uri.to_string())
}

/// Validate a URI extracted from a domain object.
///
/// Object overloads navigate into relation metadata for their URI; a missing
/// nested URI is a validation failure on the supplied object, not a crash.
///
/// # Errors
/// Returns `ReelgridError::InvalidInput` with `MissingField` when the object
/// carries no URI, or the usual URI rejections otherwise.
pub fn validate_object_uri(candidate: Option<&str>, what: &str) -> Result<String> {
    match candidate {
        None => Err(ReelgridError::invalid_input(
            ErrorCode::MissingField,
            format!("{what} uri is absent on the supplied object"),
        )),
        some => validate_uri(some),
    }
}

/// Validate a search query string.
///
/// # Errors
/// Returns `ReelgridError::InvalidInput` when the query is empty or
/// whitespace-only.
pub fn validate_search_query(query: &str) -> Result<String> {
    if query.trim().is_empty() {
        return Err(ReelgridError::invalid_input(
            ErrorCode::EmptyQuery,
            "search query must not be empty",
        ));
    }
    Ok(query.to_string())
}

/// Require a non-empty wire value from a request enum.
///
/// An empty wire value means the calling code constructed an enum that can
/// never form a valid request; that is a contract violation in the caller,
/// not a user-input condition, so it halts loudly instead of producing a
/// callback failure. Known variants are total by construction; in practice
/// only an `Other(String)` built from non-deserialized input can trip this.
///
/// # Panics
/// Panics when the wire value is empty.
pub fn require_wire_value<E: WireValue>(value: &E) -> &str {
    let wire = value.wire_value();
    assert!(!wire.is_empty(), "request enum carries an empty wire value; fix the calling code");
    wire
}

#[cfg(test)]
mod tests {
    use reelgrid_domain::TeamRole;

    use super::*;

    #[test]
    fn accepts_ordinary_uris() {
        assert_eq!(validate_uri(Some("/videos/123")).unwrap(), "/videos/123");
    }

    #[test]
    fn rejects_missing_uri() {
        let err = validate_uri(None).unwrap_err();
        assert!(matches!(err, ReelgridError::InvalidInput { code: ErrorCode::MissingUri, .. }));
    }

    #[test]
    fn rejects_blank_uris() {
        for candidate in ["", "   ", "\t\n"] {
            let err = validate_uri(Some(candidate)).unwrap_err();
            assert!(matches!(err, ReelgridError::InvalidInput { code: ErrorCode::EmptyUri, .. }));
        }
    }

    #[test]
    fn rejects_path_traversal() {
        let err = validate_uri(Some("/videos/../users")).unwrap_err();
        assert!(matches!(err, ReelgridError::InvalidInput { code: ErrorCode::MalformedUri, .. }));
    }

    #[test]
    fn rejects_empty_search_query() {
        let err = validate_search_query("  ").unwrap_err();
        assert!(matches!(err, ReelgridError::InvalidInput { code: ErrorCode::EmptyQuery, .. }));
    }

    #[test]
    fn wire_value_guard_accepts_known_variants() {
        assert_eq!(require_wire_value(&TeamRole::Contributor), "contributor");
    }

    #[test]
    #[should_panic(expected = "empty wire value")]
    fn wire_value_guard_panics_on_empty() {
        let broken = TeamRole::Other(String::new());
        let _ = require_wire_value(&broken);
    }
}
