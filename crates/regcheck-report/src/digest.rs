//! Report digests.
//!
//! A digest covers the canonical JSON of a report with its volatile fields
//! removed, so the same answers always give the same digest no matter when
//! the report was generated.

use serde::Serialize;
use serde_json::Value;

use regcheck_core::{sha256_digest, CanonicalBytes, CanonicalizationError, ContentDigest};

/// Top-level fields excluded from every report digest.
pub const VOLATILE_FIELDS: &[&str] = &["generated_at", "digest"];

/// Digest of `report` without its [`VOLATILE_FIELDS`].
pub fn body_digest(report: &impl Serialize) -> Result<ContentDigest, CanonicalizationError> {
    let mut value = serde_json::to_value(report)?;
    if let Value::Object(map) = &mut value {
        for field in VOLATILE_FIELDS {
            map.remove(*field);
        }
    }
    Ok(sha256_digest(&CanonicalBytes::new(&value)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn volatile_fields_do_not_matter() {
        let a = json!({"x": 1, "generated_at": "2026-01-01T00:00:00Z"});
        let b = json!({"generated_at": "2026-06-01T12:00:00Z", "x": 1, "digest": "old"});
        assert_eq!(body_digest(&a).unwrap(), body_digest(&b).unwrap());
    }

    #[test]
    fn content_matters() {
        assert_ne!(
            body_digest(&json!({"x": 1})).unwrap(),
            body_digest(&json!({"x": 2})).unwrap()
        );
    }

    #[test]
    fn floats_rejected() {
        assert!(body_digest(&json!({"x": 0.5})).is_err());
    }
}
