//! Equality fast path.
//!
//! Identical texts are detected by comparing SHA-256 digests before any line
//! splitting or searching happens.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of a text.
#[must_use]
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Returns true if both texts have the same content digest.
#[must_use]
pub fn texts_identical(old: &str, new: &str) -> bool {
    old.len() == new.len() && content_digest(old) == content_digest(new)
}
