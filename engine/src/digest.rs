//! Content digests for state fingerprints.
//!
//! States can be arbitrarily large (resource vectors, path histories), so
//! reports and goldens identify them by a SHA-256 digest of a canonical
//! byte encoding rather than by value. Digests are domain-separated: the
//! same bytes hashed under two domains never collide across artifact kinds.

use sha2::{Digest, Sha256};

/// Domain prefix for solution-path state fingerprints.
pub const DOMAIN_PATH_STATE: &[u8] = b"PATHWISE::PATH_STATE\0";

/// A content digest in `"sha256:<hex>"` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateDigest {
    full: String,
}

impl StateDigest {
    /// Digest `data` under `domain`.
    #[must_use]
    pub fn of(domain: &[u8], data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        hasher.update(data);
        let digest = hasher.finalize();
        Self {
            full: format!("sha256:{}", hex::encode(digest)),
        }
    }

    /// The hex digest portion, without the algorithm prefix.
    #[must_use]
    pub fn hex_digest(&self) -> &str {
        &self.full["sha256:".len()..]
    }

    /// The full `"sha256:<hex>"` string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for StateDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}
