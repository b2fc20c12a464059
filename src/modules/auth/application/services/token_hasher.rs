use sha2::{Digest, Sha256};

/// SHA-256 hex digest of a token. Raw tokens are never stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_token_is_stable_and_distinct() {
        assert_eq!(hash_token("session-a"), hash_token("session-a"));
        assert_ne!(hash_token("session-a"), hash_token("session-b"));
    }

    #[test]
    fn test_hash_token_length() {
        assert_eq!(hash_token("any").len(), 64);
    }
}
