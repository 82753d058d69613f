//! Deterministic key generation for blocks, spans, and mark definitions.
//!
//! Every generated key is derived from the caller-supplied key scope plus a
//! structural path suffix, hashed to a short fixed-length token and prefixed
//! with a semantic tag (`block-`, `span-`, `link-`). Determinism makes keys
//! debuggable across runs; the hard requirement is uniqueness within one
//! conversion call.

/// Hash an arbitrary string to a short fixed-length hex token.
///
/// First 12 hex characters of the SHA-1 digest. Collision resistance at
/// this width is more than enough for per-document key spaces; nothing
/// here needs to be unguessable.
pub(crate) fn hash_key(input: &str) -> String {
    let mut hasher = sha1_smol::Sha1::new();
    hasher.update(input.as_bytes());
    let mut hex = hasher.digest().to_string();
    hex.truncate(12);
    hex
}

/// Build a scoped key: `{tag}-{hash}`.
pub(crate) fn make_key(tag: &str, input: &str) -> String {
    format!("{tag}-{}", hash_key(input))
}

/// Replace every character outside `[A-Za-z0-9_-]` with `-`.
///
/// Used to turn free-form strings (file stems, source identifiers) into
/// safe key-scope fragments.
pub fn sanitize_id_part(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
