/// Candidate page tokens
///
/// The hosting service addresses screenshots by short tokens. Tokens are
/// drawn uniformly and independently; repeated or dead tokens are expected
/// and surface as ordinary fetch failures.

use rand::Rng;

/// Symbols a page token may contain. Already URL-safe, so candidate URLs
/// need no percent-encoding.
pub const TOKEN_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Tokens are always exactly six symbols.
pub const TOKEN_LEN: usize = 6;

/// Draw a fresh random token. Each call is independent; there is no
/// collision avoidance.
pub fn random_token() -> String {
    let mut rng = rand::thread_rng();
    (0..TOKEN_LEN)
        .map(|_| TOKEN_ALPHABET[rng.gen_range(0..TOKEN_ALPHABET.len())] as char)
        .collect()
}

/// Build the candidate page URL: the base path with the token appended as
/// the final path segment.
pub fn page_url(base_url: &str, token: &str) -> String {
    format!("{}/{}", base_url, token)
}
