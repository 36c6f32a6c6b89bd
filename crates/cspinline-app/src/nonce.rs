use rand::Rng;

/// Generate a per-response script nonce: 16 random bytes, hex encoded.
///
/// A nonce is only as good as its unpredictability; it must be freshly
/// generated for every response and never reused.
pub fn generate_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}
