use rand::{distr::Alphanumeric, Rng, RngCore};

/// Length of recipe short link codes.
pub const SHORT_LINK_LEN: usize = 8;

/// Returns `len` random ASCII alphanumeric characters.
pub fn alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Generates a candidate short link code for a recipe.
pub fn short_link_code() -> String {
    alphanumeric(SHORT_LINK_LEN)
}

/// Generates a 40 character lowercase hex auth token key.
pub fn token_key() -> String {
    let mut bytes = [0u8; 20];
    rand::rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}
