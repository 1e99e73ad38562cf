//! Password hashing in the `pbkdf2_sha256$<iterations>$<salt>$<hash>` format.
//!
//! The iteration count is stored with every hash, so hashes created with an older
//! count keep verifying after the default is raised.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

use crate::server::util::random;

const ALGORITHM: &str = "pbkdf2_sha256";
const SALT_LEN: usize = 22;
const HASH_LEN: usize = 32;

#[cfg(not(test))]
const PBKDF2_ITERATIONS: u32 = 600_000;
#[cfg(test)]
const PBKDF2_ITERATIONS: u32 = 1_000;

/// Hashes a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let salt = random::alphanumeric(SALT_LEN);
    encode(password, &salt, PBKDF2_ITERATIONS)
}

/// Checks a password against a stored hash.
///
/// Returns false for hashes in any other format, including the `!` marker used for
/// accounts without a usable password.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let mut parts = encoded.splitn(4, '$');
    let (Some(algorithm), Some(iterations), Some(salt), Some(_)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if algorithm != ALGORITHM {
        return false;
    }

    let Ok(iterations) = iterations.parse::<u32>() else {
        return false;
    };
    if iterations == 0 {
        return false;
    }

    let candidate = encode(password, salt, iterations);
    constant_time_eq(candidate.as_bytes(), encoded.as_bytes())
}

fn encode(password: &str, salt: &str, iterations: u32) -> String {
    let mut derived = [0u8; HASH_LEN];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt.as_bytes(), iterations, &mut derived);

    format!(
        "{}${}${}${}",
        ALGORITHM,
        iterations,
        salt,
        BASE64.encode(derived)
    )
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
