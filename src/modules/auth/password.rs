use pbkdf2::pbkdf2;
use rand::Rng;

use crate::{HmacSha256, PASSWORD_HASH_ROUNDS};

const HASH_SCHEME: &str = "pbkdf2";
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Function to generate a random salt for PBKDF2
fn generate_random_salt() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..SALT_LEN).map(|_| rng.gen()).collect()
}

/// Function to derive a 32-byte key from the password using PBKDF2
fn derive_key(password: &str, salt: &[u8], rounds: u32) -> Vec<u8> {
    let mut key = vec![0u8; KEY_LEN];
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, rounds, &mut key);
    key
}

/// Hash a password with the default cost
pub fn hash_password(password: &str) -> String {
    hash_password_with_rounds(password, PASSWORD_HASH_ROUNDS)
}

/// Hash a password as `pbkdf2$<rounds>$<salt hex>$<key hex>`
pub fn hash_password_with_rounds(password: &str, rounds: u32) -> String {
    let rounds = rounds.max(1);
    let salt = generate_random_salt();
    let key = derive_key(password, &salt, rounds);
    format!(
        "{}${}${}${}",
        HASH_SCHEME,
        rounds,
        hex::encode(&salt),
        hex::encode(key)
    )
}

/// Check a password against a stored hash. Malformed hashes never verify.
pub fn verify_password(password: &str, encoded: &str) -> bool {
    let parts: Vec<&str> = encoded.split('$').collect();
    let [scheme, rounds, salt, key] = parts.as_slice() else {
        return false;
    };
    if *scheme != HASH_SCHEME {
        return false;
    }

    let (Ok(rounds), Ok(salt), Ok(expected)) =
        (rounds.parse::<u32>(), hex::decode(salt), hex::decode(key))
    else {
        return false;
    };
    if rounds == 0 || expected.len() != KEY_LEN {
        return false;
    }

    let actual = derive_key(password, &salt, rounds);
    // Compare every byte so the time taken does not depend on where they differ
    actual
        .iter()
        .zip(expected.iter())
        .fold(0u8, |diff, (a, b)| diff | (a ^ b))
        == 0
}
