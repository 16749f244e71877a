//! Tracking code generation.

use rand::Rng;

use crate::constants::{TRACKING_CODE_ALPHABET, TRACKING_CODE_LENGTH};

/// Generates a random tracking code of [`TRACKING_CODE_LENGTH`] characters
/// drawn from [`TRACKING_CODE_ALPHABET`].
///
/// Codes are not checked for uniqueness here; the unique index on the
/// customers collection is the authority, and a collision surfaces as a
/// unique constraint violation on insert.
pub fn generate_tracking_code() -> String {
    let mut rng = rand::thread_rng();
    (0..TRACKING_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..TRACKING_CODE_ALPHABET.len());
            TRACKING_CODE_ALPHABET[idx] as char
        })
        .collect()
}

/// Whether `code` has the shape of a generated tracking code.
pub fn is_valid_tracking_code(code: &str) -> bool {
    code.len() == TRACKING_CODE_LENGTH && code.bytes().all(|b| TRACKING_CODE_ALPHABET.contains(&b))
}
