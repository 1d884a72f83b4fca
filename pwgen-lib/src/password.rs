use aead::rand_core::{CryptoRng, RngCore};
use log::debug;
use zeroize::Zeroizing;

use crate::category::{pick_with, CharacterCategory};
use crate::error::PasswordError;
use crate::random::uniform_int_with;

/// Shortest password that can hold one character of every category.
pub const MIN_LENGTH: usize = CharacterCategory::ALL.len();

/// Generates a password of `length` characters drawing every value from `rng`.
///
/// One character of each [`CharacterCategory`] is always present. The remaining
/// slots take a uniformly chosen category, and the whole buffer is then shuffled
/// so the guaranteed characters land at uniformly random positions.
pub fn generate_password_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    length: usize,
) -> Result<String, PasswordError> {
    if length < MIN_LENGTH {
        return Err(PasswordError::InvalidArgument(
            "password length must be at least 4".to_string(),
        ));
    }

    let mut password = Zeroizing::new(vec!['\0'; length]);

    for (slot, category) in CharacterCategory::ALL.into_iter().enumerate() {
        password[slot] = pick_with(rng, category.chars())?;
    }

    for slot in MIN_LENGTH..length {
        let category = CharacterCategory::ALL[uniform_int_with(rng, 0, MIN_LENGTH - 1)?];
        password[slot] = pick_with(rng, category.chars())?;
    }

    // Fisher-Yates, each slot swaps with one drawn from [slot, length - 1]
    for slot in 0..length - 1 {
        let other = uniform_int_with(rng, slot, length - 1)?;
        password.swap(slot, other);
    }

    debug!("generated password of length {}", length);

    Ok(password.iter().collect())
}

/// Generates a password of `length` characters from the operating system's CSPRNG.
pub fn generate_password(length: usize) -> Result<String, PasswordError> {
    generate_password_with(&mut aead::OsRng, length)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    pub fn generate(&self, length: usize) -> Result<String, PasswordError> {
        generate_password(length)
    }
}
