use aead::rand_core::{CryptoRng, RngCore};
use log::trace;

use crate::error::PasswordError;

fn next_u64<R: RngCore + CryptoRng>(rng: &mut R) -> Result<u64, PasswordError> {
    let mut bytes = [0; 8];
    rng.try_fill_bytes(&mut bytes)?;

    Ok(u64::from_le_bytes(bytes))
}

/// Draws an integer uniformly from `[min, max]` (both inclusive) using `rng`.
///
/// Draws that would introduce modulo bias are rejected and redrawn.
pub fn uniform_int_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    min: usize,
    max: usize,
) -> Result<usize, PasswordError> {
    if min > max {
        return Err(PasswordError::InvalidArgument(format!(
            "invalid range ({}, {})",
            min, max
        )));
    }

    let span = (max - min) as u64;
    if span == u64::MAX {
        return Ok(min + next_u64(rng)? as usize);
    }

    let range = span + 1;
    // Largest multiple of `range` that fits, everything at or above it is biased
    let limit = u64::MAX - u64::MAX % range;

    loop {
        let value = next_u64(rng)?;
        if value < limit {
            return Ok(min + (value % range) as usize);
        }
        trace!("rejected draw for range ({}, {})", min, max);
    }
}

/// Same as [`uniform_int_with`] backed by the operating system's CSPRNG.
pub fn uniform_int(min: usize, max: usize) -> Result<usize, PasswordError> {
    uniform_int_with(&mut aead::OsRng, min, max)
}
