use aead::rand_core::{CryptoRng, RngCore};

use crate::error::PasswordError;
use crate::random::uniform_int_with;

static SYMBOLS: &[u8] = b"!@#$%^&*()_+{}:<>?|[];',./`~";
static LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
static UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static DIGITS: &[u8] = b"0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterCategory {
    Symbol,
    Lowercase,
    Uppercase,
    Digit,
}

impl CharacterCategory {
    /// Every category, in the order guaranteed characters are drawn.
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Symbol,
        CharacterCategory::Lowercase,
        CharacterCategory::Uppercase,
        CharacterCategory::Digit,
    ];

    pub fn chars(self) -> &'static [u8] {
        match self {
            Self::Symbol => SYMBOLS,
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.chars().contains(&(c as u8))
    }

    /// Category the character belongs to, `None` for anything the generator never emits.
    pub fn of(c: char) -> Option<CharacterCategory> {
        Self::ALL.into_iter().find(|category| category.contains(c))
    }
}

/// Picks one character uniformly from `category` using `rng`.
pub fn pick_with<R: RngCore + CryptoRng>(
    rng: &mut R,
    category: &[u8],
) -> Result<char, PasswordError> {
    let last = match category.len().checked_sub(1) {
        Some(last) => last,
        None => {
            return Err(PasswordError::InvalidArgument(
                "cannot pick from an empty category".to_string(),
            ))
        }
    };

    let index = uniform_int_with(rng, 0, last)?;

    Ok(category[index] as char)
}

pub fn pick(category: &[u8]) -> Result<char, PasswordError> {
    pick_with(&mut aead::OsRng, category)
}
