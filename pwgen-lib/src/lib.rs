pub mod category;
pub mod error;
pub mod password;
pub mod random;

pub use zeroize;

pub use category::CharacterCategory;
pub use error::PasswordError;
pub use password::{generate_password, generate_password_with, PasswordGenerator, MIN_LENGTH};
pub use random::uniform_int;
