#[derive(Debug, PartialEq, Eq)]
pub enum PasswordError {
    InvalidArgument(String),
    RandomSourceFailure(String),
}

impl std::fmt::Display for PasswordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::InvalidArgument(msg) => f.write_fmt(std::format_args!("Invalid argument: {}", msg)),
            Self::RandomSourceFailure(msg) => {
                f.write_fmt(std::format_args!("Random source failure: {}", msg))
            }
        };
    }
}

impl std::error::Error for PasswordError {}

impl From<aead::rand_core::Error> for PasswordError {
    fn from(value: aead::rand_core::Error) -> Self {
        Self::RandomSourceFailure(value.to_string())
    }
}
