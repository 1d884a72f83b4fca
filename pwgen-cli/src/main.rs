mod clipboard;

use clap::Parser;
use log::{error, info};
use pwgen_lib::zeroize::Zeroizing;
use pwgen_lib::{generate_password, PasswordError};

#[derive(Parser, Debug)]
#[command(version, about = "Generate random passwords with symbols, letters and digits")]
struct Args {
    /// Length of each password, at least 4
    #[arg(short, long, value_name = "length", default_value_t = 16)]
    length: usize,

    /// Number of passwords to generate
    #[arg(short = 'n', long, value_name = "count", default_value_t = 1)]
    count: usize,

    /// Copy to the clipboard instead of printing
    #[arg(short, long, default_value_t = false)]
    clipboard: bool,
}

#[derive(Debug)]
enum CliError {
    Password(PasswordError),
    Clipboard(String),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return match self {
            Self::Password(error) => f.write_fmt(std::format_args!("{}", error)),
            Self::Clipboard(msg) => f.write_fmt(std::format_args!("Clipboard error: {}", msg)),
        };
    }
}

impl std::error::Error for CliError {}

impl From<PasswordError> for CliError {
    fn from(value: PasswordError) -> Self {
        Self::Password(value)
    }
}

impl From<arboard::Error> for CliError {
    fn from(value: arboard::Error) -> Self {
        Self::Clipboard(value.to_string())
    }
}

fn generate_all(length: usize, count: usize) -> Result<Vec<Zeroizing<String>>, PasswordError> {
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(Zeroizing::new(generate_password(length)?));
    }

    Ok(passwords)
}

fn run(args: Args) -> Result<(), CliError> {
    let passwords = generate_all(args.length, args.count)?;

    if args.clipboard {
        let text = Zeroizing::new(
            passwords
                .iter()
                .map(|password| password.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
        );
        clipboard::copy(text.as_str())?;
        info!("copied {} password(s) to the clipboard", passwords.len());
    } else {
        for password in passwords.iter() {
            println!("{}", password.as_str());
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Err(error) = run(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{generate_all, run, Args, CliError};
    use pwgen_lib::PasswordError;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pwgen"]).unwrap();
        assert_eq!(args.length, 16);
        assert_eq!(args.count, 1);
        assert!(!args.clipboard);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from(["pwgen", "-l", "32", "-n", "5", "-c"]).unwrap();
        assert_eq!(args.length, 32);
        assert_eq!(args.count, 5);
        assert!(args.clipboard);

        let args = Args::try_parse_from(["pwgen", "--length", "8", "--count", "2"]).unwrap();
        assert_eq!(args.length, 8);
        assert_eq!(args.count, 2);
    }

    #[test]
    fn test_rejects_negative_length() {
        assert!(Args::try_parse_from(["pwgen", "--length", "-4"]).is_err());
    }

    #[test]
    fn test_generate_all() {
        let passwords = generate_all(10, 3).unwrap();
        assert_eq!(passwords.len(), 3);
        assert!(passwords.iter().all(|password| password.len() == 10));
        assert!(generate_all(10, 0).unwrap().is_empty());
    }

    #[test]
    fn test_run_short_length() {
        let args = Args::try_parse_from(["pwgen", "-l", "3"]).unwrap();
        let result = run(args);
        assert!(matches!(
            result,
            Err(CliError::Password(PasswordError::InvalidArgument(_)))
        ));
    }

    #[test]
    fn test_run_prints() {
        let args = Args::try_parse_from(["pwgen", "-l", "12", "-n", "2"]).unwrap();
        assert!(run(args).is_ok());
    }
}
