//! Spotify Web API command-line client library.
//!
//! This library backs the `spocli` binary. It authenticates as an application
//! with the client-credentials grant, keeps the resulting bearer token fresh,
//! and exposes a handful of read-only catalogue queries (search, browse,
//! artist listings) that render as two-column tables.
//!
//! # Modules
//!
//! - `cli` - Command bodies that query the API and print results
//! - `config` - Environment and `.env` based settings
//! - `error` - Error taxonomy shared by every module
//! - `management` - Credentials, clock and the token session
//! - `spotify` - Spotify Web API client and endpoint wrappers
//! - `types` - Data structures and type definitions
//! - `utils` - Rendering and small helpers
//!
//! # Example
//!
//! ```
//! use spocli::{config::Settings, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spocli::Res<()> {
//!     let settings = Settings::from_env()?;
//!     let client = SpotifyClient::from_settings(&settings)?;
//!     let listing = client.new_releases().await?;
//!     println!("{}", spocli::utils::listing_table(&listing));
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::Error;

/// A convenient Result type alias for operations that may fail.
///
/// Every fallible operation in the library reports one of the [`Error`]
/// variants, so callers can tell configuration, authentication and transport
/// problems apart.
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Error>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message.
///
/// # Example
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Found {} results", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Used for unrecoverable errors
/// such as missing credentials or a rejected token exchange.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, like an empty result set, that the user
/// should notice but that do not stop the program.
///
/// # Example
///
/// ```
/// warning!("No results for {}", query);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
