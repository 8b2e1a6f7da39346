//! Error taxonomy shared by the resolver, renderer and listing.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Shown instead of a command name that has nothing printable in it.
pub const UNKNOWN_COMMAND: &str = "(unknown characters)";

/// Exit code for selector (usage) errors.
pub const EXIT_USAGE: u8 = 2;

/// Exit code for every other failure.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum Error {
    /// A language, platform or command selector was rejected before lookup.
    #[error("{0}")]
    InvalidSelector(String),

    /// The pages root, language subtree or platform directory does not exist.
    #[error("no page directory at {}, have the pages been synced?", .path.display())]
    PlatformSubtreeMissing { path: PathBuf },

    /// No page exists for the command under the searched platform(s).
    #[error("no command found called {command}")]
    PageNotFound { command: String },

    /// The page cannot be scanned without running past the end of the input.
    #[error("malformed page markup at line {line}: {reason}")]
    MalformedMarkup { line: usize, reason: &'static str },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Build a [`Error::PageNotFound`], substituting a placeholder for
    /// commands that would print as nothing.
    pub fn page_not_found(command: &str) -> Self {
        let printable = command.chars().any(|c| !c.is_control() && !c.is_whitespace());
        let command = if printable {
            command.to_string()
        } else {
            UNKNOWN_COMMAND.to_string()
        };
        Error::PageNotFound { command }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Error::InvalidSelector(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
