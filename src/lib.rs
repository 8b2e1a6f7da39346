//! mandr — locate and render TL;DR command reference pages.
//!
//! Two independent pieces, composed by the `mandr` binary:
//!
//! - [`resolve::Resolver`] maps a command, platform and language to a page
//!   file under `<root>/pages[.<lang>]/<platform>/<command>.md`.
//! - [`render::render`] turns the page markup into colorized terminal text.

pub mod config;
pub mod error;
pub mod list;
pub mod render;
pub mod resolve;
pub mod selector;

pub use config::{ColorChoice, Config};
pub use error::Error;
pub use render::{render, Palette};
pub use resolve::Resolver;
pub use selector::{Language, Platform};

use std::fs;
use std::path::Path;

/// Read a whole page file into memory.
pub fn read_page(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
