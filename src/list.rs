//! Command listing for a platform/language page subtree.

use crate::error::Error;
use crate::render::Palette;
use crate::resolve::PAGE_EXTENSION;
use crate::selector::{Language, Platform};
use std::io;
use std::path::Path;
use tracing::debug;

/// Names of the pages available under `platform`, sorted and deduplicated.
///
/// The `any` platform lists the union of every known platform.
pub fn list_commands(
    root: &Path,
    platform: &Platform,
    language: &Language,
) -> Result<Vec<String>, Error> {
    let subtree = root.join(language.subtree());
    let mut names = Vec::new();
    let mut searched = false;

    for name in platform.candidates() {
        let dir = subtree.join(name);
        if !dir.is_dir() {
            continue;
        }
        searched = true;
        debug!(dir = %dir.display(), "listing pages");

        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            PAGE_EXTENSION
        );
        let entries = glob::glob(&pattern).map_err(|e| pattern_error(&dir, e))?;
        for entry in entries {
            let path = entry.map_err(|e| Error::Io {
                path: e.path().to_path_buf(),
                source: e.into_error(),
            })?;
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }

    if !searched {
        let path = match platform {
            Platform::Any => subtree,
            Platform::Named(name) => subtree.join(name),
        };
        return Err(Error::PlatformSubtreeMissing { path });
    }

    names.sort();
    names.dedup();
    Ok(names)
}

fn pattern_error(dir: &Path, err: glob::PatternError) -> Error {
    Error::Io {
        path: dir.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, err.to_string()),
    }
}

/// Numbered listing, one command per line.
pub fn format_listing(names: &[String], palette: &Palette) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        out.push_str(&format!("{}{}. {}\n", palette.description, i + 1, name));
    }
    out
}
