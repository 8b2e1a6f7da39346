//! Page resolution — map (command, platform, language) to a page file.
//!
//! A named platform composes exactly one candidate and reports which
//! directory level is missing when it cannot be found. The `any` wildcard
//! probes [`PLATFORMS`] in order and stops at the first page that exists.

use crate::error::Error;
use crate::selector::{is_path_segment, normalize_command, Language, Platform, PLATFORMS};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Extension of every page file.
pub const PAGE_EXTENSION: &str = "md";

/// Longest page path the resolver will compose.
pub const MAX_PAGE_PATH: usize = 4096;

/// Read-only existence checks used during resolution.
pub trait Probe {
    fn is_file(&self, path: &Path) -> bool;
    fn is_dir(&self, path: &Path) -> bool;
}

/// [`Probe`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[derive(Debug)]
pub struct Resolver<P = FsProbe> {
    root: PathBuf,
    probe: P,
}

impl Resolver<FsProbe> {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_probe(root, FsProbe)
    }
}

impl<P: Probe> Resolver<P> {
    pub fn with_probe(root: impl Into<PathBuf>, probe: P) -> Self {
        Self {
            root: root.into(),
            probe,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compose `<root>/<subtree>/<platform>/<command>.md` without touching the
    /// filesystem.
    pub fn page_path(
        &self,
        command: &str,
        platform: &str,
        language: &Language,
    ) -> Result<PathBuf, Error> {
        let path = self
            .root
            .join(language.subtree())
            .join(platform)
            .join(format!("{}.{}", command, PAGE_EXTENSION));
        if path.as_os_str().len() > MAX_PAGE_PATH {
            return Err(Error::InvalidSelector(format!(
                "page path exceeds {} bytes",
                MAX_PAGE_PATH
            )));
        }
        Ok(path)
    }

    /// Locate the page for `command`.
    pub fn resolve(
        &self,
        command: &str,
        platform: &Platform,
        language: &Language,
    ) -> Result<PathBuf, Error> {
        let command = normalize_command(command);
        if command.is_empty() {
            return Err(Error::page_not_found(command));
        }
        if command.starts_with('-') {
            return Err(Error::InvalidSelector("no command name was specified".to_string()));
        }
        if !is_path_segment(command) {
            return Err(Error::InvalidSelector(format!("invalid command name: {}", command)));
        }

        match platform {
            Platform::Any => self.scan(command, language),
            Platform::Named(name) => self.lookup(command, name, language),
        }
    }

    fn lookup(&self, command: &str, platform: &str, language: &Language) -> Result<PathBuf, Error> {
        let subtree = self.root.join(language.subtree());
        let platform_dir = subtree.join(platform);
        for dir in [&self.root, &subtree, &platform_dir] {
            if !self.probe.is_dir(dir) {
                return Err(Error::PlatformSubtreeMissing { path: dir.clone() });
            }
        }

        let page = self.page_path(command, platform, language)?;
        debug!(path = %page.display(), "probing page");
        if self.probe.is_file(&page) {
            Ok(page)
        } else {
            Err(Error::page_not_found(command))
        }
    }

    fn scan(&self, command: &str, language: &Language) -> Result<PathBuf, Error> {
        for platform in PLATFORMS {
            let page = self.page_path(command, platform, language)?;
            debug!(path = %page.display(), "probing page");
            if self.probe.is_file(&page) {
                debug!(platform, "page found");
                return Ok(page);
            }
        }

        // Nothing matched; tell an unsynced page set apart from a missing page.
        let subtree = self.root.join(language.subtree());
        if !self.probe.is_dir(&subtree) {
            return Err(Error::PlatformSubtreeMissing { path: subtree });
        }
        Err(Error::page_not_found(command))
    }
}
