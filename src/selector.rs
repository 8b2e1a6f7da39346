//! Page selectors — platform, language and command name.
//!
//! Pages live at `<root>/pages[.<lang>]/<platform>/<command>.md`. These types
//! turn raw CLI strings into validated path segments.

use crate::error::Error;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Platforms searched by the `any` wildcard. Order is search priority.
pub const PLATFORMS: &[&str] = &["android", "common", "linux", "osx", "sunos", "windows"];

/// Wildcard platform name.
pub const ANY_PLATFORM: &str = "any";

/// Language code selecting the unsuffixed page subtree.
pub const DEFAULT_LANGUAGE: &str = "en";

static RE_LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{1,2}$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// Search every entry of [`PLATFORMS`] in order.
    Any,
    Named(String),
}

impl Platform {
    pub fn parse(name: &str) -> Result<Self, Error> {
        if name.is_empty() || name.starts_with('-') {
            return Err(Error::InvalidSelector("no platform was specified".to_string()));
        }
        if name == ANY_PLATFORM {
            return Ok(Platform::Any);
        }
        if !is_path_segment(name) {
            return Err(Error::InvalidSelector(format!("invalid platform name: {}", name)));
        }
        Ok(Platform::Named(name.to_string()))
    }

    /// Platform directories to look in, in search order.
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            Platform::Any => PLATFORMS.to_vec(),
            Platform::Named(name) => vec![name.as_str()],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Any => f.write_str(ANY_PLATFORM),
            Platform::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Language {
    /// The untranslated `pages` subtree.
    #[default]
    Default,
    /// A `pages.<code>` subtree.
    Translated(String),
}

impl Language {
    /// Validate an optional language code. Absent and `en` are equivalent.
    pub fn parse(code: Option<&str>) -> Result<Self, Error> {
        let Some(code) = code else {
            return Ok(Language::Default);
        };
        if code == DEFAULT_LANGUAGE {
            return Ok(Language::Default);
        }
        if code.chars().count() > 2 {
            return Err(Error::InvalidSelector(
                "language code can be only two characters long".to_string(),
            ));
        }
        if !RE_LANGUAGE.is_match(code) {
            return Err(Error::InvalidSelector(format!("invalid language code: {}", code)));
        }
        Ok(Language::Translated(code.to_string()))
    }

    /// Directory name of this language's page subtree.
    pub fn subtree(&self) -> String {
        match self {
            Language::Default => "pages".to_string(),
            Language::Translated(code) => format!("pages.{}", code),
        }
    }
}

/// Strip trailing dots so `ls.` and `ls...` name the same page as `ls`.
pub fn normalize_command(command: &str) -> &str {
    command.trim_end_matches('.')
}

/// True when `name` can be joined onto a directory without escaping it.
pub(crate) fn is_path_segment(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_en_are_the_same_language() {
        assert_eq!(Language::parse(None).unwrap(), Language::parse(Some("en")).unwrap());
        assert_eq!(Language::parse(None).unwrap().subtree(), "pages");
    }

    #[test]
    fn translated_subtree() {
        let lang = Language::parse(Some("fr")).unwrap();
        assert_eq!(lang, Language::Translated("fr".to_string()));
        assert_eq!(lang.subtree(), "pages.fr");
    }

    #[test]
    fn long_language_code_rejected() {
        let err = Language::parse(Some("pt_BR")).unwrap_err();
        assert!(matches!(err, Error::InvalidSelector(_)));
        assert!(err.to_string().contains("two characters"));
    }

    #[test]
    fn non_alphabetic_language_rejected() {
        assert!(Language::parse(Some("..")).is_err());
        assert!(Language::parse(Some("")).is_err());
    }

    #[test]
    fn any_platform_is_wildcard() {
        assert_eq!(Platform::parse("any").unwrap(), Platform::Any);
        assert_eq!(Platform::Any.candidates(), PLATFORMS.to_vec());
    }

    #[test]
    fn named_platform_single_candidate() {
        let platform = Platform::parse("linux").unwrap();
        assert_eq!(platform.candidates(), vec!["linux"]);
        assert_eq!(platform.to_string(), "linux");
    }

    #[test]
    fn platform_cannot_escape_root() {
        assert!(Platform::parse("../etc").is_err());
        assert!(Platform::parse("..").is_err());
        assert!(Platform::parse("--cmd").is_err());
        assert!(Platform::parse("").is_err());
    }

    #[test]
    fn trailing_dots_stripped() {
        assert_eq!(normalize_command("ls..."), "ls");
        assert_eq!(normalize_command("ls"), "ls");
        assert_eq!(normalize_command("..."), "");
        assert_eq!(normalize_command("docker.io"), "docker.io");
    }
}
