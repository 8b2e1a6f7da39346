//! Invocation configuration assembled from CLI selectors and the environment.

use crate::error::Error;
use crate::render::Palette;
use crate::selector::{Language, Platform};
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Default pages root: the directory the page archive extracts to.
pub const DEFAULT_ROOT: &str = "tldr-main";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "MANDR_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is not set.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn palette(self) -> &'static Palette {
        match self {
            ColorChoice::Always => Palette::ansi(),
            ColorChoice::Never => Palette::plain(),
            ColorChoice::Auto => {
                let no_color = env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
                if no_color || !io::stdout().is_terminal() {
                    Palette::plain()
                } else {
                    Palette::ansi()
                }
            }
        }
    }
}

/// Validated selectors for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    pub language: Language,
    pub platform: Platform,
    pub palette: &'static Palette,
}

impl Config {
    pub fn new(
        root: PathBuf,
        language: Option<&str>,
        platform: &str,
        color: ColorChoice,
    ) -> Result<Self, Error> {
        Ok(Self {
            root,
            language: Language::parse(language)?,
            platform: Platform::parse(platform)?,
            palette: color.palette(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_selectors() {
        let config = Config::new(
            PathBuf::from("pages-root"),
            Some("fr"),
            "linux",
            ColorChoice::Never,
        )
        .unwrap();
        assert_eq!(config.language, Language::Translated("fr".to_string()));
        assert_eq!(config.platform, Platform::Named("linux".to_string()));
        assert_eq!(config.palette, Palette::plain());
    }

    #[test]
    fn rejects_long_language() {
        let err =
            Config::new(PathBuf::from("r"), Some("eng"), "any", ColorChoice::Never).unwrap_err();
        assert!(matches!(err, Error::InvalidSelector(_)));
    }

    #[test]
    fn always_forces_ansi() {
        assert_eq!(ColorChoice::Always.palette(), Palette::ansi());
    }
}
