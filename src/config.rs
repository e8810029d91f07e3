//! Configuration file support
//!
//! Loads settings from ~/.ngspicer.toml (or %USERPROFILE%\.ngspicer.toml on Windows)
//!
//! Example:
//! ```toml
//! theme = "Dark"
//! highlighting = true
//!
//! [editor]
//! tab-style = "Soft"
//! tab-spacing = 4
//!
//! [languages]
//! net = "SPICE"
//!
//! [colors]
//! keyword = "#5f87d7"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::error::{HighlightError, Result};
use crate::indent::{TabSettings, TabStyle, MAX_TAB_SPACING};
use crate::syntax::{Color, Language, LanguageSelector, Theme, ThemeKind, TokenClass};

const CONFIG_FILE: &str = ".ngspicer.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub theme: ThemeKind,
    /// Whether code views are highlighted at all
    pub highlighting: bool,
    pub tabs: TabSettings,
    /// Extension overrides, applied on top of the built-in table
    pub languages: Vec<(String, Language)>,
    /// Per-class foreground overrides
    pub colors: Vec<(TokenClass, Color)>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeKind::default(),
            highlighting: true,
            tabs: TabSettings::default(),
            languages: Vec::new(),
            colors: Vec::new(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE))
        }
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::parse(&contents)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse config file contents
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents.parse()?;
        let mut config = Config::default();
        config.apply(&table)?;
        Ok(config)
    }

    /// Apply settings from a parsed table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match key.as_str() {
                "theme" => self.theme = ThemeKind::from_name(expect_str(key, value)?)?,
                "highlighting" => self.highlighting = expect_bool(key, value)?,
                "editor" => self.apply_editor(expect_table(key, value)?)?,
                "languages" => self.apply_languages(expect_table(key, value)?)?,
                "colors" => self.apply_colors(expect_table(key, value)?)?,
                _ => tracing::warn!(key = %key, "ignoring unknown config key"),
            }
        }
        Ok(())
    }

    fn apply_editor(&mut self, table: &Table) -> Result<()> {
        let mut style = self.tabs.style();
        let mut spacing = self.tabs.spacing();

        for (key, value) in table {
            match key.as_str() {
                "tab-style" => {
                    let name = expect_str(key, value)?;
                    style = TabStyle::from_name(name).ok_or_else(|| {
                        HighlightError::Config(format!("unknown tab style `{}`", name))
                    })?;
                }
                "tab-spacing" => {
                    let n = value.as_integer().ok_or_else(|| type_error(key, "an integer"))?;
                    spacing = n.clamp(1, MAX_TAB_SPACING as i64) as usize; // Between 1 and 16
                }
                _ => tracing::warn!(key = %key, "ignoring unknown [editor] key"),
            }
        }

        self.tabs = TabSettings::new(style, spacing)?;
        Ok(())
    }

    fn apply_languages(&mut self, table: &Table) -> Result<()> {
        for (ext, value) in table {
            let language = Language::from_name(expect_str(ext, value)?)?;
            self.languages.push((ext.clone(), language));
        }
        Ok(())
    }

    fn apply_colors(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match TokenClass::from_name(key) {
                Some(class) => {
                    let color = Color::from_hex(expect_str(key, value)?)?;
                    self.colors.push((class, color));
                }
                None => tracing::warn!(key = %key, "ignoring color for unknown token class"),
            }
        }
        Ok(())
    }

    /// Build the configured theme with color overrides applied
    pub fn build_theme(&self) -> Theme {
        let mut theme = Theme::new(self.theme);
        for (class, color) in &self.colors {
            theme.set_color(*class, *color);
        }
        theme
    }

    /// Build a language selector with extension overrides applied
    pub fn build_selector(&self) -> LanguageSelector {
        let mut selector = LanguageSelector::new();
        for (ext, language) in &self.languages {
            selector.set_extension(ext, *language);
        }
        selector
    }
}

fn type_error(key: &str, expected: &str) -> HighlightError {
    HighlightError::Config(format!("`{}` must be {}", key, expected))
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value.as_str().ok_or_else(|| type_error(key, "a string"))
}

fn expect_bool(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| type_error(key, "a boolean"))
}

fn expect_table<'a>(key: &str, value: &'a Value) -> Result<&'a Table> {
    value.as_table().ok_or_else(|| type_error(key, "a table"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r##"
# Comment
theme = "dark"
highlighting = false

[editor]
tab-style = "Hard"
tab-spacing = 2

[languages]
".net" = "SPICE"

[colors]
keyword = "#5f87d7"
        "##;

        let config = Config::parse(contents).unwrap();
        assert_eq!(config.theme, ThemeKind::Dark);
        assert!(!config.highlighting);
        assert_eq!(config.tabs.style(), TabStyle::Hard);
        assert_eq!(config.tabs.spacing(), 2);
        assert_eq!(config.languages, vec![(".net".to_string(), Language::Spice)]);
        assert_eq!(
            config.colors,
            vec![(TokenClass::Keyword, Color::Rgb(0x5f, 0x87, 0xd7))]
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_tab_spacing_clamped() {
        let config = Config::parse("[editor]\ntab-spacing = 40").unwrap();
        assert_eq!(config.tabs.spacing(), 16);
        let config = Config::parse("[editor]\ntab-spacing = 0").unwrap();
        assert_eq!(config.tabs.spacing(), 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = Config::parse("font = \"mono\"\n[colors]\nsparkle = \"#ffffff\"").unwrap();
        assert!(config.colors.is_empty());
    }

    #[test]
    fn test_wrong_types_rejected() {
        assert!(matches!(
            Config::parse("highlighting = \"yes\""),
            Err(HighlightError::Config(_))
        ));
        assert!(matches!(
            Config::parse("editor = 3"),
            Err(HighlightError::Config(_))
        ));
        assert!(matches!(
            Config::parse("theme = \"Solarized\""),
            Err(HighlightError::UnknownTheme(_))
        ));
        assert!(matches!(
            Config::parse("[colors]\nstring = \"green\""),
            Err(HighlightError::InvalidColor(_))
        ));
        assert!(matches!(
            Config::parse("theme = "),
            Err(HighlightError::Toml(_))
        ));
    }

    #[test]
    fn test_build_theme_and_selector() {
        let config = Config::parse(
            "theme = \"Dark\"\n[languages]\nnet = \"spice\"\n[colors]\ncomment = \"#010203\"",
        )
        .unwrap();

        let theme = config.build_theme();
        assert_eq!(theme.kind(), ThemeKind::Dark);
        assert_eq!(theme.class_style(TokenClass::Comment).fg, Color::Rgb(1, 2, 3));

        let selector = config.build_selector();
        assert_eq!(selector.detect(Path::new("amp.net")), Language::Spice);
        assert_eq!(selector.detect(Path::new("amp.py")), Language::Python);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("ngspicer-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "theme = \"Dark\"\n[editor]\ntab-spacing = 8\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeKind::Dark);
        assert_eq!(config.tabs.spacing(), 8);

        let missing = Config::load_from(&dir.join("missing.toml")).unwrap();
        assert_eq!(missing, Config::default());

        fs::remove_dir_all(&dir).unwrap();
    }
}
