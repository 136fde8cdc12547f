//! Settings: layout defaults from a TOML file and the environment.
//!
//! Precedence, lowest first: built-in defaults, the TOML file (explicit path
//! or `$TERMLAYOUT_CONFIG`), then `TERMLAYOUT_*` environment variables.
//!
//! ```toml
//! padding = 2
//! separator = ":"
//! body_align = "center"
//! metric = "cells"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::error::ValidationError;
use crate::layout::LayoutRequest;
use crate::types::{Align, WidthMetric, parse_single_char};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "TERMLAYOUT_CONFIG";

/// Failure to load [`Settings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Layout defaults for the CLI. Missing keys keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub padding: usize,
    pub separator: String,
    pub body_align: Align,
    pub content_align: Align,
    /// Fixed line width; `None` follows the terminal.
    pub width: Option<usize>,
    pub metric: WidthMetric,
    pub border_char: String,
    pub border_padding: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            padding: 2,
            separator: ":".to_string(),
            body_align: Align::Left,
            content_align: Align::Left,
            width: None,
            metric: WidthMetric::Bytes,
            border_char: "-".to_string(),
            border_padding: 1,
        }
    }
}

impl Settings {
    /// Defaults, then the config file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut settings = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_vars(|name| std::env::var(name).ok())?;
        settings.validate()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    /// Read a TOML settings file. Nothing from the environment is applied.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse settings from TOML text; unknown keys are rejected.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Apply `TERMLAYOUT_*` overrides looked up through `get`.
    pub fn apply_vars<F>(&mut self, get: F) -> Result<(), ValidationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(width) = get("TERMLAYOUT_WIDTH") {
            self.width = Some(parse_number("TERMLAYOUT_WIDTH", &width)?);
        }
        if let Some(padding) = get("TERMLAYOUT_PADDING") {
            self.padding = parse_number("TERMLAYOUT_PADDING", &padding)?;
        }
        if let Some(separator) = get("TERMLAYOUT_SEPARATOR") {
            self.separator = separator;
        }
        if let Some(metric) = get("TERMLAYOUT_METRIC") {
            self.metric = metric.parse()?;
        }
        Ok(())
    }

    /// Check padding, width and the single-character fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.padding < 1 {
            return Err(ValidationError::Padding(self.padding));
        }
        if self.width == Some(0) {
            return Err(ValidationError::ZeroWidth);
        }
        self.separator()?;
        self.border_char()?;
        Ok(())
    }

    /// The separator as a character.
    pub fn separator(&self) -> Result<char, ValidationError> {
        parse_single_char(&self.separator)
    }

    /// The border character used by `termlayout border` when `--char` is absent.
    pub fn border_char(&self) -> Result<char, ValidationError> {
        parse_single_char(&self.border_char)
    }

    /// An empty table request carrying these defaults.
    pub fn request(&self) -> Result<LayoutRequest, ValidationError> {
        Ok(LayoutRequest {
            body_align: self.body_align,
            content_align: self.content_align,
            padding: self.padding,
            width: self.width,
            separator: self.separator()?,
            metric: self.metric,
            pairs: Vec::new(),
        })
    }
}

fn parse_number(name: &'static str, value: &str) -> Result<usize, ValidationError> {
    value.trim().parse().map_err(|_| ValidationError::InvalidValue {
        name,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        let req = settings.request().unwrap();
        assert_eq!(req.separator, ':');
        assert_eq!(req.padding, 2);
        assert_eq!(req.width, None);
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings = Settings::from_toml_str(
            r#"
            padding = 4
            separator = "|"
            body_align = "center"
            content_align = "right"
            width = 72
            metric = "cells"
            "#,
        )
        .unwrap();
        assert_eq!(settings.padding, 4);
        assert_eq!(settings.body_align, Align::Center);
        assert_eq!(settings.content_align, Align::Right);
        assert_eq!(settings.width, Some(72));
        assert_eq!(settings.metric, WidthMetric::Cells);
        assert_eq!(settings.border_char, "-");
        assert_eq!(settings.request().unwrap().separator, '|');
    }

    #[test]
    fn toml_rejects_unknown_keys_and_values() {
        assert!(matches!(
            Settings::from_toml_str("colour = true"),
            Err(ConfigError::Parse(_))
        ));
        assert!(Settings::from_toml_str("body_align = \"middle\"").is_err());
    }

    #[test]
    fn env_vars_win() {
        let vars: HashMap<&str, &str> = [
            ("TERMLAYOUT_WIDTH", "100"),
            ("TERMLAYOUT_PADDING", " 3 "),
            ("TERMLAYOUT_SEPARATOR", "="),
            ("TERMLAYOUT_METRIC", "cells"),
        ]
        .into_iter()
        .collect();

        let mut settings = Settings::default();
        settings
            .apply_vars(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.width, Some(100));
        assert_eq!(settings.padding, 3);
        assert_eq!(settings.separator().unwrap(), '=');
        assert_eq!(settings.metric, WidthMetric::Cells);
    }

    #[test]
    fn bad_env_values() {
        let mut settings = Settings::default();
        let err = settings
            .apply_vars(|name| (name == "TERMLAYOUT_WIDTH").then(|| "wide".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidValue {
                name: "TERMLAYOUT_WIDTH",
                value: "wide".to_string()
            }
        );

        let mut settings = Settings::default();
        settings
            .apply_vars(|name| (name == "TERMLAYOUT_SEPARATOR").then(|| "::".to_string()))
            .unwrap();
        assert_eq!(
            settings.validate(),
            Err(ValidationError::NotSingleChar("::".to_string()))
        );
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = Settings::from_file(Path::new("/nonexistent/termlayout.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
