//  ____  ____     __        __    __  __           _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | __ _ ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _` / __| __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | | (_| \__ \ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\__,_|___/\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-10-19
// Version : 0.1.0
// License : Mulan PSL v2
//
// Settings: defaults, config file and environment overrides

use std::{env, fs, path::{Path, PathBuf}, str::FromStr};

use dirs::config_dir;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::passgen::{GenerationOptions, PassphraseOptions, PasswordGenerator, MAX_LENGTH, MIN_LENGTH};
use crate::wordlist::DEFAULT_LANGUAGE;

pub const APP_NAME: &str = "rpassgen";
pub const CONFIG_ENV: &str = "RPASSGEN_CONFIG";
pub const MIN_WORD_COUNT: usize = 3;
pub const MAX_WORD_COUNT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub default_length: usize,
    pub quick_length: usize,
    pub min_length: usize,
    pub max_length: usize,
    pub word_count: usize,
    pub separator: String,
    pub language: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_length: 16,
            quick_length: 24,
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
            word_count: 4,
            separator: "-".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl Settings {
    /// Defaults, then the config file, then `RPASSGEN_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(default_config_path);
        let mut settings = match path {
            Some(path) if path.is_file() => {
                log::debug!("Loading settings from {}", path.display());
                Self::from_file(&path)?
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        };
        settings.apply_env(|key| env::var(key).ok());
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        override_parsed(&lookup, "RPASSGEN_DEFAULT_LENGTH", &mut self.default_length);
        override_parsed(&lookup, "RPASSGEN_QUICK_LENGTH", &mut self.quick_length);
        override_parsed(&lookup, "RPASSGEN_MIN_LENGTH", &mut self.min_length);
        override_parsed(&lookup, "RPASSGEN_MAX_LENGTH", &mut self.max_length);
        override_parsed(&lookup, "RPASSGEN_WORD_COUNT", &mut self.word_count);
        if let Some(separator) = lookup("RPASSGEN_SEPARATOR") {
            self.separator = separator;
        }
        if let Some(language) = lookup("RPASSGEN_LANGUAGE") {
            self.language = language.trim().to_lowercase();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::Invalid("min_length must be at least 1".to_string()));
        }
        if self.min_length > self.max_length {
            return Err(ConfigError::Invalid(format!(
                "min_length {} is greater than max_length {}",
                self.min_length, self.max_length
            )));
        }
        for (name, value) in [
            ("default_length", self.default_length),
            ("quick_length", self.quick_length),
        ] {
            if value < self.min_length || value > self.max_length {
                return Err(ConfigError::Invalid(format!(
                    "{} {} is outside {}..={}",
                    name, value, self.min_length, self.max_length
                )));
            }
        }
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&self.word_count) {
            return Err(ConfigError::Invalid(format!(
                "word_count {} is outside {}..={}",
                self.word_count, MIN_WORD_COUNT, MAX_WORD_COUNT
            )));
        }
        Ok(())
    }

    pub fn generator(&self) -> PasswordGenerator {
        PasswordGenerator::with_bounds(self.min_length, self.max_length)
    }

    pub fn password_options(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            ..Default::default()
        }
    }

    pub fn passphrase_options(&self) -> PassphraseOptions {
        PassphraseOptions {
            word_count: self.word_count,
            separator: self.separator.clone(),
            language: self.language.clone(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(APP_NAME).join("config.json"))
}

fn override_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(key) {
        match raw.trim().parse() {
            Ok(value) => *target = value,
            Err(_) => log::warn!("Ignoring {}: '{}' is not a valid value", key, raw),
        }
    }
}
