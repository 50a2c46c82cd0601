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
// Error types

use std::path::PathBuf;

use thiserror::Error;

use crate::charset::CharacterClass;

/// Rejected generation options. Always a caller error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidOptions {
    #[error("At least one character set must be included")]
    NoCharacterClass,

    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange { length: usize, min: usize, max: usize },

    #[error("{0} character set is empty after removing ambiguous characters")]
    EmptyClass(CharacterClass),

    #[error("Character pool is empty after removing ambiguous characters")]
    EmptyAlphabet,

    #[error("Word list for language '{0}' is empty")]
    EmptyWordList(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Length {length} is outside {min}..={max}")]
    LengthNotAllowed { length: usize, min: usize, max: usize },

    #[error("Unknown character class '{0}'")]
    UnknownClass(String),
}
