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
// Interactive generator session

use crate::charset::CharacterClass;
use crate::error::{InvalidOptions, SessionError};
use crate::passgen::{GenerationOptions, PasswordGenerator};
use crate::strength::{analyze, StrengthReport};

/// Lengths offered as presets in the interactive menu.
pub const LENGTH_PRESETS: [usize; 6] = [8, 12, 16, 20, 24, 32];

/// Configuration collected over several steps. `generate` ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    options: GenerationOptions,
    min_length: usize,
    max_length: usize,
}

impl Session {
    pub fn new(generator: &PasswordGenerator, options: GenerationOptions) -> Self {
        Self {
            options,
            min_length: generator.min_length(),
            max_length: generator.max_length(),
        }
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), SessionError> {
        if !(self.min_length..=self.max_length).contains(&length) {
            return Err(SessionError::LengthNotAllowed {
                length,
                min: self.min_length,
                max: self.max_length,
            });
        }
        self.options.length = length;
        Ok(())
    }

    /// Presets that fit within this session's bounds.
    pub fn presets(&self) -> Vec<usize> {
        LENGTH_PRESETS
            .into_iter()
            .filter(|len| (self.min_length..=self.max_length).contains(len))
            .collect()
    }

    /// Flips `class` and returns its new state. `Ambiguous` flips the exclusion filter.
    pub fn toggle(&mut self, class: CharacterClass) -> bool {
        let enabled = !self.options.is_enabled(class);
        self.options.set_enabled(class, enabled);
        enabled
    }

    pub fn toggle_by_name(&mut self, name: &str) -> Result<(CharacterClass, bool), SessionError> {
        let class = CharacterClass::from_name(name)
            .ok_or_else(|| SessionError::UnknownClass(name.to_string()))?;
        Ok((class, self.toggle(class)))
    }

    /// Enabled classes as a short list, e.g. `a-z, A-Z, 0-9`.
    pub fn summary(&self) -> String {
        let labels: Vec<&str> = self
            .options
            .enabled_classes()
            .into_iter()
            .map(CharacterClass::label)
            .collect();
        let mut summary = if labels.is_empty() {
            "none".to_string()
        } else {
            labels.join(", ")
        };
        if self.options.exclude_similar {
            summary.push_str(" (without il1LIo0O)");
        }
        summary
    }

    pub fn generate(
        self,
        generator: &PasswordGenerator,
    ) -> Result<(String, StrengthReport), InvalidOptions> {
        let password = generator.generate(&self.options)?;
        let report = analyze(&password);
        Ok((password, report))
    }
}
