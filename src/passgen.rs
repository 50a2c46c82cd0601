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
// Password generator

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::error::InvalidOptions;
use crate::wordlist::{WordList, DEFAULT_LANGUAGE};

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 128;
pub const DEFAULT_LENGTH: usize = 16;

/// 随机密码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub special: bool,
    pub exclude_similar: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: false,
            special: false,
            exclude_similar: false,
        }
    }
}

impl GenerationOptions {
    /// Lowercase, uppercase, digits and symbols, used by the quick command.
    pub fn quick(length: usize) -> Self {
        Self {
            length,
            symbols: true,
            ..Default::default()
        }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.numbers,
            CharacterClass::Symbol => self.symbols,
            CharacterClass::Extended => self.special,
            CharacterClass::Ambiguous => self.exclude_similar,
        }
    }

    pub fn set_enabled(&mut self, class: CharacterClass, enabled: bool) {
        match class {
            CharacterClass::Lowercase => self.lowercase = enabled,
            CharacterClass::Uppercase => self.uppercase = enabled,
            CharacterClass::Digit => self.numbers = enabled,
            CharacterClass::Symbol => self.symbols = enabled,
            CharacterClass::Extended => self.special = enabled,
            CharacterClass::Ambiguous => self.exclude_similar = enabled,
        }
    }

    /// Additive classes that are switched on, in generation order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ADDITIVE
            .into_iter()
            .filter(|class| self.is_enabled(*class))
            .collect()
    }
}

/// 记忆密码生成选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassphraseOptions {
    pub word_count: usize,
    pub separator: String,
    pub language: String,
}

impl Default for PassphraseOptions {
    fn default() -> Self {
        Self {
            word_count: 4,
            separator: "-".to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// Generator bound to an allowed password length range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordGenerator {
    min_length: usize,
    max_length: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self {
            min_length: MIN_LENGTH,
            max_length: MAX_LENGTH,
        }
    }
}

impl PasswordGenerator {
    pub fn with_bounds(min_length: usize, max_length: usize) -> Self {
        Self { min_length, max_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn accepts_length(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }

    pub fn generate(&self, options: &GenerationOptions) -> Result<String, InvalidOptions> {
        let classes = options.enabled_classes();
        if classes.is_empty() {
            return Err(InvalidOptions::NoCharacterClass);
        }
        if !self.accepts_length(options.length) {
            return Err(InvalidOptions::LengthOutOfRange {
                length: options.length,
                min: self.min_length,
                max: self.max_length,
            });
        }

        // Build per-class sets after removing ambiguous characters
        let required_sets: Vec<Vec<char>> = classes
            .iter()
            .map(|class| class.filtered_alphabet(options.exclude_similar))
            .collect();

        let all_chars: Vec<char> = required_sets.concat();
        if all_chars.is_empty() {
            return Err(InvalidOptions::EmptyAlphabet);
        }
        if let Some(pos) = required_sets.iter().position(Vec::is_empty) {
            return Err(InvalidOptions::EmptyClass(classes[pos]));
        }

        let mut rng = OsRng;
        let mut password_chars = Vec::with_capacity(options.length);

        // One character from each class, unless the password is too short to hold them all
        if options.length >= required_sets.len() {
            for set in &required_sets {
                password_chars.push(pick(set, &mut rng)?);
            }
        }

        // Add remaining characters from combined pool
        while password_chars.len() < options.length {
            password_chars.push(pick(&all_chars, &mut rng)?);
        }

        // Shuffle the characters to avoid predictable pattern
        password_chars.shuffle(&mut rng);

        Ok(password_chars.into_iter().collect())
    }

    /// 生成记忆密码（基于单词列表）。未知语言回退到默认列表。
    pub fn generate_passphrase(
        &self,
        word_count: usize,
        separator: &str,
        language: &str,
    ) -> Result<String, InvalidOptions> {
        passphrase_from_list(&WordList::for_language(language), word_count, separator)
    }

    pub fn generate_phrase(&self, options: &PassphraseOptions) -> Result<String, InvalidOptions> {
        self.generate_passphrase(options.word_count, &options.separator, &options.language)
    }
}

/// Builds a passphrase from an explicit word list.
pub fn passphrase_from_list(
    list: &WordList,
    word_count: usize,
    separator: &str,
) -> Result<String, InvalidOptions> {
    if list.is_empty() {
        return Err(InvalidOptions::EmptyWordList(list.language.to_string()));
    }

    let mut rng = OsRng;
    let mut words = Vec::with_capacity(word_count);

    for _ in 0..word_count {
        let word = list
            .words
            .choose(&mut rng)
            .ok_or_else(|| InvalidOptions::EmptyWordList(list.language.to_string()))?;
        words.push(process_word(word, &mut rng));
    }

    Ok(words.join(separator))
}

/// Generates with the default length bounds.
pub fn generate_password(options: &GenerationOptions) -> Result<String, InvalidOptions> {
    PasswordGenerator::default().generate(options)
}

pub fn generate_passphrase(
    word_count: usize,
    separator: &str,
    language: &str,
) -> Result<String, InvalidOptions> {
    PasswordGenerator::default().generate_passphrase(word_count, separator, language)
}

fn pick(set: &[char], rng: &mut OsRng) -> Result<char, InvalidOptions> {
    set.choose(rng).copied().ok_or(InvalidOptions::EmptyAlphabet)
}

/// 处理单词大小写，并按 1/3 概率追加 0-99 的数字
fn process_word(word: &str, rng: &mut OsRng) -> String {
    let mut processed = match rng.gen_range(0..3) {
        0 => word.to_string(),
        1 => word.to_uppercase(),
        _ => word.to_lowercase(),
    };
    if rng.gen_range(0..3) == 0 {
        let number: u8 = rng.gen_range(0..100);
        processed.push_str(&number.to_string());
    }
    processed
}
