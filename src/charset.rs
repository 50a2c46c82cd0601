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
// Character classes

use std::fmt;

use serde::{Deserialize, Serialize};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?/~`";
pub const EXTENDED_SYMBOLS: &str = "§€£¥©®™±×÷≠≈∞µ∂∑∏";
/// 易混淆字符，只用于过滤
pub const AMBIGUOUS: &str = "il1LIo0O";

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
    Extended,
    Ambiguous,
}

impl CharacterClass {
    /// Classes that contribute characters to an alphabet, in generation order.
    pub const ADDITIVE: [CharacterClass; 5] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
        CharacterClass::Extended,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
            CharacterClass::Extended => EXTENDED_SYMBOLS,
            CharacterClass::Ambiguous => AMBIGUOUS,
        }
    }

    pub fn is_additive(self) -> bool {
        !matches!(self, CharacterClass::Ambiguous)
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    /// Alphabet of this class, minus ambiguous characters when `exclude_ambiguous` is set.
    pub fn filtered_alphabet(self, exclude_ambiguous: bool) -> Vec<char> {
        self.alphabet()
            .chars()
            .filter(|c| !exclude_ambiguous || !is_ambiguous(*c))
            .collect()
    }

    /// Short label used in summaries, e.g. `a-z`.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "a-z",
            CharacterClass::Uppercase => "A-Z",
            CharacterClass::Digit => "0-9",
            CharacterClass::Symbol => "!@#",
            CharacterClass::Extended => "§€£",
            CharacterClass::Ambiguous => "il1LIo0O",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "lower" | "lowercase" => Some(CharacterClass::Lowercase),
            "upper" | "uppercase" => Some(CharacterClass::Uppercase),
            "digit" | "digits" | "number" | "numbers" => Some(CharacterClass::Digit),
            "symbol" | "symbols" => Some(CharacterClass::Symbol),
            "special" | "extended" => Some(CharacterClass::Extended),
            "similar" | "ambiguous" => Some(CharacterClass::Ambiguous),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digits",
            CharacterClass::Symbol => "symbols",
            CharacterClass::Extended => "special",
            CharacterClass::Ambiguous => "ambiguous",
        };
        f.write_str(name)
    }
}

pub fn is_ambiguous(c: char) -> bool {
    AMBIGUOUS.contains(c)
}

/// 找出密码中的易混淆字符
pub fn find_ambiguous(password: &str) -> Vec<char> {
    password.chars().filter(|c| is_ambiguous(*c)).collect()
}
