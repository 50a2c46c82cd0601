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
// Password strength analysis

use std::fmt;

use serde::Serialize;
use zxcvbn::zxcvbn;
use zxcvbn::Score;

/// Three-character runs penalised as sequences, compared case-insensitively.
const SEQUENCES: [&str; 13] = [
    "012", "123", "234", "345", "456", "567", "678", "789", "890", "abc", "bcd", "cde", "def",
];

const LENGTH_STEPS: [(usize, Option<Feature>); 4] = [
    (8, None),
    (12, Some(Feature::GoodLength)),
    (16, Some(Feature::VeryGoodLength)),
    (20, Some(Feature::ExcellentLength)),
];
const LENGTH_POINTS: i32 = 10;
const CLASS_POINTS: i32 = 10;
const SYMBOL_POINTS: i32 = 20;
const REPEAT_PENALTY: i32 = 10;
const SEQUENCE_PENALTY: i32 = 10;

// Nominal class sizes for the entropy estimate
const LOWER_SIZE: u32 = 26;
const UPPER_SIZE: u32 = 26;
const DIGIT_SIZE: u32 = 10;
const SYMBOL_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthTier {
    Weak,
    Medium,
    Good,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s < 30 => StrengthTier::Weak,
            s if s < 50 => StrengthTier::Medium,
            s if s < 70 => StrengthTier::Good,
            _ => StrengthTier::Strong,
        }
    }

    /// Display color as `0xRRGGBB`.
    pub fn color(self) -> u32 {
        match self {
            StrengthTier::Weak => 0xff0000,
            StrengthTier::Medium => 0xffa500,
            StrengthTier::Good => 0x00bfff,
            StrengthTier::Strong => 0x00ff00,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Medium => "Medium",
            StrengthTier::Good => "Good",
            StrengthTier::Strong => "Very strong",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse crack-time bucket. Illustrative only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrackTime {
    Seconds,
    Hours,
    Months,
    YearsPlus,
}

impl CrackTime {
    pub fn from_entropy(bits: f64) -> Self {
        if bits < 30.0 {
            CrackTime::Seconds
        } else if bits < 50.0 {
            CrackTime::Hours
        } else if bits < 70.0 {
            CrackTime::Months
        } else {
            CrackTime::YearsPlus
        }
    }
}

impl fmt::Display for CrackTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CrackTime::Seconds => "Seconds",
            CrackTime::Hours => "Hours",
            CrackTime::Months => "Months",
            CrackTime::YearsPlus => "Years+",
        };
        f.write_str(label)
    }
}

/// Positive criteria met by a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    GoodLength,
    VeryGoodLength,
    ExcellentLength,
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Feature::GoodLength => "Good length",
            Feature::VeryGoodLength => "Very good length",
            Feature::ExcellentLength => "Excellent length",
            Feature::Lowercase => "Lowercase letters",
            Feature::Uppercase => "Uppercase letters",
            Feature::Digits => "Numbers",
            Feature::Symbols => "Special characters",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrengthReport {
    pub score: i32,
    pub entropy: f64,
    pub tier: StrengthTier,
    pub features: Vec<Feature>,
    pub crack_time: CrackTime,
    pub has_repeats: bool,
    pub has_sequence: bool,
}

impl StrengthReport {
    pub fn color(&self) -> u32 {
        self.tier.color()
    }
}

/// Scores `password`. Never fails; empty input yields a zero report.
pub fn analyze(password: &str) -> StrengthReport {
    let chars: Vec<char> = password.chars().collect();
    let length = chars.len();
    let mut score = 0;
    let mut features = Vec::new();

    for (threshold, feature) in LENGTH_STEPS {
        if length >= threshold {
            score += LENGTH_POINTS;
            features.extend(feature);
        }
    }

    let has_lower = chars.iter().any(char::is_ascii_lowercase);
    let has_upper = chars.iter().any(char::is_ascii_uppercase);
    let has_digit = chars.iter().any(char::is_ascii_digit);
    let has_symbol = chars.iter().any(|c| !c.is_ascii_alphanumeric());

    let mut alphabet_size = 0;
    for (present, points, feature, size) in [
        (has_lower, CLASS_POINTS, Feature::Lowercase, LOWER_SIZE),
        (has_upper, CLASS_POINTS, Feature::Uppercase, UPPER_SIZE),
        (has_digit, CLASS_POINTS, Feature::Digits, DIGIT_SIZE),
        (has_symbol, SYMBOL_POINTS, Feature::Symbols, SYMBOL_SIZE),
    ] {
        if present {
            score += points;
            features.push(feature);
            alphabet_size += size;
        }
    }

    let has_repeats = has_repeated_run(&chars);
    if has_repeats {
        score -= REPEAT_PENALTY;
    }
    let has_sequence = has_known_sequence(&chars);
    if has_sequence {
        score -= SEQUENCE_PENALTY;
    }

    let entropy = if alphabet_size > 0 {
        length as f64 * f64::from(alphabet_size).log2()
    } else {
        0.0
    };

    StrengthReport {
        score,
        entropy,
        tier: StrengthTier::from_score(score),
        features,
        crack_time: CrackTime::from_entropy(entropy),
        has_repeats,
        has_sequence,
    }
}

/// Any character other than a line feed repeated three or more times in a row.
fn has_repeated_run(chars: &[char]) -> bool {
    chars
        .windows(3)
        .any(|w| w[0] != '\n' && w[0] == w[1] && w[1] == w[2])
}

fn has_known_sequence(chars: &[char]) -> bool {
    let lowered: Vec<char> = chars.iter().map(char::to_ascii_lowercase).collect();
    lowered.windows(3).any(|window| {
        SEQUENCES
            .iter()
            .any(|seq| seq.chars().eq(window.iter().copied()))
    })
}

/// zxcvbn 评估结果，作为评分之外的参考
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZxcvbnEstimate {
    pub rating: String,
    pub score: u8,
    pub suggestions: String,
}

pub fn zxcvbn_estimate(password: &str) -> ZxcvbnEstimate {
    let strength_result = zxcvbn(password, &[]);
    let score = strength_result.score();
    let suggestions = strength_result.feedback().map_or_else(
        String::new,
        |f| f.suggestions().iter().map(|s| s.to_string()).collect::<Vec<_>>().join(" ")
    );

    let (rating, score) = match score {
        Score::Zero => ("Very weak", 0),
        Score::One => ("Weak", 1),
        Score::Two => ("Fair", 2),
        Score::Three => ("Strong", 3),
        Score::Four => ("Very strong", 4),
        _ => ("Unknown", 0),
    };

    ZxcvbnEstimate { rating: rating.to_string(), score, suggestions }
}
