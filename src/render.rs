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
// Output formatting

use chrono::Local;
use serde::Serialize;

use crate::passgen::PassphraseOptions;
use crate::strength::StrengthReport;

/// At most this many features are shown on a card.
pub const MAX_FEATURES_SHOWN: usize = 5;

/// Machine-readable output for `--json`.
#[derive(Debug, Serialize)]
pub struct GeneratedOutput<'a> {
    pub secret: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<&'a StrengthReport>,
    pub generated_at: String,
}

impl<'a> GeneratedOutput<'a> {
    pub fn new(secret: &'a str, report: Option<&'a StrengthReport>) -> Self {
        Self {
            secret,
            report,
            generated_at: Local::now().to_rfc3339(),
        }
    }
}

pub fn to_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

pub fn color_hex(color: u32) -> String {
    format!("#{:06X}", color)
}

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

fn feature_lines(report: &StrengthReport) -> Vec<String> {
    if report.features.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Features:".to_string()];
    lines.extend(
        report
            .features
            .iter()
            .take(MAX_FEATURES_SHOWN)
            .map(|feature| format!("  + {}", feature)),
    );
    lines
}

fn to_card(lines: Vec<String>) -> String {
    let mut card = lines.join("\n");
    card.push('\n');
    card
}

pub fn password_card(title: &str, password: &str, report: &StrengthReport) -> String {
    let mut lines = vec![
        format!("== {} [{}] ==", title, color_hex(report.color())),
        format!("Password:   {}", password),
        format!("Strength:   {} (score {})", report.tier, report.score),
        format!("Length:     {} characters", password.chars().count()),
        format!("Crack time: {}", report.crack_time),
    ];
    lines.extend(feature_lines(report));
    lines.push(format!("Generated:  {}", timestamp()));
    to_card(lines)
}

pub fn passphrase_card(passphrase: &str, options: &PassphraseOptions) -> String {
    to_card(vec![
        "== Passphrase ==".to_string(),
        passphrase.to_string(),
        format!("  - {} words", options.word_count),
        format!("  - Separator: '{}'", options.separator),
        format!("  - Language: {}", options.language.to_uppercase()),
        format!("Generated:  {}", timestamp()),
    ])
}

pub fn report_card(report: &StrengthReport) -> String {
    let mut lines = vec![
        format!("== Strength report [{}] ==", color_hex(report.color())),
        format!("Strength:   {} (score {})", report.tier, report.score),
        format!("Entropy:    {:.1} bits", report.entropy),
        format!("Crack time: {}", report.crack_time),
    ];
    lines.extend(feature_lines(report));
    if report.has_repeats {
        lines.push("  - Repeated characters".to_string());
    }
    if report.has_sequence {
        lines.push("  - Predictable sequence".to_string());
    }
    to_card(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::analyze;

    #[test]
    fn test_password_card_caps_features() {
        let password = "Kx9#mP2@vL7!qR4&wT8*";
        let report = analyze(password);
        assert_eq!(report.features.len(), 7);

        let card = password_card("Password generated", password, &report);
        assert!(card.starts_with("== Password generated [#00FF00] =="));
        assert!(card.contains("Length:     20 characters"));
        assert!(card.contains("Crack time: Years+"));
        assert_eq!(card.matches("  + ").count(), MAX_FEATURES_SHOWN);
        assert!(card.ends_with('\n'));
    }

    #[test]
    fn test_report_card_lists_penalties() {
        let card = report_card(&analyze("aaa123"));
        assert!(card.starts_with("== Strength report [#FF0000] =="));
        assert!(card.contains("  - Repeated characters\n"));
        assert!(card.contains("  - Predictable sequence\n"));
    }

    #[test]
    fn test_passphrase_card() {
        let options = PassphraseOptions::default();
        let card = passphrase_card("Sonne-Mond-Stern-Wolke", &options);
        assert!(card.contains("Sonne-Mond-Stern-Wolke\n"));
        assert!(card.contains("  - 4 words\n"));
        assert!(card.contains("  - Language: DE\n"));
    }
}
