use rpassgen::charset::find_ambiguous;
use rpassgen::strength::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password() {
        let report = analyze("");
        assert!(report.score <= 0);
        assert_eq!(report.entropy, 0.0);
        assert_eq!(report.tier, StrengthTier::Weak);
        assert_eq!(report.crack_time, CrackTime::Seconds);
        assert!(report.features.is_empty());
    }

    #[test]
    fn test_repeated_lowercase() {
        let report = analyze("aaaaaaaa");
        // length 8 (+10), lowercase (+10), repeated run (-10)
        assert_eq!(report.score, 10);
        assert!(report.has_repeats);
        assert!(!report.has_sequence);
        assert_eq!(report.features, vec![Feature::Lowercase]);
        assert_eq!(report.tier, StrengthTier::Weak);
    }

    #[test]
    fn test_mixed_password_scores_strong() {
        let report = analyze("Tr0ub4dor&9XyZ");
        assert_eq!(report.score, 70);
        assert!(report.score >= 50);
        assert_eq!(report.tier, StrengthTier::Strong);
        assert!(!report.has_repeats);
        assert!(!report.has_sequence);
        assert_eq!(
            report.features,
            vec![
                Feature::GoodLength,
                Feature::Lowercase,
                Feature::Uppercase,
                Feature::Digits,
                Feature::Symbols
            ]
        );
        assert_eq!(report.crack_time, CrackTime::YearsPlus);
    }

    #[test]
    fn test_entropy_uses_nominal_sizes() {
        let report = analyze("Tr0ub4dor&9XyZ");
        let expected = 14.0 * 94f64.log2();
        assert!((report.entropy - expected).abs() < 1e-9);

        let digits = analyze("9081726354");
        assert!((digits.entropy - 10.0 * 10f64.log2()).abs() < 1e-9);
        assert_eq!(digits.crack_time, CrackTime::Hours);
    }

    #[test]
    fn test_sequence_penalty_is_case_insensitive() {
        let report = analyze("xABCx");
        assert!(report.has_sequence);
        // lowercase (+10), uppercase (+10), sequence (-10)
        assert_eq!(report.score, 10);
    }

    #[test]
    fn test_numeric_sequence() {
        let report = analyze("password123");
        assert!(report.has_sequence);
        assert_eq!(report.score, 20);
    }

    #[test]
    fn test_unlisted_run_is_not_a_sequence() {
        assert!(!analyze("xyz").has_sequence);
        assert!(!analyze("efg").has_sequence);
        assert!(analyze("DEF").has_sequence);
        assert!(analyze("7890").has_sequence);
    }

    #[test]
    fn test_penalties_apply_once_and_can_go_negative() {
        let report = analyze("111234");
        assert!(report.has_repeats);
        assert!(report.has_sequence);
        assert_eq!(report.score, -10);
        assert_eq!(report.tier, StrengthTier::Weak);

        let long_run = analyze("aaaaaaaaaaaa");
        assert_eq!(long_run.score, 20);
    }

    #[test]
    fn test_line_feeds_do_not_count_as_repeats() {
        assert!(!analyze("\n\n\n").has_repeats);
        assert!(!analyze("ab\n\n\n\ncd").has_repeats);
        assert!(analyze("aaa").has_repeats);
        assert!(analyze("  \t\t\t").has_repeats);
    }

    #[test]
    fn test_length_features_accumulate() {
        let report = analyze("Kx9#mP2@vL7!qR4&wT8*");
        assert_eq!(report.score, 90);
        assert_eq!(report.features.len(), 7);
        assert!(report.features.contains(&Feature::ExcellentLength));
        assert!(report.features.contains(&Feature::VeryGoodLength));
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(analyze("Hx7kQm2pLw").tier, StrengthTier::Medium);
        assert_eq!(analyze("Hx7kQm2pLw9v").tier, StrengthTier::Good);

        assert_eq!(StrengthTier::from_score(-10), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(29), StrengthTier::Weak);
        assert_eq!(StrengthTier::from_score(30), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(49), StrengthTier::Medium);
        assert_eq!(StrengthTier::from_score(50), StrengthTier::Good);
        assert_eq!(StrengthTier::from_score(69), StrengthTier::Good);
        assert_eq!(StrengthTier::from_score(70), StrengthTier::Strong);
    }

    #[test]
    fn test_tier_colors_are_distinct() {
        let colors = [
            StrengthTier::Weak.color(),
            StrengthTier::Medium.color(),
            StrengthTier::Good.color(),
            StrengthTier::Strong.color(),
        ];
        assert_eq!(colors, [0xff0000, 0xffa500, 0x00bfff, 0x00ff00]);
    }

    #[test]
    fn test_crack_time_buckets() {
        assert_eq!(CrackTime::from_entropy(0.0), CrackTime::Seconds);
        assert_eq!(CrackTime::from_entropy(29.9), CrackTime::Seconds);
        assert_eq!(CrackTime::from_entropy(30.0), CrackTime::Hours);
        assert_eq!(CrackTime::from_entropy(50.0), CrackTime::Months);
        assert_eq!(CrackTime::from_entropy(70.0), CrackTime::YearsPlus);
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let report = analyze("Löwe");
        assert!(report.features.contains(&Feature::Symbols));
    }

    #[test]
    fn test_analyze_is_pure() {
        for password in ["", "aaaaaaaa", "Tr0ub4dor&9XyZ", "§€£¥©®"] {
            assert_eq!(analyze(password), analyze(password));
        }
    }

    #[test]
    fn test_zxcvbn_estimate() {
        let weak = zxcvbn_estimate("password");
        assert_eq!(weak.score, 0);
        assert_eq!(weak.rating, "Very weak");

        let strong = zxcvbn_estimate("Kx9#mP2@vL7!qR4&wT8*");
        assert_eq!(strong.score, 4);
    }

    #[test]
    fn test_find_ambiguous() {
        assert_eq!(find_ambiguous("Il1O0x"), vec!['I', 'l', '1', 'O', '0']);
        assert!(find_ambiguous("abc").is_empty());
    }
}
