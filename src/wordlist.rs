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
// Word lists for passphrases

// 引入编译生成的单词列表
include!(concat!(env!("OUT_DIR"), "/word_data.rs"));

pub const DEFAULT_LANGUAGE: &str = "de";

/// A static word list keyed by its language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordList {
    pub language: &'static str,
    pub words: &'static [&'static str],
}

impl WordList {
    /// Looks up the list for `language`, falling back to [`DEFAULT_LANGUAGE`].
    pub fn for_language(language: &str) -> WordList {
        Self::lookup(language)
            .or_else(|| Self::lookup(DEFAULT_LANGUAGE))
            .unwrap_or(WordList { language: DEFAULT_LANGUAGE, words: &[] })
    }

    /// Exact lookup without fallback.
    pub fn lookup(language: &str) -> Option<WordList> {
        let tag = language.trim().to_lowercase();
        WORDLISTS
            .iter()
            .find(|(lang, _)| *lang == tag)
            .map(|(lang, words)| WordList { language: *lang, words: *words })
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

/// Language tags with a compiled-in list.
pub fn available_languages() -> Vec<&'static str> {
    WORDLISTS.iter().map(|(lang, _)| *lang).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_languages_loaded() {
        let de = WordList::for_language("de");
        assert_eq!(de.language, "de");
        assert_eq!(de.len(), 64);
        assert_eq!(de.words[0], "Sonne");

        let en = WordList::for_language("en");
        assert_eq!(en.language, "en");
        assert_eq!(en.len(), 40);
        assert_eq!(en.words[39], "Elephant");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let list = WordList::for_language("xx");
        assert_eq!(list.language, DEFAULT_LANGUAGE);
        assert!(WordList::lookup("xx").is_none());
    }

    #[test]
    fn test_tag_is_case_insensitive() {
        assert_eq!(WordList::lookup("EN").map(|l| l.language), Some("en"));
    }

    #[test]
    fn test_words_are_clean() {
        for lang in available_languages() {
            let list = WordList::for_language(lang);
            assert!(!list.is_empty());
            let unique: HashSet<_> = list.words.iter().collect();
            assert_eq!(unique.len(), list.len(), "Word list '{}' contains duplicates", lang);
            for word in list.words {
                assert!(!word.is_empty());
                assert!(
                    word.chars().all(char::is_alphabetic),
                    "Word '{}' in '{}' contains invalid characters",
                    word,
                    lang
                );
            }
        }
    }
}
