//! Keyboard layout tables and text remapping.
//!
//! Text typed while the wrong input method was active is recovered by
//! replacing every character with the one on the same physical key in the
//! intended layout (e.g., "ghbdsn" typed on QWERTY → "привіт" in Ukrainian).

mod error;
mod language;
pub mod layouts;
mod registry;
mod table;

pub use error::ConfigurationError;
pub use language::Language;
pub use registry::LayoutRegistry;
pub use table::LayoutTable;

/// Rewrite `input`, typed under `from`, into the text intended under `to`.
///
/// Uses the built-in tables. Characters with no entry in the
/// `(from, to)` table are kept as-is, and the output always has as many
/// characters as the input.
pub fn transform_text(input: &str, from: Language, to: Language) -> Result<String, ConfigurationError> {
    LayoutRegistry::global().transform(input, from, to)
}

/// Same as [`transform_text`], with languages given as tags ("eng", "ukr").
pub fn transform_tagged(input: &str, from: &str, to: &str) -> Result<String, ConfigurationError> {
    transform_text(input, from.parse()?, to.parse()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "qwerty",
        "Ghbdsn? 123",
        "йцукен ЙЦУКЕН",
        "mixed: ъ ї ы і ё ґ",
        "tab\tand\nnewline",
        "emoji 😀🇺🇦 and 日本語",
        "`~!@#$%^&*()_+-=[]{}\\|;:'\",.<>/?",
    ];

    #[test]
    fn test_qwerty_to_ukrainian() {
        assert_eq!(transform_text("qwerty", Language::Eng, Language::Ukr).unwrap(), "йцукен");
        assert_eq!(transform_text("ghbdsn", Language::Eng, Language::Ukr).unwrap(), "привіт");
        assert_eq!(transform_text("Ghbdsn? 123", Language::Eng, Language::Ukr).unwrap(), "Привіт, 123");
    }

    #[test]
    fn test_ukrainian_to_qwerty() {
        assert_eq!(transform_text("руддщ", Language::Ukr, Language::Eng).unwrap(), "hello");
        assert_eq!(transform_text("Руддщ, цщкдв!", Language::Ukr, Language::Eng).unwrap(), "Hello? world!");
    }

    #[test]
    fn test_qwerty_and_russian() {
        assert_eq!(transform_text("ghbdtn", Language::Eng, Language::Rus).unwrap(), "привет");
        assert_eq!(transform_text("руддщ", Language::Rus, Language::Eng).unwrap(), "hello");
    }

    #[test]
    fn test_ukrainian_to_russian() {
        assert_eq!(transform_text("сіль", Language::Ukr, Language::Rus).unwrap(), "сыль");
        assert_eq!(transform_text("п'ять", Language::Ukr, Language::Rus).unwrap(), "пёять");
    }

    #[test]
    fn test_case_is_significant() {
        assert_eq!(transform_text("qQ", Language::Eng, Language::Ukr).unwrap(), "йЙ");
        assert_eq!(transform_text("{[", Language::Eng, Language::Ukr).unwrap(), "Хх");
    }

    #[test]
    fn test_untabled_characters_pass_through() {
        let input = "1234567890 -=+_ 😀 日本語";
        assert_eq!(transform_text(input, Language::Eng, Language::Ukr).unwrap(), input);
    }

    #[test]
    fn test_identity_for_same_language() {
        for lang in Language::ALL {
            for sample in SAMPLES {
                assert_eq!(transform_text(sample, lang, lang).unwrap(), *sample);
            }
        }
    }

    #[test]
    fn test_length_is_preserved() {
        for from in Language::ALL {
            for to in Language::ALL {
                for sample in SAMPLES {
                    let output = transform_text(sample, from, to).unwrap();
                    assert_eq!(output.chars().count(), sample.chars().count());
                }
            }
        }
    }

    #[test]
    fn test_untabled_positions_are_copied() {
        let table = LayoutRegistry::global().table(Language::Eng, Language::Ukr).unwrap();
        for sample in SAMPLES {
            let output = transform_text(sample, Language::Eng, Language::Ukr).unwrap();
            for (before, after) in sample.chars().zip(output.chars()) {
                if !table.contains(before) {
                    assert_eq!(before, after);
                }
            }
        }
    }

    #[test]
    fn test_round_trip_over_table_characters() {
        let registry = LayoutRegistry::global();
        for (from, to) in registry.pairs() {
            let table = registry.table(from, to).unwrap();
            let input: String = table.iter().map(|(typed, _)| typed).collect();
            let there = transform_text(&input, from, to).unwrap();
            let back = transform_text(&there, to, from).unwrap();
            assert_eq!(back, input, "{} -> {} -> {}", from, to, from);
        }
    }

    #[test]
    fn test_deterministic() {
        let first = transform_text("Ghbdsn? 123", Language::Eng, Language::Ukr).unwrap();
        for _ in 0..10 {
            assert_eq!(transform_text("Ghbdsn? 123", Language::Eng, Language::Ukr).unwrap(), first);
        }
    }

    #[test]
    fn test_concurrent_calls() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| transform_text("ghbdsn", Language::Eng, Language::Ukr).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "привіт");
        }
    }

    #[test]
    fn test_empty_input() {
        for from in Language::ALL {
            for to in Language::ALL {
                assert_eq!(transform_text("", from, to).unwrap(), "");
            }
        }
    }

    #[test]
    fn test_tagged_transform() {
        assert_eq!(transform_tagged("qwerty", "eng", "ukr").unwrap(), "йцукен");
        assert_eq!(
            transform_tagged("qwerty", "eng", "klingon"),
            Err(ConfigurationError::UnknownLanguage("klingon".to_string()))
        );
    }
}
