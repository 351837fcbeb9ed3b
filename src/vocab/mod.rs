//! Vocabulary store: hanja entries grouped by proficiency level, and the
//! multi-syllable words used by the syllable puzzle.
//!
//! The static tables live in child modules, one per level, and are turned into
//! owned values once on first access. Everything here is read-only after that.

use std::collections::HashSet;
use std::sync::OnceLock;

mod level6;
mod level7;
mod level8;
mod words;

pub use level6::LEVEL6_HANJA;
pub use level7::LEVEL7_HANJA;
pub use level8::LEVEL8_HANJA;
pub use words::PUZZLE_WORDS;

/// Word list id used for the puzzle's best score.
pub const PUZZLE_WORDS_ID: &str = "words";

/// One hanja with its Korean gloss (훈) and pronunciation (음).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabEntry {
    pub id: u32,
    pub character: String,
    pub pronunciation: String,
    pub gloss: String,
}

impl VocabEntry {
    pub fn new(id: u32, character: &str, gloss: &str, pronunciation: &str) -> Self {
        Self {
            id,
            character: character.to_string(),
            pronunciation: pronunciation.to_string(),
            gloss: gloss.to_string(),
        }
    }

    /// Face of the secondary tile, e.g. `"날 일"` for 日.
    pub fn meaning_label(&self) -> String {
        format!("{} {}", self.gloss, self.pronunciation)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub id: String,
    pub label: String,
    pub entries: Vec<VocabEntry>,
    pub locked: bool,
}

impl Level {
    /// Builds a level, dropping entries whose id was already seen. Matching
    /// relies on ids being unique within a level.
    pub fn new(id: &str, label: &str, entries: Vec<VocabEntry>, locked: bool) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|e| {
                let fresh = seen.insert(e.id);
                if !fresh {
                    log::warn!("level {id}: dropping duplicate entry id {}", e.id);
                }
                fresh
            })
            .collect();
        Self {
            id: id.to_string(),
            label: label.to_string(),
            entries,
            locked,
        }
    }

    fn from_table(id: &str, label: &str, table: &[(u32, &str, &str, &str)], locked: bool) -> Self {
        let entries = table
            .iter()
            .map(|&(eid, ch, gloss, pron)| VocabEntry::new(eid, ch, gloss, pron))
            .collect();
        Self::new(id, label, entries, locked)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A multi-syllable word for the puzzle. `reading` is the concatenation of
/// `syllables`, and `example` uses the reading exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordEntry {
    pub hanja: String,
    pub reading: String,
    pub syllables: Vec<String>,
    pub example: String,
}

impl WordEntry {
    pub fn new(hanja: &str, reading: &str, syllables: &[&str], example: &str) -> Self {
        Self {
            hanja: hanja.to_string(),
            reading: reading.to_string(),
            syllables: syllables.iter().map(|s| s.to_string()).collect(),
            example: example.to_string(),
        }
    }

    pub fn is_well_formed(&self) -> bool {
        !self.syllables.is_empty()
            && !self.reading.is_empty()
            && self.syllables.concat() == self.reading
            && self.example.matches(self.reading.as_str()).count() == 1
    }

    /// Text before and after the reading inside the example sentence.
    pub fn split_example(&self) -> Option<(&str, &str)> {
        if self.reading.is_empty() {
            return None;
        }
        self.example.split_once(self.reading.as_str())
    }
}

/// Drops malformed words so a broken entry never reaches a running round.
pub fn sanitize_words(words: Vec<WordEntry>) -> Vec<WordEntry> {
    words
        .into_iter()
        .filter(|w| {
            let ok = w.is_well_formed();
            if !ok {
                log::warn!("dropping malformed puzzle word {} ({})", w.hanja, w.reading);
            }
            ok
        })
        .collect()
}

/// All proficiency levels, easiest first.
pub fn levels() -> &'static [Level] {
    static LEVELS: OnceLock<Vec<Level>> = OnceLock::new();
    LEVELS.get_or_init(|| {
        vec![
            Level::from_table("8", "8급", LEVEL8_HANJA, false),
            Level::from_table("7", "7급", LEVEL7_HANJA, false),
            Level::from_table("6", "6급", LEVEL6_HANJA, true),
        ]
    })
}

pub fn level_by_id(id: &str) -> Option<&'static Level> {
    levels().iter().find(|l| l.id == id)
}

/// Well-formed puzzle words.
pub fn words() -> &'static [WordEntry] {
    static WORDS: OnceLock<Vec<WordEntry>> = OnceLock::new();
    WORDS.get_or_init(|| {
        sanitize_words(
            PUZZLE_WORDS
                .iter()
                .map(|&(hanja, reading, syllables, example)| {
                    WordEntry::new(hanja, reading, syllables, example)
                })
                .collect(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_are_dropped() {
        let lvl = Level::new(
            "t",
            "test",
            vec![
                VocabEntry::new(1, "日", "날", "일"),
                VocabEntry::new(1, "月", "달", "월"),
                VocabEntry::new(2, "山", "메", "산"),
            ],
            false,
        );
        assert_eq!(lvl.entries.len(), 2);
        assert_eq!(lvl.entries[0].character, "日");
    }

    #[test]
    fn meaning_label_joins_gloss_and_pronunciation() {
        let e = VocabEntry::new(1, "日", "날", "일");
        assert_eq!(e.meaning_label(), "날 일");
    }

    #[test]
    fn malformed_words_are_filtered() {
        let words = vec![
            WordEntry::new("韓國", "한국", &["한", "국"], "나는 한국 사람이에요."),
            WordEntry::new("山水", "산수", &["산", "물"], "산수가 좋아요."),
            WordEntry::new("火山", "화산", &["화", "산"], "산이 높아요."),
            WordEntry::new("人生", "인생", &["인", "생"], "인생은 인생이에요."),
            WordEntry::new("空", "", &[], ""),
        ];
        let kept = sanitize_words(words);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].reading, "한국");
    }

    #[test]
    fn split_example_around_reading() {
        let w = WordEntry::new("學校", "학교", &["학", "교"], "아침마다 학교에 가요.");
        assert_eq!(w.split_example(), Some(("아침마다 ", "에 가요.")));
    }

    #[test]
    fn locked_level_is_present() {
        let six = level_by_id("6").expect("6급 level");
        assert!(six.locked);
        assert!(!level_by_id("8").expect("8급 level").locked);
        assert!(level_by_id("99").is_none());
    }
}
