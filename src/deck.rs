//! Builders for the per-round selectable units: matching tiles and puzzle blocks.

use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::vocab::{Level, WordEntry};

/// Rejection-sampling attempts allowed per requested distractor.
pub const DISTRACTOR_ATTEMPTS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TileKind {
    /// Shows the character.
    Primary,
    /// Shows gloss and pronunciation.
    Secondary,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub source_id: u32,
    pub kind: TileKind,
    pub content: String,
    pub unique_id: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockRole {
    Answer,
    Distractor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: u32,
    pub text: String,
    pub role: BlockRole,
}

/// Picks `pair_count` entries without replacement (all of them when the level
/// is smaller) and deals a primary and a secondary tile for each, shuffled.
/// An empty level yields an empty deck.
pub fn build_match_deck(level: &Level, pair_count: usize, rng: &mut StdRng) -> Vec<Tile> {
    let mut picked: Vec<_> = level.entries.iter().collect();
    picked.shuffle(rng);
    picked.truncate(pair_count);

    let mut deck = Vec::with_capacity(picked.len() * 2);
    for entry in picked {
        deck.push(Tile {
            source_id: entry.id,
            kind: TileKind::Primary,
            content: entry.character.clone(),
            unique_id: format!("{}-h", entry.id),
        });
        deck.push(Tile {
            source_id: entry.id,
            kind: TileKind::Secondary,
            content: entry.meaning_label(),
            unique_id: format!("{}-m", entry.id),
        });
    }
    deck.shuffle(rng);
    deck
}

/// A freshly dealt puzzle round.
#[derive(Clone, Debug)]
pub struct PuzzleDeal {
    pub target: usize,
    pub blocks: Vec<Block>,
}

/// Every distinct syllable across the word list, in first-seen order.
pub fn syllable_vocabulary(words: &[WordEntry]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for s in words.iter().flat_map(|w| w.syllables.iter()) {
        if !out.contains(&s.as_str()) {
            out.push(s.as_str());
        }
    }
    out
}

/// Draws up to `count` syllables not contained in `target`. Duplicates among
/// the distractors are allowed. Sampling is bounded; once the attempts run out
/// the remainder comes straight from the non-target syllables, and when there
/// are none the count degrades.
pub fn draw_distractors(
    vocabulary: &[&str],
    target: &[String],
    count: usize,
    rng: &mut StdRng,
) -> Vec<String> {
    let in_target = |s: &str| target.iter().any(|t| t == s);
    let mut out = Vec::with_capacity(count);
    if vocabulary.is_empty() {
        return out;
    }
    let mut attempts = count * DISTRACTOR_ATTEMPTS;
    while out.len() < count && attempts > 0 {
        attempts -= 1;
        let pick = vocabulary[rng.gen_range(0..vocabulary.len())];
        if !in_target(pick) {
            out.push(pick.to_string());
        }
    }
    if out.len() < count {
        let foreign: Vec<&str> = vocabulary.iter().copied().filter(|s| !in_target(*s)).collect();
        while out.len() < count {
            match foreign.choose(rng) {
                Some(s) => out.push(s.to_string()),
                None => {
                    log::debug!("distractors degraded to {} of {count}", out.len());
                    break;
                }
            }
        }
    }
    out
}

/// Picks a target word and deals its syllables plus distractors, shuffled.
/// Block ids start at `*next_id` and the counter is advanced past them.
/// Returns `None` for an empty word list.
pub fn build_puzzle_round(
    words: &[WordEntry],
    distractor_count: usize,
    next_id: &mut u32,
    rng: &mut StdRng,
) -> Option<PuzzleDeal> {
    if words.is_empty() {
        return None;
    }
    let target = rng.gen_range(0..words.len());
    let word = &words[target];
    let vocabulary = syllable_vocabulary(words);
    let distractors = draw_distractors(&vocabulary, &word.syllables, distractor_count, rng);

    let mut blocks = Vec::with_capacity(word.syllables.len() + distractors.len());
    let tagged = word
        .syllables
        .iter()
        .cloned()
        .map(|s| (s, BlockRole::Answer))
        .chain(distractors.into_iter().map(|s| (s, BlockRole::Distractor)));
    for (text, role) in tagged {
        blocks.push(Block { id: *next_id, text, role });
        *next_id += 1;
    }
    blocks.shuffle(rng);
    Some(PuzzleDeal { target, blocks })
}
