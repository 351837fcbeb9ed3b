// Property checks over round configuration, deck dealing and scoring.

use std::collections::HashMap;

use hanja_whiz::deck::{BlockRole, TileKind, build_match_deck, build_puzzle_round, draw_distractors};
use hanja_whiz::round::{combo_refund_ms, match_config, match_points, puzzle_config};
use hanja_whiz::{Activity, Level, MatchGame, MemoryStore, Settings, VocabEntry, WordEntry};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn level(n: u32) -> Level {
    let entries = (1..=n).map(|i| VocabEntry::new(i, "字", "글자", "자")).collect();
    Level::new("p", "prop", entries, false)
}

fn sample_words() -> Vec<WordEntry> {
    vec![
        WordEntry::new("韓國", "한국", &["한", "국"], "한국에 살아요."),
        WordEntry::new("學校", "학교", &["학", "교"], "학교에 가요."),
        WordEntry::new("大韓民國", "대한민국", &["대", "한", "민", "국"], "대한민국 만세."),
        WordEntry::new("山水", "산수", &["산", "수"], "산수가 좋아요."),
    ]
}

proptest! {
    #[test]
    fn match_difficulty_never_eases(round in 1u32..200) {
        let now = match_config(round);
        let next = match_config(round + 1);
        prop_assert!(next.time_budget_ms <= now.time_budget_ms);
        prop_assert!(next.pair_count >= now.pair_count);
        prop_assert_eq!(now, match_config(round));
    }

    #[test]
    fn puzzle_budget_has_a_floor(round in 1u32..500) {
        let cfg = puzzle_config(round);
        prop_assert!(cfg.time_budget_ms >= 5_000);
        prop_assert!(cfg.time_budget_ms <= 20_000);
        prop_assert!(puzzle_config(round + 1).distractor_count >= cfg.distractor_count);
    }

    #[test]
    fn every_source_has_one_primary_and_one_secondary(
        entries in 1u32..40,
        pairs in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let deck = build_match_deck(&level(entries), pairs, &mut rng);
        prop_assert_eq!(deck.len(), 2 * pairs.min(entries as usize));
        let mut kinds: HashMap<u32, Vec<TileKind>> = HashMap::new();
        for tile in &deck {
            kinds.entry(tile.source_id).or_default().push(tile.kind);
        }
        for found in kinds.values() {
            prop_assert_eq!(found.len(), 2);
            prop_assert!(found.contains(&TileKind::Primary));
            prop_assert!(found.contains(&TileKind::Secondary));
        }
    }

    #[test]
    fn distractors_never_come_from_the_target(count in 0usize..6, seed in any::<u64>()) {
        let words = sample_words();
        let mut next_id = 0;
        let mut rng = StdRng::seed_from_u64(seed);
        let deal = build_puzzle_round(&words, count, &mut next_id, &mut rng).expect("deal");
        let target = &words[deal.target];
        let mut answers = Vec::new();
        for block in &deal.blocks {
            match block.role {
                BlockRole::Distractor => prop_assert!(!target.syllables.contains(&block.text)),
                BlockRole::Answer => answers.push(block.text.clone()),
            }
        }
        answers.sort();
        let mut expected = target.syllables.clone();
        expected.sort();
        prop_assert_eq!(answers, expected);
        prop_assert_eq!(deal.blocks.len(), target.syllables.len() + count);
        prop_assert_eq!(next_id as usize, deal.blocks.len());
    }

    #[test]
    fn distractor_drawing_terminates_on_degenerate_vocabulary(count in 0usize..10, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let target = vec!["한".to_string(), "국".to_string()];
        let drawn = draw_distractors(&["한", "국"], &target, count, &mut rng);
        prop_assert!(drawn.is_empty());
    }

    #[test]
    fn score_only_grows_and_combo_tracks_matches(
        taps in proptest::collection::vec(0usize..12, 0..60),
        seed in any::<u64>(),
    ) {
        let mut game = MatchGame::new(level(20), MemoryStore::new(), Settings::default())
            .expect("level")
            .with_rng(StdRng::seed_from_u64(seed));
        game.start().expect("round 1");
        for index in taps {
            let (score, combo, matched) = (game.score(), game.combo(), pairs_matched(&game));
            game.select_tile(index);
            prop_assert!(game.score() >= score);
            let now_matched = pairs_matched(&game);
            if now_matched > matched {
                prop_assert_eq!(game.combo(), combo + 1);
                prop_assert!(game.score() - score >= match_points(combo + 1));
            } else if game.selection().len() == 2 {
                prop_assert_eq!(game.combo(), 0);
            }
            // let any shown mismatch clear before the next tap
            game.tick(0.6);
        }
    }
}

fn pairs_matched(game: &MatchGame<MemoryStore>) -> usize {
    let deck = game.deck();
    deck.iter().filter(|t| t.kind == TileKind::Primary && game.is_matched(t.source_id)).count()
}

#[test]
fn refund_grows_with_combo() {
    let refunds: Vec<u64> = (1..=7).map(combo_refund_ms).collect();
    assert_eq!(refunds, vec![1_000, 2_000, 2_000, 2_000, 3_000, 3_000, 3_000]);
}
