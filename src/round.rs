//! Per-round difficulty policy and scoring arithmetic.
//!
//! Everything here is pure. Time is handled in integer milliseconds so the
//! floor/ceil bonuses come out exact.

/// Difficulty of one matching round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchRoundConfig {
    pub time_budget_ms: u64,
    pub pair_count: usize,
}

/// Difficulty of one puzzle round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleRoundConfig {
    pub time_budget_ms: u64,
    pub distractor_count: usize,
}

/// Points for a plain (combo 1) match.
pub const BASE_MATCH_POINTS: u64 = 100;
/// Points for a solved puzzle before the time bonus.
pub const BASE_PUZZLE_POINTS: u64 = 100;

/// Time budget shrinks until round 5 and pair count grows until round 5;
/// both hold from then on.
pub fn match_config(round: u32) -> MatchRoundConfig {
    let secs = match round {
        0 | 1 => 25,
        2 => 20,
        3 => 18,
        4 => 15,
        _ => 12,
    };
    let pair_count = match round {
        0..=2 => 6,
        3 | 4 => 8,
        _ => 10,
    };
    MatchRoundConfig {
        time_budget_ms: secs * 1000,
        pair_count,
    }
}

/// One second less every three rounds, never below five seconds.
pub fn puzzle_config(round: u32) -> PuzzleRoundConfig {
    let round = round.max(1) as u64;
    let secs = 20u64.saturating_sub((round - 1) / 3).max(5);
    let distractor_count = match round {
        1 | 2 => 1,
        3..=5 => 2,
        6..=10 => 3,
        _ => 4,
    };
    PuzzleRoundConfig {
        time_budget_ms: secs * 1000,
        distractor_count,
    }
}

/// Score multiplier for a combo, in percent.
pub fn combo_multiplier_percent(combo: u32) -> u64 {
    match combo {
        c if c >= 5 => 200,
        c if c >= 3 => 150,
        2 => 120,
        _ => 100,
    }
}

/// `floor(100 × multiplier(combo))`.
pub fn match_points(combo: u32) -> u64 {
    BASE_MATCH_POINTS * combo_multiplier_percent(combo) / 100
}

/// Time given back for a match at this combo.
pub fn combo_refund_ms(combo: u32) -> u64 {
    match combo {
        c if c >= 5 => 3_000,
        c if c >= 2 => 2_000,
        _ => 1_000,
    }
}

/// `floor(remaining_secs × 10)`.
pub fn clear_bonus(remaining_ms: u64) -> u64 {
    remaining_ms / 100
}

/// `100 + ceil(remaining_secs × 10)`.
pub fn puzzle_points(remaining_ms: u64) -> u64 {
    BASE_PUZZLE_POINTS + remaining_ms.div_ceil(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_config_table() {
        let expect = [(1, 25, 6), (2, 20, 6), (3, 18, 8), (4, 15, 8), (5, 12, 10), (9, 12, 10)];
        for (round, secs, pairs) in expect {
            let cfg = match_config(round);
            assert_eq!(cfg.time_budget_ms, secs * 1000, "round {round}");
            assert_eq!(cfg.pair_count, pairs, "round {round}");
        }
    }

    #[test]
    fn puzzle_config_table() {
        assert_eq!(puzzle_config(1).time_budget_ms, 20_000);
        assert_eq!(puzzle_config(3).time_budget_ms, 20_000);
        assert_eq!(puzzle_config(4).time_budget_ms, 19_000);
        assert_eq!(puzzle_config(7).time_budget_ms, 18_000);
        assert_eq!(puzzle_config(100).time_budget_ms, 5_000);
        let distractors: Vec<usize> = [1, 2, 3, 5, 6, 10, 11, 40]
            .iter()
            .map(|&r| puzzle_config(r).distractor_count)
            .collect();
        assert_eq!(distractors, vec![1, 1, 2, 2, 3, 3, 4, 4]);
    }

    #[test]
    fn combo_tiers() {
        assert_eq!(match_points(1), 100);
        assert_eq!(match_points(2), 120);
        assert_eq!(match_points(4), 150);
        assert_eq!(match_points(5), 200);
        assert_eq!(combo_refund_ms(1), 1_000);
        assert_eq!(combo_refund_ms(4), 2_000);
        assert_eq!(combo_refund_ms(7), 3_000);
    }

    #[test]
    fn bonus_rounding() {
        assert_eq!(clear_bonus(12_340), 123);
        assert_eq!(clear_bonus(99), 0);
        assert_eq!(puzzle_points(12_340), 224);
        assert_eq!(puzzle_points(12_300), 223);
        assert_eq!(puzzle_points(0), 100);
    }
}
