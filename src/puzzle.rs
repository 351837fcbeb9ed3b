//! Syllable puzzle: rebuild a hanja word's Korean reading from a pool of
//! syllable blocks that also contains distractors.
//!
//! A filled answer row is checked immediately. A right answer moves to
//! `Correct` and deals the next word shortly after; a wrong one changes
//! nothing, the player simply rearranges while the clock runs.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activity::Activity;
use crate::deck::{Block, build_puzzle_round};
use crate::effects::{Effect, EffectQueue, Tone, Vibration};
use crate::error::GameError;
use crate::round::{puzzle_config, puzzle_points};
use crate::settings::Settings;
use crate::store::{BestScore, ScoreStore, best_score_key};
use crate::timer::{Countdown, CountdownStatus, Scheduler, secs_to_ms};
use crate::vocab::{PUZZLE_WORDS_ID, WordEntry, sanitize_words};

/// Placeholder shown for each hidden syllable in the example prompt.
const BLANK: &str = "□";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PuzzlePhase {
    Ready,
    Playing,
    Correct,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PuzzleTask {
    NextRound(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BlockView {
    pub id: u32,
    pub text: String,
}

impl From<&Block> for BlockView {
    fn from(b: &Block) -> Self {
        Self {
            id: b.id,
            text: b.text.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PuzzleSnapshot {
    pub round: u32,
    pub phase: PuzzlePhase,
    pub time_budget: f64,
    pub time_remaining: f64,
    pub score: u64,
    pub best_score: u64,
    pub hanja: String,
    /// Example sentence with the reading blanked out.
    pub prompt: String,
    pub pool: Vec<BlockView>,
    pub slots: Vec<Option<BlockView>>,
    /// The reading, once the round is solved or lost.
    pub revealed: Option<String>,
}

pub struct PuzzleGame<S: ScoreStore> {
    words: Vec<WordEntry>,
    settings: Settings,
    rng: StdRng,
    best: BestScore<S>,
    round: u32,
    phase: PuzzlePhase,
    countdown: Countdown,
    target: usize,
    pool: Vec<Block>,
    slots: Vec<Option<Block>>,
    score: u64,
    next_block_id: u32,
    exited: bool,
    scheduler: Scheduler<PuzzleTask>,
    effects: EffectQueue,
}

impl<S: ScoreStore> PuzzleGame<S> {
    /// Malformed words are dropped first; nothing left is an error.
    pub fn new(words: Vec<WordEntry>, store: S, settings: Settings) -> Result<Self, GameError> {
        let words = sanitize_words(words);
        if words.is_empty() {
            return Err(GameError::NoWords);
        }
        let key = best_score_key(&settings.best_score_prefix, PUZZLE_WORDS_ID);
        Ok(Self {
            words,
            best: BestScore::load(store, key),
            settings,
            rng: StdRng::from_entropy(),
            round: 0,
            phase: PuzzlePhase::Ready,
            countdown: Countdown::default(),
            target: 0,
            pool: Vec::new(),
            slots: Vec::new(),
            score: 0,
            next_block_id: 0,
            exited: false,
            scheduler: Scheduler::new(),
            effects: EffectQueue::default(),
        })
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        self.exited = false;
        self.score = 0;
        self.start_round(1)
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        log::info!("puzzle: restart");
        self.start()
    }

    pub fn start_round(&mut self, n: u32) -> Result<(), GameError> {
        self.scheduler.invalidate();
        let cfg = puzzle_config(n);
        let deal = build_puzzle_round(
            &self.words,
            cfg.distractor_count,
            &mut self.next_block_id,
            &mut self.rng,
        )
        .ok_or(GameError::NoWords)?;
        self.target = deal.target;
        self.pool = deal.blocks;
        self.slots = vec![None; self.words[self.target].syllables.len()];
        self.round = n.max(1);
        self.countdown = Countdown::new(cfg.time_budget_ms);
        self.phase = PuzzlePhase::Playing;
        log::debug!(
            "puzzle: round {} target {} with {} blocks, {} ms",
            self.round,
            self.words[self.target].hanja,
            self.pool.len(),
            cfg.time_budget_ms
        );
        Ok(())
    }

    /// Moves the pool block with `block_id` into the first empty slot.
    pub fn place_block(&mut self, block_id: u32) {
        if self.exited || self.phase != PuzzlePhase::Playing {
            return;
        }
        let Some(slot) = self.slots.iter().position(Option::is_none) else {
            return;
        };
        let Some(at) = self.pool.iter().position(|b| b.id == block_id) else {
            return;
        };
        let block = self.pool.remove(at);
        self.slots[slot] = Some(block);
        self.effects.tone(Tone::Click);
        if self.slots.iter().all(Option::is_some) {
            self.check_answer();
        }
    }

    /// Returns the block in `slot` to the pool.
    pub fn unplace_block(&mut self, slot: usize) {
        if self.exited || self.phase != PuzzlePhase::Playing {
            return;
        }
        let Some(block) = self.slots.get_mut(slot).and_then(Option::take) else {
            return;
        };
        self.pool.push(block);
        self.effects.tone(Tone::Click);
    }

    fn answer(&self) -> String {
        self.slots
            .iter()
            .flatten()
            .map(|b| b.text.as_str())
            .collect()
    }

    fn check_answer(&mut self) {
        let reading = self.words[self.target].reading.clone();
        if self.answer() != reading {
            self.effects.tone(Tone::Error);
            return;
        }
        self.score += puzzle_points(self.countdown.remaining_ms());
        self.phase = PuzzlePhase::Correct;
        self.effects.tone(Tone::Success);
        self.effects.vibrate(Vibration::Short);
        self.effects.speak(reading);
        log::info!("puzzle: round {} solved, score {}", self.round, self.score);
        self.scheduler.schedule(
            self.settings.puzzle_advance_delay_ms,
            PuzzleTask::NextRound(self.round + 1),
        );
    }

    fn fail(&mut self) {
        self.phase = PuzzlePhase::Failed;
        self.scheduler.invalidate();
        self.effects.tone(Tone::Error);
        self.effects.vibrate(Vibration::Double);
        if self.best.offer(self.score) {
            log::info!("puzzle: new best score {}", self.score);
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best_score(&self) -> u64 {
        self.best.get()
    }

    pub fn store(&self) -> &S {
        self.best.store()
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn target(&self) -> &WordEntry {
        &self.words[self.target]
    }

    pub fn pool(&self) -> &[Block] {
        &self.pool
    }

    pub fn slots(&self) -> &[Option<Block>] {
        &self.slots
    }

    /// The reading is shown once the round is over either way.
    pub fn revealed(&self) -> Option<&str> {
        match self.phase {
            PuzzlePhase::Correct | PuzzlePhase::Failed => Some(self.target().reading.as_str()),
            _ => None,
        }
    }

    fn prompt(&self) -> String {
        let word = self.target();
        let blanks = BLANK.repeat(word.syllables.len());
        match word.split_example() {
            Some((before, after)) => format!("{before}{blanks}{after}"),
            None => blanks,
        }
    }

    pub fn snapshot(&self) -> PuzzleSnapshot {
        let started = self.phase != PuzzlePhase::Ready;
        PuzzleSnapshot {
            round: self.round,
            phase: self.phase,
            time_budget: self.countdown.budget_secs(),
            time_remaining: self.countdown.remaining_secs(),
            score: self.score,
            best_score: self.best.get(),
            hanja: if started { self.target().hanja.clone() } else { String::new() },
            prompt: if started { self.prompt() } else { String::new() },
            pool: self.pool.iter().map(BlockView::from).collect(),
            slots: self
                .slots
                .iter()
                .map(|s| s.as_ref().map(BlockView::from))
                .collect(),
            revealed: self.revealed().map(str::to_string),
        }
    }
}

impl<S: ScoreStore> Activity for PuzzleGame<S> {
    fn tick(&mut self, dt: f64) {
        if self.exited {
            return;
        }
        let dt_ms = secs_to_ms(dt);
        // a round dealt by a task below starts its clock on the next tick
        let was_playing = self.phase == PuzzlePhase::Playing;
        for task in self.scheduler.advance(dt_ms) {
            let PuzzleTask::NextRound(n) = task;
            if let Err(err) = self.start_round(n) {
                log::error!("puzzle: cannot start round {n}: {err}");
            }
        }
        if was_playing
            && self.phase == PuzzlePhase::Playing
            && self.countdown.tick(dt_ms) == CountdownStatus::Expired
        {
            self.fail();
        }
    }

    fn needs_ticks(&self) -> bool {
        !self.exited && (self.phase == PuzzlePhase::Playing || self.scheduler.has_pending())
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        self.effects.take()
    }

    fn exit(&mut self) {
        self.exited = true;
        self.scheduler.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::BlockRole;
    use crate::store::MemoryStore;

    fn words() -> Vec<WordEntry> {
        vec![
            WordEntry::new("學校", "학교", &["학", "교"], "아침마다 학교에 가요."),
            WordEntry::new("父母", "부모", &["부", "모"], "부모님께 편지를 썼어요."),
            WordEntry::new("山水", "산수", &["산", "수"], "이곳은 산수가 좋아요."),
        ]
    }

    fn game() -> PuzzleGame<MemoryStore> {
        let mut g = PuzzleGame::new(words(), MemoryStore::new(), Settings::default())
            .expect("words")
            .with_rng(StdRng::seed_from_u64(9));
        g.start().expect("start");
        g
    }

    fn answer_ids(g: &PuzzleGame<MemoryStore>) -> Vec<u32> {
        let mut used = Vec::new();
        for syl in &g.target().syllables {
            let b = g
                .pool()
                .iter()
                .find(|b| b.role == BlockRole::Answer && &b.text == syl && !used.contains(&b.id))
                .expect("answer block");
            used.push(b.id);
        }
        used
    }

    #[test]
    fn no_words_is_an_error() {
        let bad = vec![WordEntry::new("山", "산", &["수"], "산")];
        assert!(matches!(
            PuzzleGame::new(bad, MemoryStore::new(), Settings::default()),
            Err(GameError::NoWords)
        ));
    }

    #[test]
    fn round_one_deals_one_distractor() {
        let g = game();
        assert_eq!(g.pool().len(), g.target().syllables.len() + 1);
        assert_eq!(g.slots().len(), g.target().syllables.len());
        assert_eq!(g.countdown().budget_ms(), 20_000);
    }

    #[test]
    fn correct_order_solves_and_scores() {
        let mut g = game();
        g.tick(2.05);
        for id in answer_ids(&g) {
            g.place_block(id);
        }
        assert_eq!(g.phase(), PuzzlePhase::Correct);
        // 17.95 s left -> 100 + ceil(179.5)
        assert_eq!(g.score(), 280);
        assert_eq!(g.revealed(), Some(g.target().reading.as_str()));
        g.tick(0.8);
        assert_eq!(g.round(), 2);
        assert_eq!(g.phase(), PuzzlePhase::Playing);
    }

    #[test]
    fn wrong_order_waits_for_rearrangement() {
        let mut g = game();
        let mut ids = answer_ids(&g);
        ids.reverse();
        for &id in &ids {
            g.place_block(id);
        }
        assert_eq!(g.phase(), PuzzlePhase::Playing);
        assert_eq!(g.score(), 0);

        // a full row ignores further placements
        let spare = g.pool()[0].id;
        g.place_block(spare);
        assert!(g.pool().iter().any(|b| b.id == spare));

        for slot in 0..ids.len() {
            g.unplace_block(slot);
        }
        assert!(g.slots().iter().all(Option::is_none));
        for id in answer_ids(&g) {
            g.place_block(id);
        }
        assert_eq!(g.phase(), PuzzlePhase::Correct);
    }

    #[test]
    fn unplacing_empty_slot_is_ignored() {
        let mut g = game();
        let before = g.pool().len();
        g.unplace_block(0);
        g.unplace_block(99);
        assert_eq!(g.pool().len(), before);
        assert!(g.take_effects().is_empty());
    }

    #[test]
    fn block_ids_are_not_reused_across_rounds() {
        let mut g = game();
        let first: Vec<u32> = g.pool().iter().map(|b| b.id).collect();
        g.start_round(2).expect("round");
        assert!(g.pool().iter().all(|b| !first.contains(&b.id)));
        // a stale id from the old round does nothing
        g.place_block(first[0]);
        assert!(g.slots().iter().all(Option::is_none));
    }

    #[test]
    fn timeout_reveals_and_saves_best() {
        let mut g = game();
        for id in answer_ids(&g) {
            g.place_block(id);
        }
        let solved = g.score();
        g.tick(0.8);
        g.tick(30.0);
        assert_eq!(g.phase(), PuzzlePhase::Failed);
        assert!(g.revealed().is_some());
        assert_eq!(g.best_score(), solved);
        assert_eq!(g.store().get("hanja-whiz.best.words"), Some(solved));
        g.tick(0.1);
        assert_eq!(g.phase(), PuzzlePhase::Failed);
    }

    #[test]
    fn prompt_blanks_the_reading() {
        let g = game();
        let snap = g.snapshot();
        assert!(!snap.prompt.contains(g.target().reading.as_str()));
        assert!(snap.prompt.contains("□□"));
        assert!(snap.revealed.is_none());
    }
}
