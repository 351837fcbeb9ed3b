//! Timed pair-matching game: find each hanja's gloss/pronunciation tile.
//!
//! Rounds run `Playing -> Cleared -> Playing(next)` until the countdown hits
//! zero, which ends the run in `Failed` until `restart`. Matches build a combo
//! that raises the score multiplier and refunds time; a mismatch resets it.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activity::Activity;
use crate::deck::{Tile, TileKind, build_match_deck};
use crate::effects::{Effect, EffectQueue, Tone, Vibration};
use crate::error::GameError;
use crate::round::{clear_bonus, combo_refund_ms, match_config, match_points};
use crate::settings::Settings;
use crate::store::{BestScore, ScoreStore, best_score_key};
use crate::timer::{Countdown, CountdownStatus, Scheduler, secs_to_ms};
use crate::vocab::Level;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchPhase {
    Ready,
    Playing,
    Cleared,
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MatchTask {
    ClearSelection,
    NextRound(u32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TileView {
    pub unique_id: String,
    pub kind: TileKind,
    pub content: String,
    pub selected: bool,
    pub matched: bool,
}

/// Read-only view for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchSnapshot {
    pub level_id: String,
    pub round: u32,
    pub phase: MatchPhase,
    pub time_budget: f64,
    pub time_remaining: f64,
    pub score: u64,
    pub combo: u32,
    pub best_score: u64,
    pub tiles: Vec<TileView>,
}

pub struct MatchGame<S: ScoreStore> {
    level: Level,
    settings: Settings,
    rng: StdRng,
    best: BestScore<S>,
    round: u32,
    phase: MatchPhase,
    countdown: Countdown,
    deck: Vec<Tile>,
    matched: HashSet<u32>,
    selection: Vec<usize>,
    score: u64,
    combo: u32,
    exited: bool,
    scheduler: Scheduler<MatchTask>,
    effects: EffectQueue,
}

impl<S: ScoreStore> MatchGame<S> {
    /// Prepares a game for `level`; the best score is read from `store` here
    /// and nowhere else. Locked or empty levels are rejected, and entries
    /// repeating an earlier id are dropped so every pair can be cleared.
    pub fn new(level: Level, store: S, settings: Settings) -> Result<Self, GameError> {
        let level = Level::new(&level.id, &level.label, level.entries, level.locked);
        if level.locked {
            return Err(GameError::LevelLocked(level.id));
        }
        if level.is_empty() {
            return Err(GameError::EmptyLevel(level.id));
        }
        let key = best_score_key(&settings.best_score_prefix, &level.id);
        Ok(Self {
            best: BestScore::load(store, key),
            level,
            settings,
            rng: StdRng::from_entropy(),
            round: 0,
            phase: MatchPhase::Ready,
            countdown: Countdown::default(),
            deck: Vec::new(),
            matched: HashSet::new(),
            selection: Vec::with_capacity(2),
            score: 0,
            combo: 0,
            exited: false,
            scheduler: Scheduler::new(),
            effects: EffectQueue::default(),
        })
    }

    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Begins a fresh run at round 1 with zero score.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.exited = false;
        self.score = 0;
        self.start_round(1)
    }

    pub fn restart(&mut self) -> Result<(), GameError> {
        log::info!("matching {}: restart", self.level.id);
        self.start()
    }

    /// Deals round `n`. Any pending delayed task from the previous round is
    /// dropped. Score carries over.
    pub fn start_round(&mut self, n: u32) -> Result<(), GameError> {
        self.scheduler.invalidate();
        let cfg = match_config(n);
        let deck = build_match_deck(&self.level, cfg.pair_count, &mut self.rng);
        if deck.is_empty() {
            return Err(GameError::EmptyLevel(self.level.id.clone()));
        }
        self.deck = deck;
        self.round = n.max(1);
        self.countdown = Countdown::new(cfg.time_budget_ms);
        self.matched.clear();
        self.selection.clear();
        self.combo = 0;
        self.phase = MatchPhase::Playing;
        log::debug!(
            "matching {}: round {} with {} pairs, {} ms",
            self.level.id,
            self.round,
            self.deck.len() / 2,
            cfg.time_budget_ms
        );
        Ok(())
    }

    /// Taps the tile at `index`. Taps that cannot count are ignored: outside
    /// play, on a matched pair, on an already selected tile, or while two
    /// tiles are still showing.
    pub fn select_tile(&mut self, index: usize) {
        if self.exited || self.phase != MatchPhase::Playing {
            return;
        }
        let Some(tile) = self.deck.get(index) else {
            return;
        };
        if self.matched.contains(&tile.source_id)
            || self.selection.contains(&index)
            || self.selection.len() >= 2
        {
            return;
        }
        self.effects.tone(Tone::Click);
        self.selection.push(index);
        if self.selection.len() == 2 {
            self.resolve_pair();
        }
    }

    fn resolve_pair(&mut self) {
        let (a, b) = (&self.deck[self.selection[0]], &self.deck[self.selection[1]]);
        if a.source_id != b.source_id {
            self.combo = 0;
            self.effects.tone(Tone::Error);
            self.effects.vibrate(Vibration::Double);
            self.scheduler
                .schedule(self.settings.mismatch_clear_delay_ms, MatchTask::ClearSelection);
            return;
        }

        let source_id = a.source_id;
        // the meaning tile carries "gloss pronunciation", which the voice can read
        let reading = if a.kind == TileKind::Secondary { &a.content } else { &b.content };
        self.effects.speak(reading.clone());
        self.matched.insert(source_id);
        self.selection.clear();
        self.combo += 1;
        self.score += match_points(self.combo);
        self.countdown.refund(combo_refund_ms(self.combo));
        self.effects.tone(Tone::Success);
        self.effects.vibrate(Vibration::Short);

        if self.matched.len() * 2 == self.deck.len() {
            self.score += clear_bonus(self.countdown.remaining_ms());
            self.phase = MatchPhase::Cleared;
            self.effects.tone(Tone::Success);
            log::info!(
                "matching {}: round {} cleared, score {}",
                self.level.id,
                self.round,
                self.score
            );
            self.scheduler.schedule(
                self.settings.round_clear_delay_ms,
                MatchTask::NextRound(self.round + 1),
            );
        }
    }

    fn run_task(&mut self, task: MatchTask) {
        match task {
            MatchTask::ClearSelection => {
                if self.phase == MatchPhase::Playing {
                    self.selection.clear();
                }
            }
            MatchTask::NextRound(n) => {
                if let Err(err) = self.start_round(n) {
                    log::error!("matching {}: cannot start round {n}: {err}", self.level.id);
                }
            }
        }
    }

    fn fail(&mut self) {
        self.phase = MatchPhase::Failed;
        self.scheduler.invalidate();
        self.selection.clear();
        self.effects.tone(Tone::Error);
        self.effects.vibrate(Vibration::Double);
        if self.best.offer(self.score) {
            log::info!("matching {}: new best score {}", self.level.id, self.score);
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
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

    pub fn deck(&self) -> &[Tile] {
        &self.deck
    }

    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    pub fn is_matched(&self, source_id: u32) -> bool {
        self.matched.contains(&source_id)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let tiles = self
            .deck
            .iter()
            .enumerate()
            .map(|(i, t)| TileView {
                unique_id: t.unique_id.clone(),
                kind: t.kind,
                content: t.content.clone(),
                selected: self.selection.contains(&i),
                matched: self.matched.contains(&t.source_id),
            })
            .collect();
        MatchSnapshot {
            level_id: self.level.id.clone(),
            round: self.round,
            phase: self.phase,
            time_budget: self.countdown.budget_secs(),
            time_remaining: self.countdown.remaining_secs(),
            score: self.score,
            combo: self.combo,
            best_score: self.best.get(),
            tiles,
        }
    }
}

impl<S: ScoreStore> Activity for MatchGame<S> {
    /// Advances pending delays by `dt` seconds of wall clock, then the round
    /// countdown if a round is in play.
    fn tick(&mut self, dt: f64) {
        if self.exited {
            return;
        }
        let dt_ms = secs_to_ms(dt);
        // a round dealt by a task below starts its clock on the next tick
        let was_playing = self.phase == MatchPhase::Playing;
        for task in self.scheduler.advance(dt_ms) {
            self.run_task(task);
        }
        if was_playing
            && self.phase == MatchPhase::Playing
            && self.countdown.tick(dt_ms) == CountdownStatus::Expired
        {
            self.fail();
        }
    }

    fn needs_ticks(&self) -> bool {
        !self.exited && (self.phase == MatchPhase::Playing || self.scheduler.has_pending())
    }

    fn take_effects(&mut self) -> Vec<Effect> {
        self.effects.take()
    }

    fn exit(&mut self) {
        self.exited = true;
        self.scheduler.invalidate();
        self.selection.clear();
    }
}
