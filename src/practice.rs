//! Stroke-order tracing practice over one level's characters.
//!
//! The drawing and stroke recognition belong to an external renderer; this
//! session only walks the character list, turns quiz callbacks into feedback,
//! and moves on by itself a moment after a character is completed.

use crate::activity::Activity;
use crate::effects::{Effect, EffectQueue, StrokeRequest, Tone, Vibration};
use crate::error::GameError;
use crate::settings::Settings;
use crate::timer::{Scheduler, secs_to_ms};
use crate::vocab::{Level, VocabEntry};

/// Callbacks reported by the stroke renderer while quizzing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizEvent {
    Mistake { stroke: u32 },
    CorrectStroke,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Feedback {
    None,
    Mistake { stroke: u32 },
    Good,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PracticeTask {
    Advance,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PracticeSnapshot {
    pub level_id: String,
    pub index: usize,
    pub total: usize,
    pub character: String,
    pub gloss: String,
    pub pronunciation: String,
    pub feedback: Feedback,
    pub mistakes: u32,
    pub has_prev: bool,
    pub has_next: bool,
}

pub struct PracticeSession {
    level: Level,
    settings: Settings,
    index: usize,
    feedback: Feedback,
    mistakes: u32,
    exited: bool,
    scheduler: Scheduler<PracticeTask>,
    effects: EffectQueue,
}

impl PracticeSession {
    pub fn new(level: Level, settings: Settings) -> Result<Self, GameError> {
        if level.locked {
            return Err(GameError::LevelLocked(level.id));
        }
        if level.is_empty() {
            return Err(GameError::EmptyLevel(level.id));
        }
        Ok(Self {
            level,
            settings,
            index: 0,
            feedback: Feedback::None,
            mistakes: 0,
            exited: false,
            scheduler: Scheduler::new(),
            effects: EffectQueue::default(),
        })
    }

    /// Loads the first character into the renderer.
    pub fn start(&mut self) {
        self.exited = false;
        self.go_to(0);
    }

    pub fn current(&self) -> &VocabEntry {
        &self.level.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn feedback(&self) -> Feedback {
        self.feedback
    }

    fn go_to(&mut self, index: usize) {
        self.scheduler.invalidate();
        self.index = index;
        self.feedback = Feedback::None;
        self.mistakes = 0;
        let entry = self.current();
        let (character, label) = (entry.character.clone(), entry.meaning_label());
        self.effects.stroke(StrokeRequest::Quiz { character });
        self.effects.speak(label);
    }

    pub fn next(&mut self) {
        if !self.exited && self.index + 1 < self.level.entries.len() {
            self.go_to(self.index + 1);
        }
    }

    pub fn prev(&mut self) {
        if !self.exited && self.index > 0 {
            self.go_to(self.index - 1);
        }
    }

    /// Called once a completed character has been shown for a moment. Stays
    /// on the last character.
    pub fn advance_to_next(&mut self) {
        self.next();
    }

    pub fn animate(&mut self) {
        if self.exited {
            return;
        }
        let character = self.current().character.clone();
        self.effects.stroke(StrokeRequest::Animate { character });
    }

    pub fn restart_quiz(&mut self) {
        if self.exited {
            return;
        }
        self.scheduler.invalidate();
        self.feedback = Feedback::None;
        self.mistakes = 0;
        let character = self.current().character.clone();
        self.effects.stroke(StrokeRequest::Quiz { character });
    }

    pub fn on_quiz_event(&mut self, event: QuizEvent) {
        if self.exited {
            return;
        }
        match event {
            QuizEvent::Mistake { stroke } => {
                self.feedback = Feedback::Mistake { stroke };
                self.mistakes += 1;
                self.effects.stroke(StrokeRequest::Hint { stroke });
                self.effects.tone(Tone::Error);
                self.effects.vibrate(Vibration::Short);
            }
            QuizEvent::CorrectStroke => {
                self.feedback = Feedback::Good;
            }
            QuizEvent::Complete => {
                self.feedback = Feedback::Complete;
                self.effects.tone(Tone::Success);
                let label = self.current().meaning_label();
                self.effects.speak(label);
                if self.index + 1 < self.level.entries.len() {
                    self.scheduler
                        .schedule(self.settings.practice_advance_delay_ms, PracticeTask::Advance);
                }
            }
        }
    }

    pub fn snapshot(&self) -> PracticeSnapshot {
        let entry = self.current();
        PracticeSnapshot {
            level_id: self.level.id.clone(),
            index: self.index,
            total: self.level.entries.len(),
            character: entry.character.clone(),
            gloss: entry.gloss.clone(),
            pronunciation: entry.pronunciation.clone(),
            feedback: self.feedback,
            mistakes: self.mistakes,
            has_prev: self.index > 0,
            has_next: self.index + 1 < self.level.entries.len(),
        }
    }
}

impl Activity for PracticeSession {
    fn tick(&mut self, dt: f64) {
        if self.exited {
            return;
        }
        for task in self.scheduler.advance(secs_to_ms(dt)) {
            match task {
                PracticeTask::Advance => self.advance_to_next(),
            }
        }
    }

    fn needs_ticks(&self) -> bool {
        !self.exited && self.scheduler.has_pending()
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

    fn session() -> PracticeSession {
        let entries = vec![
            VocabEntry::new(1, "日", "날", "일"),
            VocabEntry::new(2, "月", "달", "월"),
        ];
        let mut s = PracticeSession::new(Level::new("t", "test", entries, false), Settings::default())
            .expect("level");
        s.start();
        s
    }

    #[test]
    fn start_requests_quiz_and_speech() {
        let mut s = session();
        assert_eq!(
            s.take_effects(),
            vec![
                Effect::Stroke(StrokeRequest::Quiz { character: "日".into() }),
                Effect::Speak("날 일".into()),
            ]
        );
    }

    #[test]
    fn mistake_requests_hint() {
        let mut s = session();
        s.take_effects();
        s.on_quiz_event(QuizEvent::Mistake { stroke: 2 });
        assert_eq!(s.feedback(), Feedback::Mistake { stroke: 2 });
        assert!(s.take_effects().contains(&Effect::Stroke(StrokeRequest::Hint { stroke: 2 })));
    }

    #[test]
    fn completion_auto_advances() {
        let mut s = session();
        s.on_quiz_event(QuizEvent::Complete);
        assert!(s.needs_ticks());
        s.tick(1.4);
        assert_eq!(s.index(), 0);
        s.tick(0.1);
        assert_eq!(s.index(), 1);
        assert_eq!(s.feedback(), Feedback::None);

        // last character: completion does not schedule anything
        s.on_quiz_event(QuizEvent::Complete);
        assert!(!s.needs_ticks());
    }

    #[test]
    fn manual_navigation_cancels_auto_advance() {
        let mut s = session();
        s.on_quiz_event(QuizEvent::Complete);
        s.next();
        s.prev();
        s.tick(5.0);
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn exit_stops_pending_advance() {
        let mut s = session();
        s.on_quiz_event(QuizEvent::Complete);
        s.exit();
        s.tick(5.0);
        assert_eq!(s.index(), 0);
        assert!(!s.needs_ticks());
    }
}
