//! Hanja Whiz core crate.
//!
//! Three small activities for learning Korean hanja: stroke-order practice,
//! a timed hanja/meaning matching game, and a syllable puzzle that rebuilds a
//! word's reading from shuffled blocks. Game logic is plain Rust driven by
//! `tick(dt)` and user calls; the `web` module wires it to the browser.

use wasm_bindgen::prelude::*;

pub mod activity;
pub mod deck;
pub mod effects;
pub mod error;
pub mod matching;
pub mod practice;
pub mod puzzle;
pub mod round;
pub mod settings;
pub mod store;
pub mod timer;
pub mod vocab;
pub mod web;

pub use activity::Activity;
pub use effects::{Effect, EffectQueue, StrokeRequest, Tone, Vibration};
pub use error::{GameError, StoreError};
pub use matching::{MatchGame, MatchPhase, MatchSnapshot};
pub use practice::{Feedback, PracticeSession, PracticeSnapshot, QuizEvent};
pub use puzzle::{PuzzleGame, PuzzlePhase, PuzzleSnapshot};
pub use settings::Settings;
pub use store::{BestScore, MemoryStore, ScoreStore};
pub use vocab::{Level, VocabEntry, WordEntry};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    web::logging::init(log::LevelFilter::Info);
    log::info!("hanja-whiz {} ready", env!("CARGO_PKG_VERSION"));
}
