//! Browser bridge: the `#[wasm_bindgen]` handles a page uses to run each
//! activity, plus the local-storage score store and console logging.
//!
//! Each handle owns one activity behind a [`driver::Driver`]. The page
//! registers an `on_change` callback and re-reads the snapshot when it fires.

mod driver;
mod feedback;
pub mod logging;
mod storage;

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::activity::Activity;
use crate::error::GameError;
use crate::matching::MatchGame;
use crate::practice::{PracticeSession, QuizEvent};
use crate::puzzle::PuzzleGame;
use crate::settings::Settings;
use crate::vocab::{self, Level};
use driver::Driver;

pub use storage::LocalStorageStore;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

fn find_level(level_id: &str) -> Result<Level, JsValue> {
    vocab::level_by_id(level_id)
        .cloned()
        .ok_or_else(|| js_error(GameError::UnknownLevel(level_id.to_string())))
}

#[cfg(feature = "serde_json")]
fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_error)
}

#[cfg(feature = "serde_json")]
#[derive(serde::Serialize)]
struct LevelSummary<'a> {
    id: &'a str,
    label: &'a str,
    locked: bool,
    count: usize,
}

/// `[{ id, label, locked, count }]` for the level picker.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn level_list_json() -> Result<String, JsValue> {
    let summaries: Vec<LevelSummary> = vocab::levels()
        .iter()
        .map(|level| LevelSummary {
            id: &level.id,
            label: &level.label,
            locked: level.locked,
            count: level.entries.len(),
        })
        .collect();
    to_json(&summaries)
}

#[wasm_bindgen]
pub struct MatchGameHandle {
    driver: Driver<MatchGame<LocalStorageStore>>,
}

#[wasm_bindgen]
impl MatchGameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(level_id: &str) -> Result<MatchGameHandle, JsValue> {
        let settings = Settings::default();
        let game = MatchGame::new(find_level(level_id)?, LocalStorageStore, settings.clone())
            .map_err(js_error)?;
        Ok(Self { driver: Driver::new(game, &settings) })
    }

    pub fn set_on_change(&self, callback: Option<Function>) {
        *self.driver.hooks().on_change.borrow_mut() = callback;
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.driver.with(|game| game.start()).map_err(js_error)
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        self.driver.with(|game| game.restart()).map_err(js_error)
    }

    pub fn select_tile(&self, index: usize) {
        self.driver.with(|game| game.select_tile(index));
    }

    pub fn exit(&self) {
        self.driver.with(|game| game.exit());
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.driver.read(|game| to_json(&game.snapshot()))
    }
}

#[wasm_bindgen]
pub struct PuzzleGameHandle {
    driver: Driver<PuzzleGame<LocalStorageStore>>,
}

#[wasm_bindgen]
impl PuzzleGameHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PuzzleGameHandle, JsValue> {
        let settings = Settings::default();
        let game = PuzzleGame::new(vocab::words().to_vec(), LocalStorageStore, settings.clone())
            .map_err(js_error)?;
        Ok(Self { driver: Driver::new(game, &settings) })
    }

    pub fn set_on_change(&self, callback: Option<Function>) {
        *self.driver.hooks().on_change.borrow_mut() = callback;
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.driver.with(|game| game.start()).map_err(js_error)
    }

    pub fn restart(&self) -> Result<(), JsValue> {
        self.driver.with(|game| game.restart()).map_err(js_error)
    }

    pub fn place_block(&self, block_id: u32) {
        self.driver.with(|game| game.place_block(block_id));
    }

    pub fn unplace_block(&self, slot: usize) {
        self.driver.with(|game| game.unplace_block(slot));
    }

    pub fn exit(&self) {
        self.driver.with(|game| game.exit());
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.driver.read(|game| to_json(&game.snapshot()))
    }
}

/// Stroke practice. The page forwards its renderer's quiz callbacks to the
/// `on_*` methods and receives stroke requests through `set_on_stroke`.
#[wasm_bindgen]
pub struct PracticeHandle {
    driver: Driver<PracticeSession>,
}

#[wasm_bindgen]
impl PracticeHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(level_id: &str) -> Result<PracticeHandle, JsValue> {
        let settings = Settings::default();
        let session =
            PracticeSession::new(find_level(level_id)?, settings.clone()).map_err(js_error)?;
        Ok(Self { driver: Driver::new(session, &settings) })
    }

    pub fn set_on_change(&self, callback: Option<Function>) {
        *self.driver.hooks().on_change.borrow_mut() = callback;
    }

    pub fn set_on_stroke(&self, callback: Option<Function>) {
        *self.driver.hooks().on_stroke.borrow_mut() = callback;
    }

    pub fn start(&self) {
        self.driver.with(|s| s.start());
    }

    pub fn next(&self) {
        self.driver.with(|s| s.next());
    }

    pub fn prev(&self) {
        self.driver.with(|s| s.prev());
    }

    pub fn animate(&self) {
        self.driver.with(|s| s.animate());
    }

    pub fn restart_quiz(&self) {
        self.driver.with(|s| s.restart_quiz());
    }

    pub fn on_mistake(&self, stroke: u32) {
        self.driver.with(|s| s.on_quiz_event(QuizEvent::Mistake { stroke }));
    }

    pub fn on_correct_stroke(&self) {
        self.driver.with(|s| s.on_quiz_event(QuizEvent::CorrectStroke));
    }

    pub fn on_complete(&self) {
        self.driver.with(|s| s.on_quiz_event(QuizEvent::Complete));
    }

    pub fn exit(&self) {
        self.driver.with(|s| s.exit());
    }

    #[cfg(feature = "serde_json")]
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        self.driver.read(|s| to_json(&s.snapshot()))
    }
}
