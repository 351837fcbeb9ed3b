// Browser-only checks; run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use hanja_whiz::ScoreStore;
use hanja_whiz::web::LocalStorageStore;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn local_storage_round_trips_best_score() {
    let mut store = LocalStorageStore;
    let key = "hanja-whiz.best.wasm-test";
    store.set(key, 1234).expect("localStorage writable");
    assert_eq!(store.get(key), Some(1234));
}

#[wasm_bindgen_test]
fn missing_key_reads_as_none() {
    assert_eq!(LocalStorageStore.get("hanja-whiz.best.never-written"), None);
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen_test]
fn level_list_marks_locked_grade() {
    let json = hanja_whiz::web::level_list_json().expect("json");
    assert!(json.contains("\"id\":\"6\""));
    assert!(json.contains("\"locked\":true"));
}
