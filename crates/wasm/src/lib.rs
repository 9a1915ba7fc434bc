use std::sync::{Mutex, MutexGuard};

use ghostleg_core::animation::Immediate;
use ghostleg_core::labels::parse_labels;
use ghostleg_core::{LadderConfig, Session};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// The page's single session, created by `configure`.
static SESSION: Mutex<Option<Session>> = Mutex::new(None);

fn lock() -> Result<MutexGuard<'static, Option<Session>>, JsError> {
    SESSION
        .lock()
        .map_err(|_| JsError::new("session lock poisoned"))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsError> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Replace the session with one using `config_json` (an empty string keeps
/// the defaults). The seed comes from the page, e.g. `Math.random()`.
#[wasm_bindgen]
pub fn configure(config_json: &str, seed: u64) -> Result<(), JsError> {
    let config = if config_json.trim().is_empty() {
        LadderConfig::default()
    } else {
        LadderConfig::from_json(config_json.as_bytes()).map_err(|e| JsError::new(&e.to_string()))?
    };
    let session = Session::with_seed(config, seed).map_err(|e| JsError::new(&e.to_string()))?;
    *lock()? = Some(session);
    Ok(())
}

/// Generate a fresh ladder from textarea contents (one label per line) and
/// return its render commands as JSON. Fewer than two labels yield `[]`.
///
/// Ladders and random starts are drawn from the seed given to `configure`.
#[wasm_bindgen]
pub fn generate_ladder(labels_text: &str) -> Result<String, JsError> {
    let mut guard = lock()?;
    let session = guard
        .as_mut()
        .ok_or_else(|| JsError::new("call configure first"))?;
    session
        .generate(&parse_labels(labels_text))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_json(&session.render())
}

/// Trace from `start` (a random lane when `None`) and return the trace as
/// JSON. The page animates each segment for `segment_duration_ms` and keeps
/// its buttons disabled until the last one is drawn.
#[wasm_bindgen]
pub fn trace_from(start: Option<usize>) -> Result<String, JsError> {
    let mut guard = lock()?;
    let session = guard
        .as_mut()
        .ok_or_else(|| JsError::new("generate a ladder first"))?;
    let trace = session
        .run(start, &mut Immediate)
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_json(&trace)
}

/// Render commands for the current ladder and last trace as JSON.
#[wasm_bindgen]
pub fn render_scene() -> Result<String, JsError> {
    let guard = lock()?;
    match guard.as_ref() {
        Some(session) => to_json(&session.render()),
        None => Ok(String::from("[]")),
    }
}

/// Canvas size needed by the current ladder as `{x, y, w, h}` JSON.
#[wasm_bindgen]
pub fn canvas_size() -> Result<String, JsError> {
    let guard = lock()?;
    let rect = match guard.as_ref() {
        Some(session) => session.config().canvas(session.ladder().lane_count()),
        None => LadderConfig::default().canvas(0),
    };
    to_json(&rect)
}
