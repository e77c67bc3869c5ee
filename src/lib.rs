pub mod schedule;
pub mod source;
pub mod utils;
pub mod widget;

use utils::set_panic_hook;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Runs one resolution pass and writes the result into the `#now-playing`
/// target. Safe to call at any time; concurrent calls each resolve
/// independently.
#[wasm_bindgen]
pub fn update_now_playing() {
    spawn_local(widget::update_now_playing());
}

/// Starts periodic re-resolution every `interval_ms` milliseconds and runs
/// one pass immediately. Restarting replaces a running timer.
#[wasm_bindgen]
pub fn start_now_playing(interval_ms: i32) {
    widget::start_refresh(interval_ms);
    update_now_playing();
}

/// Stops the periodic refresh. The last written payload stays in place.
#[wasm_bindgen]
pub fn stop_now_playing() {
    widget::stop_refresh();
}

#[wasm_bindgen(start)]
pub fn main() {
    set_panic_hook();
    let _ = console_log::init_with_level(log::Level::Info);
}
