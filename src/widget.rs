//! Widget orchestration: acquire sections, resolve against the local clock,
//! write the payload into the display target. Also owns the periodic
//! refresh timer, with an explicit start/stop lifecycle instead of ambient
//! module-level timer state.
use std::cell::RefCell;

use chrono::Local;
use js_sys::Function;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::schedule::resolver::Resolver;
use crate::source;

/// Element id the payload is written to.
pub const TARGET_ID: &str = "now-playing";

/// One full resolution pass. Independent per call; when two calls race,
/// the last write to the target wins.
pub async fn update_now_playing() {
    let sections = source::acquire_day_sections().await;
    let result = Resolver::default().resolve(&sections, &Local::now().naive_local());
    debug!("now playing resolved: found={}", result.found);
    write_payload(&result.payload);
}

fn write_payload(payload: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(TARGET_ID));
    match target {
        Some(element) => element.set_inner_html(payload),
        None => warn!("display target #{} not found", TARGET_ID),
    }
}

struct RefreshTimer {
    handle: i32,
    // Keeps the interval callback alive for as long as the timer runs.
    _callback: Closure<dyn FnMut()>,
}

thread_local! {
    static REFRESH: RefCell<Option<RefreshTimer>> = RefCell::new(None);
}

/// Starts periodic re-resolution. A running timer is replaced.
pub fn start_refresh(interval_ms: i32) {
    stop_refresh();

    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let callback = Closure::wrap(Box::new(|| {
        spawn_local(update_now_playing());
    }) as Box<dyn FnMut()>);

    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref::<Function>(),
        interval_ms,
    ) {
        Ok(handle) => REFRESH.with(|slot| {
            *slot.borrow_mut() = Some(RefreshTimer {
                handle,
                _callback: callback,
            });
        }),
        Err(err) => warn!("failed to start refresh timer: {:?}", err),
    }
}

/// Stops the periodic refresh. In-flight resolutions are not cancelled.
pub fn stop_refresh() {
    if let Some(timer) = REFRESH.with(|slot| slot.borrow_mut().take()) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(timer.handle);
        }
    }
}
