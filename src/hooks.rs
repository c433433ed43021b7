//! Custom hooks wiring browser-side effects to engine state.

use flip_timer::Mode;
use gloo_timers::callback::Interval;
use gloo_utils::document;
use log::warn;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config::TICK_INTERVAL_MS;
use crate::platform;

/// Owns the one-second tick source.
///
/// Keyed on `(mode, running)`: any transition of either drops the previous
/// `Interval` (cancelling its pending firing) before a new one may be armed,
/// so at most one tick stream exists and a pause/reset/mode-switch can never
/// race a stale callback into the engine.
#[hook]
pub fn use_tick(mode: Mode, running: bool, ontick: Callback<()>) {
    use_effect_with((mode, running), move |&(_, running)| {
        let interval =
            running.then(|| Interval::new(TICK_INTERVAL_MS, move || ontick.emit(())));
        move || drop(interval)
    });
}

/// Document-level `keydown` listener, attached for the component's lifetime.
#[hook]
pub fn use_document_keydown(onkey: Callback<KeyboardEvent>) {
    use_effect_with((), move |_| {
        let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            onkey.emit(event);
        });
        let target = document();
        if let Err(err) =
            target.add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        {
            warn!("failed to attach keydown listener: {:?}", err);
        }
        move || {
            let _ = target
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    });
}

/// Tracks the platform fullscreen flag via `fullscreenchange`, independent
/// of timer state.
#[hook]
pub fn use_fullscreen() -> bool {
    let flag = use_state(platform::is_fullscreen);
    {
        let flag = flag.clone();
        use_effect_with((), move |_| {
            let listener =
                Closure::<dyn FnMut()>::new(move || flag.set(platform::is_fullscreen()));
            let target = document();
            if let Err(err) = target.add_event_listener_with_callback(
                "fullscreenchange",
                listener.as_ref().unchecked_ref(),
            ) {
                warn!("failed to attach fullscreenchange listener: {:?}", err);
            }
            move || {
                let _ = target.remove_event_listener_with_callback(
                    "fullscreenchange",
                    listener.as_ref().unchecked_ref(),
                );
            }
        });
    }
    *flag
}
