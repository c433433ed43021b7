//! Main module for the Flip Timer application using Yew.
//! Wires UI components, engine state, and side-effect logic.

use std::rc::Rc;

use flip_timer::{Command, Mode, TimerEngine};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

mod audio;
mod components;
mod config;
mod hooks;
mod i18n;
mod platform;
mod utils;

use audio::MusicPlayer;
use components::{CompletionBanner, ModeTabs, TimerDisplay};
use config::{DIGIT_EFFECT, MAX_MINUTES_HINT};
use hooks::{use_document_keydown, use_fullscreen, use_tick};
use i18n::labels;
use utils::{coerce_minutes, parse_seconds_choice, SECONDS_CHOICES};

/// Engine state as a Yew reducer: every UI event is a [`Command`] dispatch.
///
/// A reducer rather than `use_state` because the tick interval and the
/// keyboard listener live in long-lived closures; `dispatch` always acts on
/// current state, where a captured `UseStateHandle` would read the snapshot
/// from whichever render created the closure.
#[derive(Clone, PartialEq)]
struct EngineState(TimerEngine);

impl Reducible for EngineState {
    type Action = Command;

    fn reduce(self: Rc<Self>, action: Command) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

/// Primary application component wiring state, effects, and UI elements.
#[function_component(App)]
fn app() -> Html {
    let engine = use_reducer(|| EngineState(TimerEngine::new()));
    let lang = use_state(i18n::load_lang);
    let music = use_mut_ref(MusicPlayer::new);
    let fullscreen = use_fullscreen();

    let snap = engine.0.snapshot();
    let duration = engine.0.config();
    let text = labels(*lang);

    // The single tick source, re-armed whenever (mode, running) changes.
    {
        let engine = engine.clone();
        use_tick(
            snap.mode,
            snap.running,
            Callback::from(move |_| engine.dispatch(Command::Tick)),
        );
    }

    // Space toggles start/pause/resume unless the user is typing in a field.
    {
        let engine = engine.clone();
        use_document_keydown(Callback::from(move |event: KeyboardEvent| {
            if event.code() != "Space" {
                return;
            }
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                if matches!(target.tag_name().as_str(), "INPUT" | "SELECT" | "TEXTAREA") {
                    return;
                }
            }
            event.prevent_default();
            engine.dispatch(Command::Toggle);
        }));
    }

    // Music follows the running flag in both modes.
    {
        let music = music.clone();
        use_effect_with(snap.running, move |&running| {
            if let Some(player) = music.borrow().as_ref() {
                player.set_playing(running);
            }
            || ()
        });
    }

    let dispatch = |command: Command| {
        let engine = engine.clone();
        Callback::from(move |_: MouseEvent| engine.dispatch(command))
    };

    let on_switch_mode = {
        let engine = engine.clone();
        Callback::from(move |mode: Mode| engine.dispatch(Command::SwitchMode(mode)))
    };

    let on_minutes_input = {
        let engine = engine.clone();
        let seconds = duration.seconds;
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            engine.dispatch(Command::SetDuration {
                minutes: coerce_minutes(&input.value()),
                seconds,
            });
        })
    };

    let on_seconds_change = {
        let engine = engine.clone();
        let minutes = duration.minutes;
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            engine.dispatch(Command::SetDuration {
                minutes,
                seconds: parse_seconds_choice(&select.value()),
            });
        })
    };

    let on_music_pick = {
        let music = music.clone();
        let running = snap.running;
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                if let Some(player) = music.borrow_mut().as_mut() {
                    player.set_track(&file);
                    player.set_playing(running);
                }
            }
        })
    };

    let on_toggle_lang = {
        let lang = lang.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*lang).toggled();
            i18n::store_lang(next);
            lang.set(next);
        })
    };

    let on_toggle_fullscreen = Callback::from(|_: MouseEvent| platform::toggle_fullscreen());

    let in_setup = snap.mode == Mode::Countdown && !snap.has_started;
    let stopwatch_idle =
        snap.mode == Mode::Stopwatch && !snap.running && snap.minutes == 0 && snap.seconds == 0;

    let controls = if in_setup || stopwatch_idle {
        html! {
            <button class="btn btn-primary" onclick={dispatch(Command::Start)}>
                { text.start }
            </button>
        }
    } else if snap.completed {
        html! {
            <button class="btn btn-secondary" onclick={dispatch(Command::BackToSetup)}>
                { text.back }
            </button>
        }
    } else {
        html! {
            <>
                if snap.running {
                    <button class="btn btn-warning" onclick={dispatch(Command::Pause)}>
                        { text.pause }
                    </button>
                } else {
                    <button class="btn btn-warning" onclick={dispatch(Command::Resume)}>
                        { text.resume }
                    </button>
                }
                <button class="btn btn-danger" onclick={dispatch(Command::Reset)}>
                    { text.reset }
                </button>
                if snap.mode == Mode::Countdown && !snap.running {
                    <button class="btn btn-secondary" onclick={dispatch(Command::BackToSetup)}>
                        { text.back }
                    </button>
                }
            </>
        }
    };

    html! {
        <div class="app">
            <div class="container">
                <div class="top-bar">
                    <ModeTabs
                        mode={snap.mode}
                        countdown_label={text.countdown_tab}
                        stopwatch_label={text.stopwatch_tab}
                        onswitch={on_switch_mode}
                    />
                    <div class="top-actions">
                        <label class="music-picker">
                            { text.music }
                            <input type="file" accept="audio/*" onchange={on_music_pick} />
                        </label>
                        <button class="btn btn-ghost" onclick={on_toggle_fullscreen}>
                            { if fullscreen { text.fullscreen_exit } else { text.fullscreen_enter } }
                        </button>
                        <button class="btn btn-ghost" onclick={on_toggle_lang}>
                            { (*lang).toggle_caption() }
                        </button>
                    </div>
                </div>

                <h1 class="title">{ text.title }</h1>

                if in_setup {
                    <div class="input-section">
                        <div class="time-input-group">
                            <div class="time-input">
                                <label for="minutes-input">{ text.minutes }</label>
                                <input
                                    id="minutes-input"
                                    type="number"
                                    min="0"
                                    max={MAX_MINUTES_HINT.to_string()}
                                    value={duration.minutes.to_string()}
                                    oninput={on_minutes_input}
                                />
                            </div>
                            <div class="time-input">
                                <label for="seconds-select">{ text.seconds }</label>
                                <select id="seconds-select" onchange={on_seconds_change}>
                                    { for SECONDS_CHOICES.iter().map(|&choice| html! {
                                        <option
                                            value={choice.to_string()}
                                            selected={choice == duration.seconds}
                                        >
                                            { format!("{:02}", choice) }
                                        </option>
                                    }) }
                                </select>
                            </div>
                        </div>
                    </div>
                } else {
                    <TimerDisplay
                        minutes={snap.minutes}
                        seconds={snap.seconds}
                        minutes_label={text.minutes}
                        seconds_label={text.seconds}
                        effect={DIGIT_EFFECT}
                    />
                }

                <div class="controls">{ controls }</div>

                if snap.completed {
                    <CompletionBanner message={text.times_up} />
                }
            </div>
        </div>
    }
}

/// Entry point: installs the panic hook and mounts the root component.
fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
