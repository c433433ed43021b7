//! Drives the timer engine through its command set and asserts on the
//! resulting snapshots, the way the UI consumes them.

use flip_timer::{Command, Mode, TimerEngine};

fn engine_with(minutes: u32, seconds: u32) -> TimerEngine {
    let mut engine = TimerEngine::new();
    engine.set_duration(minutes, seconds);
    engine
}

fn tick_n(engine: &mut TimerEngine, n: u32) {
    for _ in 0..n {
        engine.tick();
    }
}

#[test]
fn countdown_drains_and_stops_itself() {
    let mut engine = engine_with(0, 10);
    engine.start();

    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 10));
    assert!(snap.running);
    assert!(snap.has_started);
    assert!(!snap.completed);

    tick_n(&mut engine, 10);

    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 0));
    assert!(!snap.running);
    assert!(snap.completed);
}

#[test]
fn ticks_after_completion_change_nothing() {
    let mut engine = engine_with(0, 5);
    engine.start();
    tick_n(&mut engine, 5);
    assert!(engine.snapshot().completed);

    // The interval is cancelled on completion, but a stray delivery must
    // still be harmless.
    tick_n(&mut engine, 3);
    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 0));
    assert!(!snap.running);
    assert!(snap.completed);
}

#[test]
fn countdown_decrements_exactly_once_per_tick() {
    let mut engine = engine_with(2, 30);
    engine.start();
    tick_n(&mut engine, 40);

    let snap = engine.snapshot();
    assert_eq!(snap.minutes * 60 + snap.seconds, 150 - 40);
    assert!(snap.running);
}

#[test]
fn stopwatch_counts_up_unbounded() {
    let mut engine = TimerEngine::new();
    engine.switch_mode(Mode::Stopwatch);
    engine.start();

    tick_n(&mut engine, 65);

    let snap = engine.snapshot();
    assert_eq!(snap.mode, Mode::Stopwatch);
    assert_eq!((snap.minutes, snap.seconds), (1, 5));
    assert!(snap.running);
    assert!(!snap.completed);
}

#[test]
fn stray_tick_while_paused_is_ignored() {
    let mut engine = engine_with(0, 10);
    engine.start();
    tick_n(&mut engine, 5);
    engine.pause();

    engine.tick();

    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 5));
    assert!(!snap.running);
}

#[test]
fn zero_duration_start_is_a_no_op() {
    let mut engine = engine_with(0, 0);
    engine.start();

    let snap = engine.snapshot();
    assert!(!snap.has_started);
    assert!(!snap.running);
    assert!(!snap.completed);
}

#[test]
fn pause_and_resume_are_idempotent() {
    let mut engine = engine_with(1, 0);
    engine.start();
    tick_n(&mut engine, 10);

    engine.pause();
    let once = engine.clone();
    engine.pause();
    assert_eq!(engine, once);

    engine.resume();
    let once = engine.clone();
    engine.resume();
    assert_eq!(engine, once);
    assert!(engine.snapshot().running);
}

#[test]
fn resume_does_not_revive_a_finished_countdown() {
    let mut engine = engine_with(0, 5);
    engine.start();
    tick_n(&mut engine, 5);

    engine.resume();
    assert!(!engine.snapshot().running);
}

#[test]
fn switch_mode_always_zeroes_and_stops() {
    let mut engine = engine_with(0, 30);
    engine.start();
    tick_n(&mut engine, 7);

    engine.switch_mode(Mode::Stopwatch);
    let snap = engine.snapshot();
    assert_eq!(snap.mode, Mode::Stopwatch);
    assert_eq!((snap.minutes, snap.seconds), (0, 0));
    assert!(!snap.running);

    engine.start();
    tick_n(&mut engine, 12);
    engine.switch_mode(Mode::Stopwatch);
    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 0));
    assert!(!snap.running);

    engine.switch_mode(Mode::Countdown);
    let snap = engine.snapshot();
    assert_eq!(snap.mode, Mode::Countdown);
    assert!(!snap.has_started);
}

#[test]
fn reset_lands_on_the_finished_view_not_setup() {
    let mut engine = engine_with(0, 30);
    engine.start();
    tick_n(&mut engine, 4);

    engine.reset();
    let snap = engine.snapshot();
    assert_eq!((snap.minutes, snap.seconds), (0, 0));
    assert!(!snap.running);
    assert!(snap.has_started);
    assert!(snap.completed);
}

#[test]
fn configuration_survives_reset_and_back_to_setup() {
    let mut engine = engine_with(3, 45);
    let before = engine.snapshot();

    engine.start();
    engine.reset();
    engine.back_to_setup();

    assert_eq!(engine.snapshot(), before);
    assert_eq!(engine.config().minutes, 3);
    assert_eq!(engine.config().seconds, 45);
}

#[test]
fn set_duration_is_ignored_outside_setup() {
    let mut engine = engine_with(0, 20);
    engine.start();
    engine.set_duration(9, 55);
    assert_eq!(engine.config().minutes, 0);
    assert_eq!(engine.config().seconds, 20);

    engine.switch_mode(Mode::Stopwatch);
    engine.set_duration(9, 55);
    assert_eq!(engine.config().seconds, 20);

    engine.switch_mode(Mode::Countdown);
    engine.set_duration(9, 55);
    assert_eq!(engine.config().minutes, 9);
    assert_eq!(engine.config().seconds, 55);
}

#[test]
fn running_and_completed_are_never_both_set() {
    let mut engine = engine_with(0, 5);
    engine.start();
    for _ in 0..8 {
        let snap = engine.snapshot();
        assert!(!(snap.running && snap.completed));
        engine.tick();
    }
}

#[test]
fn toggle_cycles_start_pause_resume() {
    let mut engine = engine_with(0, 15);

    engine.apply(Command::Toggle);
    assert!(engine.snapshot().running);

    engine.apply(Command::Toggle);
    assert!(!engine.snapshot().running);

    engine.apply(Command::Toggle);
    assert!(engine.snapshot().running);
}

#[test]
fn toggle_on_zero_config_stays_in_setup() {
    let mut engine = engine_with(0, 0);
    engine.apply(Command::Toggle);
    assert!(!engine.snapshot().has_started);
}

#[test]
fn commands_via_apply_match_direct_calls() {
    let mut by_apply = TimerEngine::new();
    by_apply.apply(Command::SetDuration {
        minutes: 1,
        seconds: 5,
    });
    by_apply.apply(Command::Start);
    by_apply.apply(Command::Tick);

    let mut direct = TimerEngine::new();
    direct.set_duration(1, 5);
    direct.start();
    direct.tick();

    assert_eq!(by_apply, direct);
}
