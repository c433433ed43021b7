//! Core state machine for the Flip Timer application.
//!
//! Everything time-related lives here: the countdown/stopwatch position, the
//! configured duration, the command set and the rendered snapshot. No
//! browser types: the whole engine runs and is tested on the host target,
//! while the Yew shell in `main.rs` owns the actual one-second interval and
//! feeds `Command::Tick` into it.

use log::debug;

/// Default countdown configuration shown on first load.
pub mod defaults {
    pub const MINUTES: u32 = 0;
    pub const SECONDS: u32 = 10;
}

/// The seconds field of a countdown duration is restricted to a 5-second
/// grid capped at 55; minutes are any non-negative integer.
pub const SECONDS_STEP: u32 = 5;
pub const MAX_SECONDS: u32 = 55;

/// Snap a seconds value onto the {0, 5, ..., 55} grid.
pub fn snap_seconds(value: u32) -> u32 {
    let stepped = (value + SECONDS_STEP / 2) / SECONDS_STEP * SECONDS_STEP;
    stepped.min(MAX_SECONDS)
}

/// Which of the two faces the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Countdown,
    Stopwatch,
}

/// Countdown duration chosen on the setup screen.
///
/// Survives `reset`/`back_to_setup`/`switch_mode` so the setup form reopens
/// with the previously chosen values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationConfig {
    pub minutes: u32,
    pub seconds: u32,
}

impl DurationConfig {
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }
}

impl Default for DurationConfig {
    fn default() -> Self {
        Self {
            minutes: defaults::MINUTES,
            seconds: defaults::SECONDS,
        }
    }
}

/// Where the engine currently is.
///
/// One tagged position instead of parallel `mode`/`running`/`has_started`
/// flags: a countdown that has never started is `Setup`, and "completed" is
/// just `Countdown { remaining: 0, running: false }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Position {
    Setup,
    Countdown { remaining: u32, running: bool },
    Stopwatch { elapsed: u32, running: bool },
}

/// Every mutation the UI can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    SetDuration { minutes: u32, seconds: u32 },
    Start,
    Pause,
    Resume,
    Reset,
    BackToSetup,
    SwitchMode(Mode),
    Tick,
    /// Space-bar binding: start from setup, pause while running, resume
    /// otherwise. Resolved here because only the engine knows which of the
    /// three applies at dispatch time.
    Toggle,
}

/// Read-only view of the engine for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: Mode,
    pub minutes: u32,
    pub seconds: u32,
    pub running: bool,
    pub has_started: bool,
    pub completed: bool,
}

/// The timer/stopwatch state machine.
///
/// Commands whose precondition does not hold are silently ignored; there is
/// no error path and no unreachable state. A stray `Tick` while not running
/// is a no-op even though the interval driving it is cancelled on every
/// `running` transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerEngine {
    config: DurationConfig,
    position: Position,
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self {
            config: DurationConfig::default(),
            position: Position::Setup,
        }
    }
}

impl TimerEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetDuration { minutes, seconds } => self.set_duration(minutes, seconds),
            Command::Start => self.start(),
            Command::Pause => self.pause(),
            Command::Resume => self.resume(),
            Command::Reset => self.reset(),
            Command::BackToSetup => self.back_to_setup(),
            Command::SwitchMode(mode) => self.switch_mode(mode),
            Command::Tick => self.tick(),
            Command::Toggle => self.toggle(),
        }
    }

    /// Store a new countdown duration, snapping seconds onto the choice
    /// grid. Only honored on the setup screen.
    pub fn set_duration(&mut self, minutes: u32, seconds: u32) {
        if self.position == Position::Setup {
            self.config = DurationConfig {
                minutes,
                seconds: snap_seconds(seconds),
            };
        }
    }

    /// Begin counting. From setup this arms the countdown with the
    /// configured duration (a zero total keeps us on the setup screen); on
    /// an idle or paused stopwatch it is the same as `resume`.
    pub fn start(&mut self) {
        match self.position {
            Position::Setup => {
                let total = self.config.total_seconds();
                if total > 0 {
                    debug!("starting countdown at {}s", total);
                    self.position = Position::Countdown {
                        remaining: total,
                        running: true,
                    };
                }
            }
            Position::Stopwatch {
                elapsed,
                running: false,
            } => {
                self.position = Position::Stopwatch {
                    elapsed,
                    running: true,
                };
            }
            _ => {}
        }
    }

    pub fn pause(&mut self) {
        match &mut self.position {
            Position::Countdown { running, .. } | Position::Stopwatch { running, .. } => {
                *running = false;
            }
            Position::Setup => {}
        }
    }

    /// Restart a paused count. A finished countdown (remaining 0) stays
    /// finished; a stopwatch can always resume.
    pub fn resume(&mut self) {
        match &mut self.position {
            Position::Countdown { remaining, running } if *remaining > 0 => {
                *running = true;
            }
            Position::Stopwatch { running, .. } => {
                *running = true;
            }
            _ => {}
        }
    }

    /// Zero the active count and stop. For the countdown this lands on the
    /// finished (00:00) view rather than back on the setup form.
    pub fn reset(&mut self) {
        match self.position {
            Position::Countdown { .. } => {
                self.position = Position::Countdown {
                    remaining: 0,
                    running: false,
                };
            }
            Position::Stopwatch { .. } => {
                self.position = Position::Stopwatch {
                    elapsed: 0,
                    running: false,
                };
            }
            Position::Setup => {}
        }
    }

    /// Return the countdown to the setup form. The stored duration is kept.
    pub fn back_to_setup(&mut self) {
        if let Position::Countdown { .. } = self.position {
            self.position = Position::Setup;
        }
    }

    /// Jump to the given face. Always stops the count and zeroes both
    /// sub-states, even when "switching" to the current mode.
    pub fn switch_mode(&mut self, mode: Mode) {
        debug!("switching to {:?}", mode);
        self.position = match mode {
            Mode::Countdown => Position::Setup,
            Mode::Stopwatch => Position::Stopwatch {
                elapsed: 0,
                running: false,
            },
        };
    }

    /// One second has elapsed. Ignored unless running; the countdown stops
    /// itself on reaching zero, the stopwatch never does.
    pub fn tick(&mut self) {
        match &mut self.position {
            Position::Countdown { remaining, running } if *running && *remaining > 0 => {
                *remaining -= 1;
                if *remaining == 0 {
                    *running = false;
                }
            }
            Position::Stopwatch { elapsed, running } if *running => {
                *elapsed = elapsed.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Space-bar behavior: start from setup, otherwise flip pause/resume.
    pub fn toggle(&mut self) {
        match self.position {
            Position::Setup => self.start(),
            Position::Countdown { running: true, .. }
            | Position::Stopwatch { running: true, .. } => self.pause(),
            _ => self.resume(),
        }
    }

    pub fn mode(&self) -> Mode {
        match self.position {
            Position::Setup | Position::Countdown { .. } => Mode::Countdown,
            Position::Stopwatch { .. } => Mode::Stopwatch,
        }
    }

    pub fn config(&self) -> DurationConfig {
        self.config
    }

    pub fn snapshot(&self) -> Snapshot {
        let (count, running) = match self.position {
            Position::Setup => (0, false),
            Position::Countdown { remaining, running } => (remaining, running),
            Position::Stopwatch { elapsed, running } => (elapsed, running),
        };
        let has_started = matches!(self.position, Position::Countdown { .. });
        Snapshot {
            mode: self.mode(),
            minutes: count / 60,
            seconds: count % 60,
            running,
            has_started,
            completed: has_started && !running && count == 0,
        }
    }
}

/// Split a second count into clock fields.
pub fn split_clock(total_seconds: u32) -> (u32, u32) {
    (total_seconds / 60, total_seconds % 60)
}

/// Render a second count as a zero-padded `MM:SS` string.
pub fn format_clock(total_seconds: u32) -> String {
    let (minutes, seconds) = split_clock(total_seconds);
    format!("{:02}:{:02}", minutes, seconds)
}
