//! Application-level configuration constants.

use crate::components::DigitEffect;

// Tick behavior
pub const TICK_INTERVAL_MS: u32 = 1_000;

// Setup input limits (the seconds grid itself lives with the engine)
pub const MAX_MINUTES_HINT: u32 = 59;

// Preference storage
pub const LANG_STORAGE_KEY: &str = "flip-timer.lang";

// Active digit enter-animation (one of the variants in components.rs)
pub const DIGIT_EFFECT: DigitEffect = DigitEffect::Flip;
