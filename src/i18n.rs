//! UI text for the two supported display languages.
//!
//! Every user-visible string goes through [`labels`]; the active language is
//! a single persisted preference, read once at startup and written on each
//! toggle.

use log::warn;

use crate::config::LANG_STORAGE_KEY;
use crate::platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Vi,
}

impl Lang {
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Vi => "vi",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "vi" => Some(Lang::Vi),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Vi,
            Lang::Vi => Lang::En,
        }
    }

    /// What the toggle button shows: the language you would switch to.
    pub fn toggle_caption(self) -> &'static str {
        match self {
            Lang::En => "Tiếng Việt",
            Lang::Vi => "English",
        }
    }
}

/// All labels the view needs, per language.
pub struct Labels {
    pub title: &'static str,
    pub countdown_tab: &'static str,
    pub stopwatch_tab: &'static str,
    pub minutes: &'static str,
    pub seconds: &'static str,
    pub start: &'static str,
    pub pause: &'static str,
    pub resume: &'static str,
    pub reset: &'static str,
    pub back: &'static str,
    pub times_up: &'static str,
    pub music: &'static str,
    pub fullscreen_enter: &'static str,
    pub fullscreen_exit: &'static str,
}

static EN: Labels = Labels {
    title: "Countdown Timer",
    countdown_tab: "Countdown",
    stopwatch_tab: "Stopwatch",
    minutes: "Minutes",
    seconds: "Seconds",
    start: "Start",
    pause: "Pause",
    resume: "Resume",
    reset: "Reset",
    back: "Back",
    times_up: "🎉 Time's up!",
    music: "Music",
    fullscreen_enter: "Fullscreen",
    fullscreen_exit: "Exit fullscreen",
};

static VI: Labels = Labels {
    title: "Đồng hồ đếm ngược",
    countdown_tab: "Đếm ngược",
    stopwatch_tab: "Bấm giờ",
    minutes: "Phút",
    seconds: "Giây",
    start: "Bắt đầu",
    pause: "Tạm dừng",
    resume: "Tiếp tục",
    reset: "Đặt lại",
    back: "Quay lại",
    times_up: "🎉 Hết giờ!",
    music: "Nhạc nền",
    fullscreen_enter: "Toàn màn hình",
    fullscreen_exit: "Thoát toàn màn hình",
};

pub fn labels(lang: Lang) -> &'static Labels {
    match lang {
        Lang::En => &EN,
        Lang::Vi => &VI,
    }
}

/// Read the persisted language, defaulting to English when the key is
/// missing or holds an unknown code.
pub fn load_lang() -> Lang {
    match platform::storage_get(LANG_STORAGE_KEY) {
        Some(code) => Lang::from_code(&code).unwrap_or_else(|| {
            warn!("unknown language preference {:?}, falling back to en", code);
            Lang::En
        }),
        None => Lang::En,
    }
}

pub fn store_lang(lang: Lang) {
    platform::storage_set(LANG_STORAGE_KEY, lang.code());
}
