//! Pure Yew view components for the timer face.
//!
//! Stateless components rendering from props; all behavior arrives through
//! callbacks so they stay trivial to reuse.

use flip_timer::Mode;
use yew::prelude::*;

/// Digit enter-animation variants. Each maps to a CSS class defined in
/// `index.html`; the active one is picked in `config::DIGIT_EFFECT`.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitEffect {
    Fade,
    SlideUp,
    SlideDown,
    Scale,
    Flip,
    Bounce,
    Rotate,
    Elastic,
}

impl DigitEffect {
    pub fn css_class(self) -> &'static str {
        match self {
            DigitEffect::Fade => "effect-fade",
            DigitEffect::SlideUp => "effect-slide-up",
            DigitEffect::SlideDown => "effect-slide-down",
            DigitEffect::Scale => "effect-scale",
            DigitEffect::Flip => "effect-flip",
            DigitEffect::Bounce => "effect-bounce",
            DigitEffect::Rotate => "effect-rotate",
            DigitEffect::Elastic => "effect-elastic",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DigitBoxProps {
    pub value: u32,
    pub label: AttrValue,
    pub effect: DigitEffect,
}

/// One zero-padded clock field.
///
/// The box is the sole, keyed child of its window so a value change replaces
/// the node instead of patching its text, replaying the enter animation.
#[function_component(DigitBox)]
pub fn digit_box(props: &DigitBoxProps) -> Html {
    html! {
        <div class="time-unit">
            <div class="digit-window">
                <div
                    key={props.value.to_string()}
                    class={classes!("digit-box", props.effect.css_class())}
                >
                    { format!("{:02}", props.value) }
                </div>
            </div>
            <span class="label">{ props.label.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimerDisplayProps {
    pub minutes: u32,
    pub seconds: u32,
    pub minutes_label: AttrValue,
    pub seconds_label: AttrValue,
    pub effect: DigitEffect,
}

#[function_component(TimerDisplay)]
pub fn timer_display(props: &TimerDisplayProps) -> Html {
    html! {
        <div class="timer-display">
            <div class="time-units">
                <DigitBox
                    value={props.minutes}
                    label={props.minutes_label.clone()}
                    effect={props.effect}
                />
                <span class="separator">{ ":" }</span>
                <DigitBox
                    value={props.seconds}
                    label={props.seconds_label.clone()}
                    effect={props.effect}
                />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModeTabsProps {
    pub mode: Mode,
    pub countdown_label: AttrValue,
    pub stopwatch_label: AttrValue,
    pub onswitch: Callback<Mode>,
}

#[function_component(ModeTabs)]
pub fn mode_tabs(props: &ModeTabsProps) -> Html {
    let tab = |target: Mode, label: &AttrValue| {
        let onswitch = props.onswitch.clone();
        let active = props.mode == target;
        html! {
            <button
                class={classes!("tab", active.then_some("active"))}
                onclick={Callback::from(move |_| onswitch.emit(target))}
            >
                { label.clone() }
            </button>
        }
    };
    html! {
        <div class="mode-tabs">
            { tab(Mode::Countdown, &props.countdown_label) }
            { tab(Mode::Stopwatch, &props.stopwatch_label) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CompletionBannerProps {
    pub message: AttrValue,
}

#[function_component(CompletionBanner)]
pub fn completion_banner(props: &CompletionBannerProps) -> Html {
    html! {
        <div class="completion-message">{ props.message.clone() }</div>
    }
}
