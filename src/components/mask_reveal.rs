//! Route-change wipe. The layout mounts one per navigation, keyed by the
//! destination path so a rapid second navigation remounts (and restarts)
//! it. Completion reports the key it was mounted for; the layout ignores
//! completions from a mask that was cancelled by a newer navigation.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::prefers_reduced_motion;

const WIPE_MS: u32 = 1_600;

#[derive(Properties, PartialEq)]
pub struct MaskRevealProps {
    pub trigger_key: String,
    pub on_complete: Callback<String>,
}

#[function_component(MaskReveal)]
pub fn mask_reveal(props: &MaskRevealProps) -> Html {
    let reduced = prefers_reduced_motion();

    {
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |trigger: &String| {
                let trigger = trigger.clone();
                let pending = if reduced {
                    on_complete.emit(trigger);
                    None
                } else {
                    Some(Timeout::new(WIPE_MS, move || on_complete.emit(trigger)))
                };
                move || drop(pending)
            },
            props.trigger_key.clone(),
        );
    }

    if reduced {
        return html! {};
    }

    html! {
        <svg
            class="mask-reveal"
            viewBox="0 0 1440 900"
            preserveAspectRatio="none"
        >
            <style>
                {r#"
                .mask-reveal {
                    position: fixed;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    z-index: 9000;
                    pointer-events: none;
                    animation: mask-wipe 1.6s cubic-bezier(0.65, 0, 0.35, 1) forwards;
                }
                @keyframes mask-wipe {
                    from { transform: translateY(0); }
                    to { transform: translateY(-100%); }
                }
                "#}
            </style>
            <rect width="1440" height="900" fill="#05080f" />
            <path
                d="M0,0 H1440 V720 C1080,860 360,860 0,720 Z"
                fill="#05080f"
            />
        </svg>
    }
}
