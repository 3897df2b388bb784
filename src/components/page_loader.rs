//! Full-screen splash for the first load of a session. The layout mounts
//! it exactly once; it plays a fixed entrance sequence (brand mark in,
//! progress-line wipe, mark out, panel slides away) and reports
//! completion through `on_done`.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::motion::prefers_reduced_motion;

// logo 0.8s, line 1.0s overlapping, logo out 0.4s, panel exit 0.9s
const SPLASH_MS: u32 = 2_600;

#[derive(Properties, PartialEq)]
pub struct PageLoaderProps {
    pub on_done: Callback<()>,
}

#[function_component(PageLoader)]
pub fn page_loader(props: &PageLoaderProps) -> Html {
    let reduced = prefers_reduced_motion();

    {
        let on_done = props.on_done.clone();
        use_effect_with_deps(
            move |_| {
                let pending = if reduced {
                    // skip the splash entirely, unlock in the same tick
                    on_done.emit(());
                    None
                } else {
                    Some(Timeout::new(SPLASH_MS, move || on_done.emit(())))
                };
                // dropping the handle cancels a splash cut short by unmount
                move || drop(pending)
            },
            (),
        );
    }

    html! {
        <div class={classes!("page-loader", reduced.then(|| "no-motion"))}>
            <style>
                {r#"
                .page-loader {
                    position: fixed;
                    inset: 0;
                    z-index: 9999;
                    background: #05080f;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    animation: loader-exit 0.9s cubic-bezier(0.77, 0, 0.18, 1) 1.7s forwards;
                }
                .page-loader.no-motion {
                    display: none;
                }
                .loader-stack {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .loader-logo {
                    font-size: 2rem;
                    font-weight: 800;
                    letter-spacing: 0.35em;
                    color: #ffffff;
                    animation:
                        loader-logo-in 0.8s cubic-bezier(0.16, 1, 0.3, 1) both,
                        loader-logo-out 0.4s ease-in 1.4s forwards;
                }
                .loader-track {
                    width: 180px;
                    height: 2px;
                    background: rgba(255, 255, 255, 0.2);
                    overflow: hidden;
                }
                .loader-line {
                    height: 100%;
                    background: #ffffff;
                    transform-origin: left;
                    animation: loader-line-wipe 1s cubic-bezier(0.16, 1, 0.3, 1) 0.6s both;
                }
                @keyframes loader-logo-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes loader-logo-out {
                    to { opacity: 0; transform: translateY(-16px); }
                }
                @keyframes loader-line-wipe {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                @keyframes loader-exit {
                    to { transform: translateY(-100%); }
                }
                "#}
            </style>
            <div class="loader-stack">
                <div class="loader-logo">{"INTA"}</div>
                <div class="loader-track">
                    <div class="loader-line"></div>
                </div>
            </div>
        </div>
    }
}
