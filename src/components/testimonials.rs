//! Testimonial slider: autoplay with a progress sweep, manual prev/next
//! and dots. Data comes from the backend with a bundled fallback.

use wasm_bindgen_futures::spawn_local;
use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::content::{self, Testimonial};
use crate::motion::use_reduced_motion;
use crate::reveal::use_reveal;

const AUTOPLAY_MS: u32 = 5_200;

#[function_component(TestimonialSlider)]
pub fn testimonial_slider() -> Html {
    let reveal = use_reveal();
    let reduced = use_reduced_motion();
    let items = use_state(Vec::<Testimonial>::new);
    let active = use_state(|| 0usize);
    let paused = use_state(|| false);

    {
        let items = items.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match content::fetch_testimonials().await {
                        Ok(list) if !list.is_empty() => items.set(list),
                        Ok(_) => items.set(content::fallback_testimonials()),
                        Err(err) => {
                            log::warn!("testimonials fetch failed: {:?}", err);
                            items.set(content::fallback_testimonials());
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    // autoplay only once revealed, and never under reduced motion or
    // while the pointer rests on the card
    let autoplay_ms = if reveal.is_revealed && !reduced && !*paused && items.len() > 1 {
        AUTOPLAY_MS
    } else {
        0
    };
    {
        let active = active.clone();
        let len = items.len();
        use_interval(
            move || {
                if len > 0 {
                    active.set((*active + 1) % len);
                }
            },
            autoplay_ms,
        );
    }

    let go = {
        let active = active.clone();
        let len = items.len();
        Callback::from(move |delta: isize| {
            if len > 0 {
                let next = (*active as isize + delta).rem_euclid(len as isize) as usize;
                active.set(next);
            }
        })
    };
    let on_prev = { let go = go.clone(); Callback::from(move |_: MouseEvent| go.emit(-1)) };
    let on_next = { let go = go.clone(); Callback::from(move |_: MouseEvent| go.emit(1)) };
    let on_enter = { let paused = paused.clone(); Callback::from(move |_: PointerEvent| paused.set(true)) };
    let on_leave = { let paused = paused.clone(); Callback::from(move |_: PointerEvent| paused.set(false)) };

    let current = items.get(*active);

    html! {
        <section
            class="testimonials"
            onpointerenter={on_enter}
            onpointerleave={on_leave}
        >
            <style>
                {r#"
                .testimonials {
                    background: #fbfaf8;
                    padding: 5rem 2rem;
                }
                .testimonials-inner {
                    max-width: 760px;
                    margin: 0 auto;
                    text-align: center;
                }
                .testimonials-label {
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.12em;
                    color: #64748b;
                    text-transform: uppercase;
                }
                .testimonial-quote {
                    font-size: clamp(1.2rem, 2.4vw, 1.7rem);
                    color: #0b2a5f;
                    line-height: 1.5;
                    margin: 1.5rem 0;
                    min-height: 5.5em;
                    animation: testimonial-in 0.6s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .testimonial-author {
                    color: #475569;
                    font-size: 0.95rem;
                }
                .testimonial-author strong { color: #0f172a; }
                .testimonial-controls {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }
                .testimonial-controls button {
                    border: 1px solid #e2e8f0;
                    background: #ffffff;
                    border-radius: 8px;
                    width: 38px;
                    height: 38px;
                    font-size: 1.1rem;
                    cursor: pointer;
                    color: #0b2a5f;
                }
                .testimonial-dots {
                    display: flex;
                    gap: 0.5rem;
                }
                .testimonial-dots button {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #cbd5e1;
                    padding: 0;
                }
                .testimonial-dots button.dot-active { background: #0b2a5f; }
                .testimonial-progress {
                    height: 3px;
                    background: #e2e8f0;
                    border-radius: 999px;
                    overflow: hidden;
                    margin-top: 2rem;
                }
                .testimonial-progress div {
                    height: 100%;
                    background: linear-gradient(90deg, #0b2a5f, #1f6fe6);
                    animation: testimonial-progress 5.2s linear;
                }
                @keyframes testimonial-in {
                    from { opacity: 0; transform: translateY(18px); }
                    to { opacity: 1; transform: none; }
                }
                @keyframes testimonial-progress {
                    from { width: 0; }
                    to { width: 100%; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .testimonial-quote { animation: none; }
                    .testimonial-progress div { animation: none; width: 0; }
                }
                "#}
            </style>
            <div class="testimonials-inner">
                <p class="testimonials-label">{"What clients say"}</p>
                {
                    if let Some(t) = current {
                        html! {
                            <>
                                <blockquote class="testimonial-quote" key={t.id.to_string()}>
                                    { format!("\u{201c}{}\u{201d}", t.quote) }
                                </blockquote>
                                <p class="testimonial-author">
                                    <strong>{ &t.name }</strong>
                                    {
                                        match (&t.role, &t.company) {
                                            (Some(role), Some(company)) => format!(" — {}, {}", role, company),
                                            (Some(role), None) => format!(" — {}", role),
                                            (None, Some(company)) => format!(" — {}", company),
                                            (None, None) => String::new(),
                                        }
                                    }
                                </p>
                            </>
                        }
                    } else {
                        html! { <blockquote class="testimonial-quote">{"…"}</blockquote> }
                    }
                }
                <div class="testimonial-controls">
                    <button onclick={on_prev} aria-label="Previous testimonial">{"‹"}</button>
                    <div class="testimonial-dots">
                        { for items.iter().enumerate().map(|(i, t)| {
                            let active_handle = active.clone();
                            let onclick = Callback::from(move |_: MouseEvent| active_handle.set(i));
                            html! {
                                <button
                                    key={t.id.to_string()}
                                    class={classes!((i == *active).then(|| "dot-active"))}
                                    {onclick}
                                    aria-label={format!("Show testimonial {}", i + 1)}
                                />
                            }
                        }) }
                    </div>
                    <button onclick={on_next} aria-label="Next testimonial">{"›"}</button>
                </div>
                if autoplay_ms > 0 {
                    <div class="testimonial-progress">
                        <div key={active.to_string()}></div>
                    </div>
                }
            </div>
        </section>
    }
}
