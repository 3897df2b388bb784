//! Auto-scrolling marquee of the stack we build with. The track is
//! rendered twice so the CSS loop is seamless; reduced motion stops the
//! loop and lets the row scroll natively.

use yew::prelude::*;

const STACK: [&str; 10] = [
    "Rust", "TypeScript", "React", "Django", "PostgreSQL", "Kubernetes", "AWS", "Flutter",
    "Figma", "GSAP",
];

#[function_component(TechStack)]
pub fn tech_stack() -> Html {
    let row = |aria_hidden: bool| {
        html! {
            <div class="marquee-track" aria-hidden={aria_hidden.then(|| "true")}>
                { for STACK.iter().map(|name| html! {
                    <span class="marquee-item">{ *name }</span>
                }) }
            </div>
        }
    };

    html! {
        <section class="tech-stack">
            <style>
                {r#"
                .tech-stack {
                    background: #0b1120;
                    padding: 3.5rem 0;
                    overflow: hidden;
                }
                .marquee {
                    display: flex;
                    width: max-content;
                    animation: marquee-scroll 28s linear infinite;
                }
                .marquee:hover { animation-play-state: paused; }
                .marquee-track {
                    display: flex;
                    align-items: center;
                    gap: 3.5rem;
                    padding-right: 3.5rem;
                }
                .marquee-item {
                    color: rgba(255, 255, 255, 0.55);
                    font-size: 1.5rem;
                    font-weight: 600;
                    letter-spacing: 0.06em;
                    white-space: nowrap;
                }
                @keyframes marquee-scroll {
                    from { transform: translateX(0); }
                    to { transform: translateX(-50%); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .marquee {
                        animation: none;
                        width: auto;
                        overflow-x: auto;
                    }
                }
                "#}
            </style>
            <div class="marquee">
                { row(false) }
                { row(true) }
            </div>
        </section>
    }
}
