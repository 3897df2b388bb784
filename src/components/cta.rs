//! Call-to-action band with the "magnetic" primary button used across
//! the site. The magnet effect is pointer-tracking only; it is skipped
//! entirely when reduced motion is preferred.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;
use yew_router::components::Link;
use yew_router::prelude::*;

use crate::motion::use_reduced_motion;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct MagneticButtonProps {
    pub label: String,
    pub to: Route,
}

/// Button that leans toward the pointer inside its hover zone.
#[function_component(MagneticButton)]
pub fn magnetic_button(props: &MagneticButtonProps) -> Html {
    let reduced = use_reduced_motion();

    let on_pointer_move = {
        Callback::from(move |event: PointerEvent| {
            if reduced {
                return;
            }
            let Some(target) = event
                .current_target()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let rect = target.get_bounding_client_rect();
            let dx = event.client_x() as f64 - (rect.left() + rect.width() / 2.0);
            let dy = event.client_y() as f64 - (rect.top() + rect.height() / 2.0);
            let _ = target.style().set_property(
                "transform",
                &format!("translate({:.1}px, {:.1}px)", dx * 0.22, dy * 0.22),
            );
        })
    };

    let on_pointer_leave = Callback::from(move |event: PointerEvent| {
        if let Some(target) = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok())
        {
            let _ = target.style().set_property("transform", "translate(0, 0)");
        }
    });

    html! {
        <div
            class="magnetic-wrap"
            onpointermove={on_pointer_move}
            onpointerleave={on_pointer_leave}
        >
            <Link<Route> to={props.to.clone()} classes="magnetic-button">
                { &props.label }
            </Link<Route>>
        </div>
    }
}

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section class="cta-band">
            <style>
                {r#"
                .cta-band {
                    background: linear-gradient(120deg, #0b2a5f, #123f8f);
                    color: #ffffff;
                    text-align: center;
                    padding: 5rem 2rem;
                }
                .cta-band h2 {
                    font-size: clamp(1.8rem, 4vw, 3rem);
                    margin-bottom: 1rem;
                }
                .cta-band p {
                    color: rgba(255, 255, 255, 0.75);
                    max-width: 540px;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .magnetic-wrap {
                    display: inline-block;
                    padding: 1.25rem;
                    transition: transform 0.25s cubic-bezier(0.16, 1, 0.3, 1);
                    will-change: transform;
                }
                .magnetic-button {
                    display: inline-block;
                    padding: 0.9rem 2.4rem;
                    border-radius: 999px;
                    background: #ffffff;
                    color: #0b2a5f;
                    font-weight: 700;
                    text-decoration: none;
                }
                @media (prefers-reduced-motion: reduce) {
                    .magnetic-wrap { transition: none; }
                }
                "#}
            </style>
            <h2>{"Have a product in mind?"}</h2>
            <p>{"Tell us what you're building. We'll bring the architecture, the design, and the delivery."}</p>
            <MagneticButton label={"Start a project"} to={Route::Contact} />
        </section>
    }
}
