//! Floating WhatsApp chat button, present on every page. Stays hidden
//! while a loader or mask still covers the page.

use yew::prelude::*;

use crate::config;
use crate::reveal::use_reveal;

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let reveal = use_reveal();
    let href = format!(
        "https://wa.me/{}?text={}",
        config::WHATSAPP_NUMBER,
        urlencoding::encode("Hi! I'd like to talk about a project.")
    );

    html! {
        <a
            class={classes!("wa-button", reveal.is_revealed.then(|| "wa-visible"))}
            href={href}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat with us on WhatsApp"
        >
            <style>
                {r#"
                .wa-button {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 800;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #25d366;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 12px 28px rgba(37, 211, 102, 0.35);
                    opacity: 0;
                    transform: translateY(16px) scale(0.9);
                    pointer-events: none;
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }
                .wa-button.wa-visible {
                    opacity: 1;
                    transform: none;
                    pointer-events: auto;
                }
                .wa-button svg {
                    width: 28px;
                    height: 28px;
                    fill: #ffffff;
                }
                @media (prefers-reduced-motion: reduce) {
                    .wa-button { transition: none; }
                }
                "#}
            </style>
            <svg viewBox="0 0 32 32" aria-hidden="true">
                <path d="M16 3C9.4 3 4 8.3 4 14.9c0 2.6 0.8 5 2.3 7L4.7 27l5.3-1.6c1.9 1 4 1.6 6 1.6 6.6 0 12-5.3 12-11.9S22.6 3 16 3zm0 21.6c-1.8 0-3.6-0.5-5.2-1.4l-0.4-0.2-3.1 0.9 0.9-3-0.2-0.4c-1.2-1.7-1.8-3.7-1.8-5.6 0-5.4 4.4-9.7 9.8-9.7s9.8 4.4 9.8 9.7-4.4 9.7-9.8 9.7zm5.4-7.3c-0.3-0.1-1.7-0.9-2-1-0.3-0.1-0.5-0.1-0.7 0.1-0.2 0.3-0.8 1-0.9 1.2-0.2 0.2-0.3 0.2-0.6 0.1-0.3-0.1-1.2-0.5-2.4-1.5-0.9-0.8-1.5-1.8-1.6-2.1-0.2-0.3 0-0.5 0.1-0.6 0.1-0.1 0.3-0.3 0.4-0.5 0.1-0.2 0.2-0.3 0.3-0.5 0.1-0.2 0-0.4 0-0.5-0.1-0.1-0.7-1.6-0.9-2.2-0.2-0.6-0.5-0.5-0.7-0.5h-0.6c-0.2 0-0.5 0.1-0.8 0.4-0.3 0.3-1 1-1 2.5s1.1 2.9 1.2 3.1c0.1 0.2 2.1 3.2 5.1 4.5 0.7 0.3 1.3 0.5 1.7 0.6 0.7 0.2 1.4 0.2 1.9 0.1 0.6-0.1 1.7-0.7 2-1.4 0.2-0.7 0.2-1.3 0.2-1.4-0.1-0.1-0.3-0.2-0.6-0.3z" />
            </svg>
        </a>
    }
}
