//! Services grid for the home page: backend-driven cards with a
//! scroll-triggered stagger once the reveal gate opens.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::content::{self, ServiceItem};
use crate::motion::use_scroll_reveal;
use crate::reveal::use_reveal;

/// Icon for a backend `icon_key`. Unknown keys get the generic spark.
pub fn service_icon(icon_key: &str) -> Html {
    let d = match icon_key {
        "code" => "M8 6l-6 6 6 6M16 6l6 6-6 6",
        "ux" => "M4 4h16v12H4zM9 20h6M12 16v4",
        "mobile" => "M8 2h8v20H8zM11 18h2",
        "video" => "M3 6h13v12H3zM16 10l5-3v10l-5-3",
        "marketing" => "M3 11l14-6v14L3 13v-2zM17 8a4 4 0 010 8",
        "seo" => "M10 4a6 6 0 104.47 10.03L21 20.5M10 7v6M7 10h6",
        _ => "M12 2l2.4 7.6H22l-6.2 4.5 2.4 7.4-6.2-4.6-6.2 4.6 2.4-7.4L2 9.6h7.6z",
    };
    html! {
        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.6"
            stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            <path d={d} />
        </svg>
    }
}

#[function_component(ServicesGrid)]
pub fn services_grid() -> Html {
    let reveal = use_reveal();
    let services = use_state(Vec::<ServiceItem>::new);
    let loading = use_state(|| true);

    {
        let services = services.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match content::fetch_services().await {
                        Ok(list) if !list.is_empty() => services.set(list),
                        Ok(_) => services.set(content::fallback_services()),
                        Err(err) => {
                            log::warn!("services fetch failed: {:?}", err);
                            services.set(content::fallback_services());
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    // register observers only after data is in the DOM and the gate opened
    use_scroll_reveal(".svc-card", reveal.is_revealed && !*loading);

    html! {
        <section class="services-grid">
            <style>
                {r#"
                .services-grid {
                    background: #ffffff;
                    padding: 5rem 2rem;
                }
                .services-inner { max-width: 1100px; margin: 0 auto; }
                .services-inner > p {
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.12em;
                    color: #64748b;
                    text-transform: uppercase;
                }
                .services-inner > h2 {
                    font-size: clamp(1.8rem, 3.5vw, 2.8rem);
                    color: #0b2a5f;
                    margin: 0.5rem 0 2.5rem;
                }
                .svc-cards {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .svc-card {
                    border: 1px solid #e9eef6;
                    border-radius: 20px;
                    padding: 1.75rem;
                    background: #fbfcff;
                    opacity: 0;
                    transform: translateY(28px);
                    transition: opacity 0.7s cubic-bezier(0.16, 1, 0.3, 1),
                                transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .svc-card.in-view { opacity: 1; transform: none; }
                .svc-card:nth-child(2).in-view { transition-delay: 0.08s; }
                .svc-card:nth-child(3).in-view { transition-delay: 0.16s; }
                .svc-card:nth-child(4).in-view { transition-delay: 0.24s; }
                .svc-card:nth-child(5).in-view { transition-delay: 0.32s; }
                .svc-card svg {
                    width: 34px;
                    height: 34px;
                    color: #1f6fe6;
                    margin-bottom: 1rem;
                }
                .svc-card h3 { color: #0f172a; margin-bottom: 0.5rem; }
                .svc-card p { color: #475569; line-height: 1.6; font-size: 0.95rem; }
                @media (prefers-reduced-motion: reduce) {
                    .svc-card { transition: none; }
                }
                "#}
            </style>
            <div class="services-inner">
                <p>{"What we do"}</p>
                <h2>{"Services built around your product"}</h2>
                <div class="svc-cards">
                    { for services.iter().map(|service| html! {
                        <article class="svc-card" key={service.id.to_string()}>
                            { service_icon(&service.icon_key) }
                            <h3>{ &service.title }</h3>
                            <p>{ &service.short_description }</p>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
