//! Full services page: long-form cards from the backend, scroll-revealed.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::footer::FooterCompact;
use crate::components::services_grid::service_icon;
use crate::content::{self, ServiceItem};
use crate::motion::use_scroll_reveal;
use crate::reveal::{use_page_reveal, use_reveal};

#[function_component(Services)]
pub fn services() -> Html {
    use_page_reveal();
    let reveal = use_reveal();
    let services = use_state(Vec::<ServiceItem>::new);
    let loading = use_state(|| true);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

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

    use_scroll_reveal(".service-row", reveal.is_revealed && !*loading);

    html! {
        <>
        <main class="services-page">
            <style>
                {r#"
                .services-page {
                    background: #ffffff;
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .services-hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem 3rem;
                    text-align: center;
                }
                .services-hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    color: #0b2a5f;
                    margin-bottom: 1.25rem;
                }
                .services-hero p {
                    color: #475569;
                    font-size: 1.1rem;
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .service-rows {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 2rem 2rem 5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .service-row {
                    display: grid;
                    grid-template-columns: 64px 1fr;
                    gap: 1.5rem;
                    border: 1px solid #e9eef6;
                    border-radius: 20px;
                    padding: 2rem;
                    background: #fbfcff;
                    opacity: 0;
                    transform: translateY(28px);
                    transition: opacity 0.7s ease, transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .service-row.in-view { opacity: 1; transform: none; }
                .service-row svg { width: 40px; height: 40px; color: #1f6fe6; }
                .service-row h2 { color: #0f172a; margin-bottom: 0.5rem; font-size: 1.35rem; }
                .service-row .service-short { color: #0b2a5f; font-weight: 600; margin-bottom: 0.75rem; }
                .service-row .service-long { color: #475569; line-height: 1.7; }
                @media (max-width: 640px) {
                    .service-row { grid-template-columns: 1fr; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .service-row { transition: none; }
                }
                "#}
            </style>
            <section class="services-hero">
                <h1 data-reveal="">{"Services"}</h1>
                <p data-reveal="">{"From first workshop to production support: the full path from idea to running software."}</p>
            </section>
            <section class="service-rows">
                { for services.iter().map(|service| html! {
                    <article class="service-row" key={service.id.to_string()} id={service.slug.clone()}>
                        <div>{ service_icon(&service.icon_key) }</div>
                        <div>
                            <h2>{ &service.title }</h2>
                            <p class="service-short">{ &service.short_description }</p>
                            if !service.long_description.is_empty() {
                                <p class="service-long">{ &service.long_description }</p>
                            }
                        </div>
                    </article>
                }) }
            </section>
            <Cta />
        </main>
        <FooterCompact />
        </>
    }
}
