//! Featured-work panels for the home page. Backend projects (bundled
//! fallback on failure), one expanded panel at a time.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlImageElement, MouseEvent};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::content::{self, Project};
use crate::reveal::use_reveal;
use crate::Route;

fn swap_to_placeholder(event: Event) {
    if let Some(img) = event.target_dyn_into::<HtmlImageElement>() {
        if img.src() != content::PLACEHOLDER_IMAGE {
            img.set_src(content::PLACEHOLDER_IMAGE);
        }
    }
}

#[function_component(PortfolioPanels)]
pub fn portfolio_panels() -> Html {
    let reveal = use_reveal();
    let projects = use_state(Vec::<Project>::new);
    let active = use_state(|| 0usize);

    {
        let projects = projects.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match content::fetch_projects().await {
                        Ok(list) if !list.is_empty() => projects.set(content::active_sorted(list)),
                        Ok(_) => projects.set(content::active_sorted(content::fallback_projects())),
                        Err(err) => {
                            log::warn!("projects fetch failed: {:?}", err);
                            projects.set(content::active_sorted(content::fallback_projects()));
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <section class={classes!("portfolio-panels", reveal.is_revealed.then(|| "panels-live"))}>
            <style>
                {r#"
                .portfolio-panels {
                    background: #05080f;
                    padding: 5rem 2rem;
                    color: #ffffff;
                }
                .panels-inner { max-width: 1100px; margin: 0 auto; }
                .panels-inner > p {
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.12em;
                    color: #8a94a6;
                    text-transform: uppercase;
                }
                .panels-inner > h2 {
                    font-size: clamp(1.8rem, 3.5vw, 2.8rem);
                    margin: 0.5rem 0 2.5rem;
                }
                .panels-row {
                    display: flex;
                    gap: 1rem;
                    min-height: 420px;
                }
                .panel {
                    position: relative;
                    flex: 1;
                    border-radius: 20px;
                    overflow: hidden;
                    cursor: pointer;
                    transition: flex 0.7s cubic-bezier(0.65, 0, 0.35, 1);
                    opacity: 0;
                    transform: translateY(32px);
                }
                .panels-live .panel {
                    opacity: 1;
                    transform: none;
                    transition: flex 0.7s cubic-bezier(0.65, 0, 0.35, 1),
                                opacity 0.8s ease,
                                transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .panels-live .panel:nth-child(2) { transition-delay: 0.1s; }
                .panels-live .panel:nth-child(3) { transition-delay: 0.2s; }
                .panel.panel-open { flex: 2.6; }
                .panel img {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                .panel-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(5, 8, 15, 0.9), transparent 65%);
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1.5rem;
                }
                .panel-overlay h3 { font-size: 1.3rem; }
                .panel-summary {
                    color: #c6cfdd;
                    font-size: 0.9rem;
                    line-height: 1.5;
                    max-height: 0;
                    overflow: hidden;
                    transition: max-height 0.5s ease 0.15s;
                }
                .panel-open .panel-summary { max-height: 8em; }
                .panel-tags { display: flex; gap: 0.5rem; margin-top: 0.75rem; flex-wrap: wrap; }
                .panel-tags span {
                    font-size: 0.7rem;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 999px;
                    padding: 0.2rem 0.6rem;
                    color: #c6cfdd;
                }
                .panels-more { margin-top: 2rem; }
                .panels-more a { color: #7eb2ff; text-decoration: none; font-weight: 600; }
                @media (max-width: 900px) {
                    .panels-row { flex-direction: column; }
                    .panel { min-height: 220px; }
                    .panel-summary { max-height: none; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .panel, .panels-live .panel, .panel-summary { transition: none; }
                    .portfolio-panels .panel { opacity: 1; transform: none; }
                }
                "#}
            </style>
            <div class="panels-inner">
                <p>{"Selected work"}</p>
                <h2>{"Products we've shipped"}</h2>
                <div class="panels-row">
                    { for projects.iter().take(3).enumerate().map(|(i, project)| {
                        let hero = content::resolve_media_url(
                            config::get_backend_url(),
                            project.hero.as_deref(),
                        );
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_: MouseEvent| active.set(i))
                        };
                        html! {
                            <div
                                class={classes!("panel", (i == *active).then(|| "panel-open"))}
                                key={project.id.to_string()}
                                {onclick}
                            >
                                <img
                                    src={hero}
                                    alt={project.title.clone()}
                                    loading="lazy"
                                    onerror={Callback::from(swap_to_placeholder)}
                                />
                                <div class="panel-overlay">
                                    <h3>{ &project.title }</h3>
                                    <p class="panel-summary">{ &project.summary }</p>
                                    <div class="panel-tags">
                                        { for project.tags.iter().map(|tag| html! {
                                            <span key={tag.slug.clone()}>{ &tag.name }</span>
                                        }) }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
                <p class="panels-more">
                    <Link<Route> to={Route::Portfolio}>{"Browse the full portfolio →"}</Link<Route>>
                </p>
            </div>
        </section>
    }
}
