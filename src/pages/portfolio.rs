//! Portfolio page: featured projects up top, then the gallery grid. The
//! two collections load independently and each falls back on its own.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlImageElement};
use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::footer::FooterCompact;
use crate::config;
use crate::content::{self, GalleryItem, Project};
use crate::motion::use_scroll_reveal;
use crate::reveal::{use_page_reveal, use_reveal};

fn swap_to_placeholder(event: Event) {
    if let Some(img) = event.target_dyn_into::<HtmlImageElement>() {
        if img.src() != content::PLACEHOLDER_IMAGE {
            img.set_src(content::PLACEHOLDER_IMAGE);
        }
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    use_page_reveal();
    let reveal = use_reveal();
    let projects = use_state(Vec::<Project>::new);
    let gallery = use_state(Vec::<GalleryItem>::new);
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
        let projects = projects.clone();
        let gallery = gallery.clone();
        let loading = loading.clone();
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
                    match content::fetch_gallery().await {
                        Ok(list) if !list.is_empty() => gallery.set(list),
                        Ok(_) => gallery.set(content::fallback_gallery()),
                        Err(err) => {
                            log::warn!("gallery fetch failed: {:?}", err);
                            gallery.set(content::fallback_gallery());
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    use_scroll_reveal(".project-card, .gallery-tile", reveal.is_revealed && !*loading);

    html! {
        <>
        <main class="portfolio-page">
            <style>
                {r#"
                .portfolio-page {
                    background: #05080f;
                    color: #ffffff;
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .portfolio-hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem 3rem;
                    text-align: center;
                }
                .portfolio-hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    margin-bottom: 1.25rem;
                }
                .portfolio-hero p {
                    color: #8a94a6;
                    font-size: 1.1rem;
                    max-width: 560px;
                    margin: 0 auto;
                    line-height: 1.7;
                }
                .project-list {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .project-card {
                    display: grid;
                    grid-template-columns: 5fr 4fr;
                    gap: 2rem;
                    background: #0b1120;
                    border: 1px solid rgba(255, 255, 255, 0.06);
                    border-radius: 24px;
                    overflow: hidden;
                    opacity: 0;
                    transform: translateY(32px);
                    transition: opacity 0.8s ease, transform 0.8s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .project-card.in-view { opacity: 1; transform: none; }
                .project-card img { width: 100%; height: 100%; min-height: 260px; object-fit: cover; }
                .project-card-body { padding: 2rem; display: flex; flex-direction: column; gap: 0.9rem; }
                .project-card-body h2 { font-size: 1.5rem; }
                .project-card-body p { color: #c6cfdd; line-height: 1.65; }
                .project-card-tags { display: flex; gap: 0.5rem; flex-wrap: wrap; }
                .project-card-tags span {
                    font-size: 0.72rem;
                    border: 1px solid rgba(255, 255, 255, 0.22);
                    border-radius: 999px;
                    padding: 0.2rem 0.65rem;
                    color: #c6cfdd;
                }
                .project-card-body a { color: #7eb2ff; text-decoration: none; font-weight: 600; }
                .gallery-heading {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 2rem 0;
                }
                .gallery-heading h2 { font-size: 1.8rem; }
                .gallery-grid {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 1.5rem 2rem 5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1.25rem;
                }
                .gallery-tile {
                    position: relative;
                    border-radius: 16px;
                    overflow: hidden;
                    aspect-ratio: 4 / 3;
                    background: #0b1120;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease, transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .gallery-tile.in-view { opacity: 1; transform: none; }
                .gallery-tile img { width: 100%; height: 100%; object-fit: cover; }
                .gallery-tile figcaption {
                    position: absolute;
                    inset-inline: 0;
                    bottom: 0;
                    padding: 0.75rem 1rem;
                    background: linear-gradient(to top, rgba(5, 8, 15, 0.9), transparent);
                    font-size: 0.85rem;
                }
                .gallery-tile figcaption span { color: #8a94a6; margin-left: 0.5rem; font-size: 0.75rem; }
                @media (max-width: 800px) {
                    .project-card { grid-template-columns: 1fr; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .project-card, .gallery-tile { transition: none; }
                }
                "#}
            </style>
            <section class="portfolio-hero">
                <h1 data-reveal="">{"Portfolio"}</h1>
                <p data-reveal="">{"A selection of platforms, products and brand work we've delivered."}</p>
            </section>
            <section class="project-list">
                { for projects.iter().map(|project| {
                    let hero = content::resolve_media_url(
                        config::get_backend_url(),
                        project.hero.as_deref(),
                    );
                    html! {
                        <article class="project-card" key={project.id.to_string()}>
                            <img
                                src={hero}
                                alt={project.title.clone()}
                                loading="lazy"
                                onerror={Callback::from(swap_to_placeholder)}
                            />
                            <div class="project-card-body">
                                <h2>{ &project.title }</h2>
                                <p>{ &project.summary }</p>
                                <div class="project-card-tags">
                                    { for project.tags.iter().map(|tag| html! {
                                        <span key={tag.slug.clone()}>{ &tag.name }</span>
                                    }) }
                                </div>
                                if let Some(url) = &project.external_url {
                                    <a href={url.clone()} target="_blank" rel="noopener noreferrer">
                                        {"Visit project →"}
                                    </a>
                                }
                            </div>
                        </article>
                    }
                }) }
            </section>
            <section>
                <div class="gallery-heading">
                    <h2>{"More from the studio"}</h2>
                </div>
                <div class="gallery-grid">
                    { for gallery.iter().map(|item| {
                        let image = content::resolve_media_url(
                            config::get_backend_url(),
                            item.image.as_deref(),
                        );
                        html! {
                            <figure class="gallery-tile" key={item.id.to_string()}>
                                <img
                                    src={image}
                                    alt={item.title.clone()}
                                    loading="lazy"
                                    onerror={Callback::from(swap_to_placeholder)}
                                />
                                <figcaption>
                                    { &item.title }
                                    if let Some(tag) = &item.tag {
                                        <span>{ tag }</span>
                                    }
                                </figcaption>
                            </figure>
                        }
                    }) }
                </div>
            </section>
            <Cta />
        </main>
        <FooterCompact />
        </>
    }
}
