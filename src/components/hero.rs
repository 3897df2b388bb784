//! Full-viewport hero with the looping brand video and the headline that
//! rides the page-reveal stagger.

use yew::prelude::*;

use crate::reveal::use_page_reveal;

#[function_component(Hero)]
pub fn hero() -> Html {
    use_page_reveal();

    html! {
        <section class="hero" aria-label="Hero video">
            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    min-height: 520px;
                    overflow: hidden;
                    display: flex;
                    align-items: flex-end;
                    background: #05080f;
                }
                .hero video {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    pointer-events: none;
                    user-select: none;
                }
                .hero-scrim {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        to top,
                        rgba(5, 8, 15, 0.85) 0%,
                        rgba(5, 8, 15, 0.1) 55%
                    );
                }
                .hero-copy {
                    position: relative;
                    padding: 0 2rem 6rem;
                    max-width: 1100px;
                    margin: 0 auto;
                    width: 100%;
                    color: #ffffff;
                }
                .hero-copy h1 {
                    font-size: clamp(2.4rem, 6vw, 4.5rem);
                    line-height: 1.05;
                    margin-bottom: 1rem;
                }
                .hero-copy p {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 1.15rem;
                    max-width: 540px;
                }
                "#}
            </style>
            <video
                src="/assets/hero/web.mp4"
                autoplay={true}
                loop={true}
                muted={true}
                playsinline={true}
                preload="auto"
            />
            <div class="hero-scrim"></div>
            <div class="hero-copy">
                <h1 data-reveal="">{"Software that ships."}</h1>
                <p data-reveal="">{"Custom platforms, web and mobile products, and the engineering discipline to keep them fast."}</p>
            </div>
        </section>
    }
}
