//! About page: staggered hero, the numbers strip, and the values grid
//! that reveals as it scrolls into view.

use yew::prelude::*;

use crate::components::cta::Cta;
use crate::components::footer::FooterCompact;
use crate::reveal::{use_page_reveal, use_reveal};
use crate::motion::use_scroll_reveal;

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "9+", label: "Years building software" },
    Stat { value: "120", label: "Projects delivered" },
    Stat { value: "40+", label: "Active clients" },
    Stat { value: "14", label: "Engineers & designers" },
];

struct Value {
    title: &'static str,
    body: &'static str,
}

const VALUES: [Value; 4] = [
    Value {
        title: "Understand first",
        body: "Every engagement starts with the client's workflow, not our stack. \
               The right solution falls out of the right questions.",
    },
    Value {
        title: "Clean architecture",
        body: "We optimise for the team that maintains the system in year three, \
               not the demo in week three.",
    },
    Value {
        title: "Performance is a feature",
        body: "Budgets for load time and interaction latency are set at kickoff \
               and measured on every release.",
    },
    Value {
        title: "Long-term partnership",
        body: "Most of our work is repeat work. We ship, observe, and keep \
               improving with you.",
    },
];

#[function_component(About)]
pub fn about() -> Html {
    use_page_reveal();
    let reveal = use_reveal();
    use_scroll_reveal(".value-card, .stat-block", reveal.is_revealed);

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

    html! {
        <>
        <main class="about-page">
            <style>
                {r#"
                .about-page {
                    background: #f8f7f4;
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .about-hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                }
                .about-hero h1 {
                    font-size: clamp(2.2rem, 5vw, 3.8rem);
                    color: #0b2a5f;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }
                .about-hero p {
                    color: #475569;
                    font-size: 1.15rem;
                    line-height: 1.7;
                    max-width: 640px;
                    margin: 0 auto;
                }
                .about-stats {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 2rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 1.5rem;
                }
                .stat-block {
                    background: #ffffff;
                    border: 1px solid #e9eef6;
                    border-radius: 18px;
                    padding: 1.75rem;
                    text-align: center;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease, transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .stat-block.in-view { opacity: 1; transform: none; }
                .stat-block strong {
                    display: block;
                    font-size: 2.2rem;
                    color: #0b2a5f;
                }
                .stat-block span { color: #64748b; font-size: 0.9rem; }
                .about-values {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 3rem 2rem 5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                }
                .value-card {
                    background: #ffffff;
                    border: 1px solid #e9eef6;
                    border-radius: 18px;
                    padding: 2rem;
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease, transform 0.7s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .value-card.in-view { opacity: 1; transform: none; }
                .value-card h3 { color: #0f172a; margin-bottom: 0.75rem; }
                .value-card p { color: #475569; line-height: 1.65; }
                @media (prefers-reduced-motion: reduce) {
                    .stat-block, .value-card { transition: none; }
                }
                "#}
            </style>
            <section class="about-hero">
                <h1 data-reveal="">{"Technology should make business simpler."}</h1>
                <p data-reveal="">{"INTA Solutions is a technology-driven IT services company. We build reliable, scalable digital products: custom software, web and mobile applications, backend systems and secure cloud integrations."}</p>
            </section>
            <section class="about-stats">
                { for STATS.iter().map(|stat| html! {
                    <div class="stat-block" key={stat.label}>
                        <strong>{ stat.value }</strong>
                        <span>{ stat.label }</span>
                    </div>
                }) }
            </section>
            <section class="about-values">
                { for VALUES.iter().map(|value| html! {
                    <article class="value-card" key={value.title}>
                        <h3>{ value.title }</h3>
                        <p>{ value.body }</p>
                    </article>
                }) }
            </section>
            <Cta />
        </main>
        <FooterCompact />
        </>
    }
}
