use yew::prelude::*;

use crate::components::blog_updates::BlogUpdates;
use crate::components::cta::Cta;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::portfolio_panels::PortfolioPanels;
use crate::components::services_grid::ServicesGrid;
use crate::components::tech_stack::TechStack;
use crate::components::testimonials::TestimonialSlider;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <main>
            <section>
                <Hero />
            </section>
            <section>
                <ServicesGrid />
            </section>
            <section>
                <PortfolioPanels />
            </section>
            <section>
                <TechStack />
            </section>
            <section>
                <TestimonialSlider />
            </section>
            <section>
                <BlogUpdates />
            </section>
            <section>
                <Cta />
            </section>
            <Footer />
        </main>
    }
}
