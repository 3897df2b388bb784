use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod layout;
mod motion;
mod reveal;
mod transition;
mod components {
    pub mod blog_updates;
    pub mod cta;
    pub mod footer;
    pub mod hero;
    pub mod mask_reveal;
    pub mod page_loader;
    pub mod portfolio_panels;
    pub mod services_grid;
    pub mod tech_stack;
    pub mod testimonials;
    pub mod whatsapp_button;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod portfolio;
    pub mod services;
    pub mod termsprivacy;
}

use layout::ClientLayout;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    portfolio::Portfolio,
    services::Services,
    termsprivacy::{SecurityPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/portfolio")]
    Portfolio,
    #[at("/contact")]
    Contact,
    #[at("/terms")]
    Terms,
    #[at("/security")]
    Security,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Portfolio => {
            info!("Rendering Portfolio page");
            html! { <Portfolio /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Security => {
            info!("Rendering Security page");
            html! { <SecurityPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 40);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 700;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(5, 8, 15, 0.85);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.25);
                }
                .nav-content {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 1.1rem 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    color: #ffffff;
                    font-weight: 800;
                    letter-spacing: 0.3em;
                    text-decoration: none;
                    font-size: 1.1rem;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.75rem;
                }
                .nav-link {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-size: 0.95rem;
                }
                .nav-link:hover { color: #7eb2ff; }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #ffffff;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right {
                        position: fixed;
                        top: 0;
                        right: 0;
                        height: 100vh;
                        width: min(70vw, 300px);
                        background: rgba(5, 8, 15, 0.97);
                        flex-direction: column;
                        justify-content: center;
                        transform: translateX(100%);
                        transition: transform 0.35s cubic-bezier(0.65, 0, 0.35, 1);
                    }
                    .nav-right.mobile-menu-open { transform: translateX(0); }
                }
                @media (prefers-reduced-motion: reduce) {
                    .top-nav, .nav-right { transition: none; }
                }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"INTA"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::About} classes="nav-link">
                            {"About"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Services} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Portfolio} classes="nav-link">
                            {"Portfolio"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ClientLayout>
                <Nav />
                <Switch<Route> render={switch} />
            </ClientLayout>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
