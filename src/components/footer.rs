//! Site footers: the full home-page footer and the compact variant the
//! inner pages use.

use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    background: #05080f;
                    color: #e7ecf5;
                    padding: 4rem 2rem 2rem;
                }
                .footer-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 3rem;
                }
                .footer-brand h3 {
                    font-size: 1.4rem;
                    letter-spacing: 0.3em;
                    margin-bottom: 1rem;
                }
                .footer-brand p {
                    color: #8a94a6;
                    max-width: 360px;
                    line-height: 1.6;
                }
                .footer-col h4 {
                    font-size: 0.85rem;
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                    color: #8a94a6;
                    margin-bottom: 1rem;
                }
                .footer-col a {
                    display: block;
                    color: #e7ecf5;
                    text-decoration: none;
                    margin-bottom: 0.6rem;
                }
                .footer-col a:hover { color: #7eb2ff; }
                .footer-meta {
                    max-width: 1100px;
                    margin: 3rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.08);
                    display: flex;
                    justify-content: space-between;
                    color: #8a94a6;
                    font-size: 0.85rem;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                @media (max-width: 768px) {
                    .footer-grid { grid-template-columns: 1fr; gap: 2rem; }
                }
                "#}
            </style>
            <div class="footer-grid">
                <div class="footer-brand">
                    <h3>{"INTA"}</h3>
                    <p>{"Technology-driven IT services: custom software, web and app development, and secure cloud integrations that solve real business problems."}</p>
                </div>
                <div class="footer-col">
                    <h4>{"Company"}</h4>
                    <Link<Route> to={Route::About}>{"About"}</Link<Route>>
                    <Link<Route> to={Route::Services}>{"Services"}</Link<Route>>
                    <Link<Route> to={Route::Portfolio}>{"Portfolio"}</Link<Route>>
                    <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
                </div>
                <div class="footer-col">
                    <h4>{"Legal"}</h4>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Security}>{"Security"}</Link<Route>>
                    <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
            </div>
            <div class="footer-meta">
                <span>{"© 2026 INTA Solutions. All rights reserved."}</span>
                <span>{"Coimbatore · Kochi · Remote"}</span>
            </div>
        </footer>
    }
}

/// Slim footer for inner pages.
#[function_component(FooterCompact)]
pub fn footer_compact() -> Html {
    html! {
        <footer class="footer-compact">
            <style>
                {r#"
                .footer-compact {
                    background: #05080f;
                    color: #8a94a6;
                    padding: 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.85rem;
                }
                .footer-compact a {
                    color: #e7ecf5;
                    text-decoration: none;
                    margin-left: 1.25rem;
                }
                .footer-compact a:hover { color: #7eb2ff; }
                "#}
            </style>
            <span>{"© 2026 INTA Solutions"}</span>
            <nav>
                <Link<Route> to={Route::Terms}>{"Terms"}</Link<Route>>
                <Link<Route> to={Route::Security}>{"Security"}</Link<Route>>
                <Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>>
            </nav>
        </footer>
    }
}
