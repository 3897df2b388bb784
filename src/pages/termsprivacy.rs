use yew::prelude::*;

use crate::components::footer::FooterCompact;

const LEGAL_CSS: &str = r#"
.legal-page {
    background: #f8f7f4;
    padding-top: 74px;
    min-height: 100vh;
}
.legal-inner {
    max-width: 760px;
    margin: 0 auto;
    padding: 5rem 2rem 6rem;
}
.legal-inner h1 {
    font-size: clamp(2rem, 4vw, 3rem);
    color: #0b2a5f;
    margin-bottom: 0.5rem;
}
.legal-inner .legal-updated {
    color: #94a3b8;
    font-size: 0.85rem;
    margin-bottom: 2.5rem;
}
.legal-inner h2 {
    color: #0f172a;
    font-size: 1.25rem;
    margin: 2rem 0 0.75rem;
}
.legal-inner p, .legal-inner li {
    color: #475569;
    line-height: 1.75;
}
.legal-inner ul { padding-left: 1.25rem; }
"#;

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
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
        <main class="legal-page">
            <style>{LEGAL_CSS}</style>
            <div class="legal-inner">
                <h1>{"Terms of Service"}</h1>
                <p class="legal-updated">{"Last updated: January 2026"}</p>
                <h2>{"1. Engagements"}</h2>
                <p>{"Project scope, deliverables and timelines are defined in a written statement of work agreed before development begins. Changes to scope are estimated and approved in writing."}</p>
                <h2>{"2. Intellectual property"}</h2>
                <p>{"On full payment, all project-specific source code and design assets transfer to the client. Pre-existing internal tooling and libraries remain ours and are licensed to the client for use within the delivered product."}</p>
                <h2>{"3. Payment"}</h2>
                <p>{"Invoices are issued per the milestone schedule in the statement of work and are due within 14 days. Work may be paused on accounts more than 30 days overdue."}</p>
                <h2>{"4. Warranty & liability"}</h2>
                <p>{"We fix defects reported within 60 days of delivery at no charge. Beyond that, support is provided under a separate maintenance agreement. Our total liability is capped at fees paid for the engagement."}</p>
            </div>
        </main>
        <FooterCompact />
        </>
    }
}

#[function_component(SecurityPolicy)]
pub fn security_policy() -> Html {
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
        <main class="legal-page">
            <style>{LEGAL_CSS}</style>
            <div class="legal-inner">
                <h1>{"Security"}</h1>
                <p class="legal-updated">{"How we protect client systems and data"}</p>
                <h2>{"Development practices"}</h2>
                <ul>
                    <li>{"Code review on every change; no direct pushes to production branches."}</li>
                    <li>{"Dependencies audited and pinned; automated vulnerability scanning in CI."}</li>
                    <li>{"Secrets kept in managed vaults, never in repositories."}</li>
                </ul>
                <h2>{"Data handling"}</h2>
                <p>{"Client data is accessed only for the engagement that requires it, over encrypted channels, and removed from our systems when the engagement ends."}</p>
                <h2>{"Reporting a vulnerability"}</h2>
                <p>{"Found something in a system we built or operate? Write to us and we'll respond within two business days."}</p>
            </div>
        </main>
        <FooterCompact />
        </>
    }
}
