//! Contact page: hero line reveal plus the project-inquiry form. The
//! form posts to the backend; if that fails the error state offers a
//! prefilled mailto link so the lead is never lost.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use crate::components::footer::FooterCompact;
use crate::content::{self, ContactRequest, FormStatus};
use crate::reveal::use_page_reveal;

const TOPICS: [&str; 5] = [
    "Custom Software",
    "Web / App Development",
    "Branding & Design",
    "Digital Marketing",
    "Other",
];

const COUNTRIES: [(&str, &str); 10] = [
    ("India", "+91"),
    ("United Arab Emirates", "+971"),
    ("Singapore", "+65"),
    ("United Kingdom", "+44"),
    ("United States", "+1"),
    ("Germany", "+49"),
    ("Australia", "+61"),
    ("Saudi Arabia", "+966"),
    ("Qatar", "+974"),
    ("Canada", "+1"),
];

#[function_component(Contact)]
pub fn contact() -> Html {
    use_page_reveal();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let topic = use_state(|| TOPICS[0].to_string());
    let country = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let status = use_state(|| FormStatus::Idle);

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

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let topic = topic.clone();
        let country = country.clone();
        let phone = phone.clone();
        let message = message.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if name.is_empty() || email.is_empty() {
                return;
            }
            let request = ContactRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                topic: (*topic).clone(),
                country: (*country).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };
            status.set(FormStatus::Submitting);
            let status = status.clone();
            spawn_local(async move {
                match content::submit_contact(&request).await {
                    Ok(()) => status.set(FormStatus::Success),
                    Err(err) => {
                        log::warn!("contact submit failed: {:?}", err);
                        status.set(FormStatus::Error);
                    }
                }
            });
        })
    };

    let dial = COUNTRIES
        .iter()
        .find(|(n, _)| *n == country.as_str())
        .map(|(_, d)| *d)
        .unwrap_or("Mobile number");

    let mailto = content::contact_mailto(
        "Project inquiry",
        &format!(
            "Name: {}\nEmail: {}\nTopic: {}\nPhone: {}\n\n{}",
            *name, *email, *topic, *phone, *message
        ),
    );

    let locked = matches!(*status, FormStatus::Submitting | FormStatus::Success);

    html! {
        <>
        <main class="contact-page">
            <style>
                {r#"
                .contact-page {
                    background: #f8f7f4;
                    padding-top: 74px;
                    min-height: 100vh;
                }
                .contact-hero {
                    max-width: 900px;
                    margin: 0 auto;
                    padding: 6rem 2rem 4rem;
                    text-align: center;
                }
                .contact-hero h1 {
                    font-size: clamp(2.2rem, 5.5vw, 4rem);
                    color: #0b2a5f;
                    line-height: 1.1;
                }
                .contact-hero h1 span { display: block; }
                .contact-hero p {
                    margin-top: 1.5rem;
                    color: #475569;
                    font-size: 1.15rem;
                    max-width: 520px;
                    margin-inline: auto;
                    line-height: 1.7;
                }
                .contact-body {
                    max-width: 640px;
                    margin: 0 auto;
                    padding: 0 2rem 6rem;
                }
                .contact-form {
                    background: #ffffff;
                    border-radius: 28px;
                    box-shadow: 0 40px 120px rgba(0, 0, 0, 0.08);
                    padding: 2.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.1rem;
                }
                .contact-form label {
                    font-size: 0.85rem;
                    font-weight: 600;
                    color: #334155;
                    display: block;
                    margin-bottom: 0.35rem;
                }
                .contact-form input,
                .contact-form select,
                .contact-form textarea {
                    width: 100%;
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 0.8rem 1rem;
                    font-size: 0.95rem;
                    color: #0f172a;
                    box-sizing: border-box;
                }
                .contact-form textarea { resize: none; }
                .contact-pair {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .contact-form button[type="submit"] {
                    border: none;
                    border-radius: 14px;
                    padding: 0.95rem;
                    font-weight: 600;
                    font-size: 1rem;
                    color: #ffffff;
                    background: #1f6fe6;
                    cursor: pointer;
                }
                .contact-form button[type="submit"]:disabled { opacity: 0.6; }
                .contact-success {
                    background: #f0fdf4;
                    color: #15803d;
                    border-radius: 12px;
                    padding: 1rem;
                    text-align: center;
                    font-weight: 600;
                }
                .contact-error {
                    background: #fff1f2;
                    color: #be123c;
                    border-radius: 12px;
                    padding: 0.9rem;
                    font-size: 0.9rem;
                    text-align: center;
                }
                .contact-error a { color: #be123c; font-weight: 700; }
                .contact-fineprint {
                    text-align: center;
                    color: #94a3b8;
                    font-size: 0.78rem;
                }
                @media (max-width: 560px) {
                    .contact-pair { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <section class="contact-hero">
                <h1>
                    <span data-reveal="">{"Let's talk about"}</span>
                    <span data-reveal="">{"what you're building."}</span>
                </h1>
                <p data-reveal="">{"Whether it's a product, platform, or idea, we help you turn it into something real."}</p>
            </section>
            <section class="contact-body" data-reveal="">
                <form class="contact-form" {onsubmit} aria-live="polite">
                    <div class="contact-pair">
                        <div>
                            <label for="contact-name">{"Your name"}</label>
                            <input
                                id="contact-name"
                                placeholder="Asha Nair"
                                value={(*name).clone()}
                                oninput={{
                                    let name = name.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        name.set(input.value());
                                    })
                                }}
                                disabled={locked}
                            />
                        </div>
                        <div>
                            <label for="contact-email">{"Email address"}</label>
                            <input
                                id="contact-email"
                                type="email"
                                placeholder="asha@email.com"
                                value={(*email).clone()}
                                oninput={{
                                    let email = email.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        email.set(input.value());
                                    })
                                }}
                                disabled={locked}
                            />
                        </div>
                    </div>
                    <div>
                        <label for="contact-topic">{"I'm looking for help with"}</label>
                        <select
                            id="contact-topic"
                            onchange={{
                                let topic = topic.clone();
                                Callback::from(move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    topic.set(select.value());
                                })
                            }}
                            disabled={locked}
                        >
                            { for TOPICS.iter().map(|t| html! {
                                <option value={*t} selected={*t == *topic}>{ *t }</option>
                            }) }
                        </select>
                    </div>
                    <div class="contact-pair">
                        <div>
                            <label for="contact-country">{"Country"}</label>
                            <select
                                id="contact-country"
                                onchange={{
                                    let country = country.clone();
                                    Callback::from(move |e: Event| {
                                        let select: HtmlSelectElement = e.target_unchecked_into();
                                        country.set(select.value());
                                    })
                                }}
                                disabled={locked}
                            >
                                <option value="" selected={country.is_empty()}>{"Select country"}</option>
                                { for COUNTRIES.iter().map(|(n, d)| html! {
                                    <option value={*n} selected={*n == country.as_str()}>
                                        { format!("{} ({})", n, d) }
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div>
                            <label for="contact-phone">{"Mobile number"}</label>
                            <input
                                id="contact-phone"
                                placeholder={dial}
                                value={(*phone).clone()}
                                oninput={{
                                    let phone = phone.clone();
                                    Callback::from(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        phone.set(input.value());
                                    })
                                }}
                                disabled={locked}
                            />
                        </div>
                    </div>
                    <div>
                        <label for="contact-message">{"Project details"}</label>
                        <textarea
                            id="contact-message"
                            rows="4"
                            placeholder="Tell us about your idea…"
                            value={(*message).clone()}
                            oninput={{
                                let message = message.clone();
                                Callback::from(move |e: InputEvent| {
                                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                                    message.set(area.value());
                                })
                            }}
                            disabled={locked}
                        />
                    </div>
                    {
                        match *status {
                            FormStatus::Success => html! {
                                <div class="contact-success">{"Message received. We usually respond within 24 hours."}</div>
                            },
                            other => html! {
                                <>
                                    <button type="submit" disabled={other == FormStatus::Submitting}>
                                        { if other == FormStatus::Submitting { "Sending…" } else { "Send message →" } }
                                    </button>
                                    if other == FormStatus::Error {
                                        <div class="contact-error">
                                            {"Something went wrong. Please try again, or "}
                                            <a href={mailto.clone()}>{"email us directly"}</a>
                                            {"."}
                                        </div>
                                    }
                                </>
                            },
                        }
                    }
                    <p class="contact-fineprint">{"By submitting, you agree to be contacted regarding your request."}</p>
                </form>
            </section>
        </main>
        <FooterCompact />
        </>
    }
}
