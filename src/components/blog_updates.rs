//! Blog slider plus the "work with us" lead card. Posts come from the
//! backend (bundled fallback on failure); the card posts a subscription
//! and drives the idle/submitting/success/error states inline.

use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, HtmlImageElement, HtmlInputElement, HtmlSelectElement, InputEvent, MouseEvent, SubmitEvent};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::config;
use crate::content::{self, BlogPost, FormStatus, SubscribeRequest};
use crate::motion::use_reduced_motion;
use crate::reveal::use_reveal;

const AUTOPLAY_MS: u32 = 4_200;

const INTERESTS: [&str; 4] = [
    "Enterprise Web Solutions",
    "Mobile App Development",
    "UI/UX Design Strategy",
    "System Architecture",
];

fn swap_to_placeholder(event: Event) {
    if let Some(img) = event.target_dyn_into::<HtmlImageElement>() {
        if img.src() != content::PLACEHOLDER_IMAGE {
            img.set_src(content::PLACEHOLDER_IMAGE);
        }
    }
}

#[function_component(BlogUpdates)]
pub fn blog_updates() -> Html {
    let reveal = use_reveal();
    let reduced = use_reduced_motion();
    let posts = use_state(Vec::<BlogPost>::new);
    let loading = use_state(|| true);
    let active = use_state(|| 0usize);

    let form_name = use_state(String::new);
    let form_phone = use_state(String::new);
    let form_interest = use_state(|| INTERESTS[0].to_string());
    let form_status = use_state(|| FormStatus::Idle);

    {
        let posts = posts.clone();
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    match content::fetch_blog_posts().await {
                        Ok(list) if !list.is_empty() => posts.set(list),
                        Ok(_) => posts.set(content::fallback_blog_posts()),
                        Err(err) => {
                            log::warn!("blog posts fetch failed: {:?}", err);
                            posts.set(content::fallback_blog_posts());
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
            (),
        );
    }

    let autoplay_ms = if reveal.is_revealed && !reduced && posts.len() > 1 {
        AUTOPLAY_MS
    } else {
        0
    };
    {
        let active = active.clone();
        let len = posts.len();
        use_interval(
            move || {
                if len > 0 {
                    active.set((*active + 1) % len);
                }
            },
            autoplay_ms,
        );
    }

    let onsubmit = {
        let form_name = form_name.clone();
        let form_phone = form_phone.clone();
        let form_interest = form_interest.clone();
        let form_status = form_status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if form_name.is_empty() || form_phone.is_empty() {
                return;
            }
            let request = SubscribeRequest {
                name: (*form_name).clone(),
                phone: (*form_phone).clone(),
                interest: (*form_interest).clone(),
            };
            form_status.set(FormStatus::Submitting);
            let form_name = form_name.clone();
            let form_phone = form_phone.clone();
            let form_status = form_status.clone();
            spawn_local(async move {
                match content::submit_subscription(&request).await {
                    Ok(()) => {
                        form_status.set(FormStatus::Success);
                        form_name.set(String::new());
                        form_phone.set(String::new());
                    }
                    Err(err) => {
                        log::warn!("subscribe failed: {:?}", err);
                        form_status.set(FormStatus::Error);
                    }
                }
            });
        })
    };

    let on_name = {
        let form_name = form_name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_name.set(input.value());
        })
    };
    let on_phone = {
        let form_phone = form_phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form_phone.set(input.value());
        })
    };
    let on_interest = {
        let form_interest = form_interest.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form_interest.set(select.value());
        })
    };

    let locked = matches!(*form_status, FormStatus::Submitting | FormStatus::Success);

    html! {
        <section class="blog-updates">
            <style>
                {r#"
                .blog-updates {
                    background: #fbfaf8;
                    padding: 5rem 2rem;
                }
                .blog-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 2.5rem;
                    align-items: start;
                }
                .blog-heading p {
                    font-size: 0.85rem;
                    font-weight: 600;
                    letter-spacing: 0.12em;
                    color: #64748b;
                    text-transform: uppercase;
                }
                .blog-heading h2 {
                    font-size: clamp(1.8rem, 3.5vw, 2.8rem);
                    color: #0b2a5f;
                    margin: 0.5rem 0 2rem;
                }
                .blog-card {
                    background: #ffffff;
                    border: 1px solid #e9eef6;
                    border-radius: 24px;
                    box-shadow: 0 30px 60px rgba(11, 42, 95, 0.06);
                    overflow: hidden;
                    display: flex;
                    min-height: 300px;
                    animation: blog-card-in 0.5s cubic-bezier(0.16, 1, 0.3, 1);
                }
                .blog-card img {
                    width: 38%;
                    object-fit: cover;
                }
                .blog-card-body {
                    padding: 1.75rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .blog-tag {
                    align-self: flex-start;
                    font-size: 0.75rem;
                    font-weight: 600;
                    color: #0b2a5f;
                    background: #eaf4ff;
                    padding: 0.25rem 0.75rem;
                    border-radius: 999px;
                }
                .blog-card-body h3 {
                    color: #0f172a;
                    font-size: 1.35rem;
                    line-height: 1.3;
                }
                .blog-card-body p { color: #475569; line-height: 1.6; }
                .blog-card-body time { color: #94a3b8; font-size: 0.85rem; }
                .blog-nav {
                    display: flex;
                    gap: 0.75rem;
                    margin-top: 1.25rem;
                }
                .blog-nav button {
                    border: 1px solid #e2e8f0;
                    background: #ffffff;
                    border-radius: 8px;
                    width: 38px;
                    height: 38px;
                    cursor: pointer;
                    color: #0b2a5f;
                }
                .lead-card {
                    background: #ffffff;
                    border: 1px solid #e9eef6;
                    border-radius: 24px;
                    box-shadow: 0 30px 60px rgba(11, 42, 95, 0.06);
                    padding: 2rem;
                }
                .lead-card h4 { color: #0b2a5f; font-size: 1.1rem; }
                .lead-card > p { color: #475569; font-size: 0.9rem; margin: 0.5rem 0 1.25rem; }
                .lead-card form { display: flex; flex-direction: column; gap: 0.9rem; }
                .lead-card input, .lead-card select {
                    border: 1px solid #e2e8f0;
                    border-radius: 12px;
                    padding: 0.8rem 1rem;
                    font-size: 0.95rem;
                    color: #0f172a;
                }
                .lead-card button[type="submit"] {
                    border: none;
                    border-radius: 999px;
                    padding: 0.85rem;
                    font-weight: 600;
                    color: #ffffff;
                    background: linear-gradient(90deg, #0b2a5f, #1f6fe6);
                    cursor: pointer;
                }
                .lead-card button[type="submit"]:disabled { opacity: 0.7; }
                .lead-success {
                    background: #f0fdf4;
                    color: #15803d;
                    border-radius: 12px;
                    padding: 0.8rem;
                    text-align: center;
                    font-size: 0.9rem;
                    font-weight: 600;
                }
                .lead-error { color: #e11d48; font-size: 0.8rem; text-align: center; }
                @keyframes blog-card-in {
                    from { opacity: 0; transform: translateY(24px); }
                    to { opacity: 1; transform: none; }
                }
                @media (max-width: 900px) {
                    .blog-grid { grid-template-columns: 1fr; }
                    .blog-card img { display: none; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .blog-card { animation: none; }
                }
                "#}
            </style>
            <div class="blog-grid">
                <div>
                    <div class="blog-heading">
                        <p>{"Blog updates"}</p>
                        <h2>{"Latest insights & stories"}</h2>
                    </div>
                    {
                        if *loading {
                            html! { <div class="blog-card"><div class="blog-card-body"><p>{"Loading…"}</p></div></div> }
                        } else if let Some(post) = posts.get(*active) {
                            let image = content::resolve_media_url(
                                config::get_backend_url(),
                                post.image.as_deref(),
                            );
                            html! {
                                <div class="blog-card" key={post.id.to_string()}>
                                    <img
                                        src={image}
                                        alt={post.title.clone()}
                                        loading="lazy"
                                        onerror={Callback::from(swap_to_placeholder)}
                                    />
                                    <div class="blog-card-body">
                                        <span class="blog-tag">{ post.tag.clone().unwrap_or_else(|| "Update".into()) }</span>
                                        <h3>{ &post.title }</h3>
                                        if let Some(body) = &post.content {
                                            <p>{ body }</p>
                                        }
                                        <time>{ content::format_post_date(&post.date) }</time>
                                    </div>
                                </div>
                            }
                        } else {
                            html! { <div class="blog-card"><div class="blog-card-body"><p>{"No posts yet."}</p></div></div> }
                        }
                    }
                    <div class="blog-nav">
                        <button
                            aria-label="Previous post"
                            onclick={{
                                let active = active.clone();
                                let len = posts.len();
                                Callback::from(move |_: MouseEvent| {
                                    if len > 0 {
                                        active.set((*active + len - 1) % len);
                                    }
                                })
                            }}
                        >{"‹"}</button>
                        <button
                            aria-label="Next post"
                            onclick={{
                                let active = active.clone();
                                let len = posts.len();
                                Callback::from(move |_: MouseEvent| {
                                    if len > 0 {
                                        active.set((*active + 1) % len);
                                    }
                                })
                            }}
                        >{"›"}</button>
                    </div>
                </div>

                <aside class="lead-card">
                    <h4>{"Work with us"}</h4>
                    <p>{"Have a project in mind? Share your details and we'll reach out to discuss how we can build your solution."}</p>
                    <form {onsubmit}>
                        <input
                            placeholder="Your full name"
                            value={(*form_name).clone()}
                            oninput={on_name}
                            disabled={locked}
                        />
                        <input
                            placeholder="+91 90000 00000"
                            value={(*form_phone).clone()}
                            oninput={on_phone}
                            disabled={locked}
                        />
                        <select onchange={on_interest} disabled={locked}>
                            { for INTERESTS.iter().map(|interest| html! {
                                <option
                                    value={*interest}
                                    selected={*interest == *form_interest}
                                >{ *interest }</option>
                            }) }
                        </select>
                        {
                            match *form_status {
                                FormStatus::Success => html! {
                                    <div class="lead-success">{"Message received. We'll be in touch shortly."}</div>
                                },
                                status => html! {
                                    <>
                                        <button type="submit" disabled={status == FormStatus::Submitting}>
                                            { if status == FormStatus::Submitting { "Sending…" } else { "Send inquiry" } }
                                        </button>
                                        if status == FormStatus::Error {
                                            <div class="lead-error">{"Something went wrong. Please try again."}</div>
                                        }
                                    </>
                                },
                            }
                        }
                    </form>
                </aside>
            </div>
        </section>
    }
}
