//! App shell. Owns the loader-vs-mask decision on every navigation and is
//! the single writer of the reveal gate: pages never unlock themselves,
//! they wait for the transition that covers them to finish.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::mask_reveal::MaskReveal;
use crate::components::page_loader::PageLoader;
use crate::components::whatsapp_button::WhatsAppButton;
use crate::reveal::{use_reveal, RevealProvider, RevealState};
use crate::transition::{Effect, Phase, TransitionMachine};

#[derive(Properties, PartialEq)]
pub struct ClientLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ClientLayout)]
pub fn client_layout(props: &ClientLayoutProps) -> Html {
    html! {
        <RevealProvider>
            <LayoutContent>
                { for props.children.iter() }
            </LayoutContent>
        </RevealProvider>
    }
}

fn apply_effects(reveal: &RevealState, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::SetRevealed(value) => reveal.set_reveal_complete(value),
        }
    }
}

#[derive(Properties, PartialEq)]
struct LayoutContentProps {
    #[prop_or_default]
    children: Children,
}

#[function_component(LayoutContent)]
fn layout_content(props: &LayoutContentProps) -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_else(|| "/".to_string());
    let reveal = use_reveal();
    let machine = use_mut_ref(|| TransitionMachine::new(path.clone()));
    let update = use_force_update();

    // Booting -> ShowingLoader, once per session
    {
        let machine = machine.clone();
        let reveal = reveal.clone();
        let update = update.clone();
        use_effect_with_deps(
            move |_| {
                apply_effects(&reveal, machine.borrow_mut().boot());
                update.force_update();
                || ()
            },
            (),
        );
    }

    // lock and show the mask whenever the observed path changes
    {
        let machine = machine.clone();
        let reveal = reveal.clone();
        let update = update.clone();
        use_effect_with_deps(
            move |path: &String| {
                apply_effects(&reveal, machine.borrow_mut().route_changed(path));
                update.force_update();
                || ()
            },
            path,
        );
    }

    let on_loader_done = {
        let machine = machine.clone();
        let reveal = reveal.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            gloo_console::log!("page loader finished, revealing content");
            apply_effects(&reveal, machine.borrow_mut().loader_done());
            update.force_update();
        })
    };

    let on_mask_done = {
        let machine = machine.clone();
        let reveal = reveal.clone();
        let update = update.clone();
        Callback::from(move |key: String| {
            gloo_console::log!("route mask finished for", key.clone());
            apply_effects(&reveal, machine.borrow_mut().mask_done(&key));
            update.force_update();
        })
    };

    let (phase, route_key) = {
        let machine = machine.borrow();
        (machine.phase(), machine.route_key().to_string())
    };

    html! {
        <>
            <style>
                {r#"
                [data-reveal] {
                    opacity: 0;
                    transform: translateY(36px);
                    filter: blur(10px);
                    transition:
                        opacity 1s cubic-bezier(0.16, 1, 0.3, 1),
                        transform 1s cubic-bezier(0.16, 1, 0.3, 1),
                        filter 1s cubic-bezier(0.16, 1, 0.3, 1);
                    will-change: transform, opacity;
                }
                [data-reveal].revealed {
                    opacity: 1;
                    transform: none;
                    filter: none;
                }
                "#}
            </style>

            if phase == Phase::ShowingLoader {
                <PageLoader on_done={on_loader_done} />
            }
            if phase == Phase::ShowingMask {
                <MaskReveal
                    key={route_key.clone()}
                    trigger_key={route_key.clone()}
                    on_complete={on_mask_done}
                />
            }

            { for props.children.iter() }
            <WhatsAppButton />
        </>
    }
}
