//! The reveal gate: one flag, "content may animate in now".
//!
//! Pages subscribe through [`use_reveal`] and start their own scroll and
//! timer effects only once the flag turns true. The layout is the single
//! writer; it locks the gate when a route transition starts and unlocks
//! it when the loader or mask finishes.

use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::motion::prefers_reduced_motion;

#[derive(Clone, PartialEq)]
pub struct RevealState {
    pub is_revealed: bool,
    set_reveal_complete: Callback<bool>,
}

impl RevealState {
    /// Write the gate. Last write wins; only the layout calls this.
    pub fn set_reveal_complete(&self, value: bool) {
        self.set_reveal_complete.emit(value);
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RevealProvider)]
pub fn reveal_provider(props: &RevealProviderProps) -> Html {
    let revealed = use_state(|| false);
    let set_reveal_complete = {
        let setter = revealed.setter();
        use_callback(move |value: bool, _| setter.set(value), ())
    };
    let state = RevealState {
        is_revealed: *revealed,
        set_reveal_complete,
    };
    html! {
        <ContextProvider<RevealState> context={state}>
            { for props.children.iter() }
        </ContextProvider<RevealState>>
    }
}

#[hook]
pub fn use_reveal() -> RevealState {
    use_context::<RevealState>().expect("RevealProvider mounted above the app tree")
}

/// Staggered entrance for every `[data-reveal]` element on the page,
/// fired on the gate's false-to-true edge. The matching base styles live
/// in the layout's global stylesheet; this only schedules the per-element
/// delays and flips the class. Under reduced motion elements snap to
/// their end state with no transition.
#[hook]
pub fn use_page_reveal() {
    let reveal = use_reveal();
    use_effect_with_deps(
        move |&revealed| {
            if revealed {
                apply_reveal();
            }
            || ()
        },
        reveal.is_revealed,
    );
}

fn apply_reveal() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Ok(nodes) = document.query_selector_all("[data-reveal]") else {
        return;
    };
    let reduced = prefers_reduced_motion();
    for i in 0..nodes.length() {
        let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        if reduced {
            let _ = element.style().set_property("transition", "none");
        } else {
            // 200ms lead-in, then a 140ms stagger down the page
            let delay = 200 + i * 140;
            let _ = element
                .style()
                .set_property("transition-delay", &format!("{}ms", delay));
        }
        let _ = element.class_list().add_1("revealed");
    }
}
