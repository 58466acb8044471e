//! Wrapper that fades or slides its children in when scrolled into view.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::reveal::{DEFAULT_THRESHOLD, Reveal, RevealState};

#[component]
pub fn AnimatedSection(
    children: Children,
    #[prop(optional)] animation: Reveal,
    /// Transition delay in milliseconds, applied when the section appears.
    #[prop(optional)]
    delay: u32,
    #[prop(default = DEFAULT_THRESHOLD)] threshold: f64,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node = NodeRef::<Div>::new();
    let state = RwSignal::new(RevealState::new(threshold, once));

    let check = move || {
        if state.with_untracked(RevealState::is_settled) {
            return;
        }
        if let Some(fraction) = visible_fraction(node) {
            let mut next = state.get_untracked();
            if next.observe(fraction) {
                state.set(next);
            }
        }
    };

    Effect::new(move || {
        if node.get().is_some() {
            check();
        }
    });
    let scroll = window_event_listener(leptos::ev::scroll, move |_| check());
    let resize = window_event_listener(leptos::ev::resize, move |_| check());
    on_cleanup(move || {
        scroll.remove();
        resize.remove();
    });

    view! {
        <div
            node_ref=node
            class=move || format!("{} {class}", state.with(|s| s.class(animation)))
            style=move || state.with(|s| s.style(delay))
        >
            {children()}
        </div>
    }
}

fn visible_fraction(node: NodeRef<Div>) -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        let rect = node.get_untracked()?.get_bounding_client_rect();
        Some(crate::util::reveal::visible_fraction(
            rect.top(),
            rect.height(),
            crate::util::browser::viewport_height(),
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        None
    }
}
