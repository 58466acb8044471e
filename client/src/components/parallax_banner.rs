//! Page banner whose background drifts with the scroll position.

use leptos::prelude::*;

use crate::util::browser::scroll_y;
use crate::util::parallax::{Axis, DEFAULT_SPEED, Offset};

#[component]
pub fn ParallaxBanner(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] image: String,
    #[prop(default = DEFAULT_SPEED)] speed: f64,
) -> impl IntoView {
    let offset = RwSignal::new(Offset::default());
    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        offset.set(Offset::from_scroll(0.0, scroll_y(), speed, Axis::Vertical));
    });
    on_cleanup(move || handle.remove());

    view! {
        <section class="parallax-banner">
            <div
                class="parallax-banner__layer"
                style=move || format!("background-image: url('{image}'); transform: {}", offset.get().transform(0.0))
            ></div>
            <div class="parallax-banner__content">
                <h1 class="parallax-banner__title">{title}</h1>
                {subtitle.map(|text| view! { <p class="parallax-banner__subtitle">{text}</p> })}
            </div>
        </section>
    }
}
