//! Full-width call-to-action banner over a background image.

use leptos::prelude::*;

#[component]
pub fn CtaBanner(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(into)] image: String,
    #[prop(default = "Explore Now")] cta_text: &'static str,
    #[prop(default = "/tours")] cta_link: &'static str,
) -> impl IntoView {
    let alt = title.clone();
    view! {
        <section class="cta-banner">
            <img class="cta-banner__image" src=image alt=alt loading="lazy"/>
            <div class="cta-banner__overlay"></div>
            <div class="cta-banner__content">
                <h2 class="cta-banner__title">{title}</h2>
                {subtitle.map(|text| view! { <p class="cta-banner__subtitle">{text}</p> })}
                <a class="btn btn--primary cta-banner__link" href=cta_link>
                    {cta_text}
                    " →"
                </a>
            </div>
        </section>
    }
}
