//! Full-width hero carousel on the home page.
//!
//! DESIGN
//! ======
//! Slide order and transition locking live in [`HeroSlider`]; this component
//! only drives it. A background loop advances every [`AUTO_ADVANCE_MS`] and
//! each started transition clears itself after [`TRANSITION_MS`]. The loop
//! stops when the component is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::state::hero::{AUTO_ADVANCE_MS, HeroSlider, Slide, TRANSITION_MS};
use crate::util::browser::sleep_ms;

fn settle_after_transition(slider: RwSignal<HeroSlider>) {
    leptos::task::spawn_local(async move {
        sleep_ms(TRANSITION_MS).await;
        slider.try_update(HeroSlider::finish_transition);
    });
}

fn step(slider: RwSignal<HeroSlider>, advance: impl FnOnce(&mut HeroSlider) -> bool) {
    let started = slider.try_update(advance).unwrap_or(false);
    if started {
        settle_after_transition(slider);
    }
}

#[component]
pub fn HeroSliderView(#[prop(into)] slides: Signal<Vec<Slide>>) -> impl IntoView {
    let slider = RwSignal::new(HeroSlider::new(slides.get_untracked()));

    Effect::new(move || {
        let fresh = slides.get();
        slider.set(HeroSlider::new(fresh));
    });

    let alive = Arc::new(AtomicBool::new(true));
    Effect::new({
        let alive = Arc::clone(&alive);
        move || {
            let alive = Arc::clone(&alive);
            leptos::task::spawn_local(async move {
                loop {
                    sleep_ms(AUTO_ADVANCE_MS).await;
                    if !alive.load(Ordering::Relaxed) {
                        break;
                    }
                    step(slider, HeroSlider::next);
                }
            });
        }
    });
    on_cleanup(move || alive.store(false, Ordering::Relaxed));

    let count = move || slider.with(|s| s.slides.len());

    view! {
        <section class="hero-slider" class:hero-slider--transitioning=move || slider.with(|s| s.transitioning)>
            {move || {
                slider
                    .with(|s| s.current_slide().cloned())
                    .map(|slide| {
                        view! {
                            <div class="hero-slider__slide" style=format!("background-image: url('{}')", slide.image)>
                                <div class="hero-slider__overlay"></div>
                                <div class="hero-slider__content">
                                    {slide.category.map(|c| view! { <span class="hero-slider__category">{c.label()}</span> })}
                                    <h1 class="hero-slider__title">{slide.title}</h1>
                                    <p class="hero-slider__description">{slide.description}</p>
                                    {slide.link.map(|href| view! { <a class="btn btn--primary hero-slider__cta" href=href>"Explore Tour"</a> })}
                                </div>
                            </div>
                        }
                    })
            }}
            <Show when=move || { count() > 1 }>
                <button class="hero-slider__arrow hero-slider__arrow--prev" aria-label="Previous slide" on:click=move |_| step(slider, HeroSlider::prev)>
                    "‹"
                </button>
                <button class="hero-slider__arrow hero-slider__arrow--next" aria-label="Next slide" on:click=move |_| step(slider, HeroSlider::next)>
                    "›"
                </button>
                <div class="hero-slider__dots">
                    {move || {
                        (0..count())
                            .map(|index| {
                                view! {
                                    <button
                                        class="hero-slider__dot"
                                        class:hero-slider__dot--active=move || slider.with(|s| s.current == index)
                                        aria-label=format!("Go to slide {}", index + 1)
                                        on:click=move |_| step(slider, |s| s.go_to(index))
                                    ></button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </section>
    }
}
