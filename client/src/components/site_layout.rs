//! Public page chrome: navigation bar and footer.

use leptos::prelude::*;

use crate::state::settings::SiteSettings;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/tours", "Tours"),
    ("/destinations", "Destinations"),
    ("/blog", "Blog"),
    ("/travel-info", "Travel Info"),
    ("/login", "Sign In"),
];

#[component]
pub fn SiteLayout(children: Children) -> impl IntoView {
    let contact = SiteSettings::default();
    let menu_open = RwSignal::new(false);

    view! {
        <div class="site">
            <header class="site-header">
                <a class="site-header__brand" href="/">{contact.site_name.clone()}</a>
                <button
                    class="site-header__menu-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <nav class="site-header__nav" class:site-header__nav--open=move || menu_open.get()>
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| view! { <a class="site-header__link" href=href>{label}</a> })
                        .collect_view()}
                </nav>
            </header>
            <main class="site__main">{children()}</main>
            <footer class="site-footer">
                <div class="site-footer__brand">{contact.site_name}</div>
                <div class="site-footer__contact">
                    <a href=format!("mailto:{}", contact.site_email)>{contact.site_email.clone()}</a>
                    <span>{contact.site_phone}</span>
                </div>
                <p class="site-footer__note">"Safaris, treks and day trips across northern Tanzania."</p>
            </footer>
        </div>
    }
}
