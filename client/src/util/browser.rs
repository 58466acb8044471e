//! Thin wrappers over browser globals.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages need blocking alerts, delete confirmations, the page origin, the
//! current time, the scroll position and the viewport size. Under SSR and in
//! tests every call is a deterministic no-op so state logic stays
//! browser-free.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Blocking alert. Used for save/delete outcomes on admin screens.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Blocking yes/no prompt. Returns `false` when no browser is present.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// `scheme://host[:port]` of the current page.
pub fn origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Current time as an ISO-8601 UTC timestamp.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}

/// Vertical scroll offset in CSS pixels.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Viewport height in CSS pixels.
pub fn viewport_height() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|h| h.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Resolve after `ms` milliseconds in the browser; immediately elsewhere.
#[cfg_attr(not(feature = "hydrate"), allow(clippy::unused_async))]
pub async fn sleep_ms(ms: u32) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ms;
    }
}
