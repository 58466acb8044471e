//! `/admin/settings`: local site settings with a transient saved badge.

use leptos::prelude::*;

use super::ScreenHeader;
use crate::state::settings::{SAVED_ALERT, SAVED_BADGE_MS, SettingsForm, SiteSettings, parse_days};
use crate::util::browser::{alert, sleep_ms};

#[component]
pub fn AdminSettingsPage() -> impl IntoView {
    let form = RwSignal::new(SettingsForm::default());

    let text = move |label: &'static str, kind: &'static str, get: fn(&SiteSettings) -> &String, set: fn(&mut SiteSettings, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-field__input"
                    type=kind
                    prop:value=move || form.with(|f| get(&f.values).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| f.edit(|s| set(s, value)));
                    }
                />
            </label>
        }
    };
    let days = move |label: &'static str, get: fn(&SiteSettings) -> u32, set: fn(&mut SiteSettings, u32)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="form-field__input"
                    type="number"
                    min="0"
                    prop:value=move || form.with(|f| get(&f.values).to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.edit(|s| set(s, parse_days(&text, get(s)))));
                    }
                />
            </label>
        }
    };
    let flag = move |label: &'static str, get: fn(&SiteSettings) -> bool, set: fn(&mut SiteSettings, bool)| {
        view! {
            <label class="form-field form-field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| get(&f.values))
                    on:change=move |ev| {
                        let on = event_target_checked(&ev);
                        form.update(|f| f.edit(|s| set(s, on)));
                    }
                />
                <span class="form-field__label">{label}</span>
            </label>
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::logging::log!("settings saved locally");
        form.update(SettingsForm::mark_saved);
        alert(SAVED_ALERT);
        leptos::task::spawn_local(async move {
            sleep_ms(SAVED_BADGE_MS).await;
            form.update(SettingsForm::clear_badge);
        });
    };

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Settings"/>
            <form class="admin-form" on:submit=on_submit>
                <fieldset class="admin-form__section">
                    <legend>"General"</legend>
                    {text("Site Name", "text", |s| &s.site_name, |s, v| s.site_name = v)}
                    {text("Site Email", "email", |s| &s.site_email, |s, v| s.site_email = v)}
                    {text("Site Phone", "tel", |s| &s.site_phone, |s, v| s.site_phone = v)}
                    {text("Support Email", "email", |s| &s.support_email, |s, v| s.support_email = v)}
                </fieldset>
                <fieldset class="admin-form__section">
                    <legend>"Bookings"</legend>
                    {flag("Maintenance Mode", |s| s.maintenance_mode, |s, v| s.maintenance_mode = v)}
                    {flag("Allow Bookings", |s| s.allow_bookings, |s, v| s.allow_bookings = v)}
                    {days(
                        "Max Booking Advance (days)",
                        |s| s.max_booking_advance_days,
                        |s, v| s.max_booking_advance_days = v,
                    )}
                    {days(
                        "Cancellation Deadline (days)",
                        |s| s.cancellation_deadline_days,
                        |s, v| s.cancellation_deadline_days = v,
                    )}
                </fieldset>
                <div class="admin-form__actions">
                    <Show when=move || form.with(|f| f.saved)>
                        <span class="status-badge status-badge--success">"Saved"</span>
                    </Show>
                    <button class="btn btn--primary" type="submit">"Save Settings"</button>
                </div>
            </form>
        </div>
    }
}
