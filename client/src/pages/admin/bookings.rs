//! `/admin/bookings`: booking table with a status filter and an inline
//! status picker per row.

use leptos::prelude::*;
use records::{Booking, BookingStatus, Record};

use super::{ScreenHeader, StatusSelect, placeholder, retry, run_action};
use crate::components::status_badge::{StatusBadge, booking_tone};
use crate::components::table_toolbar::{FilterSelect, SearchInput, ShowingCount, enum_options};
use crate::net::{SharedBackend, use_backend};
use crate::state::actions::set_status;
use crate::state::filters::{BookingFilter, choice, choice_value};
use crate::state::listing::{ListState, RowFilter, use_list};
use crate::util::format;

fn change_status(backend: SharedBackend, list: RwSignal<ListState<Booking>>, booking: &Booking, value: &str) {
    let Ok(status) = value.parse::<BookingStatus>() else {
        return;
    };
    let id = booking.id;
    run_action(
        list,
        "update booking status".to_owned(),
        async move { set_status::<Booking, _>(backend.as_ref(), id, status).await },
        move |state, status| {
            state.patch(id, |b| b.status = status);
        },
    );
}

fn travel_dates(booking: &Booking) -> String {
    let start = format::date(booking.start_date.as_deref());
    match booking.end_date.as_deref() {
        Some(end) => format!("{start} to {}", format::date(Some(end))),
        None => start,
    }
}

#[component]
pub fn AdminBookingsPage() -> impl IntoView {
    let backend = use_backend();
    let reload = RwSignal::new(0_u32);
    let list = use_list::<Booking>(backend.clone(), reload);
    let filter = RwSignal::new(BookingFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "bookings", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Customer"</th>
                        <th>"Tour"</th>
                        <th>"Dates"</th>
                        <th>"Group"</th>
                        <th>"Amount"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|booking| {
                            let backend = backend.clone();
                            let customer = booking.customer_name().to_owned();
                            let email = booking.email.clone();
                            let tour = booking.tour_title().to_owned();
                            let dates = travel_dates(&booking);
                            let group = format!("{} guests", booking.participants);
                            let amount = format::money(booking.total_amount, &booking.currency);
                            let status = booking.status;
                            let pick = Callback::new(move |value: String| {
                                change_status(backend.clone(), list, &booking, &value);
                            });
                            view! {
                                <tr>
                                    <td>
                                        <span class="admin-table__title">{customer}</span>
                                        <span class="admin-table__sub">{email}</span>
                                    </td>
                                    <td>{tour}</td>
                                    <td>{dates}</td>
                                    <td>{group}</td>
                                    <td>{amount}</td>
                                    <td>
                                        <StatusBadge label=status.label() tone=booking_tone(status)/>
                                        <StatusSelect
                                            current=status.to_string()
                                            options=enum_options(&BookingStatus::ALL, BookingStatus::label)
                                            on_pick=pick
                                        />
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        }
        .into_any()
    };

    view! {
        <div class="admin-screen">
            <ScreenHeader title="Bookings"/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search by customer, tour or email..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| choice_value(f.status.as_ref())))
                    options=enum_options(&BookingStatus::ALL, BookingStatus::label)
                    on_change=Callback::new(move |value: String| filter.update(|f| f.status = choice(&value)))
                    all_label="All statuses"
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="bookings"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
