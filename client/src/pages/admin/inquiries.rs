//! `/admin/inquiries`: contact form inbox with status workflow and delete.

use leptos::prelude::*;
use records::{ContactInquiry, InquiryStatus, Record};
use uuid::Uuid;

use super::{RowActions, ScreenHeader, StatusSelect, placeholder, retry, run_action};
use crate::components::status_badge::{StatusBadge, inquiry_tone};
use crate::components::table_toolbar::{FilterSelect, SearchInput, ShowingCount, enum_options};
use crate::net::{SharedBackend, use_backend};
use crate::state::actions::set_status;
use crate::state::filters::{InquiryFilter, choice, choice_value};
use crate::state::listing::{ListState, RowFilter, use_list};
use crate::util::format;

fn change_status(backend: SharedBackend, list: RwSignal<ListState<ContactInquiry>>, id: Uuid, value: &str) {
    let Ok(status) = value.parse::<InquiryStatus>() else {
        return;
    };
    run_action(
        list,
        "update inquiry status".to_owned(),
        async move { set_status::<ContactInquiry, _>(backend.as_ref(), id, status).await },
        move |state, status| {
            state.patch(id, |i| i.status = status);
        },
    );
}

#[component]
pub fn AdminInquiriesPage() -> impl IntoView {
    let backend = use_backend();
    let reload = RwSignal::new(0_u32);
    let list = use_list::<ContactInquiry>(backend.clone(), reload);
    let filter = RwSignal::new(InquiryFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "inquiries", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Sender"</th>
                        <th>"Subject"</th>
                        <th>"Message"</th>
                        <th>"Received"</th>
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|inquiry| {
                            let id = inquiry.id();
                            let backend = backend.clone();
                            let received = format::date(inquiry.created_at.as_deref());
                            let status = inquiry.status;
                            let mailto = format!("mailto:{}", inquiry.email);
                            let pick = Callback::new(move |value: String| {
                                change_status(backend.clone(), list, id, &value);
                            });
                            view! {
                                <tr>
                                    <td>
                                        <span class="admin-table__title">{inquiry.name}</span>
                                        <a class="admin-table__sub" href=mailto>{inquiry.email}</a>
                                        {inquiry.phone.map(|phone| view! { <span class="admin-table__sub">{phone}</span> })}
                                    </td>
                                    <td>{inquiry.subject}</td>
                                    <td><p class="admin-table__excerpt">{inquiry.message}</p></td>
                                    <td>{received}</td>
                                    <td>
                                        <StatusBadge label=status.label() tone=inquiry_tone(status)/>
                                        <StatusSelect
                                            current=status.to_string()
                                            options=enum_options(&InquiryStatus::ALL, InquiryStatus::label)
                                            on_pick=pick
                                        />
                                    </td>
                                    <RowActions list=list id=id noun="inquiry"/>
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
            <ScreenHeader title="Contact Inquiries"/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search by name, email, phone or subject..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| choice_value(f.status.as_ref())))
                    options=enum_options(&InquiryStatus::ALL, InquiryStatus::label)
                    on_change=Callback::new(move |value: String| filter.update(|f| f.status = choice(&value)))
                    all_label="All statuses"
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="inquiries"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
