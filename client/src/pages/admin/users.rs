//! `/admin/users`: profile directory with the admin role toggle.

use leptos::prelude::*;
use records::Profile;

use super::{FlagToggle, ScreenHeader, placeholder, retry};
use crate::components::table_toolbar::{SearchInput, ShowingCount};
use crate::net::use_backend;
use crate::state::actions::PROFILE_ADMIN;
use crate::state::filters::UserFilter;
use crate::state::listing::{RowFilter, use_list};
use crate::util::format;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let list = use_list::<Profile>(use_backend(), reload);
    let filter = RwSignal::new(UserFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "users", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Contact"</th>
                        <th>"Admin"</th>
                        <th>"Joined"</th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|user| {
                            let name = user.display_name().to_owned();
                            let joined = format::date(user.created_at.as_deref());
                            let email = user.email.clone();
                            let phone = user.phone.clone();
                            view! {
                                <tr>
                                    <td class="admin-table__title">{name}</td>
                                    <td>
                                        <span class="admin-table__sub">{email}</span>
                                        {phone.map(|phone| view! { <span class="admin-table__sub">{phone}</span> })}
                                    </td>
                                    <FlagToggle
                                        row=user
                                        list=list
                                        flag=&PROFILE_ADMIN
                                        on_label="Admin"
                                        off_label="Customer"
                                    />
                                    <td>{joined}</td>
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
            <ScreenHeader title="Users"/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search by name, email or phone..."
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="users"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
