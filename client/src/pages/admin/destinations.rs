//! `/admin/destinations`: destination table with a category filter and
//! featured/active toggles.

use leptos::prelude::*;
use records::{Destination, DestinationCategory, Record};

use super::{FlagToggle, RowActions, ScreenHeader, placeholder, retry};
use crate::components::table_toolbar::{FilterSelect, SearchInput, ShowingCount, enum_options};
use crate::net::use_backend;
use crate::state::actions::{DESTINATION_ACTIVE, DESTINATION_FEATURED};
use crate::state::filters::{ALL, DestinationFilter};
use crate::state::listing::{RowFilter, use_list};

#[component]
pub fn AdminDestinationsPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let list = use_list::<Destination>(use_backend(), reload);
    let filter = RwSignal::new(DestinationFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "destinations", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Destination"</th>
                        <th>"Category"</th>
                        <th>"Region"</th>
                        <th>"Difficulty"</th>
                        <th>"Featured"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|destination| {
                            let id = destination.id();
                            let name = destination.name.clone();
                            let thumb = destination.featured_image.clone();
                            let category = destination.category_label();
                            let region = destination.location.region.clone();
                            let difficulty = destination.difficulty_level.label();
                            view! {
                                <tr>
                                    <td class="admin-table__title">
                                        <img class="admin-table__thumb" src=thumb alt=""/>
                                        {name}
                                    </td>
                                    <td>{category}</td>
                                    <td>{region}</td>
                                    <td>{difficulty}</td>
                                    <FlagToggle
                                        row=destination.clone()
                                        list=list
                                        flag=&DESTINATION_FEATURED
                                        on_label="Featured"
                                        off_label="Standard"
                                    />
                                    <FlagToggle
                                        row=destination
                                        list=list
                                        flag=&DESTINATION_ACTIVE
                                        on_label="Active"
                                        off_label="Inactive"
                                    />
                                    <RowActions
                                        list=list
                                        id=id
                                        noun="destination"
                                        edit_href=format!("/admin/destinations/edit/{id}")
                                    />
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
            <ScreenHeader title="Destinations" action=("/admin/destinations/new", "Add Destination")/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search destinations..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| f.category.clone().unwrap_or_else(|| ALL.to_owned())))
                    options=enum_options(&DestinationCategory::ALL, DestinationCategory::label)
                    on_change=Callback::new(move |value: String| {
                        filter.update(|f| f.category = (value != ALL).then_some(value));
                    })
                    all_label="All categories"
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="destinations"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
