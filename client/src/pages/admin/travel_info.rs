//! `/admin/travel-info`: travel guide table.

use leptos::prelude::*;
use records::{Record, TravelInfo, TravelInfoCategory};

use super::{FlagToggle, RowActions, ScreenHeader, placeholder, retry};
use crate::components::table_toolbar::{FilterSelect, FlagCheckbox, SearchInput, ShowingCount, enum_options};
use crate::net::use_backend;
use crate::state::actions::{TRAVEL_INFO_ACTIVE, TRAVEL_INFO_FEATURED};
use crate::state::filters::{TravelInfoFilter, choice, choice_value};
use crate::state::listing::{RowFilter, use_list};

#[component]
pub fn AdminTravelInfoPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let list = use_list::<TravelInfo>(use_backend(), reload);
    let filter = RwSignal::new(TravelInfoFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "guides", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Quick Facts"</th>
                        <th>"Featured"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|guide| {
                            let id = guide.id();
                            let title = guide.title.clone();
                            let category = guide.category.label();
                            let facts = guide.quick_facts.len();
                            view! {
                                <tr>
                                    <td class="admin-table__title">{title}</td>
                                    <td>{category}</td>
                                    <td>{facts}</td>
                                    <FlagToggle
                                        row=guide.clone()
                                        list=list
                                        flag=&TRAVEL_INFO_FEATURED
                                        on_label="Featured"
                                        off_label="Standard"
                                    />
                                    <FlagToggle
                                        row=guide
                                        list=list
                                        flag=&TRAVEL_INFO_ACTIVE
                                        on_label="Active"
                                        off_label="Inactive"
                                    />
                                    <RowActions
                                        list=list
                                        id=id
                                        noun="travel guide"
                                        edit_href=format!("/admin/travel-info/edit/{id}")
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
            <ScreenHeader title="Travel Information" action=("/admin/travel-info/new", "Add Travel Info")/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search guides..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| choice_value(f.category.as_ref())))
                    options=enum_options(&TravelInfoCategory::ALL, TravelInfoCategory::label)
                    on_change=Callback::new(move |value: String| filter.update(|f| f.category = choice(&value)))
                    all_label="All categories"
                />
                <FlagCheckbox
                    label="Featured only"
                    checked=Signal::derive(move || filter.with(|f| f.featured_only))
                    on_toggle=Callback::new(move |on| filter.update(|f| f.featured_only = on))
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="guides"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
