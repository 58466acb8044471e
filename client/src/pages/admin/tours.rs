//! `/admin/tours`: tour table with category, difficulty and featured
//! filters plus featured/active toggles.

use leptos::prelude::*;
use records::{Difficulty, Record, TourCategory, TourPackage};

use super::{FlagToggle, RowActions, ScreenHeader, placeholder, retry};
use crate::components::table_toolbar::{FilterSelect, FlagCheckbox, SearchInput, ShowingCount, enum_options};
use crate::net::use_backend;
use crate::state::actions::{TOUR_ACTIVE, TOUR_FEATURED};
use crate::state::filters::{TourFilter, choice, choice_value};
use crate::state::listing::{RowFilter, use_list};
use crate::util::format;

#[component]
pub fn AdminToursPage() -> impl IntoView {
    let reload = RwSignal::new(0_u32);
    let list = use_list::<TourPackage>(use_backend(), reload);
    let filter = RwSignal::new(TourFilter::default());
    let visible = Signal::derive(move || list.with(|l| filter.with(|f| l.visible(f))));
    let on_retry = retry(reload);

    let rows = move || {
        let shown = visible.get();
        if let Some(view) = list.with(|l| placeholder(l, shown.len(), "tours", on_retry)) {
            return view;
        }
        view! {
            <table class="admin-table">
                <thead>
                    <tr>
                        <th>"Tour"</th>
                        <th>"Category"</th>
                        <th>"Difficulty"</th>
                        <th>"Duration"</th>
                        <th>"Price"</th>
                        <th>"Featured"</th>
                        <th>"Active"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {shown
                        .into_iter()
                        .map(|tour| {
                            let id = tour.id();
                            let thumb = tour.cover_image().unwrap_or_default().to_owned();
                            view! {
                                <tr>
                                    <td class="admin-table__title">
                                        <img class="admin-table__thumb" src=thumb alt=""/>
                                        {tour.title.clone()}
                                    </td>
                                    <td>{tour.category.label()}</td>
                                    <td>{tour.difficulty.label()}</td>
                                    <td>{format::days(tour.duration)}</td>
                                    <td>{format::usd(tour.price_usd)}</td>
                                    <FlagToggle
                                        row=tour.clone()
                                        list=list
                                        flag=&TOUR_FEATURED
                                        on_label="Featured"
                                        off_label="Standard"
                                    />
                                    <FlagToggle row=tour.clone() list=list flag=&TOUR_ACTIVE on_label="Active" off_label="Inactive"/>
                                    <RowActions list=list id=id noun="tour" edit_href=format!("/admin/tours/edit/{id}")/>
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
            <ScreenHeader title="Tour Packages" action=("/admin/tours/new", "Add New Tour")/>
            <div class="table-toolbar">
                <SearchInput
                    value=Signal::derive(move || filter.with(|f| f.search.clone()))
                    on_input=Callback::new(move |text| filter.update(|f| f.search = text))
                    placeholder="Search tours..."
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| choice_value(f.category.as_ref())))
                    options=enum_options(&TourCategory::ALL, TourCategory::label)
                    on_change=Callback::new(move |value: String| filter.update(|f| f.category = choice(&value)))
                    all_label="All categories"
                />
                <FilterSelect
                    value=Signal::derive(move || filter.with(|f| choice_value(f.difficulty.as_ref())))
                    options=enum_options(&Difficulty::ALL, Difficulty::label)
                    on_change=Callback::new(move |value: String| filter.update(|f| f.difficulty = choice(&value)))
                    all_label="All difficulties"
                />
                <FlagCheckbox
                    label="Featured only"
                    checked=Signal::derive(move || filter.with(|f| f.featured_only))
                    on_toggle=Callback::new(move |on| filter.update(|f| f.featured_only = on))
                />
                <ShowingCount
                    shown=Signal::derive(move || visible.with(Vec::len))
                    total=Signal::derive(move || list.with(|l| l.total()))
                    noun="tours"
                    on_clear=Callback::new(move |()| filter.update(|f| f.clear()))
                />
            </div>
            {rows}
        </div>
    }
}
