//! Admin console screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here renders inside `components::admin_layout`, which holds
//! the outlet back until the role check passes. List screens share the row
//! action plumbing below; form screens share [`use_draft_form`].
//!
//! ERROR HANDLING
//! ==============
//! A failed row action or save alerts and leaves local state untouched. A
//! failed edit-load alerts and returns to the list.

pub mod blog;
pub mod blog_form;
pub mod bookings;
pub mod dashboard;
pub mod destination_form;
pub mod destinations;
pub mod inquiries;
pub mod login;
pub mod reviews;
pub mod settings;
pub mod tour_form;
pub mod tours;
pub mod travel_info;
pub mod travel_info_form;
pub mod users;

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::{FieldErrors, Record};
use uuid::Uuid;

use crate::components::form_field::Binding;
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::status_badge::{StatusBadge, flag_tone};
use crate::net::{BackendError, SharedBackend, use_backend};
use crate::state::actions::{Flag, delete_prompt, failure_alert, remove, toggle_flag};
use crate::state::form::{Draft, SaveError, load_for_edit, parse_id, save};
use crate::state::listing::{ListState, empty_message};
use crate::util::browser::{alert, confirm, now_iso};

// =============================================================================
// LIST SCREENS
// =============================================================================

/// Page title with an optional "add" link on the right.
#[component]
pub fn ScreenHeader(
    title: &'static str,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <header class="admin-screen__header">
            <h1 class="admin-screen__title">{title}</h1>
            {action.map(|(href, label)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
        </header>
    }
}

/// Bump `reload` to refetch a list.
pub(crate) fn retry(reload: RwSignal<u32>) -> Callback<()> {
    Callback::new(move |()| reload.update(|n| *n = n.wrapping_add(1)))
}

/// Loading, error or empty placeholder for a table body. `None` once there
/// are rows to draw.
pub(crate) fn placeholder<T>(
    list: &ListState<T>,
    shown: usize,
    noun: &str,
    on_retry: Callback<()>,
) -> Option<AnyView> {
    if list.loading {
        return Some(view! { <Loading label=format!("Loading {noun}...")/> }.into_any());
    }
    if let Some(message) = list.error.clone() {
        return Some(view! { <ErrorNotice message=message on_retry=on_retry/> }.into_any());
    }
    (shown == 0).then(|| {
        let total = list.items.len();
        view! { <p class="admin-table__empty">{empty_message(total, noun)}</p> }.into_any()
    })
}

/// Await one row write, patch `list` with its result on success, alert on
/// failure.
pub(crate) fn run_action<T, R, Fut>(
    list: RwSignal<ListState<T>>,
    action: String,
    request: Fut,
    on_success: impl FnOnce(&mut ListState<T>, R) + 'static,
) where
    T: Record + Send + Sync,
    R: 'static,
    Fut: Future<Output = Result<R, BackendError>> + 'static,
{
    spawn_local(async move {
        match request.await {
            Ok(value) => list.update(|state| on_success(state, value)),
            Err(e) => {
                leptos::logging::error!("{action} failed: {e}");
                alert(&failure_alert(&action, &e));
            }
        }
    });
}

/// Flip a boolean column on one row.
pub(crate) fn toggle_row<T>(backend: SharedBackend, list: RwSignal<ListState<T>>, row: T, flag: &'static Flag<T>)
where
    T: Record + Send + Sync,
{
    let id = row.id();
    run_action(
        list,
        format!("update {}", flag.column),
        async move { toggle_flag(backend.as_ref(), &row, flag).await },
        move |state, value| {
            state.patch(id, |r| (flag.set)(r, value));
        },
    );
}

/// Confirm, then delete one row.
pub(crate) fn delete_row<T>(backend: SharedBackend, list: RwSignal<ListState<T>>, id: Uuid, noun: &'static str)
where
    T: Record + Send + Sync,
{
    if !confirm(&delete_prompt(noun)) {
        return;
    }
    run_action(
        list,
        format!("delete {noun}"),
        async move { remove::<T>(backend.as_ref(), id).await },
        move |state, ()| state.remove(id),
    );
}

/// Badge button that flips one boolean column of `row`.
#[component]
pub fn FlagToggle<T>(
    row: T,
    list: RwSignal<ListState<T>>,
    flag: &'static Flag<T>,
    on_label: &'static str,
    off_label: &'static str,
) -> impl IntoView
where
    T: Record + Send + Sync,
{
    let backend = use_backend();
    let on = (flag.get)(&row);
    view! {
        <td>
            <button
                class="admin-table__toggle"
                on:click=move |_| toggle_row(backend.clone(), list, row.clone(), flag)
            >
                <StatusBadge label=if on { on_label } else { off_label } tone=flag_tone(on)/>
            </button>
        </td>
    }
}

/// Inline `<select>` for a row's workflow status. Reports only real changes.
#[component]
pub fn StatusSelect(current: String, options: Vec<(String, String)>, on_pick: Callback<String>) -> impl IntoView {
    let selected = current.clone();
    view! {
        <select
            class="admin-table__status"
            prop:value=selected
            on:change=move |ev| {
                let value = event_target_value(&ev);
                if value != current {
                    on_pick.run(value);
                }
            }
        >
            {options
                .into_iter()
                .map(|(value, label)| view! { <option value=value>{label}</option> })
                .collect_view()}
        </select>
    }
}

/// Optional edit link plus a confirmed delete for one row.
#[component]
pub fn RowActions<T>(
    list: RwSignal<ListState<T>>,
    id: Uuid,
    noun: &'static str,
    #[prop(optional)] edit_href: Option<String>,
) -> impl IntoView
where
    T: Record + Send + Sync,
{
    let backend = use_backend();
    view! {
        <td class="admin-table__actions">
            {edit_href.map(|href| view! { <a class="btn btn--small" href=href>"Edit"</a> })}
            <button
                class="btn btn--small btn--danger"
                on:click=move |_| delete_row::<T>(backend.clone(), list, id, noun)
            >
                "Delete"
            </button>
        </td>
    }
}

// =============================================================================
// FORM SCREENS
// =============================================================================

/// Reactive state of one create/edit form.
pub struct DraftForm<D: 'static> {
    pub draft: RwSignal<D>,
    pub errors: RwSignal<FieldErrors>,
    pub editing: RwSignal<Option<Uuid>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl<D: 'static> Clone for DraftForm<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: 'static> Copy for DraftForm<D> {}

impl<D> DraftForm<D>
where
    D: Draft + Send + Sync + 'static,
{
    /// Project one draft field for a form input.
    pub fn bind<V>(self, get: fn(&D) -> V, set: fn(&mut D, V)) -> Binding<V>
    where
        V: Send + Sync + 'static,
    {
        let draft = self.draft;
        Binding {
            value: Signal::derive(move || draft.with(get)),
            set: Callback::new(move |value| draft.update(|d| set(d, value))),
        }
    }

    /// Validation message for `field`.
    pub fn error(self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_owned)))
    }

    pub fn is_editing(self) -> bool {
        self.editing.with(Option::is_some)
    }

    /// Validate and write the draft, then return to the list.
    pub fn submit<F>(self, backend: SharedBackend, navigate: F)
    where
        F: Fn(&str, NavigateOptions) + 'static,
    {
        if self.saving.get_untracked() {
            return;
        }
        let draft = self.draft.get_untracked();
        let editing = self.editing.get_untracked();
        self.saving.set(true);
        self.errors.set(FieldErrors::default());

        spawn_local(async move {
            match save(backend.as_ref(), &draft, editing, &now_iso()).await {
                Ok(saved) => {
                    alert(saved.alert::<D>());
                    navigate(D::COPY.list_route, NavigateOptions::default());
                }
                Err(SaveError::Invalid(fields)) => {
                    leptos::logging::log!("form rejected: {} invalid field(s)", fields.len());
                    self.errors.set(fields);
                }
                Err(SaveError::Remote(e)) => {
                    leptos::logging::error!("saving to {}: {e}", D::COPY.list_route);
                    alert(D::COPY.save_failed);
                }
            }
            self.saving.set(false);
        });
    }
}

/// Form state for the current route. With an `:id` segment the draft is
/// loaded from the stored row; a bad id or failed load alerts and returns
/// to the list.
pub fn use_draft_form<D>() -> DraftForm<D>
where
    D: Draft + Send + Sync + 'static,
{
    let form = DraftForm {
        draft: RwSignal::new(D::default()),
        errors: RwSignal::new(FieldErrors::default()),
        editing: RwSignal::new(None),
        loading: RwSignal::new(false),
        saving: RwSignal::new(false),
    };
    let Some(segment) = use_params_map().with_untracked(|p| p.get("id")) else {
        return form;
    };

    let backend = use_backend();
    let navigate = use_navigate();
    let back_to_list = move |message: &'static str| {
        alert(message);
        navigate(
            D::COPY.list_route,
            NavigateOptions {
                replace: true,
                ..NavigateOptions::default()
            },
        );
    };

    match parse_id(&segment) {
        Ok(id) => {
            form.editing.set(Some(id));
            form.loading.set(true);
            Effect::new(move || {
                let backend = backend.clone();
                let back_to_list = back_to_list.clone();
                spawn_local(async move {
                    match load_for_edit::<D>(backend.as_ref(), id).await {
                        Ok(draft) => {
                            form.draft.set(draft);
                            form.loading.set(false);
                        }
                        Err(e) => {
                            leptos::logging::warn!("edit load {id}: {e:?}");
                            back_to_list(e.alert::<D>());
                        }
                    }
                });
            });
        }
        Err(e) => {
            Effect::new(move || back_to_list(e.alert::<D>()));
        }
    }
    form
}

/// Cancel link and submit button at the foot of a form.
#[component]
pub fn FormActions(
    list_route: &'static str,
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] submit_label: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="admin-form__actions">
            <a class="btn" href=list_route>"Cancel"</a>
            <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { submit_label.get() }}
            </button>
        </div>
    }
}
