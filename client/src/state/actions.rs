//! Row actions on management screens.
//!
//! Every action issues one remote write and returns the value that was
//! written. Screens patch their [`ListState`](super::listing::ListState)
//! with that value only when the write succeeded, so a failed action
//! leaves local state exactly as it was.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use records::{BlogPost, Destination, Profile, Record, Review, TourPackage, TravelInfo};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::net::{Backend, BackendError, delete_row, update_row};

/// A boolean column that a list screen can flip in place.
pub struct Flag<T> {
    pub column: &'static str,
    pub get: fn(&T) -> bool,
    pub set: fn(&mut T, bool),
}

pub const TOUR_FEATURED: Flag<TourPackage> = Flag {
    column: "featured",
    get: |t| t.featured,
    set: |t, v| t.featured = v,
};

pub const TOUR_ACTIVE: Flag<TourPackage> = Flag {
    column: "active",
    get: |t| t.active,
    set: |t, v| t.active = v,
};

pub const DESTINATION_FEATURED: Flag<Destination> = Flag {
    column: "featured",
    get: |d| d.featured,
    set: |d, v| d.featured = v,
};

pub const DESTINATION_ACTIVE: Flag<Destination> = Flag {
    column: "active",
    get: |d| d.active,
    set: |d, v| d.active = v,
};

pub const TRAVEL_INFO_FEATURED: Flag<TravelInfo> = Flag {
    column: "featured",
    get: |t| t.featured,
    set: |t, v| t.featured = v,
};

pub const TRAVEL_INFO_ACTIVE: Flag<TravelInfo> = Flag {
    column: "active",
    get: |t| t.active,
    set: |t, v| t.active = v,
};

pub const PROFILE_ADMIN: Flag<Profile> = Flag {
    column: "is_admin",
    get: |p| p.is_admin,
    set: |p, v| p.is_admin = v,
};

/// Flip `flag` on `row` remotely.
///
/// # Errors
///
/// Propagates the remote failure; nothing was written.
pub async fn toggle_flag<T: Record>(backend: &dyn Backend, row: &T, flag: &Flag<T>) -> Result<bool, BackendError> {
    let value = !(flag.get)(row);
    update_row::<T>(backend, row.id(), json!({ flag.column: value })).await?;
    Ok(value)
}

/// Write a new `status` on one row.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn set_status<T: Record, S: Serialize + Copy>(
    backend: &dyn Backend,
    id: Uuid,
    status: S,
) -> Result<S, BackendError> {
    update_row::<T>(backend, id, json!({ "status": status })).await?;
    Ok(status)
}

/// Publish state written together so `published_at` never disagrees with
/// `published`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Publication {
    pub published: bool,
    pub published_at: Option<String>,
}

impl Publication {
    pub fn apply(self, post: &mut BlogPost) {
        post.published = self.published;
        post.published_at = self.published_at;
    }
}

/// Flip a post between draft and published, stamping `now` on publish.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn set_published(backend: &dyn Backend, post: &BlogPost, now: &str) -> Result<Publication, BackendError> {
    let publication = if post.published {
        Publication {
            published: false,
            published_at: None,
        }
    } else {
        Publication {
            published: true,
            published_at: Some(now.to_owned()),
        }
    };
    let patch = json!({
        "published": publication.published,
        "published_at": publication.published_at,
    });
    update_row::<BlogPost>(backend, post.id, patch).await?;
    Ok(publication)
}

/// Mark a review verified or unverified.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn set_verified(backend: &dyn Backend, review: &Review, verified: bool) -> Result<bool, BackendError> {
    update_row::<Review>(backend, review.id, json!({ "verified": verified })).await?;
    Ok(verified)
}

/// Delete one row. Callers confirm with [`delete_prompt`] first.
///
/// # Errors
///
/// Propagates the remote failure.
pub async fn remove<T: Record>(backend: &dyn Backend, id: Uuid) -> Result<(), BackendError> {
    delete_row::<T>(backend, id).await
}

/// Confirmation text shown before a delete.
#[must_use]
pub fn delete_prompt(noun: &str) -> String {
    format!("Are you sure you want to delete this {noun}?")
}

/// Alert text for a failed row action.
#[must_use]
pub fn failure_alert(action: &str, err: &BackendError) -> String {
    format!("Failed to {action}: {err}")
}
