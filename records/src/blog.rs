//! Blog posts.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Record, Table};

/// Categories offered by the blog editor.
pub const BLOG_CATEGORIES: &[&str] = &[
    "Mountain Climbing",
    "Safari",
    "Travel Tips",
    "Culture",
    "Photography",
    "Conservation",
    "Local Stories",
];

/// A blog post. Mirrors the `blog_posts` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub slug: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub content: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub featured_image: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub author: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "crate::nullable")]
    pub tags: Vec<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl BlogPost {
    /// Public route for the post.
    #[must_use]
    pub fn href(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    /// Date portion of the publish timestamp, if published.
    #[must_use]
    pub fn published_date(&self) -> Option<&str> {
        self.published_at
            .as_deref()
            .map(|ts| ts.split_once('T').map_or(ts, |(date, _)| date))
    }
}

impl Record for BlogPost {
    const TABLE: Table = Table::BlogPosts;

    fn id(&self) -> Uuid {
        self.id
    }
}
