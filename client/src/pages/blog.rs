//! Public blog index and single-post page.
//!
//! Only published posts are read. Post bodies are markdown rendered through
//! `util::markdown`, which drops raw HTML before it reaches `inner_html`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::{BLOG_CATEGORIES, BlogPost};

use super::use_rows;
use crate::components::breadcrumbs::Breadcrumbs;
use crate::components::loading::{ErrorNotice, Loading};
use crate::components::parallax_banner::ParallaxBanner;
use crate::components::site_layout::SiteLayout;
use crate::net::{Backend, BackendError, fetch_where, use_backend};
use crate::state::fetch::use_fetch;
use crate::state::filters::{ALL, BlogFilter};
use crate::state::listing::{RowFilter, empty_message};
use crate::util::{format, markdown};

const BANNER_IMAGE: &str = "https://images.pexels.com/photos/1670732/pexels-photo-1670732.jpeg";

#[component]
pub fn BlogPage() -> impl IntoView {
    let posts = use_rows::<BlogPost>(use_backend(), Some(("published", "true")));
    let filter = RwSignal::new(BlogFilter {
        published_only: true,
        ..BlogFilter::default()
    });

    view! {
        <SiteLayout>
            <ParallaxBanner title="Safari Stories" subtitle="Field notes, travel tips and local stories" image=BANNER_IMAGE/>
            <div class="blog-page">
                <Breadcrumbs/>
                <div class="blog-page__toolbar">
                    <select
                        class="blog-page__category"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.category = (value != ALL).then_some(value));
                        }
                    >
                        <option value=ALL>"All categories"</option>
                        {BLOG_CATEGORIES.iter().map(|c| view! { <option value=*c>{*c}</option> }).collect_view()}
                    </select>
                    <input
                        class="blog-page__search"
                        type="search"
                        placeholder="Search articles..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    />
                </div>
                {move || match posts.get() {
                    None => view! { <Loading label="Loading articles..."/> }.into_any(),
                    Some(Err(e)) => view! { <ErrorNotice message=e.to_string()/> }.into_any(),
                    Some(Ok(rows)) => {
                        let total = rows.len();
                        let visible: Vec<_> = filter.with(|f| rows.into_iter().filter(|p| f.matches(p)).collect());
                        if visible.is_empty() {
                            return view! { <p class="blog-page__empty">{empty_message(total, "articles")}</p> }.into_any();
                        }
                        view! {
                            <div class="blog-page__grid">
                                {visible.into_iter().map(|post| view! { <PostCard post=post/> }).collect_view()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </SiteLayout>
    }
}

#[component]
fn PostCard(post: BlogPost) -> impl IntoView {
    let href = post.href();
    let date = format::date(post.published_date());
    let alt = post.title.clone();
    view! {
        <a class="post-card" href=href>
            <img class="post-card__image" src=post.featured_image alt=alt loading="lazy"/>
            <div class="post-card__body">
                <span class="post-card__category">{post.category}</span>
                <h3 class="post-card__title">{post.title}</h3>
                <p class="post-card__excerpt">{post.excerpt}</p>
                <span class="post-card__byline">{format!("{} · {date}", post.author)}</span>
            </div>
        </a>
    }
}

/// `/blog/:slug`.
#[component]
pub fn BlogPostPage() -> impl IntoView {
    let backend = use_backend();
    let params = use_params_map();
    let post = use_fetch(
        move || params.with(|p| p.get("slug")).unwrap_or_default(),
        move |slug: String| {
            let backend = backend.clone();
            async move { find_published(backend.as_ref(), &slug).await }
        },
    );

    view! {
        <SiteLayout>
            {move || {
                let state = post.get();
                if state.is_loading {
                    return view! { <Loading label="Loading article..."/> }.into_any();
                }
                match state.data {
                    Some(post) => view! { <PostBody post=post/> }.into_any(),
                    None => view! { <ErrorNotice message=state.error.unwrap_or_default()/> }.into_any(),
                }
            }}
        </SiteLayout>
    }
}

async fn find_published(backend: &dyn Backend, slug: &str) -> Result<BlogPost, BackendError> {
    fetch_where::<BlogPost>(backend, "slug", slug)
        .await?
        .into_iter()
        .find(|post| post.published)
        .ok_or_else(|| BackendError::Status {
            status: 404,
            message: "Article not found".to_owned(),
        })
}

#[component]
fn PostBody(post: BlogPost) -> impl IntoView {
    let html = markdown::to_html(&post.content);
    let minutes = markdown::reading_minutes(&post.content);
    let date = format::date(post.published_date());

    view! {
        <ParallaxBanner title=post.title.clone() subtitle=post.category.clone() image=post.featured_image.clone()/>
        <article class="blog-post">
            <Breadcrumbs/>
            <p class="blog-post__byline">{format!("{} · {date} · {minutes} min read", post.author)}</p>
            <div class="blog-post__content" inner_html=html></div>
            <ul class="blog-post__tags">
                {post.tags.into_iter().map(|tag| view! { <li class="chip">{format!("#{tag}")}</li> }).collect_view()}
            </ul>
            <a class="btn btn--link" href="/blog">"← Back to all articles"</a>
        </article>
    }
}
