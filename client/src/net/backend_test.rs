use super::*;
use crate::net::mock::{Call, MockBackend};
use futures::executor::block_on;
use records::{BlogPost, TourPackage};
use serde_json::json;

const POST_A: &str = "11111111-1111-4111-8111-111111111111";
const POST_B: &str = "22222222-2222-4222-8222-222222222222";

fn blog_rows() -> Vec<Value> {
    vec![
        json!({"id": POST_A, "title": "Draft", "published": false}),
        json!({"id": POST_B, "title": "Live", "published": true}),
    ]
}

#[test]
fn query_for_record_orders_newest_first() {
    let query = Query::for_record::<TourPackage>();
    assert_eq!(query.select, "*");
    assert_eq!(query.order, Some(("created_at".to_owned(), Direction::Desc)));
    assert_eq!(query.limit, None);
}

#[test]
fn fetch_all_decodes_rows() {
    let mock = MockBackend::new().with_rows(Table::BlogPosts, blog_rows());
    let posts = block_on(fetch_all::<BlogPost>(&mock)).expect("posts");
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[1].title, "Live");
    assert_eq!(mock.calls(), vec![Call::Select(Table::BlogPosts)]);
}

#[test]
fn fetch_where_filters_on_column() {
    let mock = MockBackend::new().with_rows(Table::BlogPosts, blog_rows());
    let posts = block_on(fetch_where::<BlogPost>(&mock, "published", "true")).expect("posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id.to_string(), POST_B);
}

#[test]
fn fetch_all_reports_decode_failure_with_table() {
    let mock = MockBackend::new().with_rows(Table::TourPackages, vec![json!({"id": "not-a-uuid"})]);
    let err = block_on(fetch_all::<TourPackage>(&mock)).expect_err("bad row");
    assert!(matches!(err, BackendError::Decode(ref msg) if msg.starts_with("tour_packages:")));
}

#[test]
fn fetch_all_propagates_remote_error() {
    let mock = MockBackend::new().failing(Table::BlogPosts, BackendError::Unauthorized);
    let err = block_on(fetch_all::<BlogPost>(&mock)).expect_err("remote error");
    assert_eq!(err, BackendError::Unauthorized);
}

#[test]
fn create_returns_stored_row_with_id() {
    let mock = MockBackend::new();
    let post: BlogPost = block_on(create(&mock, json!({"title": "Fresh"}))).expect("created");
    assert_eq!(post.title, "Fresh");
    assert_eq!(mock.rows(Table::BlogPosts).len(), 1);
}

#[test]
fn update_and_delete_target_one_row() {
    let mock = MockBackend::new().with_rows(Table::BlogPosts, blog_rows());
    let id: Uuid = POST_A.parse().expect("uuid");
    block_on(update_row::<BlogPost>(&mock, id, json!({"published": true}))).expect("update");
    assert_eq!(mock.rows(Table::BlogPosts)[0]["published"], true);

    block_on(delete_row::<BlogPost>(&mock, id)).expect("delete");
    assert_eq!(mock.rows(Table::BlogPosts).len(), 1);
    assert_eq!(mock.write_count(), 2);
}

#[test]
fn status_error_displays_remote_message() {
    let err = BackendError::Status {
        status: 400,
        message: "Invalid login credentials".to_owned(),
    };
    assert_eq!(err.to_string(), "Invalid login credentials");
}
