//! Management tree endpoint.

mod common;

use axum::http::StatusCode;
use common::{create_employee, create_team, get, put, test_app};
use serde_json::json;

fn person(name: &str, manager_id: Option<i64>, team_id: Option<i64>) -> serde_json::Value {
    json!({
        "name": name,
        "email": format!("{}@corp.com", name.to_lowercase()),
        "managerId": manager_id,
        "teamId": team_id
    })
}

#[tokio::test]
async fn test_example_hierarchy() {
    let app = test_app().await;
    let eng = create_team(&app, "Eng").await;
    let a = create_employee(&app, person("Alice", None, Some(eng))).await;
    let b = create_employee(&app, person("Bob", Some(a), None)).await;

    let (status, body) = get(&app, &format!("/api/v1/employees/{a}/tree")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": a,
            "name": "Alice",
            "title": "",
            "team": "Eng",
            "children": [{ "id": b, "name": "Bob", "title": "" }]
        })
    );
}

#[tokio::test]
async fn test_leaf_has_no_children_field() {
    let app = test_app().await;
    let a = create_employee(&app, person("Alice", None, None)).await;

    let (status, body) = get(&app, &format!("/api/v1/employees/{a}/tree")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("children").is_none(), "{body}");
    assert!(body.get("team").is_none(), "{body}");
    assert_eq!(body["title"], "");
}

#[tokio::test]
async fn test_three_level_structure() {
    let app = test_app().await;
    let eng = create_team(&app, "Eng").await;
    let ops = create_team(&app, "Ops").await;

    let root = create_employee(&app, person("Alice", None, Some(eng))).await;
    let bob = create_employee(&app, person("Bob", Some(root), Some(eng))).await;
    let carol = create_employee(&app, person("Carol", Some(root), Some(ops))).await;
    let dan = create_employee(&app, person("Dan", Some(bob), None)).await;
    create_employee(&app, person("Eve", None, Some(eng))).await;

    let (status, body) = get(&app, &format!("/api/v1/employees/{root}/tree")).await;
    assert_eq!(status, StatusCode::OK);

    let children = body["children"].as_array().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["id"], bob);
    assert_eq!(children[0]["team"], "Eng");
    assert_eq!(children[1]["id"], carol);
    assert_eq!(children[1]["team"], "Ops");
    assert!(children[1].get("children").is_none());

    let grandchildren = children[0]["children"].as_array().unwrap();
    assert_eq!(grandchildren.len(), 1);
    assert_eq!(grandchildren[0]["id"], dan);
    assert!(grandchildren[0].get("team").is_none());
    assert!(grandchildren[0].get("children").is_none());
}

#[tokio::test]
async fn test_unknown_root() {
    let app = test_app().await;
    let (status, body) = get(&app, "/api/v1/employees/12/tree").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "root not found" }));
}

#[tokio::test]
async fn test_cycle_is_reported() {
    let app = test_app().await;
    let a = create_employee(&app, person("Alice", None, None)).await;
    let b = create_employee(&app, person("Bob", Some(a), None)).await;

    let (status, _) = put(&app, &format!("/api/v1/employees/{a}"), json!({ "managerId": b })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get(&app, &format!("/api/v1/employees/{a}/tree")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], format!("management cycle detected at employee {a}"));
}
