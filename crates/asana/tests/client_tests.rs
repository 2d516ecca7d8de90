//! Integration tests for the Asana client and snapshot loader.

use std::io::Write;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use asana::{load_tasks, AsanaClient, AsanaError};

/// A full task document the way the API (and snapshot export) shapes it.
fn task_body(gid: &str, name: &str, completed: bool) -> serde_json::Value {
    let completed_at = if completed {
        json!("2024-03-04T17:30:00.000Z")
    } else {
        json!(null)
    };
    json!({
        "gid": gid,
        "name": name,
        "completed": completed,
        "created_at": "2024-03-01T09:15:00.000Z",
        "completed_at": completed_at,
        "due_on": "2024-03-08",
        "assignee": { "name": "Ada Lovelace" },
        "tags": [ { "name": "P1" } ]
    })
}

#[tokio::test]
async fn test_get_project() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .and(header("Authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "gid": "42", "name": "Sprint 12 [2024-03-01 - 2024-03-08]" }
        })))
        .mount(&server)
        .await;

    let client = AsanaClient::with_base_url("secret", server.uri()).unwrap();
    let project = client.get_project("42").await.unwrap();

    assert_eq!(project.gid, "42");
    assert_eq!(project.name, "Sprint 12 [2024-03-01 - 2024-03-08]");
}

#[tokio::test]
async fn test_task_listing_and_hydration() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42/tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [ { "gid": "7", "name": "[3:2] Fix bug" } ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/tasks/7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": task_body("7", "[3:2] Fix bug", true) })),
        )
        .mount(&server)
        .await;

    let client = AsanaClient::with_base_url("secret", server.uri()).unwrap();

    let summaries = client.project_tasks("42").await.unwrap();
    assert_eq!(summaries.len(), 1);

    let task = client.get_task(&summaries[0].gid).await.unwrap();
    assert_eq!(task.name, "[3:2] Fix bug");
    assert!(task.completed);
    assert_eq!(task.assignee.unwrap().name, "Ada Lovelace");
    assert_eq!(task.tags.len(), 1);
    assert_eq!(task.due_on.unwrap().to_string(), "2024-03-08");
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(404).set_body_string("project not found"))
        .mount(&server)
        .await;

    let client = AsanaClient::with_base_url("secret", server.uri()).unwrap();
    let err = client.get_project("42").await.unwrap_err();

    match err {
        AsanaError::Api { status, message } => {
            assert_eq!(status, 404);
            assert!(message.contains("not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_retries_after_server_error() {
    let server = MockServer::start().await;
    // First attempt fails with a 500; the retry hits the healthy mock.
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(500).set_body_string("worker crashed"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "gid": "42", "name": "Sprint 12" }
        })))
        .mount(&server)
        .await;

    let client = AsanaClient::with_base_url("secret", server.uri()).unwrap();
    let project = client.get_project("42").await.unwrap();

    assert_eq!(project.name, "Sprint 12");
}

#[test]
fn test_snapshot_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let snapshot = json!({
        "data": [
            task_body("7", "[3:2] Fix bug", true),
            {
                "name": "Investigate flaky test",
                "completed": false,
                "created_at": "2024-03-02T08:00:00.000Z",
                "assignee": null,
                "tags": []
            }
        ]
    });
    write!(file, "{snapshot}").unwrap();

    let tasks = load_tasks(file.path()).unwrap();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].gid, "7");
    assert!(tasks[0].completed);
    // Optional fields absent in older exports normalize quietly.
    assert_eq!(tasks[1].gid, "");
    assert!(tasks[1].assignee.is_none());
    assert!(tasks[1].due_on.is_none());
    assert!(tasks[1].completed_at.is_none());
}

#[test]
fn test_snapshot_rejects_malformed_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    assert!(matches!(load_tasks(file.path()), Err(AsanaError::Json(_))));
}
