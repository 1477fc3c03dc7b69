use serde_json::json;
use tokio::{
  io::{AsyncReadExt, AsyncWriteExt},
  net::TcpListener,
  task::JoinHandle,
};

use super::*;

/// Serve exactly one HTTP response and hand back the raw request head.
async fn serve_once(status: &'static str, body: String) -> (ApiConfig, JoinHandle<String>) {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();

  let handle = tokio::spawn(async move {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
      let n = socket.read(&mut chunk).await.unwrap();
      if n == 0 {
        break;
      }
      buf.extend_from_slice(&chunk[..n]);
    }
    let response = format!(
      "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: \
       close\r\n\r\n{body}",
      body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.ok();
    String::from_utf8_lossy(&buf).into_owned()
  });

  let config = ApiConfig {
    base_url:     format!("http://{addr}"),
    token:        "secret".to_string(),
    timeout_secs: 5,
  };
  (config, handle)
}

fn renamed_wire() -> serde_json::Value {
  json!({
    "id": "a1",
    "action": "project_renamed",
    "author": { "id": "p1", "full_name": "Grace Hopper" },
    "content": {
      "project": { "id": "pr1", "name": "Apollo" },
      "old_name": "Gemini",
      "new_name": "Apollo",
    },
    "comment_thread": null,
    "inserted_at": "2025-03-01T12:00:00Z",
  })
}

// ─── Query flattening ────────────────────────────────────────────────────────

#[test]
fn activity_query_flattens_to_snake_case_pairs() {
  let query = ActivityQuery {
    scope_id:   "s1".to_string(),
    scope_type: ScopeType::Space,
    actions:    vec!["project_renamed".to_string(), "goal_closing".to_string()],
  };
  let mut pairs = query_pairs("test", &query).unwrap();
  pairs.sort();
  assert_eq!(
    pairs,
    vec![
      ("actions".to_string(), "project_renamed,goal_closing".to_string()),
      ("scope_id".to_string(), "s1".to_string()),
      ("scope_type".to_string(), "space".to_string()),
    ]
  );
}

#[test]
fn empty_action_filter_is_omitted() {
  let query = ActivityQuery {
    scope_id:   "c1".to_string(),
    scope_type: ScopeType::Company,
    actions:    Vec::new(),
  };
  let pairs = query_pairs("test", &query).unwrap();
  assert!(pairs.iter().all(|(k, _)| k != "actions"));
}

// ─── Round trips over HTTP ───────────────────────────────────────────────────

#[tokio::test]
async fn get_activity_decodes_snake_case_response() {
  let body = json!({ "activity": renamed_wire() }).to_string();
  let (config, server) = serve_once("200 OK", body).await;

  let client = ApiClient::new(config).unwrap();
  let activity = client.get_activity("a1").await.unwrap();

  assert_eq!(activity.action(), "project_renamed");
  assert_eq!(activity.author.full_name, "Grace Hopper");
  assert!(activity.comment_thread.is_none());

  let head = server.await.unwrap();
  assert!(head.starts_with("GET /api/activities/a1 "));
  assert!(head.to_ascii_lowercase().contains("authorization: bearer secret"));
}

#[tokio::test]
async fn get_activities_sends_snake_case_query() {
  let check_in = json!({
    "id": "a2",
    "action": "project_check_in_submitted",
    "author": { "id": "p1", "full_name": "Grace Hopper" },
    "content": {
      "project": { "id": "pr1", "name": "Apollo" },
      "check_in": { "id": "ci1", "status": "issue" },
    },
    "inserted_at": "2025-03-02T09:00:00Z",
  });
  let body = json!({ "activities": [renamed_wire(), check_in] }).to_string();
  let (config, server) = serve_once("200 OK", body).await;

  let client = ApiClient::new(config).unwrap();
  let entries = client
    .get_activities(&ActivityQuery {
      scope_id:   "pr1".to_string(),
      scope_type: ScopeType::Project,
      actions:    Vec::new(),
    })
    .await
    .unwrap();

  assert_eq!(entries.len(), 2);
  assert_eq!(entries[0].action(), "project_renamed");
  assert_eq!(entries[1].action(), "project_check_in_submitted");

  let head = server.await.unwrap();
  assert!(head.contains("scope_id=pr1"));
  assert!(head.contains("scope_type=project"));
}

#[tokio::test]
async fn non_success_status_carries_the_body() {
  let (config, _server) = serve_once("404 Not Found", r#"{"error":"not found"}"#.to_string()).await;

  let client = ApiClient::new(config).unwrap();
  let err = client.get_activity("missing").await.unwrap_err();

  match err {
    Error::Status { endpoint, status, body } => {
      assert_eq!(endpoint, "GET /activities/:id");
      assert_eq!(status.as_u16(), 404);
      assert!(body.contains("not found"));
    }
    other => panic!("expected a status error, got {other:?}"),
  }
}

#[tokio::test]
async fn unknown_action_is_a_decode_error() {
  let mut record = renamed_wire();
  record["action"] = json!("project_teleported");
  let body = json!({ "activity": record }).to_string();
  let (config, _server) = serve_once("200 OK", body).await;

  let client = ApiClient::new(config).unwrap();
  let err = client.get_activity("a1").await.unwrap_err();

  assert!(matches!(err, Error::Decode { .. }));
  assert!(err.to_string().contains("Unknown activity action: project_teleported"));
}

#[tokio::test]
async fn mark_as_read_accepts_an_empty_body() {
  let (config, server) = serve_once("204 No Content", String::new()).await;

  let client = ApiClient::new(config).unwrap();
  client.mark_notification_as_read("n1").await.unwrap();

  let head = server.await.unwrap();
  assert!(head.starts_with("POST /api/notifications/n1/read "));
}
