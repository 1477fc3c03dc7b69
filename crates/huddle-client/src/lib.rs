//! Async HTTP client for the huddle JSON API.
//!
//! The API speaks snake_case; `huddle-core` types are camelCase. Every
//! request body and query is run through [`case::to_snake_keys`] on the way
//! out, and every response through [`case::to_camel_keys`] on the way in,
//! before it is decoded.

pub mod case;
pub mod error;

use std::time::Duration;

use huddle_core::{Activity, FeedEntry};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use self::error::{Error, Result};

// ─── Config ──────────────────────────────────────────────────────────────────

/// Connection settings for the huddle API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url:     String,
  /// Bearer token; empty sends no `Authorization` header.
  pub token:        String,
  pub timeout_secs: u64,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url:     "http://localhost:4000".to_string(),
      token:        String::new(),
      timeout_secs: 30,
    }
  }
}

// ─── Requests & responses ────────────────────────────────────────────────────

/// The container a feed is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScopeType {
  Company,
  Space,
  Goal,
  Project,
}

/// Filters for [`ApiClient::get_activities`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
  pub scope_id:   String,
  pub scope_type: ScopeType,
  /// Restrict to these action strings; empty means all.
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub actions:    Vec<String>,
}

/// A notification as delivered to the current person.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
  pub id:       String,
  #[serde(default)]
  pub read:     bool,
  pub activity: FeedEntry,
}

#[derive(Deserialize)]
struct ActivitiesEnvelope {
  activities: Vec<FeedEntry>,
}

#[derive(Deserialize)]
struct ActivityEnvelope {
  activity: Activity,
}

#[derive(Deserialize)]
struct NotificationsEnvelope {
  notifications: Vec<Notification>,
}

// ─── Client ──────────────────────────────────────────────────────────────────

/// Async HTTP client for the huddle JSON REST API.
///
/// Cheap to clone: the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .build()
      .map_err(Error::Build)?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  fn request(&self, method: Method, path: &str) -> RequestBuilder {
    let req = self.client.request(method, self.url(path));
    if self.config.token.is_empty() {
      req
    } else {
      req.bearer_auth(&self.config.token)
    }
  }

  /// Send a request and return the camelCased JSON body.
  async fn send(&self, endpoint: &str, req: RequestBuilder) -> Result<Value> {
    tracing::debug!(endpoint, "sending API request");
    let transport = |source| Error::Transport {
      endpoint: endpoint.to_string(),
      source,
    };

    let resp = req.send().await.map_err(transport)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;

    if !status.is_success() {
      tracing::warn!(endpoint, %status, "API request failed");
      return Err(Error::Status {
        endpoint: endpoint.to_string(),
        status,
        body,
      });
    }
    if body.trim().is_empty() {
      return Ok(Value::Null);
    }
    let value = serde_json::from_str(&body).map_err(|source| Error::Decode {
      endpoint: endpoint.to_string(),
      source,
    })?;
    Ok(case::to_camel_keys(value))
  }

  // ── Activities ────────────────────────────────────────────────────────────

  /// `GET /api/activities?scope_id=<id>&scope_type=<t>[&actions=a,b]`
  pub async fn get_activities(&self, query: &ActivityQuery) -> Result<Vec<FeedEntry>> {
    const ENDPOINT: &str = "GET /activities";
    let params = query_pairs(ENDPOINT, query)?;
    let value = self
      .send(ENDPOINT, self.request(Method::GET, "/activities").query(&params))
      .await?;
    let envelope: ActivitiesEnvelope = decode(ENDPOINT, value)?;
    Ok(envelope.activities)
  }

  /// `GET /api/activities/<id>`
  pub async fn get_activity(&self, id: &str) -> Result<Activity> {
    const ENDPOINT: &str = "GET /activities/:id";
    let value = self
      .send(ENDPOINT, self.request(Method::GET, &format!("/activities/{id}")))
      .await?;
    let envelope: ActivityEnvelope = decode(ENDPOINT, value)?;
    Ok(envelope.activity)
  }

  // ── Notifications ─────────────────────────────────────────────────────────

  /// `GET /api/notifications?page=<n>&per_page=<n>`
  pub async fn get_notifications(&self, page: u32, per_page: u32) -> Result<Vec<Notification>> {
    const ENDPOINT: &str = "GET /notifications";
    let value = self
      .send(
        ENDPOINT,
        self
          .request(Method::GET, "/notifications")
          .query(&[("page", page), ("per_page", per_page)]),
      )
      .await?;
    let envelope: NotificationsEnvelope = decode(ENDPOINT, value)?;
    Ok(envelope.notifications)
  }

  /// `POST /api/notifications/<id>/read`
  pub async fn mark_notification_as_read(&self, id: &str) -> Result<()> {
    const ENDPOINT: &str = "POST /notifications/:id/read";
    self
      .send(
        ENDPOINT,
        self.request(Method::POST, &format!("/notifications/{id}/read")),
      )
      .await?;
    Ok(())
  }
}

// ─── Wire helpers ────────────────────────────────────────────────────────────

/// Flatten a request struct into snake_case query pairs. Arrays are joined
/// with commas; nulls are dropped.
fn query_pairs<T: Serialize>(endpoint: &str, query: &T) -> Result<Vec<(String, String)>> {
  let value = serde_json::to_value(query).map_err(|source| Error::Decode {
    endpoint: endpoint.to_string(),
    source,
  })?;
  let Value::Object(map) = case::to_snake_keys(value) else {
    return Ok(Vec::new());
  };
  Ok(
    map
      .into_iter()
      .filter_map(|(k, v)| Some((k, query_value(v)?)))
      .collect(),
  )
}

fn query_value(value: Value) -> Option<String> {
  match value {
    Value::Null => None,
    Value::String(s) => Some(s),
    Value::Array(items) => Some(
      items
        .into_iter()
        .filter_map(query_value)
        .collect::<Vec<_>>()
        .join(","),
    ),
    other => Some(other.to_string()),
  }
}

fn decode<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T> {
  serde_json::from_value(value).map_err(|source| Error::Decode {
    endpoint: endpoint.to_string(),
    source,
  })
}

#[cfg(test)]
mod tests;
