//! Key casing between the app (camelCase) and the API (snake_case).
//!
//! Only object keys are rewritten. Values, including strings that happen to
//! look like identifiers or dates, pass through untouched, and `null` stays
//! `null`.

use serde_json::{Map, Value};

/// Outbound: `{ "dueDate": .. }` → `{ "due_date": .. }`.
pub fn to_snake_keys(value: Value) -> Value { rewrite_keys(value, &snake_key) }

/// Inbound: `{ "due_date": .. }` → `{ "dueDate": .. }`.
pub fn to_camel_keys(value: Value) -> Value { rewrite_keys(value, &camel_key) }

/// Every ASCII uppercase letter becomes `_` plus its lowercase form. Nothing
/// else in the key changes.
pub fn snake_key(key: &str) -> String {
  let mut out = String::with_capacity(key.len() + 4);
  for c in key.chars() {
    if c.is_ascii_uppercase() {
      out.push('_');
      out.push(c.to_ascii_lowercase());
    } else {
      out.push(c);
    }
  }
  out
}

/// Every `_` between an ASCII letter or digit and a lowercase letter is
/// dropped and the letter uppercased. Leading and doubled underscores stay.
pub fn camel_key(key: &str) -> String {
  let mut out = String::with_capacity(key.len());
  let mut chars = key.chars().peekable();
  let mut prev: Option<char> = None;
  while let Some(c) = chars.next() {
    let joins = c == '_'
      && prev.is_some_and(|p| p.is_ascii_alphanumeric())
      && chars.peek().is_some_and(char::is_ascii_lowercase);
    if joins {
      if let Some(next) = chars.next() {
        out.push(next.to_ascii_uppercase());
        prev = Some(next);
      }
      continue;
    }
    out.push(c);
    prev = Some(c);
  }
  out
}

fn rewrite_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
  match value {
    Value::Object(map) => Value::Object(
      map
        .into_iter()
        .map(|(k, v)| (rename(&k), rewrite_keys(v, rename)))
        .collect::<Map<_, _>>(),
    ),
    Value::Array(items) => Value::Array(
      items
        .into_iter()
        .map(|v| rewrite_keys(v, rename))
        .collect(),
    ),
    scalar => scalar,
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn round_trip_is_identity() {
    let app = json!({
      "fullName": "Grace Hopper",
      "nested": { "dueDate": "2025-03-01" },
    });
    let wire = to_snake_keys(app.clone());
    assert_eq!(
      wire,
      json!({
        "full_name": "Grace Hopper",
        "nested": { "due_date": "2025-03-01" },
      })
    );
    assert_eq!(to_camel_keys(wire), app);
  }

  #[test]
  fn lowercase_keys_are_untouched() {
    let value = json!({ "id": "a1", "title": "Launch" });
    assert_eq!(to_snake_keys(value.clone()), value);
    assert_eq!(to_camel_keys(value.clone()), value);
  }

  #[test]
  fn recurses_through_arrays_and_keeps_values() {
    let wire = json!({
      "activities": [
        { "inserted_at": "2025-03-01T12:00:00Z", "comment_thread": null },
        { "action": "project_renamed", "content": { "old_name": "snake_case_value" } },
      ],
    });
    assert_eq!(
      to_camel_keys(wire),
      json!({
        "activities": [
          { "insertedAt": "2025-03-01T12:00:00Z", "commentThread": null },
          { "action": "project_renamed", "content": { "oldName": "snake_case_value" } },
        ],
      })
    );
  }

  #[test]
  fn keys_without_case_boundaries_are_untouched() {
    for key in ["_id", "a-b", "x__y", "data.value", "id2", "__typename"] {
      assert_eq!(snake_key(key), key);
      assert_eq!(camel_key(key), key);
    }
  }

  #[test]
  fn acronym_keys_round_trip() {
    assert_eq!(snake_key("userID"), "user_i_d");
    assert_eq!(camel_key("user_i_d"), "userID");

    let app = json!({ "userID": 1, "_id": 2, "a-b": 3, "x__y": 4, "data.value": 5 });
    assert_eq!(to_camel_keys(to_snake_keys(app.clone())), app);
  }

  #[test]
  fn digits_and_underscores() {
    assert_eq!(camel_key("line_2_total"), "line_2Total");
    assert_eq!(snake_key("line_2Total"), "line_2_total");
    assert_eq!(camel_key("trailing_"), "trailing_");
  }

  #[test]
  fn scalars_pass_through() {
    assert_eq!(to_camel_keys(json!("due_date")), json!("due_date"));
    assert_eq!(to_snake_keys(Value::Null), Value::Null);
    assert_eq!(to_snake_keys(json!([1, 2, 3])), json!([1, 2, 3]));
  }
}
