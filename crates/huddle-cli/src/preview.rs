//! Plain-text previews of rich-text documents.
//!
//! Rich text arrives as a ProseMirror-style tree: `{ "type": "doc",
//! "content": [ { "type": "paragraph", "content": [ { "type": "text",
//! "text": ".." } ] } ] }`. Block nodes are flattened into one line.

use huddle_core::refs::RichText;
use serde_json::Value;

/// Flatten `content` to a single line of at most `limit` characters. Longer
/// text is cut on a word boundary where possible and ends in `…`.
pub fn plain_text(content: &RichText, limit: usize) -> String {
  let mut words = String::new();
  collect(&content.0, &mut words);
  let text = words.split_whitespace().collect::<Vec<_>>().join(" ");
  truncate(&text, limit)
}

fn collect(node: &Value, out: &mut String) {
  match node {
    Value::String(s) => push_words(out, s),
    Value::Array(nodes) => nodes.iter().for_each(|n| collect(n, out)),
    Value::Object(map) => {
      match map.get("type").and_then(Value::as_str) {
        Some("text") => {
          if let Some(text) = map.get("text").and_then(Value::as_str) {
            out.push_str(text);
          }
          return;
        }
        Some("hardBreak") => {
          out.push(' ');
          return;
        }
        Some("mention") => {
          let label = map
            .get("attrs")
            .and_then(|a| a.get("label"))
            .and_then(Value::as_str);
          if let Some(label) = label {
            out.push_str(label);
          }
          return;
        }
        _ => {}
      }
      if let Some(children) = map.get("content") {
        collect(children, out);
      }
      // block boundary
      out.push(' ');
    }
    _ => {}
  }
}

fn push_words(out: &mut String, s: &str) {
  out.push_str(s);
  out.push(' ');
}

fn truncate(text: &str, limit: usize) -> String {
  if text.chars().count() <= limit {
    return text.to_string();
  }
  let cut: String = text.chars().take(limit.saturating_sub(1)).collect();
  let cut = match cut.rfind(' ') {
    Some(i) if i > 0 => &cut[..i],
    _ => cut.as_str(),
  };
  format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn doc(paragraphs: &[&str]) -> RichText {
    let content: Vec<_> = paragraphs
      .iter()
      .map(|p| json!({ "type": "paragraph", "content": [{ "type": "text", "text": p }] }))
      .collect();
    RichText(json!({ "type": "doc", "content": content }))
  }

  #[test]
  fn paragraphs_flatten_to_one_line() {
    let text = plain_text(&doc(&["We shipped it.", "Thanks all!"]), 200);
    assert_eq!(text, "We shipped it. Thanks all!");
  }

  #[test]
  fn mentions_and_breaks() {
    let content = RichText(json!({
      "type": "doc",
      "content": [{
        "type": "paragraph",
        "content": [
          { "type": "text", "text": "Thanks" },
          { "type": "hardBreak" },
          { "type": "mention", "attrs": { "id": "p2", "label": "Ada" } },
        ],
      }],
    }));
    assert_eq!(plain_text(&content, 200), "Thanks Ada");
  }

  #[test]
  fn long_text_is_cut_on_a_word_boundary() {
    let text = plain_text(&doc(&["alpha beta gamma delta"]), 12);
    assert_eq!(text, "alpha beta…");
    assert!(text.chars().count() <= 12);
  }

  #[test]
  fn empty_and_plain_inputs() {
    assert_eq!(plain_text(&RichText::default(), 10), "");
    assert_eq!(plain_text(&RichText(json!("  just text ")), 50), "just text");
  }
}
