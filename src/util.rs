//! Small utility helpers used across modules.

/// True if the string looks like an http(s) URL. The embed component refuses
/// anything else (javascript:, data:, relative paths).
pub fn is_http_url(s: &str) -> bool {
  let t = s.trim();
  t.starts_with("http://") || t.starts_with("https://")
}

/// Minimal HTML escaping for attribute values and text nodes in the embed
/// snippet. Not a general-purpose sanitizer.
pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#39;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with huge dataset payloads.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.chars().count() <= max {
    s.to_string()
  } else {
    let head: String = s.chars().take(max).collect();
    format!("{}… ({} bytes total)", head, s.len())
  }
}
