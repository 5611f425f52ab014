//! Modal frame embed for wrapping an external site.
//!
//! Boundary component only: it holds a URL plus a fixed sandbox/permissions
//! policy and renders a static HTML snippet. It must not reference challenge
//! or session state in any way.

use tracing::warn;

use crate::util::{escape_html, is_http_url};

/// `sandbox` attribute applied to every embedded frame.
pub const FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-forms allow-popups";

/// `allow` attribute (permissions policy) applied to every embedded frame.
pub const FRAME_ALLOW: &str = "fullscreen; clipboard-write";

#[derive(Clone, Debug)]
pub struct FrameEmbed {
  url: String,
  title: String,
  hint: Option<String>,
}

impl FrameEmbed {
  /// Wrap `url` in a modal frame descriptor. Non-http(s) URLs are refused
  /// with a display hint; the embed then renders an empty modal body.
  pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
    let url = url.into();
    let title = title.into();
    let hint = if is_http_url(&url) {
      None
    } else {
      warn!(target: "brainrot_captcha", %url, "Refusing non-http(s) embed URL");
      Some("Only http(s) pages can be embedded.".into())
    };
    Self { url, title, hint }
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn hint(&self) -> Option<&str> {
    self.hint.as_deref()
  }

  /// Render the modal + iframe snippet with the fixed policy attributes.
  pub fn to_html(&self) -> String {
    let title = escape_html(&self.title);
    let body = if self.hint.is_none() {
      format!(
        r#"<iframe src="{}" title="{}" sandbox="{}" allow="{}" referrerpolicy="no-referrer"></iframe>"#,
        escape_html(&self.url),
        title,
        FRAME_SANDBOX,
        FRAME_ALLOW,
      )
    } else {
      format!(r#"<p class="embed-hint">{}</p>"#, escape_html(self.hint.as_deref().unwrap_or("")))
    };
    format!(
      r#"<div class="embed-modal" role="dialog" aria-modal="true" aria-label="{}">{}</div>"#,
      title, body
    )
  }
}
